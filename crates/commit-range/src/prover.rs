//! Range proof prover implementation

use crate::challenge::{derive_challenge, ChallengeInput};
use crate::{
    BinaryCommitment, BinaryProver, BitProof, ComRangeProof, SameValueProver, SameValueWitness,
    RANGE_MAX_BITS,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, RngCore};
use range_core::{
    utils::{bit_decomposition, powers_of_two, weighted_sum_pow2},
    GroupElement, PedersenGens, RangeProofError, RangeProofResult, Scalar,
};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Check a requested bit width against `1..=RANGE_MAX_BITS`
pub(crate) fn validate_bit_length(bit_length: usize) -> RangeProofResult<()> {
    if bit_length == 0 || bit_length > RANGE_MAX_BITS {
        return Err(RangeProofError::InvalidParameters(format!(
            "Bit length must be between 1 and {}, got {}",
            RANGE_MAX_BITS, bit_length
        )));
    }
    Ok(())
}

/// Output of one bit task's commit phase
struct CommittedBit {
    index: usize,
    blinding: Scalar,
    commitment: GroupElement,
    binary: BinaryCommitment,
    prover: BinaryProver,
}

impl CommittedBit {
    fn commit(
        index: usize,
        bit: Scalar,
        seed: [u8; 32],
        gens: &PedersenGens,
    ) -> RangeProofResult<Self> {
        if bit != Scalar::ZERO && bit != Scalar::ONE {
            return Err(RangeProofError::InvalidParameters(format!(
                "Decomposed value at bit {} is not binary",
                index
            )));
        }

        let mut rng = ChaCha20Rng::from_seed(seed);
        let blinding = Scalar::random(&mut rng);
        let commitment = gens.commit(bit, blinding);
        let (prover, binary) = BinaryProver::commit(bit, blinding, gens, &mut rng);

        Ok(Self {
            index,
            blinding,
            commitment,
            binary,
            prover,
        })
    }
}

/// Bit blindings `r_i` behind a proof, indexed by bit position
pub(crate) type BitOpenings = Vec<Scalar>;

/// Prover for generating commitment range proofs
#[derive(Debug, Clone)]
pub struct RangeProver {
    generators: PedersenGens,
    bit_length: usize,
}

impl RangeProver {
    /// Create a range prover over the default generators
    pub fn new(bit_length: usize) -> RangeProofResult<Self> {
        Self::with_generators(PedersenGens::default(), bit_length)
    }

    /// Create a range prover with existing generators
    pub fn with_generators(generators: PedersenGens, bit_length: usize) -> RangeProofResult<Self> {
        validate_bit_length(bit_length)?;
        Ok(Self {
            generators,
            bit_length,
        })
    }

    /// Prove that `commitment = Com(value, blinding)` hides a value in
    /// `[0, 2^bit_length)`
    pub fn prove<R: RngCore + CryptoRng>(
        &self,
        value: i64,
        blinding: &Scalar,
        commitment: &GroupElement,
        rng: &mut R,
    ) -> RangeProofResult<ComRangeProof> {
        self.prove_with_openings(value, blinding, commitment, rng)
            .map(|(proof, _)| proof)
    }

    #[instrument(level = "debug", skip_all, fields(bits = self.bit_length))]
    pub(crate) fn prove_with_openings<R: RngCore + CryptoRng>(
        &self,
        value: i64,
        blinding: &Scalar,
        commitment: &GroupElement,
        rng: &mut R,
    ) -> RangeProofResult<(ComRangeProof, BitOpenings)> {
        let n = self.bit_length;
        let gens = &self.generators;

        if value < 0 || (value as u64) >> n != 0 {
            debug!("value outside range");
            return Err(RangeProofError::InvalidParameters(format!(
                "Value is not in range [0, 2^{})",
                n
            )));
        }
        let value = value as u64;
        let value_scalar = Scalar::from(value);
        if gens.commit(value_scalar, *blinding) != *commitment {
            return Err(RangeProofError::InvalidParameters(
                "Commitment does not open to the given value and blinding".to_string(),
            ));
        }

        let bits = bit_decomposition(value, n);
        let powers = powers_of_two(n);

        // Per-task seeds are drawn up front so the proof depends only on the
        // caller's RNG, not on scheduling.
        let seeds: Vec<[u8; 32]> = (0..n)
            .map(|_| {
                let mut seed = [0u8; 32];
                rng.fill_bytes(&mut seed);
                seed
            })
            .collect();

        // Commit phase: one task per bit, joined before anything is hashed.
        let committed = (0..n)
            .into_par_iter()
            .map(|i| CommittedBit::commit(i, bits[i], seeds[i], gens))
            .collect::<RangeProofResult<Vec<_>>>()?;

        let mut arena: [Option<CommittedBit>; RANGE_MAX_BITS] = std::array::from_fn(|_| None);
        for bit in committed {
            let index = bit.index;
            arena[index] = Some(bit);
        }
        let committed = arena
            .into_iter()
            .take(n)
            .enumerate()
            .map(|(i, slot)| {
                slot.ok_or_else(|| {
                    RangeProofError::InvalidParameters(format!("Bit task {} did not report", i))
                })
            })
            .collect::<RangeProofResult<Vec<_>>>()?;

        // r' = sum(2^i * r_i), T' = sum(2^i * A_i)
        let openings: BitOpenings = committed.iter().map(|bit| bit.blinding).collect();
        let blinding_prime = weighted_sum_pow2(&openings);
        let t_prime = GroupElement::vartime_multiscalar_mul(
            powers.iter().copied(),
            committed.iter().map(|bit| bit.commitment.0),
        );

        let (same_value_prover, same_value) = SameValueProver::commit(gens, rng);

        let bit_commitments: Vec<GroupElement> =
            committed.iter().map(|bit| bit.commitment).collect();
        let binary_commitments: Vec<BinaryCommitment> =
            committed.iter().map(|bit| bit.binary).collect();
        let challenge = derive_challenge(&ChallengeInput {
            gens,
            commitment,
            bit_commitments: &bit_commitments,
            binary_commitments: &binary_commitments,
            same_value: &same_value,
        })?;

        // Respond phase: every bit in parallel, joined with the same-value response.
        let witness = SameValueWitness {
            value: value_scalar,
            blinding: *blinding,
            blinding_prime,
        };
        let (responded, same_value_response) = rayon::join(
            || {
                committed
                    .into_par_iter()
                    .map(|bit| {
                        let proof = BitProof {
                            commitment: bit.commitment,
                            binary: bit.binary,
                            response: bit.prover.respond(&challenge),
                        };
                        (bit.index, proof)
                    })
                    .collect::<Vec<_>>()
            },
            || same_value_prover.respond(&witness, &challenge),
        );

        let mut bit_proofs = [None; RANGE_MAX_BITS];
        for (index, proof) in responded {
            bit_proofs[index] = Some(proof);
        }

        debug!("range proof assembled");
        Ok((
            ComRangeProof {
                g: gens.g_generator(),
                h: gens.h_generator(),
                t: *commitment,
                t_prime,
                bits: bit_proofs,
                same_value,
                same_value_response,
            },
            openings,
        ))
    }

    /// Get the generator set used by this prover
    pub fn generators(&self) -> &PedersenGens {
        &self.generators
    }

    /// Get the bit width this prover proves
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }
}
