//! Range proof verifier implementation

use crate::challenge::{derive_challenge, ChallengeInput};
use crate::prover::validate_bit_length;
use crate::{verify_binary, verify_same_value, BinaryCommitment, ComRangeProof};
use range_core::{
    utils::powers_of_two, GroupElement, PedersenGens, RangeProofError, RangeProofResult,
};
use tracing::{debug, instrument};

impl ComRangeProof {
    /// Verify the proof against the generators and commitment it carries.
    ///
    /// Returns `Ok(false)` for a well-formed proof that does not verify and an
    /// error only for a malformed proof or a failed challenge derivation.
    #[instrument(level = "debug", skip_all, fields(bits = self.bit_length()))]
    pub fn verify(&self) -> RangeProofResult<bool> {
        let bits = self.bit_proofs()?;
        let gens = self.generators()?;

        // T' must be the weighted sum of the bit commitments
        let bit_commitments: Vec<GroupElement> = bits.iter().map(|bit| bit.commitment).collect();
        let t_prime = GroupElement::vartime_multiscalar_mul(
            powers_of_two(bits.len()),
            bit_commitments.iter().map(|a| a.0),
        );
        if t_prime != self.t_prime {
            debug!("reconstructed T' does not match");
            return Ok(false);
        }

        let binary_commitments: Vec<BinaryCommitment> = bits.iter().map(|bit| bit.binary).collect();
        let challenge = derive_challenge(&ChallengeInput {
            gens: &gens,
            commitment: &self.t,
            bit_commitments: &bit_commitments,
            binary_commitments: &binary_commitments,
            same_value: &self.same_value,
        })?;

        for (index, bit) in bits.iter().enumerate() {
            if !verify_binary(&bit.commitment, &bit.binary, &bit.response, &gens, &challenge) {
                debug!(index, "binary proof rejected");
                return Ok(false);
            }
        }

        if !verify_same_value(
            &self.t,
            &self.t_prime,
            &self.same_value,
            &self.same_value_response,
            &gens,
            &challenge,
        ) {
            debug!("same-value proof rejected");
            return Ok(false);
        }

        Ok(true)
    }
}

/// Verifier for range proofs over a fixed statement shape
#[derive(Debug, Clone)]
pub struct RangeVerifier {
    generators: PedersenGens,
    bit_length: usize,
}

impl RangeVerifier {
    /// Create a range verifier over the default generators
    pub fn new(bit_length: usize) -> RangeProofResult<Self> {
        Self::with_generators(PedersenGens::default(), bit_length)
    }

    /// Create a range verifier with existing generators (must match prover's generators)
    pub fn with_generators(generators: PedersenGens, bit_length: usize) -> RangeProofResult<Self> {
        validate_bit_length(bit_length)?;
        Ok(Self {
            generators,
            bit_length,
        })
    }

    /// Verify that `proof` shows `commitment` hides a value in `[0, 2^bit_length)`.
    ///
    /// A proof made for other generators, another commitment or another bit
    /// width is rejected with [`RangeProofError::VerificationFailed`].
    pub fn verify_range(
        &self,
        proof: &ComRangeProof,
        commitment: &GroupElement,
    ) -> RangeProofResult<()> {
        if proof.g != self.generators.g_generator() || proof.h != self.generators.h_generator() {
            debug!("proof uses foreign generators");
            return Err(RangeProofError::VerificationFailed);
        }
        if proof.t != *commitment {
            debug!("proof is for a different commitment");
            return Err(RangeProofError::VerificationFailed);
        }
        if proof.bit_length() != self.bit_length {
            debug!(
                expected = self.bit_length,
                actual = proof.bit_length(),
                "bit width mismatch"
            );
            return Err(RangeProofError::VerificationFailed);
        }

        if proof.verify()? {
            Ok(())
        } else {
            Err(RangeProofError::VerificationFailed)
        }
    }

    /// Get the generator set used by this verifier
    pub fn generators(&self) -> &PedersenGens {
        &self.generators
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RangeProver;
    use rand::thread_rng;
    use range_core::Scalar;

    fn prove(value: i64, bit_length: usize) -> (ComRangeProof, GroupElement) {
        let mut rng = thread_rng();
        let prover = RangeProver::new(bit_length).unwrap();
        let blinding = Scalar::random(&mut rng);
        let commitment = prover.generators().commit(Scalar::from(value as u64), blinding);
        let proof = prover.prove(value, &blinding, &commitment, &mut rng).unwrap();
        (proof, commitment)
    }

    #[test]
    fn test_range_verification_success() {
        let (proof, commitment) = prove(42, 8);
        assert!(proof.verify().unwrap());

        let verifier = RangeVerifier::new(8).unwrap();
        assert!(verifier.verify_range(&proof, &commitment).is_ok());
    }

    #[test]
    fn test_concrete_scenario_and_flipped_lsb() {
        // b = 5 = 0b00000101 over fixed generators and a fixed blinding
        let gens = PedersenGens::default();
        let blinding = Scalar::from(0x5eed_u64);
        let commitment = gens.commit(Scalar::from(5u64), blinding);
        let prover = RangeProver::with_generators(gens, 8).unwrap();

        let (proof, openings) = prover
            .prove_with_openings(5, &blinding, &commitment, &mut thread_rng())
            .unwrap();
        assert!(proof.verify().unwrap());

        // Replace A_0 with Com(1, r_0) as if bit 0 had flipped, keep all responses
        let mut tampered = proof.clone();
        let mut bit = *tampered.bit(0).unwrap();
        assert_eq!(bit.commitment, gens.commit(Scalar::ONE, openings[0]));
        bit.commitment = gens.commit(Scalar::ZERO, openings[0]);
        tampered.bits[0] = Some(bit);
        assert!(!tampered.verify().unwrap());

        // Even with a consistent T' the bit responses no longer match
        tampered.t_prime = tampered.t_prime - gens.g_generator();
        assert!(!tampered.verify().unwrap());
    }

    #[test]
    fn test_tampered_response_rejected() {
        let (proof, _) = prove(200, 8);

        let mut tampered = proof.clone();
        let mut bit = *tampered.bit(0).unwrap();
        bit.response.f += Scalar::ONE;
        tampered.bits[0] = Some(bit);
        assert!(!tampered.verify().unwrap());
    }

    #[test]
    fn test_swapped_binary_commitments_rejected() {
        let (proof, _) = prove(77, 8);

        for i in 0..8 {
            let mut tampered = proof.clone();
            let mut bit = *tampered.bit(i).unwrap();
            std::mem::swap(&mut bit.binary.ca, &mut bit.binary.cb);
            tampered.bits[i] = Some(bit);
            assert!(!tampered.verify().unwrap(), "swap at bit {} accepted", i);
        }
    }

    #[test]
    fn test_tampered_same_value_rejected() {
        let (proof, _) = prove(31, 8);

        let mut tampered = proof.clone();
        tampered.same_value_response.zb += Scalar::ONE;
        assert!(!tampered.verify().unwrap());

        let mut tampered = proof.clone();
        tampered.same_value.a_t = tampered.same_value.a_t_prime;
        assert!(!tampered.verify().unwrap());
    }

    #[test]
    fn test_reordered_bits_rejected() {
        let (proof, _) = prove(0b10, 8);

        let mut tampered = proof.clone();
        tampered.bits.swap(0, 1);
        assert!(!tampered.verify().unwrap());
    }

    #[test]
    fn test_malformed_proofs_are_errors() {
        let (proof, _) = prove(9, 8);

        let mut empty = proof.clone();
        empty.bits[0] = None;
        assert!(matches!(
            empty.verify(),
            Err(RangeProofError::InvalidParameters(_))
        ));

        let mut gap = proof.clone();
        gap.bits[3] = None;
        assert!(gap.verify().is_err());

        let mut bad_gens = proof;
        bad_gens.h = bad_gens.g;
        assert!(bad_gens.verify().is_err());
    }

    #[test]
    fn test_verification_is_idempotent() {
        let (proof, _) = prove(123, 8);
        let snapshot = proof.clone();

        for _ in 0..3 {
            assert!(proof.verify().unwrap());
        }
        assert_eq!(proof, snapshot);

        let mut tampered = proof;
        tampered.t_prime = tampered.t;
        for _ in 0..3 {
            assert!(!tampered.verify().unwrap());
        }
    }

    #[test]
    fn test_range_verification_different_generators_fails() {
        let (proof, commitment) = prove(42, 8);
        let other = PedersenGens::from_label(b"other").unwrap();
        let verifier = RangeVerifier::with_generators(other, 8).unwrap();

        let result = verifier.verify_range(&proof, &commitment);
        assert!(matches!(result, Err(RangeProofError::VerificationFailed)));
    }

    #[test]
    fn test_range_verification_wrong_commitment_fails() {
        let (proof, _) = prove(42, 8);
        let (_, other_commitment) = prove(42, 8);
        let verifier = RangeVerifier::new(8).unwrap();

        let result = verifier.verify_range(&proof, &other_commitment);
        assert!(result.unwrap_err().is_rejection());
    }

    #[test]
    fn test_range_verification_wrong_bit_length_fails() {
        let (proof, commitment) = prove(42, 8);
        let verifier = RangeVerifier::new(16).unwrap();

        assert!(matches!(
            verifier.verify_range(&proof, &commitment),
            Err(RangeProofError::VerificationFailed)
        ));
    }

    #[test]
    fn test_verification_invalid_bit_length() {
        assert!(RangeVerifier::new(0).is_err());
        assert!(RangeVerifier::new(33).is_err());
    }

    #[test]
    fn test_max_width_all_ones() {
        let value = (1i64 << 32) - 1;
        let (proof, commitment) = prove(value, 32);

        assert_eq!(proof.bit_length(), 32);
        let verifier = RangeVerifier::new(32).unwrap();
        assert!(verifier.verify_range(&proof, &commitment).is_ok());
    }
}
