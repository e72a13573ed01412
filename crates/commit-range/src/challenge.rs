//! Fiat-Shamir challenge shared by every sub-protocol instance of a proof

use crate::{BinaryCommitment, SameValueCommitment};
use range_core::{
    range_proof_transcript, GroupElement, PedersenGens, RangeProofError, RangeProofResult, Scalar,
    TranscriptProtocol,
};

/// Public statement and first-move messages absorbed into the transcript
pub(crate) struct ChallengeInput<'a> {
    pub gens: &'a PedersenGens,
    pub commitment: &'a GroupElement,
    pub bit_commitments: &'a [GroupElement],
    pub binary_commitments: &'a [BinaryCommitment],
    pub same_value: &'a SameValueCommitment,
}

/// Derive the challenge.
///
/// Absorption order: bit width, `G`, `H`, `T`, every `A_i`, every
/// `(Ca_i, Cb_i)`, then `A_T`, `A_T'`. Prover and verifier both go through
/// this function.
pub(crate) fn derive_challenge(input: &ChallengeInput<'_>) -> RangeProofResult<Scalar> {
    if input.bit_commitments.len() != input.binary_commitments.len() {
        return Err(RangeProofError::InvalidParameters(format!(
            "{} bit commitments but {} binary commitments",
            input.bit_commitments.len(),
            input.binary_commitments.len()
        )));
    }

    let mut transcript = range_proof_transcript(b"ComRangeProof");
    transcript.range_proof_domain_sep(input.bit_commitments.len() as u64);

    transcript.append_point(b"G", &input.gens.g_generator());
    transcript.append_point(b"H", &input.gens.h_generator());
    transcript.append_point(b"T", input.commitment);

    for a in input.bit_commitments {
        transcript.append_point(b"A", a);
    }
    for binary in input.binary_commitments {
        transcript.append_point(b"Ca", &binary.ca);
        transcript.append_point(b"Cb", &binary.cb);
    }

    transcript.append_point(b"A_T", &input.same_value.a_t);
    transcript.append_point(b"A_T'", &input.same_value.a_t_prime);

    let challenge = transcript.challenge_scalar(b"c");
    // A zero challenge would let any response pass for any witness.
    if challenge == Scalar::ZERO {
        return Err(RangeProofError::HashFailure(
            "transcript produced a zero challenge".to_string(),
        ));
    }
    Ok(challenge)
}
