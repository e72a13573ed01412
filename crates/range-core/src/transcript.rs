//! Transcript management for Fiat-Shamir heuristic

use crate::GroupElement;
use curve25519_dalek::scalar::Scalar;
use merlin::Transcript;

/// Extension trait for Transcript to add range-proof specific methods
pub trait TranscriptProtocol {
    /// Append a domain separator binding the bit width of the proof
    fn range_proof_domain_sep(&mut self, bit_length: u64);

    /// Append a group element to the transcript
    fn append_point(&mut self, label: &'static [u8], point: &GroupElement);

    /// Append a scalar to the transcript
    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar);

    /// Challenge scalar from transcript
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar;
}

impl TranscriptProtocol for Transcript {
    fn range_proof_domain_sep(&mut self, bit_length: u64) {
        self.append_message(b"dom-sep", b"commitment-range-proof v1");
        self.append_u64(b"n", bit_length);
    }

    fn append_point(&mut self, label: &'static [u8], point: &GroupElement) {
        self.append_message(label, point.compress().as_bytes());
    }

    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar) {
        self.append_message(label, scalar.as_bytes());
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar {
        let mut buf = [0u8; 64];
        self.challenge_bytes(label, &mut buf);
        Scalar::from_bytes_mod_order_wide(&buf)
    }
}

/// Create a new transcript with domain separation
pub fn range_proof_transcript(domain_label: &'static [u8]) -> Transcript {
    let mut transcript = Transcript::new(b"ComRangeProof");
    transcript.append_message(b"domain", domain_label);
    transcript
}
