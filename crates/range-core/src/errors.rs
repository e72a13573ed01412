//! Error types for range proof operations

use thiserror::Error;

/// Main error type for range proof operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeProofError {
    /// Invalid parameters provided, or a malformed proof arena
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The Fiat-Shamir challenge could not be derived
    #[error("Challenge derivation failed: {0}")]
    HashFailure(String),

    /// Verification failed
    #[error("Proof verification failed")]
    VerificationFailed,

    /// Invalid proof encoding
    #[error("Invalid proof format: {0}")]
    InvalidProof(String),
}

impl RangeProofError {
    /// Whether the error is a rejection of the proof rather than a structural fault
    pub fn is_rejection(&self) -> bool {
        matches!(self, RangeProofError::VerificationFailed)
    }
}

/// Result type for range proof operations
pub type RangeProofResult<T> = Result<T, RangeProofError>;
