//! Group operations and point utilities

use crate::{RangeProofError, RangeProofResult};
use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::{Identity, IsIdentity, MultiscalarMul, VartimeMultiscalarMul},
};
use serde::{Deserialize, Serialize};

/// Size in bytes of a compressed group element
pub const POINT_SIZE: usize = 32;

/// Size in bytes of a canonical scalar
pub const SCALAR_SIZE: usize = 32;

/// A point on the Ristretto group with additional utility methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupElement(pub RistrettoPoint);

impl GroupElement {
    /// Identity element
    pub fn identity() -> Self {
        Self(RistrettoPoint::identity())
    }

    /// Whether this is the identity element
    pub fn is_identity(&self) -> bool {
        self.0.is_identity()
    }

    /// Create from compressed point
    pub fn from_compressed(compressed: &CompressedRistretto) -> RangeProofResult<Self> {
        compressed
            .decompress()
            .map(Self)
            .ok_or_else(|| RangeProofError::InvalidProof("Invalid compressed point".to_string()))
    }

    /// Decode a 32-byte compressed point
    pub fn from_bytes(bytes: &[u8]) -> RangeProofResult<Self> {
        let compressed = CompressedRistretto::from_slice(bytes)
            .map_err(|_| RangeProofError::InvalidProof("Invalid point length".to_string()))?;
        Self::from_compressed(&compressed)
    }

    /// Compress this point
    pub fn compress(&self) -> CompressedRistretto {
        self.0.compress()
    }

    /// Canonical 32-byte encoding
    pub fn to_bytes(&self) -> [u8; POINT_SIZE] {
        self.compress().to_bytes()
    }

    /// Constant-time multi-scalar multiplication, for secret scalars
    pub fn multiscalar_mul<I, J>(scalars: I, points: J) -> Self
    where
        I: IntoIterator<Item = Scalar>,
        J: IntoIterator<Item = RistrettoPoint>,
    {
        Self(RistrettoPoint::multiscalar_mul(scalars, points))
    }

    /// Variable-time multi-scalar multiplication, for public scalars only
    pub fn vartime_multiscalar_mul<I, J>(scalars: I, points: J) -> Self
    where
        I: IntoIterator<Item = Scalar>,
        J: IntoIterator<Item = RistrettoPoint>,
    {
        Self(RistrettoPoint::vartime_multiscalar_mul(scalars, points))
    }
}

/// Decode a canonical 32-byte scalar, rejecting unreduced encodings
pub fn scalar_from_bytes(bytes: &[u8]) -> RangeProofResult<Scalar> {
    let array: [u8; SCALAR_SIZE] = bytes
        .try_into()
        .map_err(|_| RangeProofError::InvalidProof("Invalid scalar length".to_string()))?;
    Option::from(Scalar::from_canonical_bytes(array))
        .ok_or_else(|| RangeProofError::InvalidProof("Non-canonical scalar".to_string()))
}

impl std::ops::Add for GroupElement {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::Sub for GroupElement {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::ops::Mul<Scalar> for GroupElement {
    type Output = Self;

    fn mul(self, scalar: Scalar) -> Self {
        Self(self.0 * scalar)
    }
}

impl From<RistrettoPoint> for GroupElement {
    fn from(point: RistrettoPoint) -> Self {
        Self(point)
    }
}
