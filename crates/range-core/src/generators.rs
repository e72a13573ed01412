//! Pedersen generators and the commitment primitive

use crate::{GroupElement, RangeProofError, RangeProofResult};
use curve25519_dalek::{
    constants::RISTRETTO_BASEPOINT_POINT, ristretto::RistrettoPoint, scalar::Scalar,
};
use serde::{Deserialize, Serialize};
use sha2::Sha512;

/// Generator pair for Pedersen commitments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedersenGens {
    /// Value generator G
    g: GroupElement,
    /// Blinding generator H
    h: GroupElement,
}

impl PedersenGens {
    /// Create a generator pair from explicit points.
    ///
    /// Both generators must be non-identity and distinct.
    pub fn new(g: GroupElement, h: GroupElement) -> RangeProofResult<Self> {
        if g.is_identity() || h.is_identity() {
            return Err(RangeProofError::InvalidParameters(
                "Generators must not be the identity".to_string(),
            ));
        }
        if g == h {
            return Err(RangeProofError::InvalidParameters(
                "Generators G and H must be distinct".to_string(),
            ));
        }
        Ok(Self { g, h })
    }

    /// Derive a blinding generator from a label, paired with the basepoint
    pub fn from_label(label: &[u8]) -> RangeProofResult<Self> {
        let g = GroupElement::from(RISTRETTO_BASEPOINT_POINT);
        let h = GroupElement::from(RistrettoPoint::hash_from_bytes::<Sha512>(label));
        Self::new(g, h)
    }

    /// Get the G generator (used for committed values)
    pub fn g_generator(&self) -> GroupElement {
        self.g
    }

    /// Get the H generator (used for blinding factors)
    pub fn h_generator(&self) -> GroupElement {
        self.h
    }

    /// Commit to a value: `value * G + blinding * H`
    pub fn commit(&self, value: Scalar, blinding: Scalar) -> GroupElement {
        commit(value, blinding, &self.g, &self.h)
    }
}

impl Default for PedersenGens {
    /// The Ristretto basepoint for G and a nothing-up-my-sleeve H hashed from it
    fn default() -> Self {
        let g = RISTRETTO_BASEPOINT_POINT;
        let h = RistrettoPoint::hash_from_bytes::<Sha512>(g.compress().as_bytes());
        Self {
            g: GroupElement::from(g),
            h: GroupElement::from(h),
        }
    }
}

/// Pedersen commitment `Com(value, randomness) = value * g + randomness * h`.
///
/// Uses constant-time multiscalar multiplication since both scalars are
/// normally secret.
pub fn commit(value: Scalar, randomness: Scalar, g: &GroupElement, h: &GroupElement) -> GroupElement {
    GroupElement::multiscalar_mul([value, randomness], [g.0, h.0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn test_default_generators_are_distinct() {
        let gens = PedersenGens::default();
        assert_ne!(gens.g_generator(), gens.h_generator());
        assert!(!gens.h_generator().is_identity());
        assert_eq!(
            PedersenGens::new(gens.g_generator(), gens.h_generator()).unwrap(),
            gens
        );
    }

    #[test]
    fn test_generators_reject_degenerate_pairs() {
        let g = GroupElement::from(RISTRETTO_BASEPOINT_POINT);
        assert!(PedersenGens::new(g, g).is_err());
        assert!(PedersenGens::new(g, GroupElement::identity()).is_err());
        assert!(PedersenGens::new(GroupElement::identity(), g).is_err());
    }

    #[test]
    fn test_label_generators_differ_by_label() {
        let a = PedersenGens::from_label(b"transfer").unwrap();
        let b = PedersenGens::from_label(b"withdraw").unwrap();
        assert_eq!(a.g_generator(), b.g_generator());
        assert_ne!(a.h_generator(), b.h_generator());
    }

    #[test]
    fn test_commit_is_homomorphic() {
        let gens = PedersenGens::default();
        let (r1, r2) = (Scalar::random(&mut OsRng), Scalar::random(&mut OsRng));

        let c1 = gens.commit(Scalar::from(3u64), r1);
        let c2 = gens.commit(Scalar::from(4u64), r2);

        assert_eq!(c1 + c2, gens.commit(Scalar::from(7u64), r1 + r2));
    }

    #[test]
    fn test_commit_matches_manual_computation() {
        let gens = PedersenGens::default();
        let value = Scalar::from(42u64);
        let blinding = Scalar::from(12345u64);

        let expected = gens.g_generator() * value + gens.h_generator() * blinding;
        assert_eq!(gens.commit(value, blinding), expected);
    }
}
