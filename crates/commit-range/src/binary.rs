//! Sigma protocol proving that a committed scalar is a bit.
//!
//! Given `A = Com(b, r)`, the prover shows `b ∈ {0, 1}` without a
//! disjunction:
//!
//! ```text
//! commit:   Ca = Com(a, s),  Cb = Com(a*b, t)
//! respond:  f = c*b + a,  za = c*r + s,  zb = (c - f)*r + t
//! verify:   c*A + Ca == Com(f, za)
//!           (c - f)*A + Cb == zb*H
//! ```
//!
//! The second equation only balances when `b * (c - f) + a * b = 0`, i.e.
//! `c * b * (1 - b) = 0`, which forces `b` to be 0 or 1.

use range_core::{GroupElement, PedersenGens, Scalar};
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// First-move commitments of the binary protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryCommitment {
    /// `Com(a, s)`
    pub ca: GroupElement,
    /// `Com(a * b, t)`
    pub cb: GroupElement,
}

/// Responses of the binary protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryResponse {
    pub f: Scalar,
    pub za: Scalar,
    pub zb: Scalar,
}

/// Prover state between the commit and respond moves.
///
/// `respond` consumes the state so the first-move secrets answer exactly one
/// challenge.
pub struct BinaryProver {
    bit: Scalar,
    blinding: Scalar,
    a: Scalar,
    s: Scalar,
    t: Scalar,
}

impl BinaryProver {
    /// Run the commit move for `bit` committed under `blinding`
    pub fn commit<R: RngCore + CryptoRng>(
        bit: Scalar,
        blinding: Scalar,
        gens: &PedersenGens,
        rng: &mut R,
    ) -> (Self, BinaryCommitment) {
        let a = Scalar::random(rng);
        let s = Scalar::random(rng);
        let t = Scalar::random(rng);

        let commitment = BinaryCommitment {
            ca: gens.commit(a, s),
            cb: gens.commit(a * bit, t),
        };

        (
            Self {
                bit,
                blinding,
                a,
                s,
                t,
            },
            commitment,
        )
    }

    /// Answer the challenge
    pub fn respond(self, challenge: &Scalar) -> BinaryResponse {
        let f = challenge * self.bit + self.a;
        let za = challenge * self.blinding + self.s;
        let zb = (challenge - f) * self.blinding + self.t;
        BinaryResponse { f, za, zb }
    }
}

/// Check a binary proof for the bit commitment `a`.
///
/// Returns `false` on any algebraic mismatch.
pub fn verify_binary(
    a: &GroupElement,
    commitment: &BinaryCommitment,
    response: &BinaryResponse,
    gens: &PedersenGens,
    challenge: &Scalar,
) -> bool {
    let g = gens.g_generator();
    let h = gens.h_generator();

    // c*A + Ca == f*G + za*H
    let lhs = GroupElement::vartime_multiscalar_mul(
        [*challenge, Scalar::ONE, -response.f, -response.za],
        [a.0, commitment.ca.0, g.0, h.0],
    );
    if !lhs.is_identity() {
        return false;
    }

    // (c - f)*A + Cb == zb*H
    let lhs = GroupElement::vartime_multiscalar_mul(
        [challenge - response.f, Scalar::ONE, -response.zb],
        [a.0, commitment.cb.0, h.0],
    );
    lhs.is_identity()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    fn run(bit: Scalar) -> bool {
        let mut rng = thread_rng();
        let gens = PedersenGens::default();
        let blinding = Scalar::random(&mut rng);
        let a = gens.commit(bit, blinding);

        let (prover, commitment) = BinaryProver::commit(bit, blinding, &gens, &mut rng);
        let challenge = Scalar::random(&mut rng);
        let response = prover.respond(&challenge);

        verify_binary(&a, &commitment, &response, &gens, &challenge)
    }

    #[test]
    fn test_zero_and_one_verify() {
        assert!(run(Scalar::ZERO));
        assert!(run(Scalar::ONE));
    }

    #[test]
    fn test_non_bit_values_rejected() {
        assert!(!run(Scalar::from(2u64)));
        assert!(!run(-Scalar::ONE));
        assert!(!run(Scalar::from(1u64 << 40)));
    }

    #[test]
    fn test_wrong_challenge_rejected() {
        let mut rng = thread_rng();
        let gens = PedersenGens::default();
        let blinding = Scalar::random(&mut rng);
        let a = gens.commit(Scalar::ONE, blinding);

        let (prover, commitment) = BinaryProver::commit(Scalar::ONE, blinding, &gens, &mut rng);
        let challenge = Scalar::random(&mut rng);
        let response = prover.respond(&challenge);

        let other = challenge + Scalar::ONE;
        assert!(!verify_binary(&a, &commitment, &response, &gens, &other));
    }

    #[test]
    fn test_swapped_commitments_rejected() {
        let mut rng = thread_rng();
        let gens = PedersenGens::default();
        let blinding = Scalar::random(&mut rng);
        let a = gens.commit(Scalar::ZERO, blinding);

        let (prover, commitment) = BinaryProver::commit(Scalar::ZERO, blinding, &gens, &mut rng);
        let challenge = Scalar::random(&mut rng);
        let response = prover.respond(&challenge);

        let swapped = BinaryCommitment {
            ca: commitment.cb,
            cb: commitment.ca,
        };
        assert!(!verify_binary(&a, &swapped, &response, &gens, &challenge));
    }
}
