//! Sigma protocol proving two Pedersen commitments hide the same value.
//!
//! For `T = Com(b, r)` and `T' = Com(b, r')`:
//!
//! ```text
//! commit:   A_T = ab*G + ar*H,  A_T' = ab*G + ar'*H
//! respond:  zb = ab + c*b,  zr = ar + c*r,  zr' = ar' + c*r'
//! verify:   zb*G + zr*H  == A_T  + c*T
//!           zb*G + zr'*H == A_T' + c*T'
//! ```
//!
//! Both first-move commitments share the `ab*G` term, so a single `zb`
//! answers for the value in both commitments.

use range_core::{GroupElement, PedersenGens, Scalar};
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// First-move commitments of the same-value protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SameValueCommitment {
    pub a_t: GroupElement,
    pub a_t_prime: GroupElement,
}

/// Responses of the same-value protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SameValueResponse {
    pub zb: Scalar,
    pub zr: Scalar,
    pub zr_prime: Scalar,
}

/// Opening of the two commitments known to the prover
#[derive(Clone, Copy)]
pub struct SameValueWitness {
    pub value: Scalar,
    pub blinding: Scalar,
    pub blinding_prime: Scalar,
}

/// Prover state between the commit and respond moves
pub struct SameValueProver {
    alpha_b: Scalar,
    alpha_r: Scalar,
    alpha_r_prime: Scalar,
}

impl SameValueProver {
    /// Run the commit move
    pub fn commit<R: RngCore + CryptoRng>(
        gens: &PedersenGens,
        rng: &mut R,
    ) -> (Self, SameValueCommitment) {
        let alpha_b = Scalar::random(rng);
        let alpha_r = Scalar::random(rng);
        let alpha_r_prime = Scalar::random(rng);

        let g_alpha_b = gens.g_generator() * alpha_b;
        let h = gens.h_generator();
        let commitment = SameValueCommitment {
            a_t: g_alpha_b + h * alpha_r,
            a_t_prime: g_alpha_b + h * alpha_r_prime,
        };

        (
            Self {
                alpha_b,
                alpha_r,
                alpha_r_prime,
            },
            commitment,
        )
    }

    /// Answer the challenge
    pub fn respond(self, witness: &SameValueWitness, challenge: &Scalar) -> SameValueResponse {
        SameValueResponse {
            zb: self.alpha_b + challenge * witness.value,
            zr: self.alpha_r + challenge * witness.blinding,
            zr_prime: self.alpha_r_prime + challenge * witness.blinding_prime,
        }
    }
}

/// Check that `t` and `t_prime` commit to the same value
pub fn verify_same_value(
    t: &GroupElement,
    t_prime: &GroupElement,
    commitment: &SameValueCommitment,
    response: &SameValueResponse,
    gens: &PedersenGens,
    challenge: &Scalar,
) -> bool {
    let g = gens.g_generator();
    let h = gens.h_generator();

    // zb*G + zr*H - A_T - c*T == 0
    let first = GroupElement::vartime_multiscalar_mul(
        [response.zb, response.zr, -Scalar::ONE, -challenge],
        [g.0, h.0, commitment.a_t.0, t.0],
    );
    if !first.is_identity() {
        return false;
    }

    // zb*G + zr'*H - A_T' - c*T' == 0
    let second = GroupElement::vartime_multiscalar_mul(
        [response.zb, response.zr_prime, -Scalar::ONE, -challenge],
        [g.0, h.0, commitment.a_t_prime.0, t_prime.0],
    );
    second.is_identity()
}
