//! # Commitment Range Proofs
//!
//! This crate implements a bit-decomposition range proof for a Pedersen
//! commitment `T = b*G + r*H`: the prover shows `b ∈ [0, 2^n)` without
//! revealing `b` or `r`.
//!
//! ## Mathematical Background
//!
//! A range proof for value `b` in range `[0, 2^n)` works by:
//!
//! 1. **Bit Decomposition**: Express `b = Σ(b_i * 2^i)` and commit to every bit
//!    as `A_i = Com(b_i, r_i)`
//! 2. **Binary Proofs**: A sigma protocol per bit shows `b_i ∈ {0,1}`
//! 3. **Reconstruction**: `T' = Σ(2^i * A_i)` commits to `b` under
//!    `r' = Σ(2^i * r_i)`
//! 4. **Same Value**: A sigma protocol shows `T` and `T'` hide the same value
//!
//! All sub-protocol instances answer one Fiat-Shamir challenge derived from
//! the whole transcript. Per-bit commit and respond phases run in parallel.
//!
//! ## Usage
//!
//! ```rust
//! use commit_range::{RangeProver, RangeVerifier};
//! use range_core::Scalar;
//! use rand::thread_rng;
//!
//! let mut rng = thread_rng();
//! let prover = RangeProver::new(8).unwrap();
//! let blinding = Scalar::random(&mut rng);
//! let commitment = prover.generators().commit(Scalar::from(42u64), blinding);
//!
//! let proof = prover.prove(42, &blinding, &commitment, &mut rng).unwrap();
//!
//! let verifier = RangeVerifier::new(8).unwrap();
//! assert!(verifier.verify_range(&proof, &commitment).is_ok());
//! ```

pub mod binary;
mod challenge;
pub mod proof;
pub mod prover;
pub mod same_value;
pub mod verifier;


pub use binary::*;
pub use proof::*;
pub use prover::*;
pub use same_value::*;
pub use verifier::*;
