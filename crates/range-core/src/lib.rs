//! # Range Core
//!
//! This crate provides the foundational types, traits, and utilities shared by
//! the commitment range proof. It includes:
//!
//! - Group element wrapper over Ristretto255
//! - Pedersen generators and the commitment primitive `Com(v, r)`
//! - Transcript management for the Fiat-Shamir transform
//! - Bit decomposition and scalar utilities
//! - Error types
//!
//! ## Mathematical Background
//!
//! Everything operates over the prime-order Ristretto group with two
//! independent generators:
//! - `G`: generator for committed values
//! - `H`: generator for blinding factors
//!
//! A Pedersen commitment to `v` with randomness `r` is
//! ```text
//! Com(v, r) = v*G + r*H
//! ```
//! which is perfectly hiding, and binding as long as the discrete log of `H`
//! with respect to `G` is unknown.

pub mod errors;
pub mod generators;
pub mod group;
pub mod transcript;
pub mod utils;

pub use errors::*;
pub use generators::*;
pub use group::*;
pub use transcript::*;

/// Re-export commonly used types from curve25519-dalek
pub use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::Identity,
};

/// Re-export merlin transcript
pub use merlin::Transcript;
