//! Utility functions for range proof operations

use curve25519_dalek::scalar::Scalar;

/// Compute powers of a scalar: [1, x, x^2, x^3, ..., x^(n-1)]
pub fn scalar_powers(x: &Scalar, n: usize) -> Vec<Scalar> {
    let mut powers = Vec::with_capacity(n);
    let mut current = Scalar::ONE;

    for _ in 0..n {
        powers.push(current);
        current *= x;
    }

    powers
}

/// Powers of two as scalars: [2^0, 2^1, ..., 2^(n-1)]
pub fn powers_of_two(n: usize) -> Vec<Scalar> {
    scalar_powers(&Scalar::from(2u64), n)
}

/// Construct the little-endian bit decomposition of a value
pub fn bit_decomposition(value: u64, bits: usize) -> Vec<Scalar> {
    let mut result = Vec::with_capacity(bits);
    let mut v = value;

    for _ in 0..bits {
        result.push(Scalar::from(v & 1));
        v >>= 1;
    }

    result
}

/// Verify that a vector represents a valid bit decomposition
pub fn verify_bit_vector(bits: &[Scalar]) -> bool {
    bits.iter().all(|bit| *bit == Scalar::ZERO || *bit == Scalar::ONE)
}

/// Compute the value represented by a bit vector (little-endian)
pub fn bits_to_value(bits: &[Scalar]) -> Option<u64> {
    if !verify_bit_vector(bits) || bits.len() > 64 {
        return None;
    }

    let mut value = 0u64;
    for (i, bit) in bits.iter().enumerate() {
        if *bit == Scalar::ONE {
            value |= 1u64 << i;
        }
    }

    Some(value)
}

/// Inner product of a scalar vector with the powers of two, `sum(v_i * 2^i)`
pub fn weighted_sum_pow2(values: &[Scalar]) -> Scalar {
    values
        .iter()
        .zip(powers_of_two(values.len()))
        .map(|(v, p)| v * p)
        .sum()
}
