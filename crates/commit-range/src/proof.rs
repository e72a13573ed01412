//! Range proof structure and serialization

use crate::{BinaryCommitment, BinaryResponse, SameValueCommitment, SameValueResponse};
use range_core::{
    scalar_from_bytes, GroupElement, PedersenGens, RangeProofError, RangeProofResult, Scalar,
    POINT_SIZE, SCALAR_SIZE,
};
use serde::{Deserialize, Serialize};

/// Maximum supported bit width of a range proof
pub const RANGE_MAX_BITS: usize = 32;

/// Encoded size of one bit slot: `A, Ca, Cb, f, za, zb`
const BIT_PROOF_SIZE: usize = 3 * POINT_SIZE + 3 * SCALAR_SIZE;

/// Encoded size of everything except the bit slots
const FIXED_SIZE: usize = 4 * POINT_SIZE + 1 + 2 * POINT_SIZE + 3 * SCALAR_SIZE;

/// Everything the proof carries for a single bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitProof {
    /// `A_i = Com(b_i, r_i)`
    pub commitment: GroupElement,
    /// Binary protocol first move `(Ca_i, Cb_i)`
    pub binary: BinaryCommitment,
    /// Binary protocol responses `(f_i, za_i, zb_i)`
    pub response: BinaryResponse,
}

/// A proof that a Pedersen commitment `T` hides a value in `[0, 2^N)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComRangeProof {
    /// Value generator
    pub g: GroupElement,
    /// Blinding generator
    pub h: GroupElement,
    /// Commitment being proven
    pub t: GroupElement,
    /// `T' = sum(2^i * A_i)`
    pub t_prime: GroupElement,
    /// Per-bit data; slot `i` belongs to bit `i`, occupied slots form a prefix
    pub bits: [Option<BitProof>; RANGE_MAX_BITS],
    /// Same-value protocol first move `(A_T, A_T')`
    pub same_value: SameValueCommitment,
    /// Same-value protocol responses `(Zb, Zr, Zr')`
    pub same_value_response: SameValueResponse,
}

impl ComRangeProof {
    /// Number of occupied bit slots
    pub fn bit_length(&self) -> usize {
        self.bits.iter().take_while(|slot| slot.is_some()).count()
    }

    /// Get the bit proof at `index`
    pub fn bit(&self, index: usize) -> Option<&BitProof> {
        self.bits.get(index).and_then(Option::as_ref)
    }

    /// The occupied bit slots, checked to be a non-empty contiguous prefix
    pub fn bit_proofs(&self) -> RangeProofResult<Vec<BitProof>> {
        let n = self.bit_length();
        if n == 0 {
            return Err(RangeProofError::InvalidParameters(
                "Proof has no bit commitments".to_string(),
            ));
        }
        if self.bits[n..].iter().any(Option::is_some) {
            return Err(RangeProofError::InvalidParameters(format!(
                "Bit slot {} is empty but later slots are occupied",
                n
            )));
        }
        Ok(self.bits[..n].iter().flatten().copied().collect())
    }

    /// The generator pair the proof was created with
    pub fn generators(&self) -> RangeProofResult<PedersenGens> {
        PedersenGens::new(self.g, self.h)
    }

    /// Encoded size of a proof over `bit_length` bits
    pub const fn serialized_size(bit_length: usize) -> usize {
        FIXED_SIZE + bit_length * BIT_PROOF_SIZE
    }

    /// Serialize the proof to bytes
    pub fn to_bytes(&self) -> RangeProofResult<Vec<u8>> {
        let bits = self.bit_proofs()?;
        let mut bytes = Vec::with_capacity(Self::serialized_size(bits.len()));

        bytes.extend_from_slice(&self.g.to_bytes());
        bytes.extend_from_slice(&self.h.to_bytes());
        bytes.extend_from_slice(&self.t.to_bytes());
        bytes.extend_from_slice(&self.t_prime.to_bytes());
        bytes.push(bits.len() as u8);

        for bit in &bits {
            bytes.extend_from_slice(&bit.commitment.to_bytes());
            bytes.extend_from_slice(&bit.binary.ca.to_bytes());
            bytes.extend_from_slice(&bit.binary.cb.to_bytes());
            bytes.extend_from_slice(bit.response.f.as_bytes());
            bytes.extend_from_slice(bit.response.za.as_bytes());
            bytes.extend_from_slice(bit.response.zb.as_bytes());
        }

        bytes.extend_from_slice(&self.same_value.a_t.to_bytes());
        bytes.extend_from_slice(&self.same_value.a_t_prime.to_bytes());
        bytes.extend_from_slice(self.same_value_response.zb.as_bytes());
        bytes.extend_from_slice(self.same_value_response.zr.as_bytes());
        bytes.extend_from_slice(self.same_value_response.zr_prime.as_bytes());

        Ok(bytes)
    }

    /// Deserialize proof from bytes
    pub fn from_bytes(bytes: &[u8]) -> RangeProofResult<Self> {
        if bytes.len() < FIXED_SIZE {
            return Err(RangeProofError::InvalidProof("Insufficient bytes".to_string()));
        }

        let bit_length = bytes[4 * POINT_SIZE] as usize;
        if bit_length == 0 || bit_length > RANGE_MAX_BITS {
            return Err(RangeProofError::InvalidProof(format!(
                "Bit length {} outside 1..={}",
                bit_length, RANGE_MAX_BITS
            )));
        }
        if bytes.len() != Self::serialized_size(bit_length) {
            return Err(RangeProofError::InvalidProof(format!(
                "Expected {} bytes for {} bits, got {}",
                Self::serialized_size(bit_length),
                bit_length,
                bytes.len()
            )));
        }

        let mut reader = Reader { bytes, offset: 0 };
        let g = reader.point()?;
        let h = reader.point()?;
        let t = reader.point()?;
        let t_prime = reader.point()?;
        reader.offset += 1;

        let mut bits = [None; RANGE_MAX_BITS];
        for slot in bits.iter_mut().take(bit_length) {
            let commitment = reader.point()?;
            let binary = BinaryCommitment {
                ca: reader.point()?,
                cb: reader.point()?,
            };
            let response = BinaryResponse {
                f: reader.scalar()?,
                za: reader.scalar()?,
                zb: reader.scalar()?,
            };
            *slot = Some(BitProof {
                commitment,
                binary,
                response,
            });
        }

        let same_value = SameValueCommitment {
            a_t: reader.point()?,
            a_t_prime: reader.point()?,
        };
        let same_value_response = SameValueResponse {
            zb: reader.scalar()?,
            zr: reader.scalar()?,
            zr_prime: reader.scalar()?,
        };

        Ok(Self {
            g,
            h,
            t,
            t_prime,
            bits,
            same_value,
            same_value_response,
        })
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl Reader<'_> {
    fn take(&mut self, len: usize) -> RangeProofResult<&[u8]> {
        let end = self.offset + len;
        let slice = self
            .bytes
            .get(self.offset..end)
            .ok_or_else(|| RangeProofError::InvalidProof("Unexpected end of proof".to_string()))?;
        self.offset = end;
        Ok(slice)
    }

    fn point(&mut self) -> RangeProofResult<GroupElement> {
        GroupElement::from_bytes(self.take(POINT_SIZE)?)
    }

    fn scalar(&mut self) -> RangeProofResult<Scalar> {
        scalar_from_bytes(self.take(SCALAR_SIZE)?)
    }
}
