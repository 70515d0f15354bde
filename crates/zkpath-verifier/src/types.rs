// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Type definitions for Groth16 verification over BN254.

use core::fmt;

use ark_ff::{BigInteger, PrimeField};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha256};
use zkpath_curve::{bigint_from_be_bytes, Fr, G1Point, G2Point, WORD_LEN};

use crate::error::{VerifierError, VerifierResult};

/// A 256-bit big-endian word as it appears on the wire (field coordinates
/// and public inputs). Range checks happen where the word is interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldInteger(pub [u8; WORD_LEN]);

impl FieldInteger {
    /// Accepts `0x`-prefixed or bare hex of at most 64 digits.
    pub fn from_hex(s: &str) -> VerifierResult<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.is_empty() || digits.len() > 2 * WORD_LEN {
            return Err(VerifierError::Encoding(format!(
                "expected 1..=64 hex digits, got {}",
                digits.len()
            )));
        }
        let padded = format!("{digits:0>64}");
        let bytes = hex::decode(&padded).map_err(|e| VerifierError::Encoding(e.to_string()))?;
        let mut out = [0u8; WORD_LEN];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// `None` if the integer is not below the scalar field modulus.
    pub fn to_scalar(&self) -> Option<Fr> {
        Fr::from_bigint(bigint_from_be_bytes(&self.0))
    }

    pub fn from_scalar(x: &Fr) -> Self {
        let mut out = [0u8; WORD_LEN];
        out.copy_from_slice(&x.into_bigint().to_bytes_be());
        Self(out)
    }

    pub fn from_u64(v: u64) -> Self {
        let mut out = [0u8; WORD_LEN];
        out[WORD_LEN - 8..].copy_from_slice(&v.to_be_bytes());
        Self(out)
    }
}

impl fmt::Debug for FieldInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldInteger({})", self.to_hex())
    }
}

impl Serialize for FieldInteger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for FieldInteger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        FieldInteger::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Groth16 verification key for BN254.
///
/// `ic[0]` is the constant term, `ic[1..]` pair with the public inputs in
/// order, so `ic.len() == num_public_inputs + 1`. Produced once by the
/// trusted setup and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKey {
    pub alpha: G1Point,
    pub beta: G2Point,
    pub gamma: G2Point,
    pub delta: G2Point,
    pub ic: Vec<G1Point>,
}

impl VerifyingKey {
    pub fn num_public_inputs(&self) -> usize {
        self.ic.len().saturating_sub(1)
    }

    /// Content address of the key: `sha256` of its binary wire encoding.
    pub fn key_id(&self) -> [u8; 32] {
        Sha256::digest(self.to_bytes()).into()
    }
}

/// Groth16 proof for BN254.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proof {
    pub a: G1Point,
    pub b: G2Point,
    pub c: G1Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_left_padded() {
        let x = FieldInteger::from_hex("0x2a").unwrap();
        assert_eq!(x, FieldInteger::from_u64(42));
        assert_eq!(x.to_hex().len(), 66);
        assert_eq!(FieldInteger::from_hex(&x.to_hex()).unwrap(), x);
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert!(FieldInteger::from_hex("0x").is_err());
        assert!(FieldInteger::from_hex(&"1".repeat(65)).is_err());
        assert!(FieldInteger::from_hex("0xgg").is_err());
    }

    #[test]
    fn scalar_range_check() {
        let r = FieldInteger::from_scalar(&Fr::from(0u64));
        assert_eq!(r.to_scalar(), Some(Fr::from(0u64)));

        // r itself is out of range
        let mut modulus = [0u8; 32];
        modulus.copy_from_slice(&Fr::MODULUS.to_bytes_be());
        assert_eq!(FieldInteger(modulus).to_scalar(), None);

        let x = Fr::from(123_456u64);
        assert_eq!(FieldInteger::from_scalar(&x).to_scalar(), Some(x));
    }
}
