// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! 256-bit digests and their two-limb field encoding.
//!
//! A digest is carried as 32 raw bytes in SHA-256 output order. When a
//! digest has to cross into the constraint field (root public inputs) it is
//! split into two 128-bit limbs `[hi, lo]`, each the big-endian integer of
//! one 16-byte half.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const DIGEST_LEN: usize = 32;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DigestError {
    #[error("invalid hex: {0}")]
    Hex(String),

    #[error("digest must be {DIGEST_LEN} bytes, got {0}")]
    Length(usize),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Digest {
    pub const ZERO: Digest = Digest([0u8; DIGEST_LEN]);

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Parse 64 hex chars, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, DigestError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| DigestError::Hex(e.to_string()))?;
        let arr: [u8; DIGEST_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| DigestError::Length(bytes.len()))?;
        Ok(Self(arr))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// `[hi, lo]`: big-endian integers of `bytes[0..16]` and `bytes[16..32]`.
    pub fn to_limbs(&self) -> [u128; 2] {
        let mut hi = [0u8; 16];
        let mut lo = [0u8; 16];
        hi.copy_from_slice(&self.0[..16]);
        lo.copy_from_slice(&self.0[16..]);
        [u128::from_be_bytes(hi), u128::from_be_bytes(lo)]
    }

    pub fn from_limbs(limbs: [u128; 2]) -> Self {
        let mut out = [0u8; DIGEST_LEN];
        out[..16].copy_from_slice(&limbs[0].to_be_bytes());
        out[16..].copy_from_slice(&limbs[1].to_be_bytes());
        Self(out)
    }

    /// Copy with bit `bit` (0 = MSB of byte 0) inverted.
    pub fn flip_bit(&self, bit: usize) -> Self {
        let mut out = self.0;
        out[bit / 8] ^= 0x80 >> (bit % 8);
        Self(out)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", self.to_hex()))
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
