// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Fixed-width big-endian encodings of G1 and G2 points.
//!
//! Every coordinate is a 32-byte big-endian word. G2 coordinates put the
//! `u` component first (EIP-197 layout):
//!
//! ```text
//! G1: x ‖ y                          64 bytes
//! G2: x.c1 ‖ x.c0 ‖ y.c1 ‖ y.c0     128 bytes
//! ```
//!
//! Decoding is the system boundary: it rejects non-canonical words,
//! off-curve points and (for G2) points outside the order-`r` subgroup.

use crate::affine::{G1Point, G2Point};
use crate::field::{Fp, Fp2};

pub const WORD_LEN: usize = 32;
pub const G1_ENCODED_LEN: usize = 2 * WORD_LEN;
pub const G2_ENCODED_LEN: usize = 4 * WORD_LEN;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointError {
    #[error("coordinate word {index} is not below the field modulus")]
    NonCanonicalCoordinate { index: usize },

    #[error("point is not on the {curve} curve")]
    NotOnCurve { curve: &'static str },

    #[error("point is not in the prime-order {curve} subgroup")]
    NotInSubgroup { curve: &'static str },

    #[error("expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
}

fn read_words<const N: usize>(bytes: &[u8]) -> Result<[Fp; N], PointError> {
    if bytes.len() != N * WORD_LEN {
        return Err(PointError::Length {
            expected: N * WORD_LEN,
            actual: bytes.len(),
        });
    }
    let mut out = [Fp::default(); N];
    for (index, (slot, chunk)) in out.iter_mut().zip(bytes.chunks_exact(WORD_LEN)).enumerate() {
        let mut word = [0u8; WORD_LEN];
        word.copy_from_slice(chunk);
        *slot = Fp::from_be_bytes(&word).ok_or(PointError::NonCanonicalCoordinate { index })?;
    }
    Ok(out)
}

impl Fp2 {
    /// Build from the wire order `(c1, c0)`.
    pub fn from_wire_words(c1: Fp, c0: Fp) -> Self {
        Fp2::new(c0, c1)
    }

    /// `[c1, c0]`, the wire order.
    pub fn to_wire_words(&self) -> [Fp; 2] {
        [self.c1, self.c0]
    }
}

impl G1Point {
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, PointError> {
        let [x, y] = read_words::<2>(bytes)?;
        Self::new(x, y)
    }

    pub fn to_be_bytes(&self) -> [u8; G1_ENCODED_LEN] {
        let mut out = [0u8; G1_ENCODED_LEN];
        out[..WORD_LEN].copy_from_slice(&self.x.to_be_bytes());
        out[WORD_LEN..].copy_from_slice(&self.y.to_be_bytes());
        out
    }
}

impl G2Point {
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, PointError> {
        let [x_c1, x_c0, y_c1, y_c0] = read_words::<4>(bytes)?;
        Self::new(
            Fp2::from_wire_words(x_c1, x_c0),
            Fp2::from_wire_words(y_c1, y_c0),
        )
    }

    pub fn to_be_bytes(&self) -> [u8; G2_ENCODED_LEN] {
        let mut out = [0u8; G2_ENCODED_LEN];
        let words = self.x.to_wire_words().into_iter().chain(self.y.to_wire_words());
        for (chunk, word) in out.chunks_exact_mut(WORD_LEN).zip(words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}
