// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! BN254 arithmetic for zkpath.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`field`] | `Fp`, `Fp2` and the [`FieldOps`] capability |
//! | [`params`] | Curve coefficients for G1 and the G2 twist |
//! | [`affine`] | Affine points: validation, negation, add/double/mul |
//! | [`jacobian`] | Projective triples used for G2 scalar multiplication |
//! | [`encoding`] | Fixed-width big-endian point encodings |
//! | [`pairing`] | Multi-pairing product check |
//!
//! There is exactly one curve in play; [`CurveParams`] and [`FieldOps`] exist
//! so that the point code is written once for both groups.

pub mod affine;
pub mod encoding;
pub mod field;
pub mod jacobian;
pub mod pairing;
pub mod params;

mod ark;

pub use affine::{AffinePoint, G1Point, G2Point};
pub use encoding::{PointError, G1_ENCODED_LEN, G2_ENCODED_LEN, WORD_LEN};
pub use field::{bigint_from_be_bytes, ArithmeticError, FieldOps, Fp, Fp2};
pub use jacobian::JacobianPoint;
pub use pairing::multi_pairing_check;
pub use params::{CurveParams, G1Params, G2Params};

/// Scalar field of both groups (order `r`).
pub use ark_bn254::Fr;
