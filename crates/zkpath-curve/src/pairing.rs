// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Multi-pairing product check over BN254.
//!
//! The Miller loop and final exponentiation come from `ark-bn254`; this
//! module only fixes the contract: `∏ e(P_i, Q_i) == 1` in the target group.

use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_ec::pairing::Pairing;
use ark_ff::One;

use crate::affine::{G1Point, G2Point};

/// `true` iff the product of `e(g1_i, g2_i)` is the identity of GT.
///
/// Points must already be validated; an empty slice yields `true`.
pub fn multi_pairing_check(pairs: &[(G1Point, G2Point)]) -> bool {
    let (g1, g2): (Vec<G1Affine>, Vec<G2Affine>) = pairs
        .iter()
        .map(|(p, q)| (G1Affine::from(p), G2Affine::from(q)))
        .unzip();
    let gt = Bn254::multi_pairing(g1, g2);
    let ok = gt.0.is_one();
    tracing::trace!(pairs = pairs.len(), ok, "multi-pairing check");
    ok
}
