// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Conversions to and from arkworks points, used only at the pairing boundary
//! and by tooling that exports arkworks keys.

use ark_bn254::{G1Affine, G2Affine};

use crate::affine::{G1Point, G2Point};

impl From<G1Affine> for G1Point {
    fn from(p: G1Affine) -> Self {
        if p.infinity {
            return G1Point::infinity();
        }
        G1Point::new_unchecked(p.x.into(), p.y.into())
    }
}

impl From<&G1Point> for G1Affine {
    fn from(p: &G1Point) -> Self {
        if p.is_infinity() {
            return G1Affine::identity();
        }
        G1Affine::new_unchecked(p.x.into(), p.y.into())
    }
}

impl From<G2Affine> for G2Point {
    fn from(p: G2Affine) -> Self {
        if p.infinity {
            return G2Point::infinity();
        }
        G2Point::new_unchecked(p.x.into(), p.y.into())
    }
}

impl From<&G2Point> for G2Affine {
    fn from(p: &G2Point) -> Self {
        if p.is_infinity() {
            return G2Affine::identity();
        }
        G2Affine::new_unchecked(p.x.into(), p.y.into())
    }
}
