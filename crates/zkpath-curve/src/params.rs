// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Short-Weierstrass parameters `y² = x³ + b` of the two BN254 groups.

use core::fmt::Debug;

use ark_bn254::{Fq, Fr};
use ark_ff::{MontFp, PrimeField};

use crate::affine::AffinePoint;
use crate::field::{FieldOps, Fp, Fp2};

pub trait CurveParams: Copy + Debug + Eq + Send + Sync + 'static {
    type Base: FieldOps;

    const NAME: &'static str;

    fn coeff_b() -> Self::Base;

    /// Membership in the order-`r` subgroup for a point already known to be
    /// on the curve. Groups with cofactor 1 keep the default.
    fn in_prime_subgroup(point: &AffinePoint<Self>) -> bool {
        let _ = point;
        true
    }
}

/// G1: `y² = x³ + 3` over `Fp`, cofactor 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1Params;

impl CurveParams for G1Params {
    type Base = Fp;

    const NAME: &'static str = "G1";

    fn coeff_b() -> Fp {
        Fp::from_u64(3)
    }
}

/// G2: the sextic twist `y² = x³ + 3/(9 + u)` over `Fp2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2Params;

const TWIST_B_C0: Fq =
    MontFp!("19485874751759354771024239261021720505790618469301721065564631296452457478373");
const TWIST_B_C1: Fq =
    MontFp!("266929791119991161246907387137283842545076965332900288569378510910307636690");

impl CurveParams for G2Params {
    type Base = Fp2;

    const NAME: &'static str = "G2";

    fn coeff_b() -> Fp2 {
        Fp2::new(TWIST_B_C0.into(), TWIST_B_C1.into())
    }

    /// The twist has a large cofactor: require `r·Q = O`.
    fn in_prime_subgroup(point: &AffinePoint<Self>) -> bool {
        point.to_jacobian().mul_jacobian(&Fr::MODULUS).is_infinity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::short_weierstrass::SWCurveConfig;

    #[test]
    fn twist_coefficient_is_three_over_xi() {
        let xi = Fp2::new(Fp::from_u64(9), Fp::one());
        assert_eq!(G2Params::coeff_b() * xi, Fp2::from_u64(3));
    }

    #[test]
    fn coefficients_match_arkworks() {
        assert_eq!(Fq::from(G1Params::coeff_b()), ark_bn254::g1::Config::COEFF_B);
        assert_eq!(
            ark_bn254::Fq2::from(G2Params::coeff_b()),
            ark_bn254::g2::Config::COEFF_B
        );
    }
}
