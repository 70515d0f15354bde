// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Inversion-free point arithmetic on `(X, Y, Z)` triples.
//!
//! The addition and doubling formulas below keep `x = X/Z`, `y = Y/Z`, so a
//! whole scalar multiplication costs a single field inversion, paid in
//! [`JacobianPoint::to_affine`]. `Z = 0` is the point at infinity.

use core::fmt;
use core::marker::PhantomData;

use ark_ff::{BigInt, BigInteger};

use crate::affine::AffinePoint;
use crate::field::{ArithmeticError, FieldOps};
use crate::params::CurveParams;

#[derive(Clone, Copy)]
pub struct JacobianPoint<C: CurveParams> {
    pub x: C::Base,
    pub y: C::Base,
    pub z: C::Base,
    _curve: PhantomData<C>,
}

impl<C: CurveParams> JacobianPoint<C> {
    pub fn new(x: C::Base, y: C::Base, z: C::Base) -> Self {
        Self {
            x,
            y,
            z,
            _curve: PhantomData,
        }
    }

    pub fn infinity() -> Self {
        Self::new(C::Base::zero(), C::Base::one(), C::Base::zero())
    }

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn from_affine(p: &AffinePoint<C>) -> Self {
        if p.is_infinity() {
            return Self::infinity();
        }
        Self::new(p.x, p.y, C::Base::one())
    }

    pub fn add_jacobian(&self, other: &Self) -> Self {
        if self.is_infinity() {
            return *other;
        }
        if other.is_infinity() {
            return *self;
        }

        let u1 = other.y * self.z;
        let u2 = self.y * other.z;
        let v1 = other.x * self.z;
        let v2 = self.x * other.z;
        if v1 == v2 {
            if u1 == u2 {
                return self.double_jacobian();
            }
            return Self::infinity();
        }

        let w = self.z * other.z;
        let u = u1 - u2;
        let v = v1 - v2;
        let v_sq = v.square();
        let v_sq_v2 = v_sq * v2;
        let v_cu = v_sq * v;
        let a = u.square() * w - v_cu - v_sq_v2.double();

        let x3 = v * a;
        let y3 = u * (v_sq_v2 - a) - v_cu * u2;
        let z3 = v_cu * w;
        Self::new(x3, y3, z3)
    }

    pub fn double_jacobian(&self) -> Self {
        if self.is_infinity() {
            return *self;
        }
        let (x, y, z) = (self.x, self.y, self.z);
        let eight = C::Base::from_u64(8);

        let w = C::Base::from_u64(3) * x.square();
        let s = y * z;
        let b = x * y * s;
        let h = w.square() - eight * b;
        let s_sq = s.square();

        let new_y = w * (C::Base::from_u64(4) * b - h) - eight * y.square() * s_sq;
        let new_x = h.double() * s;
        let new_z = eight * s * s_sq;
        Self::new(new_x, new_y, new_z)
    }

    /// Double-and-add over the bits of `k`, most significant first, with no
    /// normalisation in between.
    pub fn mul_jacobian(&self, k: &BigInt<4>) -> Self {
        let mut acc = Self::infinity();
        for bit in k.to_bits_be() {
            acc = acc.double_jacobian();
            if bit {
                acc = acc.add_jacobian(self);
            }
        }
        acc
    }

    pub fn to_affine(&self) -> Result<AffinePoint<C>, ArithmeticError> {
        if self.is_infinity() {
            return Ok(AffinePoint::infinity());
        }
        let inv_z = self
            .z
            .inverse()
            .ok_or(ArithmeticError::ZeroInversion { context: "projective normalisation" })?;
        Ok(AffinePoint::new_unchecked(self.x * inv_z, self.y * inv_z))
    }

    pub fn neg(&self) -> Self {
        Self::new(self.x, -self.y, self.z)
    }
}

/// Equality of the represented points, independent of scaling.
impl<C: CurveParams> PartialEq for JacobianPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => true,
            (false, false) => {
                self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
            }
            _ => false,
        }
    }
}

impl<C: CurveParams> Eq for JacobianPoint<C> {}

impl<C: CurveParams> fmt::Debug for JacobianPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JacobianPoint")
            .field("curve", &C::NAME)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affine::{G1Point, G2Point};
    use crate::field::Fp2;
    use crate::params::G2Params;
    use ark_bn254::{Fr, G2Affine, G2Projective};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::{PrimeField, UniformRand};
    use ark_std::test_rng;

    fn g2() -> JacobianPoint<G2Params> {
        G2Point::from(G2Affine::generator()).to_jacobian()
    }

    /// Same point with every coordinate scaled by `λ`.
    fn rescale(p: &JacobianPoint<G2Params>, lambda: Fp2) -> JacobianPoint<G2Params> {
        JacobianPoint::new(p.x * lambda, p.y * lambda, p.z * lambda)
    }

    #[test]
    fn add_infinity_short_circuits() {
        let p = g2();
        let o = JacobianPoint::<G2Params>::infinity();
        assert_eq!(p.add_jacobian(&o), p);
        assert_eq!(o.add_jacobian(&p), p);
        assert!(o.double_jacobian().is_infinity());
    }

    #[test]
    fn add_equal_points_doubles() {
        let p = g2();
        let scaled = rescale(&p, Fp2::from_u64(17));
        assert_eq!(p.add_jacobian(&scaled), p.double_jacobian());
        assert_eq!(p.add_jacobian(&p), p.double_jacobian());
    }

    #[test]
    fn add_opposite_points_is_infinity() {
        let p = g2().double_jacobian();
        assert!(p.add_jacobian(&p.neg()).is_infinity());
    }

    #[test]
    fn to_affine_normalises() {
        let p = g2();
        let scaled = rescale(&p, Fp2::from_u64(5));
        assert_eq!(scaled.to_affine().unwrap(), p.to_affine().unwrap());
        assert!(JacobianPoint::<G2Params>::infinity()
            .to_affine()
            .unwrap()
            .is_infinity());
    }

    #[test]
    fn double_matches_arkworks() {
        let expected: G2Point = (G2Affine::generator() + G2Affine::generator())
            .into_affine()
            .into();
        let ours = g2().double_jacobian().to_affine().unwrap();
        assert!(ours.is_on_curve());
        assert_eq!(ours, expected);
    }

    #[test]
    fn mul_matches_arkworks() {
        let mut rng = test_rng();
        for _ in 0..4 {
            let k = Fr::rand(&mut rng);
            let base = G2Projective::rand(&mut rng).into_affine();
            let expected: G2Point = (base * k).into_affine().into();
            let ours = G2Point::from(base)
                .to_jacobian()
                .mul_jacobian(&k.into_bigint())
                .to_affine()
                .unwrap();
            assert_eq!(ours, expected);
        }
    }

    #[test]
    fn jacobian_and_affine_mul_agree_on_g1() {
        let g = G1Point::from(ark_bn254::G1Affine::generator());
        let k = Fr::from(123_456_789u64);
        let via_jacobian = g.to_jacobian().mul_jacobian(&k.into_bigint()).to_affine().unwrap();
        assert_eq!(via_jacobian, g.mul(&k).unwrap());
    }

    #[test]
    fn order_annihilates_generator() {
        assert!(g2().mul_jacobian(&Fr::MODULUS).is_infinity());
    }
}
