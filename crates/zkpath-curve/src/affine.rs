// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Affine points on `y² = x³ + b`.
//!
//! The point at infinity is the sentinel `(0, 0)`, which is never on either
//! curve since `b ≠ 0`. On-curve validation happens in [`AffinePoint::new`],
//! the only constructor used for points arriving from outside; results of
//! group operations are built with [`AffinePoint::new_unchecked`].

use core::fmt;
use core::marker::PhantomData;

use ark_bn254::Fr;
use ark_ff::{BigInt, BigInteger, PrimeField};

use crate::encoding::PointError;
use crate::field::{ArithmeticError, FieldOps};
use crate::jacobian::JacobianPoint;
use crate::params::{CurveParams, G1Params, G2Params};

pub type G1Point = AffinePoint<G1Params>;
pub type G2Point = AffinePoint<G2Params>;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AffinePoint<C: CurveParams> {
    pub x: C::Base,
    pub y: C::Base,
    _curve: PhantomData<C>,
}

impl<C: CurveParams> AffinePoint<C> {
    pub fn new_unchecked(x: C::Base, y: C::Base) -> Self {
        Self {
            x,
            y,
            _curve: PhantomData,
        }
    }

    /// Validating constructor: the infinity sentinel, or an on-curve point in
    /// the prime-order subgroup.
    pub fn new(x: C::Base, y: C::Base) -> Result<Self, PointError> {
        let point = Self::new_unchecked(x, y);
        if point.is_infinity() {
            return Ok(point);
        }
        if !point.is_on_curve() {
            return Err(PointError::NotOnCurve { curve: C::NAME });
        }
        if !C::in_prime_subgroup(&point) {
            return Err(PointError::NotInSubgroup { curve: C::NAME });
        }
        Ok(point)
    }

    pub fn infinity() -> Self {
        Self::new_unchecked(C::Base::zero(), C::Base::zero())
    }

    pub fn is_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }
        self.y.square() == self.x.square() * self.x + C::coeff_b()
    }

    pub fn neg(&self) -> Self {
        if self.is_infinity() {
            return *self;
        }
        Self::new_unchecked(self.x, -self.y)
    }

    pub fn double(&self) -> Result<Self, ArithmeticError> {
        if self.is_infinity() || self.y.is_zero() {
            return Ok(Self::infinity());
        }
        // λ = 3x² / 2y
        let denom = self
            .y
            .double()
            .inverse()
            .ok_or(ArithmeticError::ZeroInversion { context: "affine double" })?;
        let lambda = C::Base::from_u64(3) * self.x.square() * denom;
        let x3 = lambda.square() - self.x.double();
        let y3 = lambda * (self.x - x3) - self.y;
        Ok(Self::new_unchecked(x3, y3))
    }

    pub fn add(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if self.is_infinity() {
            return Ok(*other);
        }
        if other.is_infinity() {
            return Ok(*self);
        }
        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            }
            return Ok(Self::infinity());
        }
        let denom = (other.x - self.x)
            .inverse()
            .ok_or(ArithmeticError::ZeroInversion { context: "affine add" })?;
        let lambda = (other.y - self.y) * denom;
        let x3 = lambda.square() - self.x - other.x;
        let y3 = lambda * (self.x - x3) - self.y;
        Ok(Self::new_unchecked(x3, y3))
    }

    /// Double-and-add over the bits of `k`, most significant first.
    pub fn mul_bigint(&self, k: &BigInt<4>) -> Result<Self, ArithmeticError> {
        let mut acc = Self::infinity();
        for bit in k.to_bits_be() {
            acc = acc.double()?;
            if bit {
                acc = acc.add(self)?;
            }
        }
        Ok(acc)
    }

    pub fn mul(&self, k: &Fr) -> Result<Self, ArithmeticError> {
        self.mul_bigint(&k.into_bigint())
    }

    pub fn to_jacobian(&self) -> JacobianPoint<C> {
        JacobianPoint::from_affine(self)
    }
}

impl<C: CurveParams> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::infinity()
    }
}

impl<C: CurveParams> fmt::Debug for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinity() {
            return write!(f, "{}(infinity)", C::NAME);
        }
        f.debug_struct(C::NAME)
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}
