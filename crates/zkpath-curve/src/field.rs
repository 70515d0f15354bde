// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Base field `Fp` of BN254 and its quadratic extension `Fp2 = Fp[u]/(u² + 1)`.
//!
//! `Fp` delegates limb arithmetic to the arkworks Montgomery backend; values
//! are always canonical in `[0, p)`. `Fp2` implements the extension rule
//! directly:
//!
//! - `(a0 + a1·u)(b0 + b1·u) = (a0·b0 - a1·b1) + (a0·b1 + a1·b0)·u`
//! - `inv(a0 + a1·u) = (a0 - a1·u) / (a0² + a1²)`

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use ark_bn254::{Fq, Fq2};
use ark_ff::{AdditiveGroup, BigInt, BigInteger, Field, PrimeField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// Only reachable with a corrupted point or key; never retried.
    #[error("inversion of zero in {context}")]
    ZeroInversion { context: &'static str },
}

/// Field capability shared by `Fp` and `Fp2`, so point arithmetic is written
/// once for both groups.
pub trait FieldOps:
    Copy
    + fmt::Debug
    + Eq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_u64(v: u64) -> Self;
    fn is_zero(&self) -> bool;
    /// `None` iff `self` is zero.
    fn inverse(&self) -> Option<Self>;

    fn square(&self) -> Self {
        *self * *self
    }

    fn double(&self) -> Self {
        *self + *self
    }
}

/// Big-endian 32-byte word to a 4-limb integer. No range check.
pub fn bigint_from_be_bytes(bytes: &[u8; 32]) -> BigInt<4> {
    let mut limbs = [0u64; 4];
    for (i, chunk) in bytes.chunks_exact(8).enumerate() {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        limbs[3 - i] = u64::from_be_bytes(buf);
    }
    BigInt::new(limbs)
}

fn bigint_to_be_bytes(value: &BigInt<4>) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&value.to_bytes_be());
    out
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fp(pub(crate) Fq);

impl Fp {
    /// Canonical decoding: `None` if the integer is `>= p`.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        Self::from_bigint(bigint_from_be_bytes(bytes))
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        bigint_to_be_bytes(&self.0.into_bigint())
    }

    pub fn from_bigint(value: BigInt<4>) -> Option<Self> {
        Fq::from_bigint(value).map(Self)
    }

    pub fn into_bigint(self) -> BigInt<4> {
        self.0.into_bigint()
    }

    pub fn modulus() -> BigInt<4> {
        Fq::MODULUS
    }
}

impl FieldOps for Fp {
    fn zero() -> Self {
        Self(Fq::ZERO)
    }

    fn one() -> Self {
        Self(Fq::ONE)
    }

    fn from_u64(v: u64) -> Self {
        Self(Fq::from(v))
    }

    fn is_zero(&self) -> bool {
        self.0 == Fq::ZERO
    }

    fn inverse(&self) -> Option<Self> {
        self.0.inverse().map(Self)
    }

    fn square(&self) -> Self {
        Self(self.0.square())
    }
}

impl Add for Fp {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Fp {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Fp {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Fp {
    type Output = Self;
    /// `p - x` for non-zero `x`.
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<Fq> for Fp {
    fn from(value: Fq) -> Self {
        Self(value)
    }
}

impl From<Fp> for Fq {
    fn from(value: Fp) -> Self {
        value.0
    }
}

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp(0x")?;
        for b in self.to_be_bytes() {
            write!(f, "{b:02x}")?;
        }
        write!(f, ")")
    }
}

/// `c0 + c1·u` with `u² = -1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Fp2 {
    pub c0: Fp,
    pub c1: Fp,
}

impl Fp2 {
    pub const fn new(c0: Fp, c1: Fp) -> Self {
        Self { c0, c1 }
    }

    /// Complex conjugate `c0 - c1·u`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// `c0² + c1²`, the norm down to `Fp`.
    pub fn norm(&self) -> Fp {
        self.c0.square() + self.c1.square()
    }
}

impl FieldOps for Fp2 {
    fn zero() -> Self {
        Self::new(Fp::zero(), Fp::zero())
    }

    fn one() -> Self {
        Self::new(Fp::one(), Fp::zero())
    }

    fn from_u64(v: u64) -> Self {
        Self::new(Fp::from_u64(v), Fp::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn inverse(&self) -> Option<Self> {
        let inv_norm = self.norm().inverse()?;
        Some(Self::new(self.c0 * inv_norm, -(self.c1 * inv_norm)))
    }
}

impl Add for Fp2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl Sub for Fp2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl Mul for Fp2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.c0 * rhs.c0 - self.c1 * rhs.c1,
            self.c0 * rhs.c1 + self.c1 * rhs.c0,
        )
    }
}

impl Neg for Fp2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl From<Fq2> for Fp2 {
    fn from(value: Fq2) -> Self {
        Self::new(value.c0.into(), value.c1.into())
    }
}

impl From<Fp2> for Fq2 {
    fn from(value: Fp2) -> Self {
        Fq2::new(value.c0.into(), value.c1.into())
    }
}
