// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! In-circuit selector, SHA-256 compression and Merkle path walk.
//!
//! A digest is 32 `UInt8` variables in SHA-256 output order. A direction is
//! `1` when the running node is the left child.

use ark_bn254::Fr;
use ark_crypto_primitives::crh::sha256::constraints::Sha256Gadget;
use ark_ff::{AdditiveGroup, Field};
use ark_r1cs_std::{
    boolean::Boolean,
    convert::ToBitsGadget,
    fields::{fp::FpVar, FieldVar},
    uint8::UInt8,
};
use ark_relations::r1cs::SynthesisError;
use zkpath_types::DIGEST_LEN;

pub type DigestVar = Vec<UInt8<Fr>>;

/// Enforce `dir·(1 - dir) = 0` and return `dir` as a `Boolean`.
pub fn direction_bit(dir: &FpVar<Fr>) -> Result<Boolean<Fr>, SynthesisError> {
    let one_minus_dir = FpVar::one() - dir;
    dir.mul_equals(&one_minus_dir, &FpVar::zero())?;
    dir.is_one()
}

/// `l` if `bit` is set, `r` otherwise, byte by byte.
pub fn select_digest(
    bit: &Boolean<Fr>,
    l: &[UInt8<Fr>],
    r: &[UInt8<Fr>],
) -> Result<DigestVar, SynthesisError> {
    l.iter().zip(r).map(|(a, b)| bit.select(a, b)).collect()
}

/// `SHA256(lhs ‖ rhs)`.
pub fn compress_var(lhs: &[UInt8<Fr>], rhs: &[UInt8<Fr>]) -> Result<DigestVar, SynthesisError> {
    let mut msg = Vec::with_capacity(2 * DIGEST_LEN);
    msg.extend_from_slice(lhs);
    msg.extend_from_slice(rhs);
    Ok(Sha256Gadget::<Fr>::digest(&msg)?.0)
}

/// Walk `leaf` up `path`, returning the computed root and the step counter
/// (starting at 1, incremented once per level).
pub fn merkle_path_var(
    leaf: &[UInt8<Fr>],
    path: &[(DigestVar, Boolean<Fr>)],
) -> Result<(DigestVar, FpVar<Fr>), SynthesisError> {
    let mut current = leaf.to_vec();
    let mut counter = FpVar::one();

    for (sibling, dir) in path {
        let lhs = select_digest(dir, &current, sibling)?;
        let rhs = select_digest(&!dir, &current, sibling)?;
        current = compress_var(&lhs, &rhs)?;
        counter += FpVar::one();
    }

    Ok((current, counter))
}

/// `[hi, lo]`: the big-endian integers of the two 16-byte halves.
pub fn pack_limbs(digest: &[UInt8<Fr>]) -> Result<[FpVar<Fr>; 2], SynthesisError> {
    let (hi, lo) = digest.split_at(DIGEST_LEN / 2);
    Ok([be_bytes_to_fp(hi)?, be_bytes_to_fp(lo)?])
}

fn be_bytes_to_fp(bytes: &[UInt8<Fr>]) -> Result<FpVar<Fr>, SynthesisError> {
    let mut acc = FpVar::zero();
    let mut coeff = Fr::ONE;
    for byte in bytes.iter().rev() {
        for bit in byte.to_bits_le()? {
            acc += FpVar::from(bit) * coeff;
            coeff.double_in_place();
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, R1CSVar};
    use ark_relations::r1cs::ConstraintSystem;
    use zkpath_types::Digest;

    fn alloc_digest(cs: ark_relations::r1cs::ConstraintSystemRef<Fr>, d: &Digest) -> DigestVar {
        d.0.iter()
            .map(|b| UInt8::new_witness(cs.clone(), || Ok(*b)).unwrap())
            .collect()
    }

    fn value(v: &[UInt8<Fr>]) -> Digest {
        let mut out = [0u8; 32];
        for (o, b) in out.iter_mut().zip(v) {
            *o = b.value().unwrap();
        }
        Digest(out)
    }

    #[test]
    fn compress_matches_native() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        let l = Digest([0x11; 32]);
        let r = Digest([0x22; 32]);
        let out =
            compress_var(&alloc_digest(cs.clone(), &l), &alloc_digest(cs.clone(), &r)).unwrap();
        assert_eq!(value(&out), zkpath_hash::compress(&l, &r));
        assert!(cs.is_satisfied().unwrap());
    }

    #[test]
    fn direction_must_be_boolean() {
        for (v, ok) in [(0u64, true), (1, true), (2, false)] {
            let cs = ConstraintSystem::<Fr>::new_ref();
            let dir = FpVar::new_witness(cs.clone(), || Ok(Fr::from(v))).unwrap();
            let bit = direction_bit(&dir).unwrap();
            assert_eq!(cs.is_satisfied().unwrap(), ok, "dir = {v}");
            if ok {
                assert_eq!(bit.value().unwrap(), v == 1);
            }
        }
    }

    #[test]
    fn select_follows_bit() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        let l = Digest([0xaa; 32]);
        let r = Digest([0x55; 32]);
        let (lv, rv) = (alloc_digest(cs.clone(), &l), alloc_digest(cs.clone(), &r));
        let t = Boolean::new_witness(cs.clone(), || Ok(true)).unwrap();
        assert_eq!(value(&select_digest(&t, &lv, &rv).unwrap()), l);
        assert_eq!(value(&select_digest(&!&t, &lv, &rv).unwrap()), r);
    }

    #[test]
    fn limbs_match_native_packing() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(1);
        }
        let d = Digest(bytes);
        let [hi, lo] = pack_limbs(&alloc_digest(cs.clone(), &d)).unwrap();
        let [nhi, nlo] = d.to_limbs();
        hi.enforce_equal(&FpVar::constant(Fr::from(nhi))).unwrap();
        lo.enforce_equal(&FpVar::constant(Fr::from(nlo))).unwrap();
        assert!(cs.is_satisfied().unwrap());
    }
}
