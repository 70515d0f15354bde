// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_bn254::Fr;
use ark_r1cs_std::{
    alloc::AllocVar, eq::EqGadget, fields::fp::FpVar, fields::FieldVar, uint8::UInt8,
};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use zkpath_types::{Digest, MerkleWitness};

use crate::merkle_gadget::{direction_bit, merkle_path_var, pack_limbs, DigestVar};
use crate::public_inputs;

/// "I know a leaf and a depth-`depth` path that hashes up to `root`."
///
/// Public inputs: the root as two 128-bit limbs `[hi, lo]`.
/// Private witness: leaf, siblings and direction values. Directions are
/// allocated as field elements and constrained to be boolean.
#[derive(Clone, Debug)]
pub struct MerklePathCircuit {
    pub depth: usize,
    pub witness: Option<MerkleWitness>,
    pub root: Option<Digest>,
}

impl MerklePathCircuit {
    /// Circuit with no assignment (for setup and constraint counting).
    pub fn empty(depth: usize) -> Self {
        Self {
            depth,
            witness: None,
            root: None,
        }
    }

    pub fn new(witness: MerkleWitness, root: Digest) -> Self {
        Self {
            depth: witness.depth(),
            witness: Some(witness),
            root: Some(root),
        }
    }
}

fn digest_witness(
    cs: ConstraintSystemRef<Fr>,
    value: Option<Digest>,
) -> Result<DigestVar, SynthesisError> {
    (0..zkpath_types::DIGEST_LEN)
        .map(|i| {
            UInt8::new_witness(cs.clone(), || {
                value.map(|d| d.0[i]).ok_or(SynthesisError::AssignmentMissing)
            })
        })
        .collect()
}

impl ConstraintSynthesizer<Fr> for MerklePathCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        // === Public inputs: root limbs [hi, lo] ===
        let limbs = self.root.as_ref().map(public_inputs);
        let root_hi = FpVar::new_input(cs.clone(), || {
            limbs.map(|l| l[0]).ok_or(SynthesisError::AssignmentMissing)
        })?;
        let root_lo = FpVar::new_input(cs.clone(), || {
            limbs.map(|l| l[1]).ok_or(SynthesisError::AssignmentMissing)
        })?;

        // === Private witness ===
        let witness = self.witness.as_ref();
        let leaf = digest_witness(cs.clone(), witness.map(|w| w.leaf))?;

        let mut path = Vec::with_capacity(self.depth);
        for i in 0..self.depth {
            let sibling = digest_witness(
                cs.clone(),
                witness.and_then(|w| w.siblings.get(i).copied()),
            )?;
            let dir = FpVar::new_witness(cs.clone(), || {
                witness
                    .and_then(|w| w.directions.get(i))
                    .map(|d| Fr::from(*d))
                    .ok_or(SynthesisError::AssignmentMissing)
            })?;
            path.push((sibling, direction_bit(&dir)?));
        }

        let (root, counter) = merkle_path_var(&leaf, &path)?;

        // every level was traversed
        counter.enforce_equal(&FpVar::constant(Fr::from(self.depth as u64 + 1)))?;

        let [hi, lo] = pack_limbs(&root)?;
        hi.enforce_equal(&root_hi)?;
        lo.enforce_equal(&root_lo)?;

        Ok(())
    }
}
