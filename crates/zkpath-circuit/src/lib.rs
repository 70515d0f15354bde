// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zkpath-circuit: the Merkle path inclusion circuit and its Groth16 plumbing.
//!
//! Setup and proving are delegated to `ark-groth16`. Keys and proofs leave
//! this crate through [`export`] as `zkpath-verifier` types, so the native
//! verifier never depends on arkworks' Groth16 types.

pub mod export;
pub mod merkle_gadget;
pub mod path;

use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, PreparedVerifyingKey, ProvingKey, VerifyingKey};
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystem, OptimizationGoal, SynthesisError, SynthesisMode,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};
use zkpath_hash::PathError;
use zkpath_types::{Digest, MerkleWitness};

pub use export::{export_proof, export_public_inputs, export_verifying_key};
pub use path::MerklePathCircuit;

#[derive(Debug, thiserror::Error)]
pub enum CircuitError {
    #[error("witness has depth {witness}, proving key was generated for depth {key}")]
    DepthMismatch { witness: usize, key: usize },

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("constraint synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("key serialization failed: {0}")]
    Serialization(#[from] SerializationError),
}

/// Root limbs `[hi, lo]` as scalar field elements, in public-input order.
pub fn public_inputs(root: &Digest) -> [Fr; 2] {
    let [hi, lo] = root.to_limbs();
    [Fr::from(hi), Fr::from(lo)]
}

/// Groth16 proving key tagged with the tree depth it was generated for.
#[derive(Clone, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct PathProvingKey {
    pub depth: u64,
    pub pk: ProvingKey<Bn254>,
}

impl PathProvingKey {
    pub fn to_bytes(&self) -> Result<Vec<u8>, CircuitError> {
        let mut bytes = Vec::new();
        self.serialize_uncompressed(&mut bytes)?;
        Ok(bytes)
    }

    /// Proving keys are local, trusted files; point validation is skipped.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CircuitError> {
        Ok(Self::deserialize_uncompressed_unchecked(bytes)?)
    }

    pub fn vk(&self) -> &VerifyingKey<Bn254> {
        &self.pk.vk
    }
}

/// Run Groth16 trusted setup for a depth-`depth` path circuit.
pub fn setup<R: RngCore + CryptoRng>(
    depth: usize,
    rng: &mut R,
) -> Result<(PathProvingKey, VerifyingKey<Bn254>), CircuitError> {
    let circuit = MerklePathCircuit::empty(depth);
    let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(circuit, rng)?;
    tracing::debug!(depth, ic_len = vk.gamma_abc_g1.len(), "groth16 setup complete");
    Ok((
        PathProvingKey {
            depth: depth as u64,
            pk,
        },
        vk,
    ))
}

/// Generate a Groth16 proof of inclusion. The root is computed natively from
/// the witness and returned alongside the proof.
pub fn prove<R: RngCore + CryptoRng>(
    pk: &PathProvingKey,
    witness: MerkleWitness,
    rng: &mut R,
) -> Result<(ark_groth16::Proof<Bn254>, Digest), CircuitError> {
    if witness.depth() != pk.depth as usize {
        return Err(CircuitError::DepthMismatch {
            witness: witness.depth(),
            key: pk.depth as usize,
        });
    }
    let eval = zkpath_hash::evaluate_path(&witness)?;

    let circuit = MerklePathCircuit::new(witness, eval.root);
    let proof = Groth16::<Bn254>::prove(&pk.pk, circuit, rng)?;
    tracing::debug!(root = %eval.root, "groth16 proof generated");
    Ok((proof, eval.root))
}

/// Verify a proof off-chain with the arkworks verifier.
pub fn verify_offchain(
    vk: &VerifyingKey<Bn254>,
    proof: &ark_groth16::Proof<Bn254>,
    root: &Digest,
) -> bool {
    let pvk = PreparedVerifyingKey::from(vk.clone());
    Groth16::<Bn254>::verify_with_processed_vk(&pvk, &public_inputs(root), proof).unwrap_or(false)
}

/// Count constraints in the depth-`depth` path circuit.
pub fn constraint_count(depth: usize) -> Result<usize, CircuitError> {
    let cs = ConstraintSystem::<Fr>::new_ref();
    cs.set_optimization_goal(OptimizationGoal::Constraints);
    cs.set_mode(SynthesisMode::Setup);
    MerklePathCircuit::empty(depth).generate_constraints(cs.clone())?;
    Ok(cs.num_constraints())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_inputs_are_limbs() {
        let mut bytes = [0u8; 32];
        bytes[15] = 7;
        bytes[31] = 9;
        assert_eq!(public_inputs(&Digest(bytes)), [Fr::from(7u64), Fr::from(9u64)]);
    }

    #[test]
    fn test_constraint_count_grows_with_depth() {
        let one = constraint_count(1).unwrap();
        let two = constraint_count(2).unwrap();
        println!("Merkle path constraints: depth 1 = {one}, depth 2 = {two}");
        assert!(one > 10_000, "too few for two SHA-256 blocks: {one}");
        assert!(two > one);
        // per-level cost is constant
        let three = constraint_count(3).unwrap();
        assert_eq!(three - two, two - one);
    }
}
