// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arkworks → zkpath-verifier conversion.
//!
//! The exported key is the immutable configuration a [`zkpath_verifier::Verifier`]
//! is built from; exported proofs and inputs are what the verifier's wire and
//! JSON codecs carry.

use ark_bn254::Bn254;
use zkpath_curve::{G1Point, G2Point};
use zkpath_types::Digest;
use zkpath_verifier::{FieldInteger, Proof, VerifyingKey};

use crate::public_inputs;

pub fn export_verifying_key(vk: &ark_groth16::VerifyingKey<Bn254>) -> VerifyingKey {
    VerifyingKey {
        alpha: G1Point::from(vk.alpha_g1),
        beta: G2Point::from(vk.beta_g2),
        gamma: G2Point::from(vk.gamma_g2),
        delta: G2Point::from(vk.delta_g2),
        ic: vk.gamma_abc_g1.iter().copied().map(G1Point::from).collect(),
    }
}

pub fn export_proof(proof: &ark_groth16::Proof<Bn254>) -> Proof {
    Proof {
        a: G1Point::from(proof.a),
        b: G2Point::from(proof.b),
        c: G1Point::from(proof.c),
    }
}

/// Public inputs for `root` as wire words.
pub fn export_public_inputs(root: &Digest) -> Vec<FieldInteger> {
    public_inputs(root).iter().map(FieldInteger::from_scalar).collect()
}
