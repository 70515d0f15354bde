// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! JSON key and proof files in the ZoKrates `g16` layout.
//!
//! Coordinates are `0x`-prefixed 64-digit hex words. G2 points are written
//! real component first, `[[x.c0, x.c1], [y.c0, y.c1]]`, unlike the binary
//! encoding which puts `c1` first. Parsing goes through the binary decoder so
//! both formats share one validation path.

use serde::{Deserialize, Serialize};
use zkpath_curve::{G1Point, G2Point, WORD_LEN};

use crate::error::{VerifierError, VerifierResult};
use crate::types::{FieldInteger, Proof, VerifyingKey};

pub const SCHEME: &str = "g16";
pub const CURVE: &str = "bn128";

pub type G1Json = [FieldInteger; 2];
pub type G2Json = [[FieldInteger; 2]; 2];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationKeyJson {
    pub scheme: String,
    pub curve: String,
    pub alpha: G1Json,
    pub beta: G2Json,
    pub gamma: G2Json,
    pub delta: G2Json,
    pub gamma_abc: Vec<G1Json>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofPoints {
    pub a: G1Json,
    pub b: G2Json,
    pub c: G1Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofJson {
    pub scheme: String,
    pub curve: String,
    pub proof: ProofPoints,
    pub inputs: Vec<FieldInteger>,
}

fn word(bytes: &[u8]) -> FieldInteger {
    let mut out = [0u8; WORD_LEN];
    out.copy_from_slice(bytes);
    FieldInteger(out)
}

fn g1_to_json(p: &G1Point) -> G1Json {
    let bytes = p.to_be_bytes();
    [word(&bytes[..WORD_LEN]), word(&bytes[WORD_LEN..])]
}

fn g2_to_json(p: &G2Point) -> G2Json {
    // wire words: x.c1, x.c0, y.c1, y.c0
    let bytes = p.to_be_bytes();
    let w: Vec<FieldInteger> = bytes.chunks_exact(WORD_LEN).map(word).collect();
    [[w[1], w[0]], [w[3], w[2]]]
}

fn g1_from_json(field: &str, p: &G1Json) -> VerifierResult<G1Point> {
    let bytes: Vec<u8> = p.iter().flat_map(|w| w.0).collect();
    G1Point::from_be_bytes(&bytes).map_err(|e| VerifierError::point(field, e))
}

fn g2_from_json(field: &str, p: &G2Json) -> VerifierResult<G2Point> {
    let [[x_c0, x_c1], [y_c0, y_c1]] = p;
    let bytes: Vec<u8> = [x_c1, x_c0, y_c1, y_c0].iter().flat_map(|w| w.0).collect();
    G2Point::from_be_bytes(&bytes).map_err(|e| VerifierError::point(field, e))
}

fn check_header(scheme: &str, curve: &str) -> VerifierResult<()> {
    if scheme != SCHEME || curve != CURVE {
        return Err(VerifierError::Encoding(format!(
            "unsupported scheme/curve `{scheme}`/`{curve}`, expected `{SCHEME}`/`{CURVE}`"
        )));
    }
    Ok(())
}

impl From<&VerifyingKey> for VerificationKeyJson {
    fn from(vk: &VerifyingKey) -> Self {
        Self {
            scheme: SCHEME.into(),
            curve: CURVE.into(),
            alpha: g1_to_json(&vk.alpha),
            beta: g2_to_json(&vk.beta),
            gamma: g2_to_json(&vk.gamma),
            delta: g2_to_json(&vk.delta),
            gamma_abc: vk.ic.iter().map(g1_to_json).collect(),
        }
    }
}

impl TryFrom<&VerificationKeyJson> for VerifyingKey {
    type Error = VerifierError;

    fn try_from(j: &VerificationKeyJson) -> VerifierResult<Self> {
        check_header(&j.scheme, &j.curve)?;
        if j.gamma_abc.is_empty() {
            return Err(VerifierError::Encoding("empty gamma_abc".into()));
        }
        let ic = j
            .gamma_abc
            .iter()
            .enumerate()
            .map(|(i, p)| g1_from_json(&format!("gamma_abc[{i}]"), p))
            .collect::<VerifierResult<Vec<_>>>()?;
        Ok(Self {
            alpha: g1_from_json("alpha", &j.alpha)?,
            beta: g2_from_json("beta", &j.beta)?,
            gamma: g2_from_json("gamma", &j.gamma)?,
            delta: g2_from_json("delta", &j.delta)?,
            ic,
        })
    }
}

impl ProofJson {
    pub fn new(proof: &Proof, inputs: Vec<FieldInteger>) -> Self {
        Self {
            scheme: SCHEME.into(),
            curve: CURVE.into(),
            proof: ProofPoints {
                a: g1_to_json(&proof.a),
                b: g2_to_json(&proof.b),
                c: g1_to_json(&proof.c),
            },
            inputs,
        }
    }

    /// Validated proof points. Inputs are range-checked by the verifier.
    pub fn to_proof(&self) -> VerifierResult<Proof> {
        check_header(&self.scheme, &self.curve)?;
        Ok(Proof {
            a: g1_from_json("a", &self.proof.a)?,
            b: g2_from_json("b", &self.proof.b)?,
            c: g1_from_json("c", &self.proof.c)?,
        })
    }
}

pub fn parse_verifying_key(s: &str) -> VerifierResult<VerifyingKey> {
    let j: VerificationKeyJson = serde_json::from_str(s)?;
    VerifyingKey::try_from(&j)
}

pub fn verifying_key_to_string(vk: &VerifyingKey) -> VerifierResult<String> {
    Ok(serde_json::to_string_pretty(&VerificationKeyJson::from(vk))?)
}

pub fn parse_proof(s: &str) -> VerifierResult<(Proof, Vec<FieldInteger>)> {
    let j: ProofJson = serde_json::from_str(s)?;
    Ok((j.to_proof()?, j.inputs))
}

pub fn proof_to_string(proof: &Proof, inputs: &[FieldInteger]) -> VerifierResult<String> {
    Ok(serde_json::to_string_pretty(&ProofJson::new(proof, inputs.to_vec()))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Fr, G1Affine, G2Affine};
    use ark_ec::AffineRepr;

    fn sample_vk() -> VerifyingKey {
        let g1 = G1Point::from(G1Affine::generator());
        let g2 = G2Point::from(G2Affine::generator());
        VerifyingKey {
            alpha: g1,
            beta: g2.mul(&Fr::from(9u64)).unwrap(),
            gamma: g2,
            delta: g2.neg(),
            ic: vec![g1.neg(), g1.mul(&Fr::from(4u64)).unwrap()],
        }
    }

    #[test]
    fn g2_generator_json_is_real_first() {
        let vk = sample_vk();
        let j = VerificationKeyJson::from(&vk);
        assert_eq!(
            j.gamma[0][0].to_hex(),
            "0x1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed"
        );
        assert_eq!(
            j.gamma[0][1].to_hex(),
            "0x198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2"
        );
        assert_eq!(
            j.gamma[1][0].to_hex(),
            "0x12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa"
        );
    }

    #[test]
    fn vk_json_round_trip() {
        let vk = sample_vk();
        let s = verifying_key_to_string(&vk).unwrap();
        assert!(s.contains("\"gamma_abc\""));
        assert_eq!(parse_verifying_key(&s).unwrap(), vk);
    }

    #[test]
    fn proof_json_round_trip() {
        let vk = sample_vk();
        let proof = Proof {
            a: vk.ic[1],
            b: vk.beta,
            c: vk.alpha,
        };
        let inputs = vec![FieldInteger::from_u64(1), FieldInteger::from_u64(2)];
        let s = proof_to_string(&proof, &inputs).unwrap();
        let (p, i) = parse_proof(&s).unwrap();
        assert_eq!(p, proof);
        assert_eq!(i, inputs);
    }

    #[test]
    fn wrong_scheme_rejected() {
        let mut j = VerificationKeyJson::from(&sample_vk());
        j.scheme = "gm17".into();
        assert!(matches!(
            VerifyingKey::try_from(&j),
            Err(VerifierError::Encoding(_))
        ));
    }

    #[test]
    fn swapped_g2_components_rejected() {
        let mut j = VerificationKeyJson::from(&sample_vk());
        j.gamma[0].swap(0, 1);
        j.gamma[1].swap(0, 1);
        assert!(matches!(
            VerifyingKey::try_from(&j),
            Err(VerifierError::MalformedPoint { ref field, .. }) if field == "gamma"
        ));
    }

    #[test]
    fn malformed_json_is_json_error() {
        assert!(matches!(
            parse_verifying_key("{ not json"),
            Err(VerifierError::Json(_))
        ));
    }
}
