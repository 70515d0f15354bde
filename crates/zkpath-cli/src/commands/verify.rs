// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use zkpath_verifier::{Verifier, VerifierError};

use crate::config::load_config;
use crate::output;

/// `Ok(false)` for a well-formed proof that does not verify.
pub fn run(vk: Option<PathBuf>, proof_path: &Path) -> Result<bool> {
    let vk_path = load_config()?.vk_or(vk)?;
    let verifier = Verifier::new(super::read_vk(&vk_path)?);

    let data = fs::read_to_string(proof_path)
        .with_context(|| format!("cannot read proof at {}", proof_path.display()))?;
    let (proof, inputs) = zkpath_verifier::json::parse_proof(&data)
        .with_context(|| format!("invalid proof {}", proof_path.display()))?;

    let valid = verifier.verify_proof(&proof, &inputs).map_err(with_hint)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "valid": valid,
            "key_id": hex::encode(verifier.vk().key_id()),
            "inputs": inputs.iter().map(|x| x.to_hex()).collect::<Vec<_>>(),
        }));
    } else {
        output::verdict(valid);
    }
    Ok(valid)
}

fn hint_for(e: &VerifierError) -> Option<&'static str> {
    match e {
        VerifierError::InputLengthMismatch { .. } => {
            Some("the proof and key must come from the same circuit depth")
        }
        VerifierError::InputOutOfRange { .. } => {
            Some("public inputs must be below the BN254 scalar field modulus")
        }
        VerifierError::MalformedPoint { .. } => {
            Some("points must lie on BN254; G2 words are [[x.c0, x.c1], [y.c0, y.c1]]")
        }
        _ => None,
    }
}

fn with_hint(e: VerifierError) -> anyhow::Error {
    match hint_for(&e) {
        Some(hint) => output::fail_with_hint(&e.to_string(), hint),
        None => anyhow::Error::new(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkpath_curve::PointError;

    #[test]
    fn depth_hint_only_for_length_mismatch() {
        let depth = "same circuit depth";
        let length = VerifierError::InputLengthMismatch { inputs: 3, ic_len: 3 };
        assert!(hint_for(&length).unwrap().contains(depth));

        let range = VerifierError::InputOutOfRange { index: 1 };
        assert!(!hint_for(&range).unwrap().contains(depth));

        let point = VerifierError::MalformedPoint {
            field: "b".into(),
            source: PointError::NotInSubgroup { curve: "G2" },
        };
        assert!(!hint_for(&point).unwrap().contains(depth));

        let encoding = VerifierError::Encoding("truncated".into());
        assert!(hint_for(&encoding).is_none());
        assert!(!format!("{:#}", with_hint(encoding)).contains(depth));
    }
}
