// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use zkpath_circuit::{CircuitError, PathProvingKey};

use crate::config::{crypto_rng, load_config};
use crate::output;

pub fn run(pk: Option<PathBuf>, witness_path: &Path, out: &Path) -> Result<()> {
    let pk_path = load_config()?.pk_or(pk)?;
    let bytes =
        fs::read(&pk_path).with_context(|| format!("cannot read {}", pk_path.display()))?;
    let pk = PathProvingKey::from_bytes(&bytes)
        .with_context(|| format!("invalid proving key {}", pk_path.display()))?;
    let witness = super::read_witness(witness_path)?;

    let mut rng = crypto_rng();
    let (proof, root) = output::with_spinner("generating proof...", || {
        zkpath_circuit::prove(&pk, witness, &mut rng)
    })
    .map_err(|e| match e {
        CircuitError::DepthMismatch { .. } => output::fail_with_hint(
            &e.to_string(),
            "run `zkpath setup --depth <N>` for the witness depth",
        ),
        other => anyhow::Error::new(other),
    })?;

    let proof = zkpath_circuit::export_proof(&proof);
    let inputs = zkpath_circuit::export_public_inputs(&root);
    fs::write(out, zkpath_verifier::json::proof_to_string(&proof, &inputs)?)
        .with_context(|| format!("cannot write proof to {}", out.display()))?;

    if output::is_json() {
        output::json_output(output::merged(
            serde_json::json!({
                "proof": out.display().to_string(),
                "inputs": inputs.iter().map(|x| x.to_hex()).collect::<Vec<_>>(),
            }),
            output::root_fields(&root),
        ));
    } else {
        output::success(&format!("proof written to {}", out.display()));
        output::root_labels(&root);
    }
    Ok(())
}
