// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::{crypto_rng, load_config};
use crate::output;

pub const PROVING_KEY_FILE: &str = "proving.key";
pub const VERIFICATION_KEY_FILE: &str = "verification.key";

pub fn run(depth: Option<usize>, out: &Path) -> Result<()> {
    let depth = load_config()?.depth_or(depth);
    fs::create_dir_all(out).with_context(|| format!("cannot create {}", out.display()))?;

    let mut rng = crypto_rng();
    let (pk, vk) = output::with_spinner(
        &format!("running Groth16 setup for depth {depth}..."),
        || zkpath_circuit::setup(depth, &mut rng),
    )?;

    let vk = zkpath_circuit::export_verifying_key(&vk);
    let pk_path = out.join(PROVING_KEY_FILE);
    let vk_path = out.join(VERIFICATION_KEY_FILE);
    fs::write(&pk_path, pk.to_bytes()?)
        .with_context(|| format!("cannot write {}", pk_path.display()))?;
    fs::write(&vk_path, zkpath_verifier::json::verifying_key_to_string(&vk)?)
        .with_context(|| format!("cannot write {}", vk_path.display()))?;

    let key_id = hex::encode(vk.key_id());
    if output::is_json() {
        output::json_output(serde_json::json!({
            "depth": depth,
            "proving_key": pk_path.display().to_string(),
            "verification_key": vk_path.display().to_string(),
            "key_id": key_id,
        }));
    } else {
        output::success(&format!("keys written to {}", out.display()));
        output::label("key_id", &key_id);
        output::warn(&format!(
            "run `zkpath config set vk_path {}` to make this the default key",
            vk_path.display()
        ));
    }
    Ok(())
}
