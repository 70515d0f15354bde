// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use std::path::PathBuf;

use crate::config::load_config;
use crate::output;

pub fn run(vk: Option<PathBuf>) -> Result<()> {
    let vk_path = load_config()?.vk_or(vk)?;
    let vk = super::read_vk(&vk_path)?;
    let key_id = hex::encode(vk.key_id());

    if output::is_json() {
        output::json_output(serde_json::json!({
            "path": vk_path.display().to_string(),
            "key_id": key_id,
            "public_inputs": vk.num_public_inputs(),
            "ic_len": vk.ic.len(),
        }));
    } else {
        output::label("path", &vk_path.display().to_string());
        output::label("key_id", &key_id);
        output::label("public_inputs", &vk.num_public_inputs().to_string());
    }
    Ok(())
}
