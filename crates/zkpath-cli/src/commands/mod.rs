// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod config;
pub mod gen_path;
pub mod inspect;
pub mod prove;
pub mod root;
pub mod setup;
pub mod verify;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use zkpath_types::MerkleWitness;
use zkpath_verifier::VerifyingKey;

pub(crate) fn read_vk(path: &Path) -> Result<VerifyingKey> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read verification key at {}", path.display()))?;
    zkpath_verifier::json::parse_verifying_key(&data)
        .with_context(|| format!("invalid verification key {}", path.display()))
}

pub(crate) fn read_witness(path: &Path) -> Result<MerkleWitness> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read witness at {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("invalid witness {}", path.display()))
}
