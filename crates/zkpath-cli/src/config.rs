// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! `~/.zkpath/config.json`: default key paths and tree depth.
//!
//! Command-line flags always win over values stored here.

use anyhow::{Context, Result};
use ark_std::rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use zkpath_types::DEFAULT_TREE_DEPTH;

use crate::output;

/// Seeded from OS entropy; Groth16 blinding scalars come from this stream.
pub fn crypto_rng() -> StdRng {
    StdRng::from_entropy()
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vk_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pk_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

impl ConfigData {
    pub fn depth_or(&self, flag: Option<usize>) -> usize {
        flag.or(self.depth).unwrap_or(DEFAULT_TREE_DEPTH)
    }

    pub fn vk_or(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        flag.or_else(|| self.vk_path.clone()).ok_or_else(|| {
            output::fail_with_hint(
                "no verification key given",
                "pass --vk or run `zkpath config set vk_path <FILE>`",
            )
        })
    }

    pub fn pk_or(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        flag.or_else(|| self.pk_path.clone()).ok_or_else(|| {
            output::fail_with_hint(
                "no proving key given",
                "pass --pk or run `zkpath config set pk_path <FILE>`",
            )
        })
    }
}

pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".zkpath").join("config.json"))
}

/// Missing file means empty config.
pub fn load_from(path: &Path) -> Result<ConfigData> {
    if !path.exists() {
        return Ok(ConfigData::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read config at {}", path.display()))?;
    serde_json::from_str(&data).context("invalid config JSON")
}

pub fn save_to(path: &Path, config: &ConfigData) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).with_context(|| format!("cannot write config at {}", path.display()))?;
    Ok(())
}

pub fn load_config() -> Result<ConfigData> {
    load_from(&config_path()?)
}

pub fn save_config(config: &ConfigData) -> Result<()> {
    save_to(&config_path()?, config)
}
