// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;

use crate::config::{load_config, save_config};
use crate::output;

const ALLOWED_KEYS: &[&str] = &["vk_path", "pk_path", "depth"];

pub fn set(key: &str, value: &str) -> Result<()> {
    let mut config = load_config()?;
    match key {
        "vk_path" => config.vk_path = Some(value.into()),
        "pk_path" => config.pk_path = Some(value.into()),
        "depth" => {
            let depth = value.parse::<usize>().map_err(|_| {
                output::fail_with_hint(
                    &format!("invalid depth: {value}"),
                    "depth is a positive integer",
                )
            })?;
            config.depth = Some(depth);
        }
        _ => {
            return Err(output::fail_with_hint(
                &format!("unknown config key: {key}"),
                &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
            ))
        }
    }
    save_config(&config)?;

    if output::is_json() {
        output::json_output(serde_json::json!({ "key": key, "value": value }));
    } else {
        output::success(&format!("{key} updated"));
    }
    Ok(())
}

pub fn show() -> Result<()> {
    let config = load_config()?;
    let show_path = |p: &Option<std::path::PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(unset)".into())
    };

    if output::is_json() {
        output::json_output(serde_json::json!({
            "vk_path": config.vk_path,
            "pk_path": config.pk_path,
            "depth": config.depth_or(None),
        }));
    } else {
        output::label("vk_path", &show_path(&config.vk_path));
        output::label("pk_path", &show_path(&config.pk_path));
        output::label("depth", &config.depth_or(None).to_string());
        output::info("flags override these values");
    }
    Ok(())
}
