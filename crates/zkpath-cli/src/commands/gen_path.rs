// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::{crypto_rng, load_config};
use crate::output;

/// Random leaf, siblings and directions, written as a witness file.
pub fn run(depth: Option<usize>, out: Option<PathBuf>) -> Result<()> {
    let depth = load_config()?.depth_or(depth);
    let mut rng = crypto_rng();
    let (witness, root) = zkpath_hash::random_path(depth, &mut rng);
    let json = serde_json::to_string_pretty(&witness)?;

    match &out {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("cannot write witness to {}", path.display()))?;
        }
        None if !output::is_json() => println!("{json}"),
        None => {}
    }

    if output::is_json() {
        output::json_output(output::merged(
            serde_json::json!({ "witness": witness }),
            output::root_fields(&root),
        ));
    } else {
        if let Some(path) = &out {
            output::success(&format!("witness written to {}", path.display()));
        }
        output::label("depth", &depth.to_string());
        output::root_labels(&root);
    }
    Ok(())
}
