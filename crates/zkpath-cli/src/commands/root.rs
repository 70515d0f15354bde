// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use std::path::Path;

use crate::output;

pub fn run(witness_path: &Path) -> Result<()> {
    let witness = super::read_witness(witness_path)?;
    let eval = zkpath_hash::evaluate_path(&witness).map_err(|e| {
        output::fail_with_hint(
            &e.to_string(),
            "directions must be 0 (right child) or 1 (left child), one per sibling",
        )
    })?;

    if output::is_json() {
        output::json_output(output::merged(
            serde_json::json!({ "depth": witness.depth() }),
            output::root_fields(&eval.root),
        ));
    } else {
        output::label("depth", &witness.depth().to_string());
        output::root_labels(&eval.root);
    }
    Ok(())
}
