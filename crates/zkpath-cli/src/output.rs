// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Terminal and `--json` rendering for zkpath commands.
//!
//! Human-readable text goes to stderr so that stdout carries only witness
//! files and JSON documents.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{json, Value};
use zkpath_types::Digest;

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

pub fn success(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg.green());
    }
}

pub fn warn(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg.yellow());
    }
}

/// Errors are printed in both modes; JSON consumers read stdout only.
pub fn error_msg(msg: &str) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}

pub fn info(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg);
    }
}

pub fn label(key: &str, val: &str) {
    if !is_json() {
        eprintln!("{} {}", format!("{}:", key).bold(), val);
    }
}

/// Root as hex plus its two public-input limbs. Limbs are decimal strings
/// since they exceed the integer range of most JSON readers.
pub fn root_fields(root: &Digest) -> Value {
    let [hi, lo] = root.to_limbs();
    json!({
        "root": root.to_hex(),
        "limbs": [hi.to_string(), lo.to_string()],
    })
}

pub fn root_labels(root: &Digest) {
    let [hi, lo] = root.to_limbs();
    label("root", &root.to_hex());
    label("root_hi", &hi.to_string());
    label("root_lo", &lo.to_string());
}

pub fn verdict(valid: bool) {
    if valid {
        label("proof", &"valid".green().bold().to_string());
    } else {
        label("proof", &"INVALID".red().bold().to_string());
    }
}

/// Merge `extra` into `base`; both must be JSON objects.
pub fn merged(mut base: Value, extra: Value) -> Value {
    if let (Some(b), Value::Object(e)) = (base.as_object_mut(), extra) {
        b.extend(e);
    }
    base
}

pub fn json_output(value: Value) {
    match serde_json::to_string_pretty(&value) {
        Ok(s) => println!("{s}"),
        Err(e) => error_msg(&format!("cannot render JSON: {e}")),
    }
}

fn spinner(msg: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg} [{elapsed}]")
    {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Run a long Groth16 step behind a spinner and log how long it took.
pub fn with_spinner<T>(msg: &str, f: impl FnOnce() -> T) -> T {
    let pb = spinner(msg);
    let started = Instant::now();
    let out = f();
    pb.finish_and_clear();
    tracing::info!(step = msg, elapsed_ms = started.elapsed().as_millis() as u64, "done");
    out
}

pub fn fail_with_hint(error: &str, hint: &str) -> anyhow::Error {
    anyhow::anyhow!("{}\n{} {}", error.red(), "hint:".bold(), hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_fields_carry_hex_and_limbs() {
        let mut bytes = [0u8; 32];
        bytes[15] = 1;
        bytes[31] = 2;
        let v = root_fields(&Digest(bytes));
        assert_eq!(v["root"], Digest(bytes).to_hex());
        assert_eq!(v["limbs"], json!(["1", "2"]));
    }

    #[test]
    fn merged_extends_objects() {
        let v = merged(json!({ "depth": 2 }), root_fields(&Digest::ZERO));
        assert_eq!(v["depth"], 2);
        assert_eq!(v["limbs"], json!(["0", "0"]));
        assert_eq!(merged(json!(1), json!({ "a": 1 })), json!(1));
    }

    #[test]
    fn with_spinner_returns_closure_value() {
        assert_eq!(with_spinner("adding", || 2 + 3), 5);
    }
}
