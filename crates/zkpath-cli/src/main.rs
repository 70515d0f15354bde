// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

mod commands;
mod config;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "zkpath", about = "Zero-knowledge Merkle path inclusion proofs on BN254")]
struct Cli {
    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Verify a proof against a verification key
    Verify {
        /// Verification key (JSON); defaults to `vk_path` from config
        #[arg(long)]
        vk: Option<PathBuf>,
        /// Proof file (JSON, with public inputs)
        #[arg(long)]
        proof: PathBuf,
    },
    /// Show key id and shape of a verification key
    Inspect {
        #[arg(long)]
        vk: Option<PathBuf>,
    },
    /// Compute the Merkle root of a witness natively
    Root {
        /// Witness file (JSON)
        #[arg(long)]
        witness: PathBuf,
    },
    /// Generate a random Merkle path witness
    GenPath {
        #[arg(long)]
        depth: Option<usize>,
        /// Write the witness here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run Groth16 setup for the path circuit
    Setup {
        #[arg(long)]
        depth: Option<usize>,
        /// Directory for `proving.key` and `verification.key`
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Prove knowledge of a Merkle path
    Prove {
        /// Proving key; defaults to `pk_path` from config
        #[arg(long)]
        pk: Option<PathBuf>,
        #[arg(long)]
        witness: PathBuf,
        /// Proof output file
        #[arg(long, default_value = "proof.json")]
        out: PathBuf,
    },
    /// Read or update ~/.zkpath/config.json
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set a config value
    Set { key: String, value: String },
    /// Show current config
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match cli.command {
        Cmd::Verify { vk, proof } => commands::verify::run(vk, &proof),
        Cmd::Inspect { vk } => commands::inspect::run(vk).map(|_| true),
        Cmd::Root { witness } => commands::root::run(&witness).map(|_| true),
        Cmd::GenPath { depth, out } => commands::gen_path::run(depth, out).map(|_| true),
        Cmd::Setup { depth, out } => commands::setup::run(depth, &out).map(|_| true),
        Cmd::Prove { pk, witness, out } => commands::prove::run(pk, &witness, &out).map(|_| true),
        Cmd::Config { action } => match action {
            ConfigAction::Set { key, value } => commands::config::set(&key, &value).map(|_| true),
            ConfigAction::Show => commands::config::show().map(|_| true),
        },
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            output::error_msg(&format!("{e:#}"));
            ExitCode::from(2)
        }
    }
}
