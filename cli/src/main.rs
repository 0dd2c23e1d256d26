// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Ember CLI
//!
//! Entry point for the `ember` binary. Parses CLI arguments, initializes
//! logging, and dispatches subcommands:
//!
//! - `demo`    — build a chain, append the demo payloads, print every block
//! - `verify`  — check a JSON block array from stdin against the invariants
//! - `version` — print build version information
//!
//! stdout carries exactly the subcommand's output; all logging goes to
//! stderr. The subcommands compose: `ember demo --json | ember verify`.

mod cli;
mod logging;
mod render;

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use ember_ledger::{Block, Chain};

use cli::{Commands, DemoArgs, EmberCli};
use logging::LogFormat;

/// Payloads appended by `demo` when none are given on the command line,
/// in append order.
const DEMO_PAYLOADS: [&str; 3] = [
    "First Block after Genesis",
    "Second Block after Genesis",
    "Third Block after Genesis",
];

fn main() -> Result<()> {
    let cli = EmberCli::parse();
    logging::init_logging("ember=info", LogFormat::from_str_lossy(&cli.log_format));

    match cli.command {
        Commands::Demo(args) => run_demo(args),
        Commands::Verify => run_verify(),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Builds the demo chain and prints it in the requested shape.
fn run_demo(args: DemoArgs) -> Result<()> {
    let mut chain = Chain::new();
    if args.payloads.is_empty() {
        for payload in DEMO_PAYLOADS {
            chain.append(payload);
        }
    } else {
        for payload in args.payloads {
            chain.append(payload);
        }
    }

    tracing::debug!(
        blocks = chain.len(),
        tip = %chain.tip().digest_hex(),
        "demo chain built"
    );

    if args.json {
        let json = render::chain_json(&chain).context("failed to serialize chain")?;
        println!("{}", json);
    } else {
        print!("{}", render::chain_text(&chain));
    }

    Ok(())
}

/// Reads a JSON block array from stdin, rebuilds the chain through the
/// checked constructor, and reports the result.
///
/// Any invariant violation surfaces as an error, which exits the process
/// non-zero with the offending block's position and digests on stderr.
fn run_verify() -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read from stdin")?;

    let blocks: Vec<Block> =
        serde_json::from_str(&input).context("stdin is not a JSON block array")?;

    let chain = Chain::from_blocks(blocks).context("chain verification failed")?;

    tracing::info!(
        blocks = chain.len(),
        tip = %chain.tip().digest_hex(),
        "chain verified"
    );
    println!("OK: {} blocks, tip {}", chain.len(), chain.tip().digest_hex());

    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("ember  {}", env!("CARGO_PKG_VERSION"));
    println!("ledger {}", ember_ledger::config::LEDGER_VERSION);
    println!("rustc  {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}
