//! # CLI Interface
//!
//! Defines the command-line argument structure for `ember` using `clap`
//! derive. Supports three subcommands: `demo`, `verify`, and `version`.

use clap::{Parser, Subcommand};

/// Ember hash-linked ledger.
///
/// Demonstrates the core mechanics of a tamper-evident append-only ledger:
/// builds a chain in memory, appends payloads, prints the digest linkage,
/// and verifies externally supplied block sequences. Everything runs in
/// memory; nothing is persisted and no ports are opened.
#[derive(Parser, Debug)]
#[command(
    name = "ember",
    about = "Hash-linked append-only ledger",
    version,
    propagate_version = true
)]
pub struct EmberCli {
    /// Log output format: pretty or json. All logs go to stderr.
    #[arg(
        long,
        global = true,
        env = "EMBER_LOG_FORMAT",
        default_value = "pretty"
    )]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the ember binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a chain, append the demo payloads, and print every block.
    Demo(DemoArgs),
    /// Read a JSON block array from stdin and verify the chain invariants.
    ///
    /// Exits non-zero if the sequence is empty, a digest is stale, or a
    /// back-reference does not match its predecessor.
    Verify,
    /// Print version information and exit.
    Version,
}

/// Arguments for the `demo` subcommand.
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Payload to append after genesis. Repeatable; order is append order.
    ///
    /// When omitted, the three fixed demo payloads are appended.
    #[arg(long = "payload", value_name = "STRING")]
    pub payloads: Vec<String>,

    /// Render the chain as a JSON array of blocks instead of line groups.
    ///
    /// The output feeds straight back into `ember verify`.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        EmberCli::command().debug_assert();
    }

    #[test]
    fn demo_accepts_repeated_payloads() {
        let cli = EmberCli::parse_from([
            "ember", "demo", "--payload", "one", "--payload", "two", "--json",
        ]);
        match cli.command {
            Commands::Demo(args) => {
                assert_eq!(args.payloads, ["one", "two"]);
                assert!(args.json);
            }
            other => panic!("expected demo, got {other:?}"),
        }
    }

    #[test]
    fn log_format_is_global() {
        let cli = EmberCli::parse_from(["ember", "demo", "--log-format", "json"]);
        assert_eq!(cli.log_format, "json");
    }
}
