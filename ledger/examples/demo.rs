//! Interactive CLI demo of the Ember ledger lifecycle.
//!
//! Walks through genesis creation, appends, digest linkage inspection,
//! chain verification, JSON interchange, and a tampering experiment that
//! shows the typed errors doing their job. The output uses ANSI escape
//! codes for colored, storytelling-style terminal rendering.
//!
//! Run with:
//!   cargo run --example demo --release

use std::time::Instant;

use ember_ledger::{config, Block, Chain, ChainError};

// ---------------------------------------------------------------------------
// ANSI color constants
// ---------------------------------------------------------------------------

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const ITALIC: &str = "\x1b[3m";

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const WHITE: &str = "\x1b[37m";

const BG_BLUE: &str = "\x1b[44m";

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

fn banner() {
    println!();
    println!(
        "{BG_BLUE}{BOLD}{WHITE}                                                                    {RESET}"
    );
    println!(
        "{BG_BLUE}{BOLD}{WHITE}    EMBER LEDGER  --  Interactive Lifecycle Demo                    {RESET}"
    );
    println!(
        "{BG_BLUE}{BOLD}{WHITE}    Version {}  |  SHA-256 hash-linked append-only chain         {RESET}",
        config::LEDGER_VERSION
    );
    println!(
        "{BG_BLUE}{BOLD}{WHITE}                                                                    {RESET}"
    );
    println!();
}

fn section(num: u32, title: &str) {
    println!();
    println!(
        "{BOLD}{CYAN}===[{YELLOW} Step {num} {CYAN}]=============================================================={RESET}"
    );
    println!("{BOLD}{WHITE}  {title}{RESET}");
    println!(
        "{CYAN}------------------------------------------------------------------------{RESET}"
    );
}

fn subsection(text: &str) {
    println!("{DIM}{CYAN}  >> {text}{RESET}");
}

fn success(text: &str) {
    println!("{GREEN}  [OK] {text}{RESET}");
}

fn info(label: &str, value: &str) {
    println!("{WHITE}  {BOLD}{label}:{RESET} {YELLOW}{value}{RESET}");
}

fn timing(label: &str, elapsed: std::time::Duration) {
    let ms = elapsed.as_secs_f64() * 1000.0;
    println!("{DIM}{MAGENTA}  [{label}: {ms:.2} ms]{RESET}");
}

fn separator() {
    println!(
        "{DIM}{CYAN}  . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . {RESET}"
    );
}

/// Prints one block as an indented row: position, truncated digests, payload.
fn block_row(position: usize, block: &Block) {
    let prev = if block.prev_digest.is_empty() {
        "(none)".to_string()
    } else {
        format!("{}...", &block.prev_digest_hex()[..16])
    };
    println!(
        "  {BLUE}{BOLD}#{position}{RESET}  {DIM}prev={prev:<22}{RESET} digest={DIM}{}...{RESET}  {WHITE}{}{RESET}",
        &block.digest_hex()[..16],
        block.data_utf8_lossy(),
    );
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let demo_start = Instant::now();

    banner();

    // -----------------------------------------------------------------------
    // Step 1: Genesis
    // -----------------------------------------------------------------------

    section(1, "Genesis Block Creation");
    subsection("Creating a fresh chain seeded with the genesis block...");

    let t = Instant::now();
    let mut chain = Chain::new();
    timing("chain init", t.elapsed());

    let genesis = chain.genesis();
    info("Genesis payload", &genesis.data_utf8_lossy());
    info("Genesis digest", &genesis.digest_hex());
    assert!(genesis.prev_digest.is_empty());
    success("Genesis block in place with an empty predecessor digest");

    // -----------------------------------------------------------------------
    // Step 2: Appends
    // -----------------------------------------------------------------------

    section(2, "Appending Three Blocks");
    subsection("Each append reads the tip digest and links the new block to it...");

    let payloads = [
        "First Block after Genesis",
        "Second Block after Genesis",
        "Third Block after Genesis",
    ];

    let t = Instant::now();
    for payload in payloads {
        let block = chain.append(payload);
        println!(
            "  {GREEN}[APPENDED]{RESET} {BOLD}{}{RESET}  {DIM}digest={}...{RESET}",
            payload,
            &block.digest_hex()[..16]
        );
    }
    timing("3 appends", t.elapsed());

    info("Chain length", &chain.len().to_string());
    success("Chain grew strictly by appends; no block was touched after creation");

    // -----------------------------------------------------------------------
    // Step 3: Walking the Chain
    // -----------------------------------------------------------------------

    section(3, "Digest Linkage Walk");
    subsection("Every block's prev_digest must equal its predecessor's digest...");

    println!();
    for (position, block) in chain.blocks().iter().enumerate() {
        block_row(position, block);
    }
    println!();

    for (index, pair) in chain.blocks().windows(2).enumerate() {
        assert_eq!(
            pair[1].prev_digest, pair[0].digest,
            "block {} must link to block {}",
            index + 1,
            index
        );
        println!(
            "  {GREEN}[VALID]{RESET} Block #{} -> parent #{} {DIM}(digest linkage){RESET}",
            index + 1,
            index
        );
    }
    success("All back-references match; the history is one unbroken line");

    // -----------------------------------------------------------------------
    // Step 4: Verification and JSON Interchange
    // -----------------------------------------------------------------------

    section(4, "Verification & JSON Round-Trip");
    subsection("Full chain verification, then export/import through JSON...");

    let t = Instant::now();
    chain.verify().expect("freshly built chain must verify");
    timing("chain verify", t.elapsed());
    success("Every digest recomputes to its stored value");

    let t = Instant::now();
    let json = serde_json::to_string(chain.blocks()).expect("serialize");
    let decoded: Vec<Block> = serde_json::from_str(&json).expect("deserialize");
    let rebuilt = Chain::from_blocks(decoded).expect("checked reconstruction");
    timing("export + checked import", t.elapsed());

    assert_eq!(rebuilt, chain);
    info("Interchange size", &format!("{} bytes of JSON", json.len()));
    success("Round-trip produced an identical, fully verified chain");

    // -----------------------------------------------------------------------
    // Step 5: Tampering Experiment
    // -----------------------------------------------------------------------

    section(5, "Tampering Experiment");
    subsection("Rewriting block #2's payload in an exported copy...");

    let mut tampered = chain.blocks().to_vec();
    tampered[2].data = b"nothing happened here".to_vec();

    match Chain::from_blocks(tampered.clone()) {
        Err(ChainError::CorruptBlock { index, source }) => {
            info("Detected at block", &index.to_string());
            info("Stored digest", &format!("{}...", &source.stored[..16]));
            info("Computed digest", &format!("{}...", &source.computed[..16]));
            success("Stale digest caught: the payload no longer matches its digest");
        }
        other => panic!("tampering should have been detected, got {other:?}"),
    }

    separator();
    subsection("Patching the digest to match the rewritten payload...");

    tampered[2].digest = tampered[2].recompute_digest();

    match Chain::from_blocks(tampered) {
        Err(ChainError::BrokenLink { index, .. }) => {
            info("Detected at block", &index.to_string());
            success("Successor still references the original digest; the link is broken");
        }
        other => panic!("broken link should have been detected, got {other:?}"),
    }

    println!();
    println!(
        "  {ITALIC}{DIM}Hiding an edit requires recomputing every digest after it, which{RESET}"
    );
    println!(
        "  {ITALIC}{DIM}produces a visibly different tip. Tamper-evident, not tamper-proof.{RESET}"
    );

    // -----------------------------------------------------------------------
    // Final Summary
    // -----------------------------------------------------------------------

    let total_elapsed = demo_start.elapsed();

    println!();
    println!(
        "{BG_BLUE}{BOLD}{WHITE}                                                                    {RESET}"
    );
    println!(
        "{BG_BLUE}{BOLD}{WHITE}    DEMO COMPLETE -- Final Summary                                  {RESET}"
    );
    println!(
        "{BG_BLUE}{BOLD}{WHITE}                                                                    {RESET}"
    );
    println!();

    println!("  {BOLD}{WHITE}Ledger Statistics:{RESET}");
    println!("  {DIM}----------------------------------------------{RESET}");
    info("Blocks in chain", "4 (genesis + 3 appends)");
    info("Digest function", config::DIGEST_ALGORITHM);
    info(
        "Digest construction",
        "SHA-256(data || prev_digest), no delimiter",
    );
    info(
        "Digest length",
        &format!("{} bytes", config::DIGEST_LENGTH),
    );
    info("Tampering attempts", "2 (both detected)");
    info("Tip digest", &chain.tip().digest_hex());
    println!();

    println!(
        "  {BOLD}{GREEN}Total demo time: {:.2}s{RESET}",
        total_elapsed.as_secs_f64()
    );
    println!();
}
