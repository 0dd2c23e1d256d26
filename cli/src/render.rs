//! # Output Rendering
//!
//! Turns a chain into the two shapes the binary writes to stdout: the
//! three-line-per-block text listing and the JSON block array. Rendering
//! builds strings and leaves the printing to `main`, so the exact bytes
//! are testable without capturing stdout.

use ember_ledger::{Block, Chain};

/// Render one block as its three-line group.
///
/// The predecessor digest and the block digest print as lowercase hex;
/// the payload prints as (lossily decoded) text. The genesis block has an
/// empty predecessor digest, so its first line ends after the label.
pub fn block_lines(block: &Block) -> String {
    format!(
        "Previous Digest: {}\nPayload: {}\nDigest: {}\n",
        block.prev_digest_hex(),
        block.data_utf8_lossy(),
        block.digest_hex(),
    )
}

/// Render the whole chain as consecutive three-line groups, genesis first.
pub fn chain_text(chain: &Chain) -> String {
    chain.blocks().iter().map(block_lines).collect()
}

/// Render the chain as a compact JSON array of blocks.
///
/// This is the interchange form: `ember verify` parses exactly this shape
/// back into blocks and rebuilds the chain through the checked constructor.
pub fn chain_json(chain: &Chain) -> serde_json::Result<String> {
    serde_json::to_string(chain.blocks())
}
