//! # Chain Management
//!
//! An in-memory, append-only sequence of blocks. The chain owns its blocks
//! in one contiguous `Vec`, indexed by position; there is no per-block heap
//! graph and no global chain instance. Callers own their `Chain` value and
//! pass it around explicitly.
//!
//! ## Invariants
//!
//! Every `Chain` value in existence upholds all three, from construction to
//! drop:
//!
//! 1. Non-empty: position 0 is always the genesis block.
//! 2. The genesis block has an empty predecessor digest.
//! 3. For every later position, `prev_digest` equals the digest of the
//!    block before it.
//!
//! [`Chain::new`] establishes them, [`Chain::append`] preserves them, and
//! the backing vector is private so nothing else can touch the sequence.
//! Externally supplied block sequences only become a `Chain` through
//! [`Chain::from_blocks`], which rejects anything that violates the list.
//!
//! ## What verification can and cannot catch
//!
//! [`Chain::verify`] re-checks the invariants against the actual bytes, so
//! it catches any edit that leaves a digest stale: a rewritten payload, a
//! spliced or reordered history. What it cannot catch
//! is an attacker who rewrites a block *and* recomputes every digest from
//! there to the tip, producing a different but internally consistent chain.
//! Detecting that requires an out-of-band copy of the expected tip digest.
//! Tamper-evident, not tamper-proof.

use serde::Serialize;
use thiserror::Error;

use crate::block::{Block, DigestMismatch};

// ---------------------------------------------------------------------------
// ChainError
// ---------------------------------------------------------------------------

/// A block sequence violated a chain invariant. Each variant carries the
/// position of the offending block and enough hex to debug it from the
/// error message alone.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The sequence contains no blocks at all. A chain starts at genesis;
    /// there is no such thing as an empty one.
    #[error("empty block sequence: a chain always contains a genesis block")]
    Empty,

    /// The first block carries a predecessor digest. Genesis has no
    /// predecessor; its `prev_digest` must be empty.
    #[error("genesis block must have an empty predecessor digest, found {found}")]
    GenesisPredecessor {
        /// The non-empty predecessor digest found, hex-encoded.
        found: String,
    },

    /// A block's stored digest does not match its content.
    #[error("block {index} is corrupt")]
    CorruptBlock {
        /// Position of the corrupt block.
        index: usize,
        /// The underlying digest mismatch.
        #[source]
        source: DigestMismatch,
    },

    /// A block's predecessor digest does not match the digest of the block
    /// before it.
    #[error("block {index} does not extend its predecessor: expected {expected}, found {found}")]
    BrokenLink {
        /// Position of the block whose back-reference is wrong.
        index: usize,
        /// Digest of the actual predecessor, hex-encoded.
        expected: String,
        /// Predecessor digest the block carries, hex-encoded.
        found: String,
    },
}

// ---------------------------------------------------------------------------
// Chain
// ---------------------------------------------------------------------------

/// Ordered, append-only sequence of hash-linked blocks.
///
/// Always non-empty: constructed around a genesis block and grown strictly
/// by [`Chain::append`]. Never truncated, never reordered.
///
/// Serializes as its block sequence. There is deliberately no `Deserialize`;
/// inbound sequences go through [`Chain::from_blocks`] so that a decoded
/// chain is a verified chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Create a chain seeded with the genesis block.
    ///
    /// # Example
    ///
    /// ```
    /// use ember_ledger::chain::Chain;
    ///
    /// let mut chain = Chain::new();
    /// let genesis_digest = chain.genesis().digest;
    /// let block = chain.append("First Block after Genesis");
    /// assert_eq!(block.prev_digest, genesis_digest);
    /// ```
    pub fn new() -> Self {
        Chain {
            blocks: vec![Block::genesis()],
        }
    }

    /// Reconstruct a chain from an externally supplied block sequence,
    /// verifying every invariant along the way.
    ///
    /// This is the only door for untrusted input (decoded JSON, anything
    /// not built by this process). If it returns `Ok`, the resulting value
    /// is indistinguishable from a chain grown by [`Chain::append`].
    ///
    /// # Errors
    ///
    /// [`ChainError::Empty`] for an empty sequence, otherwise the first
    /// invariant violation found, scanning from genesis to tip.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, ChainError> {
        verify_sequence(&blocks)?;
        Ok(Chain { blocks })
    }

    /// Append a payload to the chain.
    ///
    /// Reads the digest of the current tip, builds the successor block
    /// linking to it, and pushes it. Returns a borrow of the freshly
    /// appended block for inspection.
    pub fn append(&mut self, payload: impl Into<Vec<u8>>) -> &Block {
        let prev_digest = self.tip().digest.to_vec();
        let block = Block::new(payload, prev_digest);
        self.blocks.push(block);
        self.tip()
    }

    /// The most recently appended block.
    pub fn tip(&self) -> &Block {
        self.blocks
            .last()
            .expect("chain always contains a genesis block")
    }

    /// The genesis block at position 0.
    pub fn genesis(&self) -> &Block {
        self.blocks
            .first()
            .expect("chain always contains a genesis block")
    }

    /// Number of blocks in the chain, genesis included. At least 1.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false: a chain carries at least its genesis block. Present
    /// for API completeness next to [`Chain::len`].
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The block at the given position, if any. Genesis is position 0.
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// All blocks, in append order. This is the chain's interchange form:
    /// serialize the slice, feed it back through [`Chain::from_blocks`].
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Re-verify every chain invariant against the actual block bytes.
    ///
    /// A chain that has only been grown through [`Chain::append`] always
    /// passes. The interesting callers are the ones holding blocks with
    /// public fields somebody may have reached into.
    ///
    /// # Errors
    ///
    /// The first invariant violation found, scanning from genesis to tip.
    pub fn verify(&self) -> Result<(), ChainError> {
        verify_sequence(&self.blocks)
    }
}

impl Default for Chain {
    /// Same as [`Chain::new`]: a fresh chain is a genesis block, never an
    /// empty vector.
    fn default() -> Self {
        Chain::new()
    }
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Check the full invariant list over a raw block sequence.
///
/// Shared by [`Chain::verify`] and [`Chain::from_blocks`] so the two can
/// never drift apart on what "valid" means.
fn verify_sequence(blocks: &[Block]) -> Result<(), ChainError> {
    let genesis = blocks.first().ok_or(ChainError::Empty)?;
    if !genesis.prev_digest.is_empty() {
        return Err(ChainError::GenesisPredecessor {
            found: hex::encode(&genesis.prev_digest),
        });
    }

    for (index, block) in blocks.iter().enumerate() {
        block
            .verify()
            .map_err(|source| ChainError::CorruptBlock { index, source })?;

        if index > 0 {
            let parent = &blocks[index - 1];
            if block.prev_digest != parent.digest {
                return Err(ChainError::BrokenLink {
                    index,
                    expected: hex::encode(parent.digest),
                    found: hex::encode(&block.prev_digest),
                });
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
