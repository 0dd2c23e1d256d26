//! # Block Structure
//!
//! A block is the atomic unit of the ledger: an opaque payload plus the
//! digest linkage that makes the sequence tamper-evident. Each block commits
//! to the full content of its predecessor by carrying the predecessor's
//! digest inside its own digest preimage.
//!
//! ## Block Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  Block                                           │
//! │  ├── data: Vec<u8>          (opaque payload)     │
//! │  ├── prev_digest: Vec<u8>   (empty for genesis)  │
//! │  └── digest: Digest         (SHA-256, 32 bytes)  │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Digest Computation
//!
//! The digest covers `data || prev_digest` (see [`crate::hash`] for the
//! construction and its documented boundary ambiguity). Because the
//! predecessor digest itself covers the predecessor's payload and *its*
//! predecessor digest, each block transitively commits to the entire chain
//! behind it. Rewriting any historical payload invalidates every digest
//! from that point forward.
//!
//! ## Immutability
//!
//! Fields are public and the struct is plain data. No operation in this
//! crate mutates a block after construction; a caller that reaches in and
//! edits one anyway gets caught by [`Block::verify`] and by chain-level
//! verification. Tamper-evident, not tamper-proof.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hash::{chain_digest, Digest};

/// Payload of the genesis block. This is the ledger's birth certificate:
/// a fixed sentinel so every chain starts from the same well-known root.
/// (Satoshi had "The Times 03/Jan/2009"; we have one word.)
pub const GENESIS_PAYLOAD: &[u8] = b"Genesis";

// ---------------------------------------------------------------------------
// DigestMismatch
// ---------------------------------------------------------------------------

/// A block's stored digest does not match the digest recomputed from its
/// content. Both digests are carried hex-encoded, ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("block digest mismatch: stored={stored}, computed={computed}")]
pub struct DigestMismatch {
    /// The digest the block claims, hex-encoded.
    pub stored: String,
    /// The digest its content actually produces, hex-encoded.
    pub computed: String,
}

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// A single ledger record: payload, predecessor digest, own digest.
///
/// Blocks are immutable after construction. The digest is computed once in
/// [`Block::new`] and the invariant `digest == SHA-256(data || prev_digest)`
/// holds for every block this crate creates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Opaque payload bytes. Any byte sequence is accepted, including empty;
    /// the ledger does not interpret its content.
    pub data: Vec<u8>,
    /// Digest of the predecessor block. Empty for the genesis block, which
    /// has no predecessor; 32 bytes everywhere else.
    pub prev_digest: Vec<u8>,
    /// SHA-256 digest over `data || prev_digest`.
    pub digest: Digest,
}

impl Block {
    /// Construct a block from a payload and a predecessor digest.
    ///
    /// The digest is computed here and never again; everything downstream
    /// trusts it until [`Block::verify`] says otherwise. The predecessor
    /// digest is taken as given (possibly empty), with no validation. Whether
    /// it actually matches a predecessor is a chain-level question answered
    /// by [`crate::chain::Chain::verify`].
    ///
    /// # Example
    ///
    /// ```
    /// use ember_ledger::block::Block;
    ///
    /// let block = Block::new("hello", Vec::new());
    /// assert_eq!(block.data, b"hello");
    /// ```
    pub fn new(data: impl Into<Vec<u8>>, prev_digest: Vec<u8>) -> Self {
        let data = data.into();
        let digest = chain_digest(&data, &prev_digest);
        Block {
            data,
            prev_digest,
            digest,
        }
    }

    /// Construct the genesis block: the fixed sentinel payload and an empty
    /// predecessor digest. With nothing preceding it, its digest reduces to
    /// the plain SHA-256 of [`GENESIS_PAYLOAD`].
    pub fn genesis() -> Self {
        Block::new(GENESIS_PAYLOAD, Vec::new())
    }

    /// Recompute the digest from the current field values.
    ///
    /// Use this to check that `digest` still matches the actual content.
    pub fn recompute_digest(&self) -> Digest {
        chain_digest(&self.data, &self.prev_digest)
    }

    /// Verify block integrity: the stored digest must match the digest
    /// recomputed from `data` and `prev_digest`.
    ///
    /// This checks the block in isolation. Linkage to an actual predecessor
    /// is verified at the chain level.
    ///
    /// # Errors
    ///
    /// Returns [`DigestMismatch`] carrying both digests hex-encoded.
    pub fn verify(&self) -> Result<(), DigestMismatch> {
        let computed = self.recompute_digest();
        if self.digest != computed {
            return Err(DigestMismatch {
                stored: hex::encode(self.digest),
                computed: hex::encode(computed),
            });
        }
        Ok(())
    }

    /// True for the genesis block. Genesis is structural, not positional:
    /// a block with an empty predecessor digest has no parent to link to.
    pub fn is_genesis(&self) -> bool {
        self.prev_digest.is_empty()
    }

    /// Return the block digest as a lowercase hex string.
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Return the predecessor digest as a lowercase hex string.
    /// Empty string for the genesis block.
    pub fn prev_digest_hex(&self) -> String {
        hex::encode(&self.prev_digest)
    }

    /// Return the payload decoded as UTF-8, with invalid sequences replaced.
    /// Display helper; the payload itself stays opaque bytes.
    pub fn data_utf8_lossy(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256;

    // Pinned digest of the genesis block. Recorded once, defended forever;
    // if it moves, the digest construction changed.
    const GENESIS_DIGEST_HEX: &str =
        "81ddc8d248b2dccdd3fdd5e84f0cad62b08f2d10b57f9a831c13451e5c5c80a5";

    #[test]
    fn genesis_block_properties() {
        let genesis = Block::genesis();
        assert_eq!(genesis.data, GENESIS_PAYLOAD);
        assert!(genesis.prev_digest.is_empty());
        assert!(genesis.is_genesis());
        assert_eq!(genesis.prev_digest_hex(), "");
    }

    #[test]
    fn genesis_digest_matches_pinned_vector() {
        let genesis = Block::genesis();
        assert_eq!(genesis.digest_hex(), GENESIS_DIGEST_HEX);
        // With no predecessor, the digest is the plain payload hash.
        assert_eq!(genesis.digest, sha256(GENESIS_PAYLOAD));
    }

    #[test]
    fn genesis_digest_is_deterministic() {
        let g1 = Block::genesis();
        let g2 = Block::genesis();
        assert_eq!(g1.digest, g2.digest);
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_new_block_links_to_parent() {
        let genesis = Block::genesis();
        let block = Block::new("First Block after Genesis", genesis.digest.to_vec());

        assert_eq!(block.prev_digest, genesis.digest);
        assert!(!block.is_genesis());
        assert_eq!(block.prev_digest_hex(), GENESIS_DIGEST_HEX);
        assert_eq!(
            block.digest_hex(),
            "50493b76a2b7bec8d33620d6310d5578b1dda079684405ed5e6bd55510146daf"
        );
    }

    #[test]
    fn new_block_verifies() {
        let genesis = Block::genesis();
        let block = Block::new(b"payload".as_slice(), genesis.digest.to_vec());
        assert!(block.verify().is_ok());
        assert!(genesis.verify().is_ok());
    }

    #[test]
    fn test_digest_covers_payload_and_predecessor() {
        let prev = sha256(b"parent").to_vec();
        let base = Block::new("data", prev.clone());

        let other_payload = Block::new("Data", prev);
        assert_ne!(base.digest, other_payload.digest);

        let other_prev = Block::new("data", sha256(b"other parent").to_vec());
        assert_ne!(base.digest, other_prev.digest);
    }

    #[test]
    fn tampered_data_fails_verification() {
        let mut block = Block::new("honest payload", Vec::new());
        block.data[0] ^= 0xFF;

        let err = block.verify().unwrap_err();
        assert_eq!(err.stored, hex::encode(block.digest));
        assert_ne!(err.stored, err.computed);
    }

    #[test]
    fn tampered_digest_fails_verification() {
        let mut block = Block::genesis();
        block.digest[0] ^= 0xFF;
        assert!(block.verify().is_err());
    }

    #[test]
    fn tampered_predecessor_fails_verification() {
        let genesis = Block::genesis();
        let mut block = Block::new("payload", genesis.digest.to_vec());
        block.prev_digest[0] ^= 0xFF;
        assert!(block.verify().is_err());
    }

    #[test]
    fn test_empty_payload_accepted() {
        // No payload validation anywhere. Empty bytes hash fine.
        let block = Block::new(Vec::new(), Vec::new());
        assert!(block.data.is_empty());
        assert!(block.verify().is_ok());
        assert_eq!(block.digest, sha256(b""));
    }

    #[test]
    fn block_serialization_roundtrip() {
        let block = Block::new("roundtrip me", Block::genesis().digest.to_vec());
        let json = serde_json::to_string(&block).expect("serialize");
        let recovered: Block = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(block, recovered);
    }

    #[test]
    fn test_digest_hex_formatting() {
        let block = Block::genesis();
        let hex = block.digest_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hex, hex.to_lowercase());
    }

    #[test]
    fn data_utf8_lossy_renders_text_and_garbage() {
        let text = Block::new("plain text", Vec::new());
        assert_eq!(text.data_utf8_lossy(), "plain text");

        // Invalid UTF-8 gets the replacement character, not a panic.
        let garbage = Block::new(vec![0xFF, 0xFE], Vec::new());
        assert!(garbage.data_utf8_lossy().contains('\u{FFFD}'));
    }

    #[test]
    fn digest_mismatch_display_carries_both_digests() {
        let mut block = Block::genesis();
        block.data = b"rewritten".to_vec();

        let err = block.verify().unwrap_err();
        let message = err.to_string();
        assert!(message.contains(&err.stored));
        assert!(message.contains(&err.computed));
    }
}
