// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Ember Ledger — Core Library
//!
//! The minimal mechanics of a hash-linked append-only ledger: each block
//! commits to the content of its predecessor via a SHA-256 digest, producing
//! a tamper-evident sequence. Nothing more. No networking, no consensus, no
//! persistence, no transaction semantics. If you need those, you need a
//! blockchain; this is the part of one that actually does the work.
//!
//! ## Architecture
//!
//! Four small modules, one concern each:
//!
//! - **hash** — The digest function. One construction, documented gaps
//!   included.
//! - **block** — The record type: payload, predecessor digest, own digest.
//! - **chain** — The owned, append-only sequence and its verification.
//! - **config** — The constants. All of them.
//!
//! ## Usage
//!
//! ```
//! use ember_ledger::Chain;
//!
//! let mut chain = Chain::new();
//! chain.append("First Block after Genesis");
//! chain.append("Second Block after Genesis");
//!
//! assert_eq!(chain.len(), 3);
//! assert!(chain.verify().is_ok());
//! ```
//!
//! ## Design Philosophy
//!
//! 1. Digests are pinned by tests. Behavior changes are format changes.
//! 2. Every `Chain` value upholds its invariants; untrusted input enters
//!    through a checked constructor or not at all.
//! 3. Tamper-evident, not tamper-proof. The library detects stale digests;
//!    it cannot detect a consistently rewritten history.

pub mod block;
pub mod chain;
pub mod config;
pub mod hash;

pub use block::{Block, DigestMismatch, GENESIS_PAYLOAD};
pub use chain::{Chain, ChainError};
pub use hash::{chain_digest, sha256, Digest};
