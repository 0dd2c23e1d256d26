//! # Ledger Constants
//!
//! Every magic number in Ember lives here. If you're hardcoding a constant
//! somewhere else, you're doing it wrong and you owe the team coffee.
//!
//! There are far fewer knobs than in a full consensus system, and that is
//! the point: this ledger has one hash function, one digest size, and one
//! version string. Changing any of them silently re-keys every digest in
//! existence, so treat this file as consensus-critical even though there is
//! no consensus.

// ---------------------------------------------------------------------------
// Versioning
// ---------------------------------------------------------------------------

/// Crate version, assembled at compile time so we don't allocate for
/// something this trivial at runtime.
pub const LEDGER_VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// Digest Parameters
// ---------------------------------------------------------------------------

/// The hash function behind every block digest. SHA-256: ubiquitous and
/// exactly as collision-resistant as this ledger needs. There is no second
/// hash function and there will not be one.
pub const DIGEST_ALGORITHM: &str = "SHA-256";

/// Digest length in bytes. SHA-256 produces 32-byte output.
pub const DIGEST_LENGTH: usize = 32;

/// Digest length when rendered as lowercase hex. Two characters per byte.
pub const HEX_DIGEST_LENGTH: usize = DIGEST_LENGTH * 2;
