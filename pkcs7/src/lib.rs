//! # PKCS#7 Padding Library
//!
//! This library implements PKCS#7 padding (RFC 5652) for block cipher plaintext.
//!
//! ## Operations
//!
//! - **pad** - Append 1 to `S` bytes, each holding the padding length, so the
//!   result is a multiple of the block size `S`
//! - **unpad** - Drop as many trailing bytes as the last byte says
//! - **unpad_strict** - Same, after validating the whole trailer
//!
//! The block size is clamped to at least 16 (the AES block size). Larger
//! block sizes are used as given.
//!
//! ## Usage
//!
//! ```rust
//! use pkcs7::{pad, unpad};
//!
//! let plaintext = b"Hello, World!";
//!
//! // Pad before encrypting
//! let padded = pad(plaintext, 16);
//! assert_eq!(padded.len(), 16);
//!
//! // Unpad after decrypting
//! let recovered = unpad(&padded)?;
//! assert_eq!(recovered, plaintext);
//! # Ok::<(), pkcs7::Pkcs7Error>(())
//! ```
//!
//! This crate does not encrypt, and unpadding is not constant-time. Callers
//! that unpad attacker-controlled data must authenticate it first.

// Public modules
pub mod error;
pub mod pad;
pub mod table;
pub mod unpad;
pub mod utils;

// Re-exports for easy access
pub use error::{Pkcs7Error, Result};
pub use pad::{pad, pad_default, pad_uncached};
pub use table::PaddingTable;
pub use unpad::{unpad, unpad_strict};
pub use utils::{effective_block_size, padding_len};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Block size used when a caller does not pick one
pub const DEFAULT_BLOCK_SIZE: usize = 16;

/// Smallest effective block size; requests below it are raised to it
pub const MIN_BLOCK_SIZE: usize = 16;

/// Get version information
pub fn version() -> &'static str {
    VERSION
}
