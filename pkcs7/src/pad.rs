//! PKCS#7 padding

use crate::table;
use crate::{utils, DEFAULT_BLOCK_SIZE};

/// Pad `plaintext` to a multiple of the effective block size.
///
/// The effective size is `max(size, 16)`. Between 1 and that many bytes are
/// appended, each holding the number of bytes appended. An aligned plaintext
/// receives a full extra block. The input is left untouched.
///
/// Sizes up to 255 go through a process-wide table that is rebuilt when the
/// size changes. Larger sizes are computed per call and store the count's low
/// 8 bits.
///
/// # Example
///
/// ```rust
/// let padded = pkcs7::pad(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 16);
/// assert_eq!(padded.len(), 16);
/// assert_eq!(&padded[9..], &[7u8; 7][..]);
/// ```
pub fn pad(plaintext: &[u8], size: usize) -> Vec<u8> {
    match table::shared_table(size) {
        Ok(table) => table.pad(plaintext),
        // Too large for a table
        Err(_) => pad_uncached(plaintext, size),
    }
}

/// Pad with the default block size of 16.
pub fn pad_default(plaintext: &[u8]) -> Vec<u8> {
    pad(plaintext, DEFAULT_BLOCK_SIZE)
}

/// Same output as [`pad`] without touching the shared table.
pub fn pad_uncached(plaintext: &[u8], size: usize) -> Vec<u8> {
    let count = utils::padding_len(plaintext.len(), size);
    let mut result = Vec::with_capacity(plaintext.len() + count);
    result.extend_from_slice(plaintext);
    result.resize(plaintext.len() + count, utils::padding_byte(count));
    result
}
