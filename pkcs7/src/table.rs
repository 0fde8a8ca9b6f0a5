//! Precomputed padding patterns
//!
//! A [`PaddingTable`] holds, for one effective block size `S`, the padding
//! run for every remainder `0..S`: remainder `r` maps to `S - r` bytes of value
//! `S - r` (remainder 0 maps to a full block). Tables are immutable once built.
//!
//! Callers that pad many buffers with the same block size can own a table
//! directly. [`pad`](crate::pad()) uses a process-wide table that is rebuilt
//! whenever the requested size changes.

use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, trace};

use crate::error::{Pkcs7Error, Result};
use crate::utils;

/// Largest effective block size a table can hold.
pub const MAX_TABLE_BLOCK_SIZE: usize = u8::MAX as usize;

static SHARED_TABLE: RwLock<Option<Arc<PaddingTable>>> = RwLock::new(None);

/// Padding runs for every remainder of one block size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddingTable {
    block_size: usize,
    patterns: Vec<Vec<u8>>,
}

impl PaddingTable {
    /// Build the table for `size`, clamped the same way [`pad`](crate::pad())
    /// clamps it.
    ///
    /// # Errors
    ///
    /// [`Pkcs7Error::BlockSizeTooLarge`] if the effective size is above 255,
    /// since the padding count would not fit in a byte.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pkcs7::PaddingTable;
    ///
    /// let table = PaddingTable::new(16)?;
    /// assert_eq!(table.pattern(0), &[16u8; 16][..]);
    /// assert_eq!(table.pattern(9), &[7u8; 7][..]);
    /// # Ok::<(), pkcs7::Pkcs7Error>(())
    /// ```
    pub fn new(size: usize) -> Result<Self> {
        let block_size = utils::effective_block_size(size);
        if block_size > MAX_TABLE_BLOCK_SIZE {
            return Err(Pkcs7Error::BlockSizeTooLarge(block_size));
        }

        let patterns = (0..block_size)
            .map(|remainder| {
                let count = block_size - remainder;
                vec![utils::padding_byte(count); count]
            })
            .collect();

        Ok(Self { block_size, patterns })
    }

    /// Effective block size this table was built for
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Padding run for a plaintext whose length leaves `remainder` bytes in
    /// its last block. The remainder is reduced modulo the block size.
    pub fn pattern(&self, remainder: usize) -> &[u8] {
        &self.patterns[remainder % self.block_size]
    }

    /// Pad `plaintext` to this table's block size.
    pub fn pad(&self, plaintext: &[u8]) -> Vec<u8> {
        let padding = self.pattern(plaintext.len());
        let mut result = Vec::with_capacity(plaintext.len() + padding.len());
        result.extend_from_slice(plaintext);
        result.extend_from_slice(padding);
        result
    }
}

/// Return the shared table for `size`, rebuilding it if the cached one was
/// built for a different effective size.
///
/// The returned `Arc` stays valid if another thread swaps the table.
pub(crate) fn shared_table(size: usize) -> Result<Arc<PaddingTable>> {
    let block_size = utils::effective_block_size(size);

    {
        let cached = SHARED_TABLE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = cached.as_ref().filter(|t| t.block_size == block_size) {
            trace!("Padding table hit for block size {}", block_size);
            return Ok(Arc::clone(table));
        }
    }

    let table = Arc::new(PaddingTable::new(block_size)?);
    debug!("Rebuilt padding table for block size {}", block_size);

    let mut cached = SHARED_TABLE.write().unwrap_or_else(PoisonError::into_inner);
    *cached = Some(Arc::clone(&table));
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_patterns() {
        let table = PaddingTable::new(16).unwrap();
        assert_eq!(table.block_size(), 16);

        for remainder in 0..16 {
            let expected = if remainder == 0 { 16 } else { 16 - remainder };
            let pattern = table.pattern(remainder);
            assert_eq!(pattern.len(), expected);
            assert!(pattern.iter().all(|&b| b as usize == expected));
        }
    }

    #[test]
    fn test_table_clamps_size() {
        assert_eq!(PaddingTable::new(1).unwrap(), PaddingTable::new(16).unwrap());
        assert_eq!(PaddingTable::new(0).unwrap().block_size(), 16);
    }

    #[test]
    fn test_table_rejects_large_sizes() {
        assert!(PaddingTable::new(255).is_ok());
        assert_eq!(
            PaddingTable::new(256),
            Err(Pkcs7Error::BlockSizeTooLarge(256))
        );
    }

    #[test]
    fn test_pattern_reduces_remainder() {
        let table = PaddingTable::new(16).unwrap();
        assert_eq!(table.pattern(57), table.pattern(9));
        assert_eq!(table.pattern(32), table.pattern(0));
    }

    #[test]
    fn test_table_pad() {
        let table = PaddingTable::new(32).unwrap();
        let padded = table.pad(b"YELLOW SUBMARINE");
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[..16], b"YELLOW SUBMARINE");
        assert!(padded[16..].iter().all(|&b| b == 16));
    }

    #[test]
    fn test_shared_table_matches_size() {
        // Other tests may swap the shared table concurrently, so only the
        // returned Arc is checked.
        let table = shared_table(24).unwrap();
        assert_eq!(table.block_size(), 24);

        let table = shared_table(3).unwrap();
        assert_eq!(table.block_size(), 16);

        assert!(shared_table(300).is_err());
    }
}
