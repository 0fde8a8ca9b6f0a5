//! Block size arithmetic shared by padding and unpadding

use crate::MIN_BLOCK_SIZE;

/// Clamp a requested block size to the effective one.
///
/// Sizes of 16 or below are raised to 16. There is no upper bound.
///
/// ```rust
/// use pkcs7::utils::effective_block_size;
///
/// assert_eq!(effective_block_size(0), 16);
/// assert_eq!(effective_block_size(8), 16);
/// assert_eq!(effective_block_size(32), 32);
/// ```
pub fn effective_block_size(size: usize) -> usize {
    size.max(MIN_BLOCK_SIZE)
}

/// Number of padding bytes appended to a plaintext of `len` bytes.
///
/// Always in `1..=effective_block_size(size)`: an aligned plaintext gets a
/// full block.
pub fn padding_len(len: usize, size: usize) -> usize {
    let block_size = effective_block_size(size);
    block_size - len % block_size
}

/// Byte value written for a padding run of `count` bytes.
///
/// Counts above 255 keep their low 8 bits.
pub(crate) fn padding_byte(count: usize) -> u8 {
    (count & 0xff) as u8
}
