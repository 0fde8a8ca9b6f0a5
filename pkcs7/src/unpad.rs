//! PKCS#7 unpadding
//!
//! [`unpad`] trusts the trailer: it strips as many bytes as the last byte
//! says and only refuses to read outside the buffer. [`unpad_strict`] checks
//! the whole trailer. Neither runs in constant time, so neither is safe to
//! expose as a padding oracle.

use crate::error::{Pkcs7Error, Result};
use crate::utils;

/// Strip the padding from `padded`, returning a view into it.
///
/// The last byte `n` is read as the padding length and the final `n` bytes
/// are dropped. The padding bytes themselves are not checked. A trailing 0
/// returns the whole buffer.
///
/// # Errors
///
/// * [`Pkcs7Error::EmptyInput`] if `padded` is empty
/// * [`Pkcs7Error::PaddingOverflow`] if `n` is larger than the buffer
///
/// # Example
///
/// ```rust
/// let padded = pkcs7::pad(b"Hello, World!", 16);
/// assert_eq!(pkcs7::unpad(&padded)?, b"Hello, World!");
/// # Ok::<(), pkcs7::Pkcs7Error>(())
/// ```
pub fn unpad(padded: &[u8]) -> Result<&[u8]> {
    let padding = *padded.last().ok_or(Pkcs7Error::EmptyInput)? as usize;

    if padding > padded.len() {
        return Err(Pkcs7Error::PaddingOverflow {
            padding,
            len: padded.len(),
        });
    }

    Ok(&padded[..padded.len() - padding])
}

/// Strip the padding from `padded` after validating it against `size`.
///
/// `size` is clamped the same way [`pad`](crate::pad()) clamps it.
///
/// # Errors
///
/// * [`Pkcs7Error::UnalignedLength`] if the length is not a positive multiple
///   of the effective block size
/// * [`Pkcs7Error::InvalidPadding`] if the last byte is 0, exceeds the block
///   size, or the trailing run does not repeat it
pub fn unpad_strict(padded: &[u8], size: usize) -> Result<&[u8]> {
    let block_size = utils::effective_block_size(size);

    if padded.is_empty() || padded.len() % block_size != 0 {
        return Err(Pkcs7Error::UnalignedLength {
            len: padded.len(),
            block_size,
        });
    }

    let last = padded[padded.len() - 1];
    let padding = last as usize;

    if padding == 0 || padding > block_size {
        return Err(Pkcs7Error::InvalidPadding);
    }

    let (data, trailer) = padded.split_at(padded.len() - padding);
    if trailer.iter().any(|&b| b != last) {
        return Err(Pkcs7Error::InvalidPadding);
    }

    Ok(data)
}
