//! Error types for padding operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Pkcs7Error {
    #[error("Cannot unpad an empty buffer")]
    EmptyInput,

    #[error("Padding length {padding} exceeds buffer length {len}")]
    PaddingOverflow { padding: usize, len: usize },

    #[error("Invalid padding")]
    InvalidPadding,

    #[error("Padded length {len} is not a positive multiple of block size {block_size}")]
    UnalignedLength { len: usize, block_size: usize },

    #[error("Block size {0} cannot be represented by a padding byte (max 255)")]
    BlockSizeTooLarge(usize),
}

pub type Result<T> = std::result::Result<T, Pkcs7Error>;
