//! Error types for Blowfish-CBC operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CbcError {
    #[error("invalid iv length (must match block size)")]
    InvalidIvLength,

    #[error("invalid ciphertext length (must be a positive multiple of block size)")]
    InvalidCiphertextLength,

    #[error("invalid key: {0} bytes rejected by the block cipher")]
    InvalidKey(usize),

    #[error("buffer of {len} bytes is not a whole number of {block_size}-byte blocks")]
    UnalignedBuffer { len: usize, block_size: usize },
}

pub type Result<T> = std::result::Result<T, CbcError>;
