//! # Blowfish-CBC
//!
//! Blowfish in CBC mode with zero padding. The IV is carried as the first
//! block of every ciphertext:
//!
//! ```text
//! [IV: 8 bytes][ciphertext blocks: N x 8 bytes]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use blowfish_cbc::{decrypt, encrypt};
//!
//! let key = b"yJhm1m8tTgRXOjMyTadZOvE!";
//! let plaintext = b"Hello, World!";
//!
//! let ciphertext = encrypt(plaintext, key, Some(b"laksjdhr"))?;
//! assert_eq!(ciphertext.len(), 8 + 16);
//!
//! // Padding is never stripped; keep the original length around.
//! let decrypted = decrypt(&ciphertext, key, None)?;
//! assert_eq!(&decrypted[..plaintext.len()], plaintext);
//! # Ok::<(), blowfish_cbc::CbcError>(())
//! ```
//!
//! ## Caveats
//!
//! - There is no integrity protection. Tampered ciphertext decrypts to garbage
//!   without an error.
//! - No IV is ever generated. Equal plaintext, key and IV always give equal
//!   ciphertext.
//! - Zero padding is ambiguous: trailing zero bytes of the plaintext cannot be
//!   told apart from padding.

pub mod cbc;
pub mod cipher;
pub mod error;
pub mod padding;

pub use cipher::{BlockCipher, BlowfishCipher};
pub use error::{CbcError, Result};
pub use padding::pad;

/// Blowfish block size in bytes
pub const BLOCK_SIZE: usize = 8;

/// IV used when the caller passes `None`
pub const DEFAULT_IV: [u8; BLOCK_SIZE] = [0u8; BLOCK_SIZE];

fn resolve_iv(iv: Option<&[u8]>) -> Result<&[u8]> {
    match iv {
        None => Ok(&DEFAULT_IV),
        Some(iv) if iv.len() != BLOCK_SIZE => Err(CbcError::InvalidIvLength),
        Some(iv) => Ok(iv),
    }
}

/// Encrypts `plaintext` and returns `IV || ciphertext`.
///
/// Plaintext of any length is accepted and zero-padded to a multiple of
/// [`BLOCK_SIZE`]. `iv` must be exactly [`BLOCK_SIZE`] bytes; `None` selects
/// [`DEFAULT_IV`]. The IV is written verbatim as the first block of the output.
pub fn encrypt(plaintext: &[u8], key: &[u8], iv: Option<&[u8]>) -> Result<Vec<u8>> {
    let iv = resolve_iv(iv)?;
    let padded = pad(plaintext, BLOCK_SIZE);
    let cipher = BlowfishCipher::new(key)?;

    let mut ciphertext = Vec::with_capacity(BLOCK_SIZE + padded.len());
    ciphertext.extend_from_slice(iv);
    ciphertext.extend_from_slice(&padded);

    cbc::encrypt_blocks(&cipher, iv, &mut ciphertext[BLOCK_SIZE..])?;

    Ok(ciphertext)
}

/// Decrypts `IV || ciphertext` into a fresh buffer and returns the padded
/// plaintext.
///
/// The chaining IV is always read from the first block of `ciphertext`. A
/// supplied `iv` is checked for length but does not override the embedded one.
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: Option<&[u8]>) -> Result<Vec<u8>> {
    let mut buf = ciphertext.to_vec();
    decrypt_in_place(&mut buf, key, iv)?;
    buf.drain(..BLOCK_SIZE);
    Ok(buf)
}

/// Like [`decrypt`], but overwrites the blocks of `buf` after the IV prefix
/// with plaintext and returns that part of the buffer.
///
/// ```rust
/// use blowfish_cbc::{decrypt_in_place, encrypt};
///
/// let key = b"sixteen byte key";
/// let mut buf = encrypt(b"in place", key, None)?;
///
/// let plaintext = decrypt_in_place(&mut buf, key, None)?;
/// assert_eq!(plaintext, b"in place");
/// # Ok::<(), blowfish_cbc::CbcError>(())
/// ```
pub fn decrypt_in_place<'a>(
    buf: &'a mut [u8],
    key: &[u8],
    iv: Option<&[u8]>,
) -> Result<&'a mut [u8]> {
    if buf.is_empty() || buf.len() % BLOCK_SIZE != 0 {
        return Err(CbcError::InvalidCiphertextLength);
    }
    resolve_iv(iv)?;

    let (iv, blocks) = buf.split_at_mut(BLOCK_SIZE);
    if blocks.len() % BLOCK_SIZE != 0 {
        return Err(CbcError::InvalidCiphertextLength);
    }

    let cipher = BlowfishCipher::new(key)?;
    cbc::decrypt_blocks(&cipher, iv, blocks)?;

    Ok(blocks)
}
