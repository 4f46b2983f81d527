//! Block cipher seam and the Blowfish primitive behind it

use blowfish::cipher::generic_array::GenericArray;
use blowfish::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use blowfish::Blowfish;

use crate::error::{CbcError, Result};

/// Trait for a keyed block cipher that transforms one block at a time
pub trait BlockCipher {
    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the block size of the cipher
    fn block_size(&self) -> usize;
}

/// Blowfish keyed with a caller-supplied key.
///
/// The key schedule and round function come from the `blowfish` crate.
/// Keys between 4 and 56 bytes are accepted.
pub struct BlowfishCipher {
    inner: Blowfish,
}

impl BlowfishCipher {
    /// Runs the key schedule, failing with [`CbcError::InvalidKey`] when the
    /// primitive rejects the key.
    ///
    /// ```rust
    /// use blowfish_cbc::{BlockCipher, BlowfishCipher, CbcError};
    ///
    /// let cipher = BlowfishCipher::new(b"a 24 byte blowfish key!!")?;
    /// assert_eq!(cipher.block_size(), 8);
    ///
    /// assert!(matches!(BlowfishCipher::new(b"abc"), Err(CbcError::InvalidKey(3))));
    /// # Ok::<(), CbcError>(())
    /// ```
    pub fn new(key: &[u8]) -> Result<Self> {
        let inner = <Blowfish as KeyInit>::new_from_slice(key)
            .map_err(|_| CbcError::InvalidKey(key.len()))?;
        Ok(Self { inner })
    }
}

fn check_block(block: &[u8]) -> Result<()> {
    if block.len() != crate::BLOCK_SIZE {
        return Err(CbcError::UnalignedBuffer {
            len: block.len(),
            block_size: crate::BLOCK_SIZE,
        });
    }
    Ok(())
}

impl BlockCipher for BlowfishCipher {
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        check_block(block)?;
        self.inner.encrypt_block(GenericArray::from_mut_slice(block));
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        check_block(block)?;
        self.inner.decrypt_block(GenericArray::from_mut_slice(block));
        Ok(())
    }

    fn block_size(&self) -> usize {
        crate::BLOCK_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_answer_zero_key() {
        // Eric Young's first Blowfish test vector
        let cipher = BlowfishCipher::new(&[0u8; 8]).unwrap();
        let mut block = [0u8; 8];

        cipher.encrypt_block(&mut block).unwrap();
        assert_eq!(hex::encode(block), "4ef997456198dd78");

        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(block, [0u8; 8]);
    }

    #[test]
    fn test_wrong_block_length_is_an_error() {
        let cipher = BlowfishCipher::new(b"abcdefgh").unwrap();
        let expected = Err(CbcError::UnalignedBuffer { len: 5, block_size: 8 });

        let mut short = [0u8; 5];
        assert_eq!(cipher.encrypt_block(&mut short), expected);
        assert_eq!(cipher.decrypt_block(&mut short), expected);
        assert_eq!(short, [0u8; 5]);

        let mut long = [0u8; 16];
        assert!(cipher.encrypt_block(&mut long).is_err());
        assert!(cipher.decrypt_block(&mut []).is_err());
    }

    #[test]
    fn test_key_length_bounds() {
        assert!(BlowfishCipher::new(&[7u8; 4]).is_ok());
        assert!(BlowfishCipher::new(&[7u8; 56]).is_ok());

        assert_eq!(BlowfishCipher::new(&[]).err(), Some(CbcError::InvalidKey(0)));
        assert_eq!(BlowfishCipher::new(&[7u8; 3]).err(), Some(CbcError::InvalidKey(3)));
        assert_eq!(BlowfishCipher::new(&[7u8; 57]).err(), Some(CbcError::InvalidKey(57)));
    }
}
