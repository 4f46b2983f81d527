//! CBC (Cipher Block Chaining) over any [`BlockCipher`]
//!
//! Both directions work in place on a buffer holding whole blocks. The IV
//! seeds the chain and is not written into the buffer.

use crate::cipher::BlockCipher;
use crate::error::{CbcError, Result};

fn check_layout<C: BlockCipher>(cipher: &C, iv: &[u8], buf: &[u8]) -> Result<usize> {
    let block_size = cipher.block_size();
    if iv.len() != block_size {
        return Err(CbcError::InvalidIvLength);
    }
    if block_size == 0 || buf.len() % block_size != 0 {
        return Err(CbcError::UnalignedBuffer {
            len: buf.len(),
            block_size,
        });
    }
    Ok(block_size)
}

fn xor_in_place(block: &mut [u8], other: &[u8]) {
    for (b, o) in block.iter_mut().zip(other) {
        *b ^= o;
    }
}

/// CBC encryption: `c_0 = E(p_0 ^ iv)`, `c_i = E(p_i ^ c_{i-1})`
pub fn encrypt_blocks<C: BlockCipher>(cipher: &C, iv: &[u8], buf: &mut [u8]) -> Result<()> {
    let block_size = check_layout(cipher, iv, buf)?;

    let mut chain = iv.to_vec();
    for block in buf.chunks_exact_mut(block_size) {
        xor_in_place(block, &chain);
        cipher.encrypt_block(block)?;
        chain.copy_from_slice(block);
    }

    Ok(())
}

/// CBC decryption: `p_i = D(c_i) ^ c_{i-1}`, with `c_{-1} = iv`
pub fn decrypt_blocks<C: BlockCipher>(cipher: &C, iv: &[u8], buf: &mut [u8]) -> Result<()> {
    let block_size = check_layout(cipher, iv, buf)?;

    let mut chain = iv.to_vec();
    let mut saved = vec![0u8; block_size];
    for block in buf.chunks_exact_mut(block_size) {
        saved.copy_from_slice(block);
        cipher.decrypt_block(block)?;
        xor_in_place(block, &chain);
        std::mem::swap(&mut chain, &mut saved);
    }

    Ok(())
}
