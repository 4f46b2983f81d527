//! Zero padding to a block boundary

/// Appends zero bytes until the length is a multiple of `block_size`.
///
/// Input that is already aligned comes back unchanged. The original length is
/// not recorded anywhere, so callers that need it must keep it themselves.
/// A `block_size` of zero imposes no alignment.
///
/// ```rust
/// use blowfish_cbc::pad;
///
/// assert_eq!(pad(b"abc", 8), b"abc\0\0\0\0\0");
/// assert_eq!(pad(b"12345678", 8), b"12345678");
/// ```
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let mut padded = data.to_vec();
    padded.resize(padded_len(data.len(), block_size), 0);
    padded
}

/// Length of `len` bytes after zero padding to `block_size`
fn padded_len(len: usize, block_size: usize) -> usize {
    if block_size == 0 {
        return len;
    }
    match len % block_size {
        0 => len,
        remainder => len + (block_size - remainder),
    }
}
