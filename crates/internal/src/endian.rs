//! Big-endian encodings used on the wire
//!
//! Every integer SM2 puts on the wire is big-endian, from the 2-byte user id
//! length prefix up to 256-bit scalars.

/// 2-byte big-endian encoding
pub fn u16_to_be_bytes(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// 4-byte big-endian encoding
pub fn u32_to_be_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Split 32 big-endian bytes into four 64-bit words, least significant first
pub fn words_from_be_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    let mut words = [0u64; 4];
    for (word, chunk) in words.iter_mut().zip(bytes.rchunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *word = u64::from_be_bytes(buf);
    }
    words
}

/// Inverse of [`words_from_be_bytes`]
pub fn words_to_be_bytes(words: &[u64; 4]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (chunk, word) in out.rchunks_exact_mut(8).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}
