//! Hashing utilities

/// DJB2 hash over raw bytes, continuing from `seed`
pub fn djb2_update(seed: u32, bytes: &[u8]) -> u32 {
    let mut hash = seed;
    for &byte in bytes {
        hash = hash.wrapping_mul(33).wrapping_add(u32::from(byte));
    }
    hash
}

/// DJB2 hash algorithm
pub fn hash_bytes_djb2(bytes: &[u8]) -> u32 {
    djb2_update(5381, bytes)
}

/// Hash of one catalog string, covering both its ID and its text
pub fn hash_entry(id: i32, text: &str) -> u32 {
    let hash = hash_bytes_djb2(&id.to_be_bytes());
    djb2_update(hash, text.as_bytes())
}
