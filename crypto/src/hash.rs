//! Double SHA-256 for header records.

use bestchain_types::HeaderHash;
use sha2::{Digest, Sha256};

/// Compute the double SHA-256 of arbitrary data.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut output = [0u8; 32];
    output.copy_from_slice(&second);
    output
}

/// Hash a raw header record to produce its `HeaderHash`.
pub fn hash_header(record: &[u8]) -> HeaderHash {
    HeaderHash::new(sha256d(record))
}
