//! Hashing primitive for the bestchain tool.
//!
//! A header's identity is the double SHA-256 of its full 80-byte record,
//! the conventional digest for proof-of-work block headers. The record
//! never carries its own hash; it is always derived here.

pub mod hash;

pub use hash::{hash_header, sha256d};
