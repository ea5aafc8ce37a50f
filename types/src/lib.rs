//! Fundamental types for the bestchain tool.
//!
//! This crate defines the two types shared across every other crate in the
//! workspace: the header hash and the header record itself.

pub mod hash;
pub mod header;

pub use hash::HeaderHash;
pub use header::Header;
