//! Binary wire formats for the bestchain tool.
//!
//! Input is a stream of fixed 80-byte header records; output is a stream
//! of fixed 36-byte height records. Integer fields are little-endian.
//! There is no framing or length prefix, so a short trailing record is
//! corruption, not padding.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::WireError;
pub use reader::{HeaderReader, HEADER_RECORD_LEN};
pub use writer::{write_height_index, HEIGHT_RECORD_LEN};
