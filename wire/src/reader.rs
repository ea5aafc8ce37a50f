//! Decoding of raw 80-byte header records.
//!
//! Record layout (offsets from record start): bytes 0..4 version (unused),
//! 4..36 parent identity, 36..72 payload fields (unused), 72..76 work
//! proxy, little-endian. The record's own identity is not stored; it is
//! the double SHA-256 of all 80 bytes.

use crate::error::WireError;
use bestchain_crypto::hash_header;
use bestchain_types::{Header, HeaderHash};
use byteorder::{ByteOrder, LittleEndian};
use std::io::{ErrorKind, Read};

/// Size of one raw header record.
pub const HEADER_RECORD_LEN: usize = 80;

const PARENT_OFFSET: usize = 4;
const WORK_OFFSET: usize = 72;

/// Reads fixed-size header records off a byte stream until end-of-stream.
pub struct HeaderReader<R> {
    input: R,
}

impl<R: Read> HeaderReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Read the next record, or `None` at a clean end-of-stream.
    ///
    /// End-of-stream exactly on a record boundary ends input; a partial
    /// trailing record is reported as `TruncatedRecord`, never silently
    /// dropped.
    pub fn read_header(&mut self) -> Result<Option<Header>, WireError> {
        let mut record = [0u8; HEADER_RECORD_LEN];
        let mut filled = 0;

        while filled < HEADER_RECORD_LEN {
            let n = match self.input.read(&mut record[filled..]) {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if n == 0 {
                if filled == 0 {
                    return Ok(None);
                }
                return Err(WireError::TruncatedRecord {
                    got: filled,
                    expected: HEADER_RECORD_LEN,
                });
            }
            filled += n;
        }

        Ok(Some(decode_record(&record)))
    }
}

fn decode_record(record: &[u8; HEADER_RECORD_LEN]) -> Header {
    let id = hash_header(record);

    let mut parent = [0u8; 32];
    parent.copy_from_slice(&record[PARENT_OFFSET..PARENT_OFFSET + 32]);

    let work = LittleEndian::read_u32(&record[WORK_OFFSET..WORK_OFFSET + 4]);

    Header::new(id, HeaderHash::new(parent), work)
}
