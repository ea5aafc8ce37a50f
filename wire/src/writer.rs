//! Encoding of the height-indexed output table.

use crate::error::WireError;
use bestchain_types::HeaderHash;
use byteorder::{LittleEndian, WriteBytesExt};
use std::collections::BTreeMap;
use std::io::Write;

/// Size of one output record: 32-byte identity plus 4-byte height.
pub const HEIGHT_RECORD_LEN: usize = 36;

/// Write each `(id, height)` pair as a fixed 36-byte record, ascending by
/// id — the ordered map's iteration order.
pub fn write_height_index<W: Write>(
    output: &mut W,
    index: &BTreeMap<HeaderHash, i32>,
) -> Result<(), WireError> {
    for (id, height) in index {
        output.write_all(id.as_bytes())?;
        output.write_i32::<LittleEndian>(*height)?;
    }
    output.flush()?;
    Ok(())
}
