//! Pipeline orchestration for the `bestchain` binary.
//!
//! Wires the workspace crates together: decode header records from the
//! input stream, populate the store, select the best chain, and emit the
//! height-indexed table. Diagnostics go to tracing (stderr); records go
//! to the output stream.

use anyhow::Context;
use bestchain_consensus::{find_tips, height_index, select_best};
use bestchain_store::HeaderStore;
use bestchain_types::HeaderHash;
use bestchain_wire::{write_height_index, HeaderReader};
use std::io::{Read, Write};

/// What one run read and selected, for diagnostics and tests.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Records decoded from the input stream.
    pub headers_read: usize,
    /// Distinct headers after dedup by id.
    pub headers_stored: usize,
    /// Chain tips found — diagnostic, not selection input.
    pub tips: usize,
    /// Height of the selected chain (root = 0).
    pub height: usize,
    pub root: HeaderHash,
    pub tip: HeaderHash,
}

/// Run the full pipeline: header records in, height records out.
pub fn run<R: Read, W: Write>(input: R, output: &mut W) -> anyhow::Result<RunSummary> {
    let mut store = HeaderStore::new();
    let mut reader = HeaderReader::new(input);

    let mut headers_read = 0usize;
    while let Some(header) = reader.read_header().context("reading header records")? {
        store.put(header);
        headers_read += 1;
    }
    tracing::info!("read {} headers", headers_read);
    tracing::info!("stored {} headers after dedup", store.len());

    let tip_count = find_tips(&store).len();
    tracing::info!("found {} chain tips", tip_count);

    let chain = select_best(&store).context("selecting best chain")?;
    tracing::info!(
        "best chain: height {}, root {}, tip {}",
        chain.height(),
        chain.root().id,
        chain.tip().id,
    );

    let index = height_index(&chain);
    write_height_index(output, &index).context("writing height records")?;

    Ok(RunSummary {
        headers_read,
        headers_stored: store.len(),
        tips: tip_count,
        height: chain.height(),
        root: chain.root().id,
        tip: chain.tip().id,
    })
}
