//! End-to-end pipeline tests: raw header records in, height records out.

use bestchain_cli::run;
use bestchain_crypto::hash_header;
use bestchain_types::HeaderHash;
use std::io::{Cursor, Read, Seek, SeekFrom};

fn record(parent: &[u8; 32], work: u32, tag: u8) -> [u8; 80] {
    let mut record = [0u8; 80];
    record[0] = tag; // version slot, keeps otherwise-equal records distinct
    record[4..36].copy_from_slice(parent);
    record[72..76].copy_from_slice(&work.to_le_bytes());
    record
}

/// The three-header scenario: A (no parent, work 10), B (parent A, work 5),
/// C (parent A, work 20). Best chain is [A, C].
fn abc_scenario() -> (Vec<u8>, HeaderHash, HeaderHash, HeaderHash) {
    let a = record(&[0u8; 32], 10, 1);
    let a_id = hash_header(&a);
    let b = record(a_id.as_bytes(), 5, 2);
    let c = record(a_id.as_bytes(), 20, 3);

    let mut input = Vec::new();
    input.extend_from_slice(&a);
    input.extend_from_slice(&b);
    input.extend_from_slice(&c);
    (input, a_id, hash_header(&b), hash_header(&c))
}

#[test]
fn selects_heavier_branch_and_sorts_output() {
    let (input, a_id, _b_id, c_id) = abc_scenario();

    let mut output = Vec::new();
    let summary = run(Cursor::new(input), &mut output).unwrap();

    assert_eq!(summary.headers_read, 3);
    assert_eq!(summary.headers_stored, 3);
    assert_eq!(summary.tips, 2);
    assert_eq!(summary.height, 1);
    assert_eq!(summary.root, a_id);
    assert_eq!(summary.tip, c_id);

    // Two 36-byte records, ascending by id: (A, 0) and (C, 1) in whichever
    // identity order the hashes happen to sort.
    assert_eq!(output.len(), 72);
    let mut expected = vec![(a_id, 0i32), (c_id, 1i32)];
    expected.sort_by_key(|(id, _)| *id);

    for (i, (id, height)) in expected.iter().enumerate() {
        let at = i * 36;
        assert_eq!(&output[at..at + 32], id.as_bytes());
        assert_eq!(&output[at + 32..at + 36], &height.to_le_bytes());
    }
}

#[test]
fn duplicate_records_dedup_by_id() {
    let a = record(&[0u8; 32], 10, 1);
    let mut input = Vec::new();
    input.extend_from_slice(&a);
    input.extend_from_slice(&a);

    let mut output = Vec::new();
    let summary = run(Cursor::new(input), &mut output).unwrap();

    assert_eq!(summary.headers_read, 2);
    assert_eq!(summary.headers_stored, 1);
    assert_eq!(summary.height, 0);
    assert_eq!(output.len(), 36);
}

#[test]
fn empty_input_reports_no_chain() {
    let mut output = Vec::new();
    let err = run(Cursor::new(Vec::new()), &mut output).unwrap_err();
    assert!(format!("{err:#}").contains("empty"));
    assert!(output.is_empty());
}

#[test]
fn truncated_trailing_record_is_reported() {
    let (mut input, ..) = abc_scenario();
    input.extend_from_slice(&[0u8; 17]);

    let mut output = Vec::new();
    let err = run(Cursor::new(input), &mut output).unwrap_err();
    assert!(format!("{err:#}").contains("truncated"));
}

#[test]
fn runs_against_real_files() {
    let (input, _a_id, _b_id, c_id) = abc_scenario();

    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("headers.bin");
    std::fs::write(&input_path, &input).unwrap();

    let mut output = tempfile::tempfile().unwrap();
    let summary = run(std::fs::File::open(&input_path).unwrap(), &mut output).unwrap();
    assert_eq!(summary.tip, c_id);

    output.seek(SeekFrom::Start(0)).unwrap();
    let mut written = Vec::new();
    output.read_to_end(&mut written).unwrap();
    assert_eq!(written.len(), 72);
}

#[test]
fn single_chain_heights_are_consecutive() {
    // A <- B <- C linear chain.
    let a = record(&[0u8; 32], 1, 1);
    let a_id = hash_header(&a);
    let b = record(a_id.as_bytes(), 1, 2);
    let b_id = hash_header(&b);
    let c = record(b_id.as_bytes(), 1, 3);
    let c_id = hash_header(&c);

    let mut input = Vec::new();
    for r in [&a, &b, &c] {
        input.extend_from_slice(r);
    }

    let mut output = Vec::new();
    let summary = run(Cursor::new(input), &mut output).unwrap();

    assert_eq!(summary.tips, 1);
    assert_eq!(summary.height, 2);
    assert_eq!(summary.root, a_id);
    assert_eq!(summary.tip, c_id);

    // Decode the table and check each header got its chain index.
    let mut heights = std::collections::HashMap::new();
    for chunk in output.chunks(36) {
        let mut id = [0u8; 32];
        id.copy_from_slice(&chunk[..32]);
        let height = i32::from_le_bytes([chunk[32], chunk[33], chunk[34], chunk[35]]);
        heights.insert(HeaderHash::new(id), height);
    }
    assert_eq!(heights[&a_id], 0);
    assert_eq!(heights[&b_id], 1);
    assert_eq!(heights[&c_id], 2);
}
