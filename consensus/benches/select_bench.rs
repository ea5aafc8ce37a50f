use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bestchain_consensus::select_best;
use bestchain_store::HeaderStore;
use bestchain_types::{Header, HeaderHash};

fn hash(n: u32) -> HeaderHash {
    let mut bytes = [0u8; 32];
    bytes[..4].copy_from_slice(&n.to_le_bytes());
    HeaderHash::new(bytes)
}

/// A linear chain of `len` headers with a fork of `len / 10` headers
/// branching off the midpoint — the memoized accumulator's typical shape.
fn forked_store(len: u32) -> HeaderStore {
    let mut store = HeaderStore::new();
    let mut parent = HeaderHash::ZERO;
    for i in 1..=len {
        let h = Header::new(hash(i), parent, 1);
        parent = h.id;
        store.put(h);
    }

    let mut parent = hash(len / 2);
    for i in 1..=len / 10 {
        let h = Header::new(hash(len + i), parent, 1);
        parent = h.id;
        store.put(h);
    }
    store
}

fn bench_select_best(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_best");

    for len in [1_000u32, 10_000, 50_000] {
        let store = forked_store(len);
        group.bench_with_input(BenchmarkId::new("forked_chain", len), &store, |b, store| {
            b.iter(|| black_box(select_best(black_box(store)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select_best);
criterion_main!(benches);
