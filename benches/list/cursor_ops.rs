use criterion::{BenchmarkId, Criterion};
use forwardlist_rs::ForwardList;
use std::hint::black_box;

/// Register benchmarks for the insert-after / erase-after protocol.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ForwardList - Cursor Operations");

    for &len in &[100, 1_000, 10_000] {
        // Interleave a new element after every existing one.
        group.bench_with_input(BenchmarkId::new("insert_after_each", len), &len, |b, &len| {
            b.iter_with_setup(
                || (0..len).collect::<ForwardList<u64>>(),
                |mut list| {
                    let mut cursor = list.begin_mut();
                    while let Some(value) = cursor.current().map(|value| *value) {
                        let _ = cursor.insert_after(black_box(value + 1));
                        let _ = cursor.move_next();
                    }
                    assert_eq!(list.len(), len as usize * 2);
                },
            );
        });

        // Drop every other element.
        group.bench_with_input(BenchmarkId::new("erase_after_odd", len), &len, |b, &len| {
            b.iter_with_setup(
                || (0..len).collect::<ForwardList<u64>>(),
                |mut list| {
                    let mut cursor = list.begin_mut();
                    while cursor.erase_after().is_ok() {
                        let _ = cursor.move_next();
                    }
                    black_box(list.len());
                },
            );
        });

        group.bench_with_input(BenchmarkId::new("cursor_walk", len), &len, |b, &len| {
            let list: ForwardList<u64> = (0..len).collect();
            b.iter(|| {
                let mut cursor = list.begin();
                let mut sum = 0u64;
                while let Some(value) = cursor.get() {
                    sum += value;
                    let _ = cursor.move_next();
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}
