use criterion::{BenchmarkId, Criterion};
use forwardlist_rs::ForwardList;
use std::hint::black_box;

/// Register benchmarks for construction, front edits, cloning and clearing.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ForwardList - Front Operations");

    for &len in &[100, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("push_front", len), &len, |b, &len| {
            b.iter(|| {
                let mut list = ForwardList::new();
                for value in 0..len {
                    list.push_front(black_box(value));
                }
                list
            });
        });

        group.bench_with_input(BenchmarkId::new("from_iter", len), &len, |b, &len| {
            b.iter(|| black_box((0..len).collect::<ForwardList<u64>>()));
        });

        group.bench_with_input(BenchmarkId::new("pop_front_all", len), &len, |b, &len| {
            b.iter_with_setup(
                || (0..len).collect::<ForwardList<u64>>(),
                |mut list| {
                    while let Some(value) = list.pop_front() {
                        black_box(value);
                    }
                },
            );
        });

        group.bench_with_input(BenchmarkId::new("clone", len), &len, |b, &len| {
            let list: ForwardList<u64> = (0..len).collect();
            b.iter(|| black_box(list.clone()));
        });

        group.bench_with_input(BenchmarkId::new("clear", len), &len, |b, &len| {
            b.iter_with_setup(
                || (0..len).collect::<ForwardList<u64>>(),
                |mut list| {
                    list.clear();
                    assert!(list.is_empty());
                },
            );
        });
    }

    group.finish();
}
