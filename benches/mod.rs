use criterion::{criterion_group, criterion_main};

mod list;

use list::register_benchmarks as register_list_benchmarks;
use serialization::register_benchmarks as register_serialization_benchmarks;

// Define the benchmark groups
criterion_group!(
    benches,
    register_list_benchmarks,
    register_serialization_benchmarks,
);

criterion_main!(benches);
