mod cursor_ops;
mod front_ops;

use criterion::Criterion;

/// Register all forward list benchmarks.
pub fn register_benchmarks(c: &mut Criterion) {
    front_ops::register_benchmarks(c);
    cursor_ops::register_benchmarks(c);
}
