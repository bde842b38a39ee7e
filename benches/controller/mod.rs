pub mod snapshots;

pub fn register_benchmarks(c: &mut criterion::Criterion) {
    snapshots::register_benchmarks(c);
}
