use criterion::{criterion_group, criterion_main};

mod collection;
mod controller;

use collection::register_benchmarks as register_collection_benchmarks;
use controller::register_benchmarks as register_controller_benchmarks;

criterion_group!(
    benches,
    register_collection_benchmarks,
    register_controller_benchmarks,
);

criterion_main!(benches);
