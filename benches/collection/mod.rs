pub mod refresh;
pub mod reset;

pub fn register_benchmarks(c: &mut criterion::Criterion) {
    refresh::register_benchmarks(c);
    reset::register_benchmarks(c);
}

use dex_orderbook::orderbook::{Fraction, OrderEntry};
use uuid::Uuid;

/// `count` asks starting at key `start`, priced upward from 0.001
pub fn side(start: u128, count: u128) -> Vec<OrderEntry> {
    (start..start + count)
        .map(|n| {
            let price = format!("0.{:06}", 1000 + n);
            OrderEntry::new(
                Uuid::from_u128(n),
                "KMD",
                price.clone(),
                Fraction::new(price, "1"),
                "10",
                Fraction::new("10", "1"),
            )
        })
        .collect()
}
