//! Volume bounds seen from the controller

#[cfg(test)]
mod volume_tests {
    use crate::common::{Aggregation, Page, Pricing};
    use dex_orderbook::{ChangeEvent, MarketMode, OrderBookController, OrderBookSnapshot, PairId};
    use std::sync::Arc;

    fn build(mode: MarketMode, base_min: &str, rel_min: &str, price: &str) -> OrderBookController {
        let page = Page::new(mode);
        *page.price.lock().unwrap() = price.to_string();
        let mut controller = OrderBookController::new(
            Arc::new(Aggregation::default()),
            Arc::new(page),
            Arc::new(Pricing::new(base_min, rel_min)),
        );
        controller.refresh_orderbook(OrderBookSnapshot::new(
            PairId::new("KMD", "BTC"),
            1,
            Vec::new(),
            Vec::new(),
        ));
        controller
    }

    #[test]
    fn test_minimum_times_price() {
        let controller = build(MarketMode::Sell, "2.5", "7", "10");
        assert_eq!(controller.current_min_taker_vol(), "25");
    }

    #[test]
    fn test_buy_mode_uses_rel_minimum() {
        let controller = build(MarketMode::Buy, "7", "2.5", "10");
        assert_eq!(controller.current_min_taker_vol(), "25");
    }

    #[test]
    fn test_empty_minimum_falls_back_to_zero() {
        let controller = build(MarketMode::Sell, "", "7", "10");
        assert_eq!(controller.current_min_taker_vol(), "0");
        assert_eq!(controller.base_min_taker_vol(), "0");
        assert_eq!(controller.rel_min_taker_vol(), "7");
    }

    #[test]
    fn test_max_bounds_exposed() {
        let controller = build(MarketMode::Sell, "1", "1", "1");
        let bounds = controller.volume_bounds();
        assert_eq!(bounds.base_max.decimal, "100");
        assert_eq!(bounds.rel_max.numer, "2");
        assert_eq!(bounds.base_min, "1");
    }

    #[test]
    fn test_bound_notifications_follow_row_events() {
        let mut controller = build(MarketMode::Sell, "1", "1", "1");
        let events = controller.subscribe();
        controller.refresh_orderbook(OrderBookSnapshot::new(
            PairId::new("KMD", "BTC"),
            2,
            Vec::new(),
            Vec::new(),
        ));

        let tail: Vec<ChangeEvent> = events
            .try_iter()
            .filter(|e| e.book_kind().is_none())
            .collect();
        assert_eq!(
            tail,
            vec![
                ChangeEvent::BaseMaxTakerVol,
                ChangeEvent::RelMaxTakerVol,
                ChangeEvent::BaseMinTakerVol,
                ChangeEvent::RelMinTakerVol,
                ChangeEvent::CurrentMinTakerVol,
            ]
        );
    }
}
