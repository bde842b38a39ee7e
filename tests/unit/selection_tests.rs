//! Best-order selection against a live controller

#[cfg(test)]
mod selection_tests {
    use crate::common::{Aggregation, Page, Pricing, order};
    use dex_orderbook::orderbook::SelectionState;
    use dex_orderbook::{MarketMode, OrderBookController, OrderBookError, OrderBookSnapshot, PairId};
    use std::sync::Arc;
    use uuid::Uuid;

    const SELECTED: u128 = 42;

    fn build(mode: MarketMode) -> (OrderBookController, Arc<Page>) {
        let aggregation = Arc::new(Aggregation::default());
        *aggregation.data.lock().unwrap() = vec![order(SELECTED, "BTC", Some("KMD"), "0.0004", "12")];
        let page = Arc::new(Page::new(mode));
        let mut controller =
            OrderBookController::new(aggregation, page.clone(), Arc::new(Pricing::new("", "")));
        controller.refresh_orderbook(OrderBookSnapshot::new(
            PairId::new("DOGE", "KMD"),
            1,
            Vec::new(),
            Vec::new(),
        ));
        (controller, page)
    }

    fn next_reset(controller: &mut OrderBookController, sequence: u64) {
        controller.reset_orderbook(OrderBookSnapshot::new(
            PairId::new("DOGE", "BTC"),
            sequence,
            Vec::new(),
            Vec::new(),
        ));
    }

    #[test]
    fn test_buy_mode_targets_rel_coin() {
        let (mut controller, page) = build(MarketMode::Buy);
        controller
            .select_best_order(&Uuid::from_u128(SELECTED).to_string())
            .unwrap();
        assert_eq!(page.rel_coin.lock().unwrap().as_deref(), Some("KMD"));
    }

    #[test]
    fn test_sell_mode_targets_coin() {
        let (mut controller, page) = build(MarketMode::Sell);
        controller
            .select_best_order(&Uuid::from_u128(SELECTED).to_string())
            .unwrap();
        assert_eq!(page.rel_coin.lock().unwrap().as_deref(), Some("BTC"));
    }

    #[test]
    fn test_pending_until_reset_then_empty() {
        let (mut controller, page) = build(MarketMode::Sell);
        controller
            .select_best_order(&Uuid::from_u128(SELECTED).to_string())
            .unwrap();
        assert!(controller.pending_selection().is_pending());

        next_reset(&mut controller, 2);

        let delivered = page.preferred.lock().unwrap().clone();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].coin, "BTC");
        assert_eq!(delivered[0].quantity, "12");
        assert_eq!(delivered[0].quantity_numer, "12");
        assert_eq!(controller.pending_selection(), &SelectionState::Empty);
    }

    #[test]
    fn test_rejected_switch_leaves_nothing_pending() {
        let (mut controller, page) = build(MarketMode::Buy);
        *page.accepts.lock().unwrap() = false;

        let result = controller.select_best_order(&Uuid::from_u128(SELECTED).to_string());

        assert_eq!(
            result,
            Err(OrderBookError::PairSwitchRejected {
                coin: "KMD".to_string()
            })
        );
        assert_eq!(controller.pending_selection(), &SelectionState::Empty);
        next_reset(&mut controller, 2);
        assert!(page.preferred.lock().unwrap().is_empty());
    }
}
