//! Taker volume bounds derived from the pricing service

use super::collaborators::{MarketMode, PricingProvider};
use super::events::{ChangeEvent, Notifier};
use crate::utils::{format_decimal, safe_decimal};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Maximum volume on one leg, both as a fraction and as decimal text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegBound {
    /// Fraction denominator
    pub denom: String,
    /// Fraction numerator
    pub numer: String,
    /// Decimal rendering of the same amount
    pub decimal: String,
}

impl LegBound {
    /// Create a bound from its three textual parts
    pub fn new(
        denom: impl Into<String>,
        numer: impl Into<String>,
        decimal: impl Into<String>,
    ) -> Self {
        Self {
            denom: denom.into(),
            numer: numer.into(),
            decimal: decimal.into(),
        }
    }
}

/// Minimum trading volume of one leg
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinVolInfo {
    /// Decimal text; may be empty when the engine has not reported one
    pub min_trading_vol: String,
}

impl MinVolInfo {
    /// Create a minimum volume record
    pub fn new(min_trading_vol: impl Into<String>) -> Self {
        Self {
            min_trading_vol: min_trading_vol.into(),
        }
    }
}

/// The four stored bounds. Everything is empty until first computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeBounds {
    /// Maximum taker volume on the base leg
    pub base_max: LegBound,
    /// Maximum taker volume on the rel leg
    pub rel_max: LegBound,
    /// Minimum taker volume on the base leg
    pub base_min: String,
    /// Minimum taker volume on the rel leg
    pub rel_min: String,
}

fn zero_if_empty(value: &str) -> &str {
    if value.is_empty() { "0" } else { value }
}

/// Caches the bounds reported by the pricing service and derives the minimum
/// threshold shown to the user.
#[derive(Debug, Clone, Default)]
pub struct VolumeBoundsCalculator {
    bounds: VolumeBounds,
}

impl VolumeBoundsCalculator {
    /// Create a calculator with empty bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored bounds
    pub fn bounds(&self) -> &VolumeBounds {
        &self.bounds
    }

    /// Maximum taker volume on the base leg
    pub fn base_max_taker_vol(&self) -> &LegBound {
        &self.bounds.base_max
    }

    /// Maximum taker volume on the rel leg
    pub fn rel_max_taker_vol(&self) -> &LegBound {
        &self.bounds.rel_max
    }

    /// Minimum taker volume on the base leg, `"0"` when unset
    pub fn base_min_taker_vol(&self) -> &str {
        zero_if_empty(&self.bounds.base_min)
    }

    /// Minimum taker volume on the rel leg, `"0"` when unset
    pub fn rel_min_taker_vol(&self) -> &str {
        zero_if_empty(&self.bounds.rel_min)
    }

    /// Refresh all four bounds from the pricing service.
    ///
    /// Each field is assigned and then notified before the next one is
    /// touched: base max, rel max, base min, rel min. A final
    /// [`ChangeEvent::CurrentMinTakerVol`] closes the sequence.
    pub fn set_both_taker_vol(&mut self, pricing: &dyn PricingProvider, notifier: &mut Notifier) {
        let (base, rel) = pricing.taker_vol();
        self.bounds.base_max = base;
        notifier.publish(ChangeEvent::BaseMaxTakerVol);
        self.bounds.rel_max = rel;
        notifier.publish(ChangeEvent::RelMaxTakerVol);

        let (min_base, min_rel) = pricing.min_vol();
        self.bounds.base_min = min_base.min_trading_vol;
        notifier.publish(ChangeEvent::BaseMinTakerVol);
        self.bounds.rel_min = min_rel.min_trading_vol;
        notifier.publish(ChangeEvent::RelMinTakerVol);

        notifier.publish(ChangeEvent::CurrentMinTakerVol);
        debug!(
            "taker volume bounds: base max {}, rel max {}, base min {}, rel min {}",
            self.bounds.base_max.decimal,
            self.bounds.rel_max.decimal,
            self.base_min_taker_vol(),
            self.rel_min_taker_vol()
        );
    }

    /// Minimum amount the user must trade at `price`, as canonical text.
    ///
    /// Uses the rel minimum in [`MarketMode::Buy`] and the base minimum
    /// otherwise. Unset or malformed numbers count as zero.
    pub fn current_min_taker_vol(&self, mode: MarketMode, price: &str) -> String {
        let minimum = match mode {
            MarketMode::Buy => safe_decimal(&self.bounds.rel_min),
            MarketMode::Sell => safe_decimal(&self.bounds.base_min),
        };
        let price = safe_decimal(price);

        let threshold = minimum.checked_mul(price).unwrap_or_else(|| {
            warn!("Minimum taker volume overflow: {} x {}", minimum, price);
            Decimal::ZERO
        });
        format_decimal(threshold)
    }
}
