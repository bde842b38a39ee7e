//! Decimal helpers for the numeric strings handed over by the quoting engine.
//!
//! Every amount on the wire is text. Reconciliation must never abort because
//! of one malformed value, so parsing degrades to zero instead of failing.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

/// Parse a decimal string, falling back to zero.
///
/// Empty (or whitespace only) input is a silent zero. Plain and scientific
/// notation are both accepted; anything else is logged and read as zero.
pub fn safe_decimal(text: &str) -> Decimal {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or_else(|err| {
            warn!("Malformed decimal '{}', using 0: {}", trimmed, err);
            Decimal::ZERO
        })
}

/// Format a decimal as canonical text: no trailing zeros, no exponent.
pub fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

/// `true` when the text parses to a value strictly greater than zero
pub fn is_positive(text: &str) -> bool {
    safe_decimal(text) > Decimal::ZERO
}
