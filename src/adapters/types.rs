//! Shared quote source types

use rust_decimal::Decimal;

/// A snapshot price and 24-hour percent change for one trading pair.
///
/// Produced fresh each fetch cycle, consumed by the formatter, and
/// discarded. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketQuote {
    /// Last traded price in the quote currency.
    pub price: Decimal,
    /// Percent change over the trailing 24 hours (e.g. `-2.5` for -2.5%).
    pub percent_change_24h: Decimal,
}
