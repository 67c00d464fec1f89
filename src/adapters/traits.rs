//! Quote source trait definition
//!
//! The QuoteSource trait defines the common interface that all
//! data-source adapters must implement. Each adapter owns its endpoint
//! schema: URL template, field names, and symbol format are
//! adapter-specific and never leak into the scheduler.

use async_trait::async_trait;

use crate::adapters::errors::FetchResult;
use crate::adapters::types::MarketQuote;

/// Common trait for all quote source adapters
///
/// One HTTP GET per `fetch_quote` call, no connection pooling beyond the
/// client's own, no retry: the next scheduled tick is the retry.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch a fresh quote for the configured trading pair.
    ///
    /// All failure paths return a classified `FetchError`; this method
    /// never panics.
    async fn fetch_quote(&self) -> FetchResult<MarketQuote>;

    /// The source name identifier ("binance", "coingecko", ...).
    fn source_name(&self) -> &'static str;

    /// Symbol label used as the status-line suffix (e.g. "BTCUSD").
    fn display_symbol(&self) -> &str;
}
