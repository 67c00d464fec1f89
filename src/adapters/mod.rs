//! Quote source adapters for Binance and CoinGecko
//!
//! This module provides the core abstractions for fetching one market
//! quote per call from a public exchange API. The scheduler is
//! parameterized over the `QuoteSource` trait, so swapping data sources
//! is a configuration change, not a code change.

pub mod binance;
pub mod coingecko;
pub mod errors;
pub mod factory;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use binance::BinanceSource;
pub use coingecko::CoinGeckoSource;
pub use errors::{FetchError, FetchResult};
pub use factory::{create_source, AnySource, SUPPORTED_SOURCES};
pub use traits::QuoteSource;
pub use types::MarketQuote;
