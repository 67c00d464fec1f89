//! Quote source factory for dynamic adapter selection
//!
//! Creates `QuoteSource` instances from configuration. Uses an enum-based
//! dispatch pattern (no `Box<dyn>`) to preserve monomorphization.

use async_trait::async_trait;

use crate::adapters::binance::BinanceSource;
use crate::adapters::coingecko::CoinGeckoSource;
use crate::adapters::errors::FetchResult;
use crate::adapters::traits::QuoteSource;
use crate::adapters::types::MarketQuote;
use crate::config::{AppConfig, QuoteSourceKind};

// =============================================================================
// AnySource — enum-based dispatch for dynamic source selection
// =============================================================================

/// Enum wrapping all concrete source types for runtime dispatch.
pub enum AnySource {
    Binance(BinanceSource),
    CoinGecko(CoinGeckoSource),
}

#[async_trait]
impl QuoteSource for AnySource {
    async fn fetch_quote(&self) -> FetchResult<MarketQuote> {
        match self {
            AnySource::Binance(s) => s.fetch_quote().await,
            AnySource::CoinGecko(s) => s.fetch_quote().await,
        }
    }

    fn source_name(&self) -> &'static str {
        match self {
            AnySource::Binance(s) => s.source_name(),
            AnySource::CoinGecko(s) => s.source_name(),
        }
    }

    fn display_symbol(&self) -> &str {
        match self {
            AnySource::Binance(s) => s.display_symbol(),
            AnySource::CoinGecko(s) => s.display_symbol(),
        }
    }
}

// =============================================================================
// Factory Functions
// =============================================================================

/// All supported quote source names.
pub const SUPPORTED_SOURCES: &[&str] = &["binance", "coingecko"];

/// Create a quote source from the loaded configuration.
pub fn create_source(config: &AppConfig) -> AnySource {
    let display = config.display_symbol.clone();
    match config.quote_source {
        QuoteSourceKind::Binance => match &config.quote_api_url {
            Some(base) => AnySource::Binance(BinanceSource::with_base_url(
                config.trading_pair.clone(),
                display,
                base.clone(),
            )),
            None => AnySource::Binance(BinanceSource::new(config.trading_pair.clone(), display)),
        },
        QuoteSourceKind::CoinGecko => match &config.quote_api_url {
            Some(base) => AnySource::CoinGecko(CoinGeckoSource::with_base_url(
                config.trading_pair.clone(),
                display,
                base.clone(),
            )),
            None => AnySource::CoinGecko(CoinGeckoSource::new(config.trading_pair.clone(), display)),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
