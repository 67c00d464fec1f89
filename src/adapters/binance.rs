//! Binance quote source
//!
//! Fetches the 24hr ticker for one symbol from the Binance public REST
//! API. Symbols are upper-case concatenated pairs (e.g. `BTCUSDT`).
//!
//! Docs: https://binance-docs.github.io/apidocs/spot/en/#24hr-ticker-price-change-statistics

use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::adapters::errors::{FetchError, FetchResult};
use crate::adapters::traits::QuoteSource;
use crate::adapters::types::MarketQuote;
use crate::config::constants::http_timeout;

// =============================================================================
// Constants
// =============================================================================

/// Production REST base URL
const BINANCE_API_URL: &str = "https://api.binance.com";

/// Field carrying the last traded price (string-encoded decimal)
const PRICE_FIELD: &str = "lastPrice";

/// Field carrying the 24h percent change (string-encoded decimal)
const CHANGE_FIELD: &str = "priceChangePercent";

// =============================================================================
// BinanceSource
// =============================================================================

/// Binance quote source implementing the QuoteSource trait
pub struct BinanceSource {
    client: reqwest::Client,
    base_url: String,
    symbol: String,
    display_symbol: String,
}

impl BinanceSource {
    /// Create a source for one trading pair against the production API.
    ///
    /// The status-line label derives from the pair (`BTCUSDT` → `BTCUSD`)
    /// unless `display_override` is given.
    pub fn new(symbol: impl Into<String>, display_override: Option<String>) -> Self {
        Self::with_base_url(symbol, display_override, BINANCE_API_URL)
    }

    /// Create a source against an explicit base URL (tests, proxies).
    pub fn with_base_url(
        symbol: impl Into<String>,
        display_override: Option<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let symbol = symbol.into();
        let display_symbol = display_override.unwrap_or_else(|| derive_display_symbol(&symbol));

        let client = reqwest::Client::builder()
            .timeout(http_timeout())
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            base_url: base_url.into(),
            symbol,
            display_symbol,
        }
    }
}

/// `BTCUSDT` → `BTCUSD`; pairs without the USDT suffix are kept as-is.
fn derive_display_symbol(symbol: &str) -> String {
    match symbol.strip_suffix("USDT") {
        Some(base) => format!("{}USD", base),
        None => symbol.to_string(),
    }
}

/// Extract a string-encoded decimal field from the ticker body.
fn decimal_field(value: &Value, name: &'static str) -> FetchResult<Decimal> {
    value
        .get(name)
        .and_then(Value::as_str)
        .and_then(|s| Decimal::from_str(s).ok())
        .ok_or(FetchError::MissingField(name))
}

#[async_trait]
impl QuoteSource for BinanceSource {
    async fn fetch_quote(&self) -> FetchResult<MarketQuote> {
        let url = format!(
            "{}/api/v3/ticker/24hr?symbol={}",
            self.base_url, self.symbol
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let value: Value =
            serde_json::from_str(&body).map_err(|_| FetchError::MissingField(PRICE_FIELD))?;

        let price = decimal_field(&value, PRICE_FIELD)?;
        let percent_change_24h = decimal_field(&value, CHANGE_FIELD)?;

        Ok(MarketQuote {
            price,
            percent_change_24h,
        })
    }

    fn source_name(&self) -> &'static str {
        "binance"
    }

    fn display_symbol(&self) -> &str {
        &self.display_symbol
    }
}

// ============================================================================
// Tests
// ============================================================================
