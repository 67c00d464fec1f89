//! CoinGecko quote source
//!
//! Fetches the simple price endpoint for one coin id. CoinGecko keys its
//! response by lower-case coin id (e.g. `bitcoin`), not an exchange
//! symbol, and returns plain JSON numbers rather than strings.
//!
//! Docs: https://docs.coingecko.com/reference/simple-price

use async_trait::async_trait;
use rust_decimal::prelude::FromPrimitive;
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
const COINGECKO_API_URL: &str = "https://api.coingecko.com";

/// Field carrying the USD price inside the per-coin object
const PRICE_FIELD: &str = "usd";

/// Field carrying the 24h percent change inside the per-coin object
const CHANGE_FIELD: &str = "usd_24h_change";

// =============================================================================
// CoinGeckoSource
// =============================================================================

/// CoinGecko quote source implementing the QuoteSource trait
pub struct CoinGeckoSource {
    client: reqwest::Client,
    base_url: String,
    coin_id: String,
    display_symbol: String,
}

impl CoinGeckoSource {
    /// Create a source for one coin id against the production API.
    ///
    /// The status-line label defaults to the upper-cased coin id unless
    /// `display_override` is given.
    pub fn new(coin_id: impl Into<String>, display_override: Option<String>) -> Self {
        Self::with_base_url(coin_id, display_override, COINGECKO_API_URL)
    }

    /// Create a source against an explicit base URL (tests, proxies).
    pub fn with_base_url(
        coin_id: impl Into<String>,
        display_override: Option<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let coin_id = coin_id.into();
        let display_symbol = display_override.unwrap_or_else(|| coin_id.to_uppercase());

        let client = reqwest::Client::builder()
            .timeout(http_timeout())
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            base_url: base_url.into(),
            coin_id,
            display_symbol,
        }
    }
}

/// Extract a numeric field from the per-coin object.
fn numeric_field(coin: &Value, name: &'static str) -> FetchResult<Decimal> {
    coin.get(name)
        .and_then(Value::as_f64)
        .and_then(Decimal::from_f64)
        .ok_or(FetchError::MissingField(name))
}

#[async_trait]
impl QuoteSource for CoinGeckoSource {
    async fn fetch_quote(&self) -> FetchResult<MarketQuote> {
        let url = format!(
            "{}/api/v3/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true",
            self.base_url, self.coin_id
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

        // Response is keyed by coin id: {"bitcoin": {"usd": ..., "usd_24h_change": ...}}
        let coin = value
            .get(&self.coin_id)
            .ok_or(FetchError::MissingField(PRICE_FIELD))?;

        let price = numeric_field(coin, PRICE_FIELD)?;
        let percent_change_24h = numeric_field(coin, CHANGE_FIELD)?;

        Ok(MarketQuote {
            price,
            percent_change_24h,
        })
    }

    fn source_name(&self) -> &'static str {
        "coingecko"
    }

    fn display_symbol(&self) -> &str {
        &self.display_symbol
    }
}

// ============================================================================
// Tests
// ============================================================================
