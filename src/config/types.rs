//! Configuration types and validation

use thiserror::Error;

/// Errors raised while loading or validating configuration.
///
/// Any of these is fatal: the process logs the error and exits non-zero
/// before any task is started.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Which quote source adapter to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSourceKind {
    Binance,
    CoinGecko,
}

impl QuoteSourceKind {
    /// Parse a `QUOTE_SOURCE` value. Case-insensitive.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "binance" => Ok(Self::Binance),
            "coingecko" => Ok(Self::CoinGecko),
            other => Err(ConfigError::InvalidValue {
                var: "QUOTE_SOURCE",
                reason: format!("unknown source '{}', expected one of: binance, coingecko", other),
            }),
        }
    }

    /// Default trading pair in this source's symbol format.
    pub fn default_pair(&self) -> &'static str {
        match self {
            Self::Binance => "BTCUSDT",
            Self::CoinGecko => "bitcoin",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binance => "binance",
            Self::CoinGecko => "coingecko",
        }
    }
}

/// Endpoints and credential for the remote identity service.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bot credential, sent as `Authorization: Bot <token>` on REST calls
    /// and inside the identify payload on the real-time session.
    pub token: String,
    /// Base URL of the identity service REST surface.
    pub http_url: String,
    /// URL of the identity service real-time WebSocket endpoint.
    pub ws_url: String,
}

/// Root application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Quote source adapter selection.
    pub quote_source: QuoteSourceKind,
    /// Trading pair in the selected source's format
    /// (Binance: `BTCUSDT`; CoinGecko: coin id, e.g. `bitcoin`).
    pub trading_pair: String,
    /// Optional override for the status-line symbol suffix.
    pub display_symbol: Option<String>,
    /// Optional override for the quote API base URL (tests, proxies).
    pub quote_api_url: Option<String>,
    /// Identity service connection settings.
    pub gateway: GatewayConfig,
}

impl AppConfig {
    /// Validate configuration rules beyond presence checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trading_pair.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "TRADING_PAIR",
                reason: "must not be empty".to_string(),
            });
        }
        if self.gateway.token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "BOT_TOKEN",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
