//! Configuration loader for environment variables
//!
//! All settings are read once at startup from the process environment
//! (after `dotenvy` has merged an optional `.env` file in `main`).

use super::types::{AppConfig, ConfigError, GatewayConfig, QuoteSourceKind};

/// Load and validate the full application configuration from the environment.
///
/// Required:
/// - `BOT_TOKEN` — identity service credential
/// - `GATEWAY_HTTP_URL` — identity service REST base URL
/// - `GATEWAY_WS_URL` — identity service real-time endpoint
///
/// Optional:
/// - `QUOTE_SOURCE` — `binance` (default) or `coingecko`
/// - `TRADING_PAIR` — defaults per source (`BTCUSDT` / `bitcoin`)
/// - `DISPLAY_SYMBOL` — override for the status-line symbol suffix
/// - `QUOTE_API_URL` — override for the quote API base URL
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let token = require_env("BOT_TOKEN")?;
    let http_url = require_env("GATEWAY_HTTP_URL")?;
    let ws_url = require_env("GATEWAY_WS_URL")?;

    let quote_source = match std::env::var("QUOTE_SOURCE") {
        Ok(name) => QuoteSourceKind::parse(&name)?,
        Err(_) => QuoteSourceKind::Binance,
    };

    let trading_pair = std::env::var("TRADING_PAIR")
        .unwrap_or_else(|_| quote_source.default_pair().to_string());

    let display_symbol = std::env::var("DISPLAY_SYMBOL").ok().filter(|s| !s.is_empty());
    let quote_api_url = std::env::var("QUOTE_API_URL").ok().filter(|s| !s.is_empty());

    let config = AppConfig {
        quote_source,
        trading_pair,
        display_symbol,
        quote_api_url,
        gateway: GatewayConfig { token, http_url, ws_url },
    };

    config.validate()?;

    Ok(config)
}

fn require_env(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(var)),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_bot_env() {
        for var in [
            "BOT_TOKEN",
            "GATEWAY_HTTP_URL",
            "GATEWAY_WS_URL",
            "QUOTE_SOURCE",
            "TRADING_PAIR",
            "DISPLAY_SYMBOL",
            "QUOTE_API_URL",
        ] {
            std::env::remove_var(var);
        }
    }

    fn set_required_env() {
        std::env::set_var("BOT_TOKEN", "test-token");
        std::env::set_var("GATEWAY_HTTP_URL", "https://identity.example.test");
        std::env::set_var("GATEWAY_WS_URL", "wss://identity.example.test/rt");
    }

    #[test]
    #[serial(env)]
    fn test_load_config_missing_token() {
        clear_bot_env();
        std::env::set_var("GATEWAY_HTTP_URL", "https://identity.example.test");
        std::env::set_var("GATEWAY_WS_URL", "wss://identity.example.test/rt");

        let err = load_config().unwrap_err();
        assert!(err.to_string().contains("BOT_TOKEN"));

        clear_bot_env();
    }

    #[test]
    #[serial(env)]
    fn test_load_config_defaults() {
        clear_bot_env();
        set_required_env();

        let config = load_config().unwrap();
        assert_eq!(config.quote_source, QuoteSourceKind::Binance);
        assert_eq!(config.trading_pair, "BTCUSDT");
        assert!(config.display_symbol.is_none());
        assert!(config.quote_api_url.is_none());

        clear_bot_env();
    }

    #[test]
    #[serial(env)]
    fn test_load_config_coingecko_default_pair() {
        clear_bot_env();
        set_required_env();
        std::env::set_var("QUOTE_SOURCE", "coingecko");

        let config = load_config().unwrap();
        assert_eq!(config.quote_source, QuoteSourceKind::CoinGecko);
        assert_eq!(config.trading_pair, "bitcoin");

        clear_bot_env();
    }

    #[test]
    #[serial(env)]
    fn test_load_config_unknown_source() {
        clear_bot_env();
        set_required_env();
        std::env::set_var("QUOTE_SOURCE", "kraken");

        let err = load_config().unwrap_err();
        assert!(err.to_string().contains("QUOTE_SOURCE"));

        clear_bot_env();
    }

    #[test]
    #[serial(env)]
    fn test_load_config_explicit_pair_and_display() {
        clear_bot_env();
        set_required_env();
        std::env::set_var("TRADING_PAIR", "ETHUSDT");
        std::env::set_var("DISPLAY_SYMBOL", "ETHUSD");

        let config = load_config().unwrap();
        assert_eq!(config.trading_pair, "ETHUSDT");
        assert_eq!(config.display_symbol.as_deref(), Some("ETHUSD"));

        clear_bot_env();
    }
}
