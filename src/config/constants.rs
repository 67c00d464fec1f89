//! Application-wide constants and configuration defaults
//!
//! This module centralizes the scheduling knobs so they stay configurable
//! without becoming business logic. Values can be overridden via
//! environment variables.

use std::time::Duration;

// =============================================================================
// Update Cadences
// =============================================================================

/// Display-name update interval (default: 90 seconds)
///
/// The name tracks the spot price, which moves continuously, so it runs on
/// the shorter cadence. The interval is an empirical fit for the identity
/// store's tolerance, not a negotiated rate limit.
///
/// Environment variable: `NAME_UPDATE_INTERVAL_SECS`
pub fn name_update_interval() -> Duration {
    let secs = std::env::var("NAME_UPDATE_INTERVAL_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(90);
    Duration::from_secs(secs)
}

/// Status-line update interval (default: 300 seconds)
///
/// The status tracks the 24h aggregate, which moves slowly.
///
/// Environment variable: `STATUS_UPDATE_INTERVAL_SECS`
pub fn status_update_interval() -> Duration {
    let secs = std::env::var("STATUS_UPDATE_INTERVAL_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(300);
    Duration::from_secs(secs)
}

// =============================================================================
// Identity Store Behavior
// =============================================================================

/// Settle delay between clearing and re-setting the status (default: 500ms)
///
/// The remote identity store caches presence; clearing and immediately
/// re-setting gets coalesced into a no-op without this pause.
///
/// Environment variable: `STATUS_SETTLE_DELAY_MS`
pub fn status_settle_delay() -> Duration {
    let ms = std::env::var("STATUS_SETTLE_DELAY_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(500);
    Duration::from_millis(ms)
}

// =============================================================================
// HTTP Transport
// =============================================================================

/// Request timeout for outbound HTTP calls (default: 10 seconds)
///
/// Bounds every suspension point so a dead endpoint cannot stall a cycle
/// past its own tick.
///
/// Environment variable: `HTTP_TIMEOUT_SECS`
pub fn http_timeout() -> Duration {
    let secs = std::env::var("HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    Duration::from_secs(secs)
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Print all scheduling configuration values (for startup logs)
pub fn log_configuration() {
    tracing::info!("=== Scheduling Configuration ===");
    tracing::info!("  - Name update interval: {:?}", name_update_interval());
    tracing::info!("  - Status update interval: {:?}", status_update_interval());
    tracing::info!("  - Status settle delay: {:?}", status_settle_delay());
    tracing::info!("  - HTTP timeout: {:?}", http_timeout());
    tracing::info!("================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(env)]
    fn test_default_values() {
        std::env::remove_var("NAME_UPDATE_INTERVAL_SECS");
        std::env::remove_var("STATUS_UPDATE_INTERVAL_SECS");
        std::env::remove_var("STATUS_SETTLE_DELAY_MS");
        std::env::remove_var("HTTP_TIMEOUT_SECS");

        assert_eq!(name_update_interval(), Duration::from_secs(90));
        assert_eq!(status_update_interval(), Duration::from_secs(300));
        assert_eq!(status_settle_delay(), Duration::from_millis(500));
        assert_eq!(http_timeout(), Duration::from_secs(10));
    }

    #[test]
    #[serial(env)]
    fn test_env_override() {
        std::env::set_var("NAME_UPDATE_INTERVAL_SECS", "15");

        assert_eq!(name_update_interval(), Duration::from_secs(15));

        std::env::remove_var("NAME_UPDATE_INTERVAL_SECS");
    }
}
