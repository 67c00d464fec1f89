//! Identity gateway error types

use thiserror::Error;

/// Failures of the gateway session or target enumeration.
///
/// Fatal only at startup; once connected, the transport owns
/// reconnection and a failed enumeration is cycle-scoped.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Establishing the real-time session failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The service rejected the bot credential
    #[error("Authentication rejected: {0}")]
    AuthRejected(String),

    /// Invalid or unexpected response from the identity service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// WebSocket protocol error (boxed to reduce enum size)
    #[error("WebSocket error: {0}")]
    WebSocket(Box<tokio_tungstenite::tungstenite::Error>),

    /// Network error on the REST surface
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Classified failure of a single identity mutation.
///
/// Target-scoped for display-name updates (one per community),
/// cycle-scoped for status updates (one global value).
#[derive(Error, Debug)]
pub enum UpdateError {
    /// The bot lacks permission to alter this identity facet
    #[error("Permission denied")]
    PermissionDenied,

    /// The target community no longer exists or the bot was removed
    #[error("Target gone")]
    TargetGone,

    /// Transient remote failure; the next cycle retries naturally
    #[error("Transient update failure: {0}")]
    Transient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_display() {
        let err = GatewayError::ConnectionFailed("timeout".to_string());
        assert_eq!(err.to_string(), "Connection failed: timeout");
    }

    #[test]
    fn test_update_error_display() {
        assert_eq!(UpdateError::PermissionDenied.to_string(), "Permission denied");
        assert_eq!(UpdateError::TargetGone.to_string(), "Target gone");
        assert_eq!(
            UpdateError::Transient("status 502".to_string()).to_string(),
            "Transient update failure: status 502"
        );
    }
}
