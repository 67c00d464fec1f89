//! Application-wide error types using thiserror
//!
//! All errors in the application should be wrapped in AppError
//! to provide consistent error handling across the codebase.

use thiserror::Error;

use crate::adapters::errors::FetchError;
use crate::config::ConfigError;
use crate::gateway::errors::{GatewayError, UpdateError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Quote fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Identity update error: {0}")]
    Update(#[from] UpdateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
