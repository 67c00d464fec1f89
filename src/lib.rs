//! Ticker Presence Bot
//!
//! Mirrors a market price quote into a chat-presence identity:
//! - Quote source adapters (Binance, CoinGecko)
//! - Dual-cadence scheduler (display name + status line)
//! - Identity gateway client with per-target failure isolation

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod gateway;

pub use error::AppError;
