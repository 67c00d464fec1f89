//! Identity gateway trait definition
//!
//! The IdentityGateway trait defines the interface the scheduler and
//! updater need from the remote identity service. The concrete transport
//! (which chat protocol, REST vs socket per operation) stays behind it.

use async_trait::async_trait;

use crate::gateway::errors::{GatewayError, UpdateError};
use crate::gateway::types::IdentityTarget;

/// Common trait for identity service clients
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Resolve once the session is usable.
    ///
    /// Fired exactly once per connection; callers started before the
    /// ready event block here, callers started after return immediately.
    async fn wait_until_ready(&self);

    /// Enumerate current community memberships, fresh at call time.
    async fn list_targets(&self) -> Result<Vec<IdentityTarget>, GatewayError>;

    /// Set the bot's display name within one community.
    async fn set_member_name(
        &self,
        target: &IdentityTarget,
        name: &str,
    ) -> Result<(), UpdateError>;

    /// Clear the bot's global status line.
    async fn clear_status(&self) -> Result<(), UpdateError>;

    /// Set the bot's global status line.
    async fn set_status(&self, text: &str) -> Result<(), UpdateError>;
}
