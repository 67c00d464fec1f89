//! Identity gateway types

use serde::Deserialize;

use crate::gateway::errors::UpdateError;

/// One community membership whose display name the bot identity can alter.
///
/// Enumerated fresh on every name-update cycle — membership can change
/// between cycles, so targets are never cached.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityTarget {
    /// Community identifier. Logged nowhere — tenant-identifying.
    #[serde(rename = "id")]
    pub community_id: String,
    /// The bot's own member id within that community.
    pub bot_member_id: String,
}

/// Outcome of one display-name attempt against one target.
#[derive(Debug)]
pub struct TargetResult {
    pub target: IdentityTarget,
    pub outcome: Result<(), UpdateError>,
}

impl TargetResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}
