//! Identity updater with per-target failure isolation
//!
//! Applies formatted strings to the remote identity. Name updates are
//! target-scoped: one community failing never aborts the rest. Status
//! updates are cycle-scoped: one global value, one result.
//!
//! Log lines carry the resulting display value and the failure class,
//! never community identifiers.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::gateway::errors::UpdateError;
use crate::gateway::traits::IdentityGateway;
use crate::gateway::types::{IdentityTarget, TargetResult};

/// Applies display strings to the bot identity through a gateway
pub struct IdentityUpdater<G: IdentityGateway> {
    gateway: Arc<G>,
    settle_delay: Duration,
}

impl<G: IdentityGateway> IdentityUpdater<G> {
    pub fn new(gateway: Arc<G>, settle_delay: Duration) -> Self {
        Self {
            gateway,
            settle_delay,
        }
    }

    /// Set the display name across all targets, independently per target.
    ///
    /// Failures are classified and recorded; remaining targets are still
    /// processed. Returns one result per target, in input order.
    pub async fn set_name_per_target(
        &self,
        targets: &[IdentityTarget],
        name: &str,
    ) -> Vec<TargetResult> {
        let mut results = Vec::with_capacity(targets.len());

        for target in targets {
            let outcome = self.gateway.set_member_name(target, name).await;
            match &outcome {
                Ok(()) => {
                    info!(value = %name, "Display name applied");
                }
                Err(e) => {
                    warn!(value = %name, error = %e, "Display name update failed for one community");
                }
            }
            results.push(TargetResult {
                target: target.clone(),
                outcome,
            });
        }

        results
    }

    /// Replace the global status line.
    ///
    /// Clears the existing status first and waits out the settle delay —
    /// the identity store coalesces an immediate clear-and-set into a
    /// no-op otherwise.
    pub async fn set_status(&self, text: &str) -> Result<(), UpdateError> {
        self.gateway.clear_status().await?;
        tokio::time::sleep(self.settle_delay).await;
        self.gateway.set_status(text).await?;

        info!(value = %text, "Status applied");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::test_utils::{MockGateway, StatusOp};

    #[tokio::test]
    async fn test_partial_failure_isolation() {
        let gateway = Arc::new(MockGateway::denying(&["c-1", "c-2", "c-3"], &["c-2"]));
        let updater = IdentityUpdater::new(Arc::clone(&gateway), Duration::ZERO);

        let targets = gateway.list_targets().await.unwrap();
        let results = updater.set_name_per_target(&targets, "$1,234.50").await;

        assert_eq!(results.len(), 3);
        assert!(results[0].is_success());
        assert!(matches!(
            results[1].outcome,
            Err(UpdateError::PermissionDenied)
        ));
        assert!(results[2].is_success());

        // Targets 1 and 3 still received the update
        let applied = gateway.applied_names();
        assert_eq!(
            applied,
            vec![
                ("c-1".to_string(), "$1,234.50".to_string()),
                ("c-3".to_string(), "$1,234.50".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_target_list() {
        let gateway = Arc::new(MockGateway::new(&[]));
        let updater = IdentityUpdater::new(Arc::clone(&gateway), Duration::ZERO);

        let results = updater.set_name_per_target(&[], "$1.00").await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_set_status_clears_before_setting() {
        let gateway = Arc::new(MockGateway::new(&[]));
        let updater = IdentityUpdater::new(Arc::clone(&gateway), Duration::from_millis(10));

        updater.set_status("+3.26% BTCUSD").await.unwrap();

        assert_eq!(
            gateway.status_ops(),
            vec![StatusOp::Clear, StatusOp::Set("+3.26% BTCUSD".to_string())]
        );
    }

    #[tokio::test]
    async fn test_set_status_failure_is_single_result() {
        let mut mock = MockGateway::new(&[]);
        mock.fail_status = true;
        let gateway = Arc::new(mock);
        let updater = IdentityUpdater::new(Arc::clone(&gateway), Duration::ZERO);

        let err = updater.set_status("+0.00% BTCUSD").await.unwrap_err();
        assert!(matches!(err, UpdateError::Transient(_)));
        assert!(gateway.status_ops().is_empty());
    }
}
