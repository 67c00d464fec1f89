//! Shared test utilities for gateway-dependent tests
//!
//! Provides a configurable `MockGateway` so updater and scheduler tests
//! don't each carry their own trait impl.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::gateway::errors::{GatewayError, UpdateError};
use crate::gateway::traits::IdentityGateway;
use crate::gateway::types::IdentityTarget;

/// A recorded status operation, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOp {
    Clear,
    Set(String),
}

/// Configurable mock identity gateway
///
/// Always ready; records every mutation; individual communities can be
/// configured to fail with a specific classification; operations can be
/// slowed down for overlap tests.
pub struct MockGateway {
    pub targets: Mutex<Vec<IdentityTarget>>,
    /// Communities answering PermissionDenied on name updates
    pub deny_communities: Vec<String>,
    /// Communities answering TargetGone on name updates
    pub gone_communities: Vec<String>,
    /// Applied (community_id, name) pairs, in call order
    pub applied_names: Mutex<Vec<(String, String)>>,
    /// Status operations, in call order
    pub status_ops: Mutex<Vec<StatusOp>>,
    /// When true, status operations fail with Transient
    pub fail_status: bool,
    /// Artificial latency per mutation
    pub op_delay: Duration,
}

impl MockGateway {
    pub fn new(community_ids: &[&str]) -> Self {
        let targets = community_ids
            .iter()
            .map(|id| IdentityTarget {
                community_id: id.to_string(),
                bot_member_id: format!("member-of-{}", id),
            })
            .collect();
        Self {
            targets: Mutex::new(targets),
            deny_communities: Vec::new(),
            gone_communities: Vec::new(),
            applied_names: Mutex::new(Vec::new()),
            status_ops: Mutex::new(Vec::new()),
            fail_status: false,
            op_delay: Duration::ZERO,
        }
    }

    pub fn denying(community_ids: &[&str], denied: &[&str]) -> Self {
        let mut mock = Self::new(community_ids);
        mock.deny_communities = denied.iter().map(|s| s.to_string()).collect();
        mock
    }

    pub fn applied_names(&self) -> Vec<(String, String)> {
        self.applied_names.lock().unwrap().clone()
    }

    pub fn status_ops(&self) -> Vec<StatusOp> {
        self.status_ops.lock().unwrap().clone()
    }

    async fn simulate_latency(&self) {
        if self.op_delay > Duration::ZERO {
            tokio::time::sleep(self.op_delay).await;
        }
    }
}

#[async_trait]
impl IdentityGateway for MockGateway {
    async fn wait_until_ready(&self) {}

    async fn list_targets(&self) -> Result<Vec<IdentityTarget>, GatewayError> {
        Ok(self.targets.lock().unwrap().clone())
    }

    async fn set_member_name(
        &self,
        target: &IdentityTarget,
        name: &str,
    ) -> Result<(), UpdateError> {
        self.simulate_latency().await;

        if self.deny_communities.contains(&target.community_id) {
            return Err(UpdateError::PermissionDenied);
        }
        if self.gone_communities.contains(&target.community_id) {
            return Err(UpdateError::TargetGone);
        }

        self.applied_names
            .lock()
            .unwrap()
            .push((target.community_id.clone(), name.to_string()));
        Ok(())
    }

    async fn clear_status(&self) -> Result<(), UpdateError> {
        self.simulate_latency().await;
        if self.fail_status {
            return Err(UpdateError::Transient("mock failure".to_string()));
        }
        self.status_ops.lock().unwrap().push(StatusOp::Clear);
        Ok(())
    }

    async fn set_status(&self, text: &str) -> Result<(), UpdateError> {
        self.simulate_latency().await;
        if self.fail_status {
            return Err(UpdateError::Transient("mock failure".to_string()));
        }
        self.status_ops
            .lock()
            .unwrap()
            .push(StatusOp::Set(text.to_string()));
        Ok(())
    }
}
