//! Concrete update cycles
//!
//! The two fetch → format → update pipelines behind the scheduler. Both
//! are parameterized by the quote source and gateway seams, so the same
//! cycle code runs against any data-source adapter.

use std::sync::Arc;

use async_trait::async_trait;

use crate::adapters::traits::QuoteSource;
use crate::core::format::{format_name, format_status};
use crate::core::scheduler::{CycleError, CycleReport, CycleTask};
use crate::core::updater::IdentityUpdater;
use crate::gateway::traits::IdentityGateway;

/// Fetches the price and applies it as the display name in every
/// currently-joined community. Membership is enumerated fresh each
/// cycle.
pub struct NameUpdateCycle<S: QuoteSource, G: IdentityGateway> {
    source: Arc<S>,
    gateway: Arc<G>,
    updater: IdentityUpdater<G>,
}

impl<S: QuoteSource, G: IdentityGateway> NameUpdateCycle<S, G> {
    pub fn new(source: Arc<S>, gateway: Arc<G>, updater: IdentityUpdater<G>) -> Self {
        Self {
            source,
            gateway,
            updater,
        }
    }
}

#[async_trait]
impl<S: QuoteSource, G: IdentityGateway> CycleTask for NameUpdateCycle<S, G> {
    async fn run_cycle(&self) -> Result<CycleReport, CycleError> {
        let quote = self.source.fetch_quote().await?;
        let name = format_name(quote.price);

        let targets = self.gateway.list_targets().await?;
        let results = self.updater.set_name_per_target(&targets, &name).await;

        let failed = results.iter().filter(|r| !r.is_success()).count();
        Ok(CycleReport {
            display_value: name,
            targets_updated: results.len() - failed,
            targets_failed: failed,
        })
    }
}

/// Fetches the 24h change and applies it as the global status line.
pub struct StatusUpdateCycle<S: QuoteSource, G: IdentityGateway> {
    source: Arc<S>,
    updater: IdentityUpdater<G>,
}

impl<S: QuoteSource, G: IdentityGateway> StatusUpdateCycle<S, G> {
    pub fn new(source: Arc<S>, updater: IdentityUpdater<G>) -> Self {
        Self { source, updater }
    }
}

#[async_trait]
impl<S: QuoteSource, G: IdentityGateway> CycleTask for StatusUpdateCycle<S, G> {
    async fn run_cycle(&self) -> Result<CycleReport, CycleError> {
        let quote = self.source.fetch_quote().await?;
        let status = format_status(quote.percent_change_24h, self.source.display_symbol());

        self.updater.set_status(&status).await?;

        Ok(CycleReport {
            display_value: status,
            targets_updated: 1,
            targets_failed: 0,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
