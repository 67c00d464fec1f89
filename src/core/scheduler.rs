//! Dual-cadence scheduler
//!
//! Owns an explicit list of `{name, interval, task}` registrations and
//! spawns one independent loop per task. Each loop waits on its own
//! interval, runs the cycle inline, and only ever logs the outcome —
//! a failed cycle never stops the loop, and neither loop can stall the
//! other.
//!
//! Non-overlap guarantee: the cycle body is awaited inside the tick arm,
//! so the next tick cannot be polled until the current cycle returns. A
//! cycle slower than its interval delays the next tick
//! (`MissedTickBehavior::Delay`) instead of stacking up.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use crate::adapters::errors::FetchError;
use crate::gateway::errors::{GatewayError, UpdateError};

// =============================================================================
// Cycle contract
// =============================================================================

/// Classified failure of one cycle, caught at the cycle boundary
#[derive(Error, Debug)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Update(#[from] UpdateError),
}

/// Outcome of a successful cycle, used only for logging
#[derive(Debug)]
pub struct CycleReport {
    /// The display string that was pushed to the identity store.
    pub display_value: String,
    /// Targets that accepted the update this cycle.
    pub targets_updated: usize,
    /// Targets that failed this cycle (partial failure, already logged).
    pub targets_failed: usize,
}

/// One fetch → format → update sequence, run once per tick
#[async_trait]
pub trait CycleTask: Send + Sync {
    async fn run_cycle(&self) -> Result<CycleReport, CycleError>;
}

// =============================================================================
// Scheduler
// =============================================================================

struct ScheduledTask {
    name: &'static str,
    interval: Duration,
    task: Arc<dyn CycleTask>,
}

/// Owns the task registrations and spawns the update loops
///
/// Start order: register everything, then `spawn_all()` once the gateway
/// has signaled readiness. Tasks run until the shutdown broadcast fires.
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
    shutdown_tx: broadcast::Sender<()>,
}

impl Scheduler {
    pub fn new(shutdown_tx: broadcast::Sender<()>) -> Self {
        Self {
            tasks: Vec::new(),
            shutdown_tx,
        }
    }

    /// Register a cycle task with its cadence.
    pub fn register(&mut self, name: &'static str, interval: Duration, task: Arc<dyn CycleTask>) {
        self.tasks.push(ScheduledTask {
            name,
            interval,
            task,
        });
    }

    /// Spawn one independent loop per registered task.
    pub fn spawn_all(&self) -> Vec<JoinHandle<()>> {
        self.tasks
            .iter()
            .map(|scheduled| {
                let shutdown_rx = self.shutdown_tx.subscribe();
                tokio::spawn(cycle_loop(
                    scheduled.name,
                    scheduled.interval,
                    Arc::clone(&scheduled.task),
                    shutdown_rx,
                ))
            })
            .collect()
    }
}

/// The per-task update loop.
///
/// Ticks immediately on start, then at the configured cadence. Every
/// cycle outcome is logged and swallowed; only the shutdown broadcast
/// ends the loop.
pub async fn cycle_loop(
    name: &'static str,
    period: Duration,
    task: Arc<dyn CycleTask>,
    mut shutdown_rx: broadcast::Receiver<()>,
) {
    info!(task = name, interval_secs = period.as_secs(), "Update task started");

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                info!(task = name, "Update task stopped");
                break;
            }
            _ = ticker.tick() => {
                match task.run_cycle().await {
                    Ok(report) => {
                        info!(
                            task = name,
                            value = %report.display_value,
                            updated = report.targets_updated,
                            failed = report.targets_failed,
                            "Cycle applied"
                        );
                    }
                    Err(e) => {
                        warn!(task = name, error = %e, "Cycle skipped");
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::timeout;

    /// Test cycle that counts runs and can fail or dawdle on demand
    struct CountingCycle {
        runs: Arc<AtomicUsize>,
        fail: bool,
        delay: Duration,
        active: Arc<AtomicUsize>,
        max_active: Arc<AtomicUsize>,
    }

    impl CountingCycle {
        fn new(fail: bool, delay: Duration) -> Self {
            Self {
                runs: Arc::new(AtomicUsize::new(0)),
                fail,
                delay,
                active: Arc::new(AtomicUsize::new(0)),
                max_active: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl CycleTask for CountingCycle {
        async fn run_cycle(&self) -> Result<CycleReport, CycleError> {
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_active.fetch_max(now, Ordering::SeqCst);
            if self.delay > Duration::ZERO {
                tokio::time::sleep(self.delay).await;
            }
            self.active.fetch_sub(1, Ordering::SeqCst);

            self.runs.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CycleError::Fetch(FetchError::MissingField("lastPrice")));
            }
            Ok(CycleReport {
                display_value: "$1.00".to_string(),
                targets_updated: 1,
                targets_failed: 0,
            })
        }
    }

    #[tokio::test]
    async fn test_cycle_loop_shutdown() {
        let task = Arc::new(CountingCycle::new(false, Duration::ZERO));
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

        let handle = tokio::spawn(cycle_loop(
            "test",
            Duration::from_millis(10),
            Arc::clone(&task) as Arc<dyn CycleTask>,
            shutdown_rx,
        ));

        tokio::time::sleep(Duration::from_millis(35)).await;
        shutdown_tx.send(()).unwrap();

        let result = timeout(Duration::from_secs(1), handle).await;
        assert!(result.is_ok(), "Cycle loop should shutdown cleanly");
        assert!(task.runs.load(Ordering::SeqCst) >= 2);
    }

    #[tokio::test]
    async fn test_cycle_loop_survives_failing_cycles() {
        let task = Arc::new(CountingCycle::new(true, Duration::ZERO));
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

        let handle = tokio::spawn(cycle_loop(
            "test",
            Duration::from_millis(10),
            Arc::clone(&task) as Arc<dyn CycleTask>,
            shutdown_rx,
        ));

        tokio::time::sleep(Duration::from_millis(45)).await;
        let runs = task.runs.load(Ordering::SeqCst);
        assert!(runs >= 3, "Loop must keep ticking through failures, got {}", runs);

        shutdown_tx.send(()).unwrap();
        timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_cycle_never_overlaps_itself() {
        // Cycle takes 3x its interval; ticks must wait, not stack
        let task = Arc::new(CountingCycle::new(false, Duration::from_millis(30)));
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

        let handle = tokio::spawn(cycle_loop(
            "test",
            Duration::from_millis(10),
            Arc::clone(&task) as Arc<dyn CycleTask>,
            shutdown_rx,
        ));

        tokio::time::sleep(Duration::from_millis(100)).await;
        shutdown_tx.send(()).unwrap();
        timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();

        assert_eq!(task.max_active.load(Ordering::SeqCst), 1);
        assert!(task.runs.load(Ordering::SeqCst) >= 2);
    }

    #[tokio::test]
    async fn test_scheduler_spawns_independent_tasks() {
        let fast = Arc::new(CountingCycle::new(false, Duration::ZERO));
        // The slow task fails every cycle and dawdles; it must not slow the fast one
        let slow = Arc::new(CountingCycle::new(true, Duration::from_millis(25)));

        let (shutdown_tx, _) = broadcast::channel(1);
        let mut scheduler = Scheduler::new(shutdown_tx.clone());
        scheduler.register(
            "fast",
            Duration::from_millis(10),
            Arc::clone(&fast) as Arc<dyn CycleTask>,
        );
        scheduler.register(
            "slow",
            Duration::from_millis(10),
            Arc::clone(&slow) as Arc<dyn CycleTask>,
        );

        let handles = scheduler.spawn_all();
        assert_eq!(handles.len(), 2);

        tokio::time::sleep(Duration::from_millis(60)).await;
        shutdown_tx.send(()).unwrap();
        for handle in handles {
            timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
        }

        let fast_runs = fast.runs.load(Ordering::SeqCst);
        let slow_runs = slow.runs.load(Ordering::SeqCst);
        assert!(fast_runs >= 4, "Fast task should tick freely, got {}", fast_runs);
        assert!(slow_runs >= 1);
        assert!(fast_runs > slow_runs);
    }
}
