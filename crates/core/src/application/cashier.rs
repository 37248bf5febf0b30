// Cashier - Service loop for one checkout lane

use super::counter::RemainingCustomers;
use super::stats::SimulationStats;
use crate::domain::{BoundedQueue, DequeueOutcome, Lane};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, error, info};

/// Cashier identifier (1-based, matches the lane number)
pub type CashierId = u32;

/// Timing parameters of the service loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashierTiming {
    pub dequeue_timeout: Duration,
    pub idle_threshold: Duration,
    pub idle_backoff: Duration,
    pub service_duration: Duration,
}

/// Why a cashier left its lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Termination {
    /// Nobody was served for longer than the idle threshold
    Idle,
    /// Every customer has been served and the lane is empty
    Exhausted,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Idle => write!(f, "IDLE"),
            Termination::Exhausted => write!(f, "EXHAUSTED"),
        }
    }
}

/// What a cashier did before terminating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashierSummary {
    pub cashier_id: CashierId,
    pub lane: Lane,
    pub served: u64,
    pub termination: Termination,
}

/// Cashier drains exactly one lane; there is no cross-lane help, so a
/// cashier may close while the other lane still has people waiting.
pub struct Cashier {
    id: CashierId,
    queue: Arc<BoundedQueue>,
    remaining: Arc<RemainingCustomers>,
    stats: Arc<SimulationStats>,
    timing: CashierTiming,
}

impl Cashier {
    pub fn new(
        id: CashierId,
        queue: Arc<BoundedQueue>,
        remaining: Arc<RemainingCustomers>,
        stats: Arc<SimulationStats>,
        timing: CashierTiming,
    ) -> Self {
        Self {
            id,
            queue,
            remaining,
            stats,
            timing,
        }
    }

    /// Serve customers until idle for too long or everyone has been served
    pub async fn run(&self) -> Result<CashierSummary> {
        let lane = self.queue.lane();
        info!(cashier_id = self.id, lane = %lane, "Cashier opened lane");

        let mut last_served = Instant::now();
        let mut served = 0u64;

        let termination = loop {
            match self.queue.dequeue(self.timing.dequeue_timeout).await {
                DequeueOutcome::TimedOut => {
                    let elapsed = last_served.elapsed();
                    if elapsed > self.timing.idle_threshold {
                        info!(
                            cashier_id = self.id,
                            elapsed_ms = elapsed.as_millis() as u64,
                            "Cashier closing lane after waiting too long"
                        );
                        break Termination::Idle;
                    }
                    debug!(
                        cashier_id = self.id,
                        backoff_ms = self.timing.idle_backoff.as_millis() as u64,
                        "Cashier dozing, no customers"
                    );
                    sleep(self.timing.idle_backoff).await;
                }
                DequeueOutcome::Served(customer_id) => {
                    last_served = Instant::now();
                    info!(
                        cashier_id = self.id,
                        customer_id = %customer_id,
                        "Cashier serving customer"
                    );
                    sleep(self.timing.service_duration).await;

                    let remaining = self.remaining.decrement().map_err(|e| {
                        error!(cashier_id = self.id, error = %e, "Cashier counter invariant broken");
                        e
                    })?;
                    served += 1;
                    self.stats.record_served();
                    info!(
                        cashier_id = self.id,
                        customer_id = %customer_id,
                        remaining,
                        "Cashier finished serving customer"
                    );

                    if remaining == 0 && self.queue.is_empty() {
                        info!(cashier_id = self.id, "All customers served, closing lane");
                        break Termination::Exhausted;
                    }
                }
            }
        };

        Ok(CashierSummary {
            cashier_id: self.id,
            lane,
            served,
            termination,
        })
    }
}
