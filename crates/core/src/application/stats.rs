// Simulation statistics
//
// Lock-free counters shared by every customer and cashier task. Customer
// tasks are detached, so this is the only place their completion is visible.

use crate::domain::CustomerOutcome;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Notify;

#[derive(Debug, Default)]
pub struct SimulationStats {
    joined: AtomicU64,
    redirected: AtomicU64,
    balked: AtomicU64,
    served: AtomicU64,
    customers_finished: AtomicU64,
    customer_finished: Notify,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub joined: u64,
    pub redirected: u64,
    pub balked: u64,
    pub served: u64,
    pub customers_finished: u64,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how a customer task ended
    pub fn record_outcome(&self, outcome: CustomerOutcome) {
        let counter = match outcome {
            CustomerOutcome::Joined(_) => &self.joined,
            CustomerOutcome::Redirected(_) => &self.redirected,
            CustomerOutcome::Balked => &self.balked,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.customers_finished.fetch_add(1, Ordering::AcqRel);
        self.customer_finished.notify_waiters();
    }

    pub fn record_served(&self) {
        self.served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn customers_finished(&self) -> u64 {
        self.customers_finished.load(Ordering::Acquire)
    }

    /// Wait until at least `count` customer tasks have run to completion
    pub async fn wait_for_customers(&self, count: u64) {
        loop {
            let notified = self.customer_finished.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.customers_finished() >= count {
                return;
            }
            notified.await;
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            joined: self.joined.load(Ordering::Relaxed),
            redirected: self.redirected.load(Ordering::Relaxed),
            balked: self.balked.load(Ordering::Relaxed),
            served: self.served.load(Ordering::Relaxed),
            customers_finished: self.customers_finished(),
        }
    }
}
