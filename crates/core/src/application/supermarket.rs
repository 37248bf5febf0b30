// Supermarket - Coordinator for lanes, cashiers and customers

use super::cashier::{Cashier, CashierId, CashierSummary};
use super::config::SimulationConfig;
use super::constants::LANE_COUNT;
use super::counter::RemainingCustomers;
use super::customer::Customer;
use super::stats::{SimulationStats, StatsSnapshot};
use crate::domain::{BoundedQueue, CustomerId, Lane};
use crate::error::{AppError, Result};
use crate::port::ChoiceProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Outcome of one complete run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub cashiers: Vec<CashierSummary>,
    pub remaining: u64,
    pub stats: StatsSnapshot,
}

/// Owns both lanes and the shared counter, and runs one simulation
pub struct Supermarket {
    config: SimulationConfig,
    lanes: [Arc<BoundedQueue>; LANE_COUNT],
    remaining: Arc<RemainingCustomers>,
    stats: Arc<SimulationStats>,
    choice: Arc<dyn ChoiceProvider>,
}

impl Supermarket {
    /// Build the shop; invalid configs never reach the cashiers
    pub fn new(config: SimulationConfig, choice: Arc<dyn ChoiceProvider>) -> Result<Self> {
        config.validate()?;

        let lanes = Lane::ALL.map(|lane| Arc::new(BoundedQueue::new(lane, config.queue_capacity)));
        let remaining = Arc::new(RemainingCustomers::new(config.customer_count));

        Ok(Self {
            config,
            lanes,
            remaining,
            stats: Arc::new(SimulationStats::new()),
            choice,
        })
    }

    pub fn queue(&self, lane: Lane) -> &Arc<BoundedQueue> {
        &self.lanes[lane.index()]
    }

    /// Shared statistics; stays usable after `run` consumes the shop
    pub fn stats(&self) -> Arc<SimulationStats> {
        Arc::clone(&self.stats)
    }

    pub fn remaining(&self) -> Arc<RemainingCustomers> {
        Arc::clone(&self.remaining)
    }

    /// Open both lanes, release every customer, and wait for both cashiers
    ///
    /// Customer tasks are detached: this returns as soon as both cashiers
    /// have terminated, whether or not every customer has finished.
    pub async fn run(self) -> Result<SimulationReport> {
        info!(
            queue_capacity = self.config.queue_capacity,
            customer_count = self.config.customer_count,
            "Supermarket opening"
        );

        let timing = self.config.cashier_timing();
        let cashier_handles: Vec<_> = Lane::ALL
            .iter()
            .map(|lane| {
                let cashier = Cashier::new(
                    lane.index() as CashierId + 1,
                    Arc::clone(self.queue(*lane)),
                    Arc::clone(&self.remaining),
                    Arc::clone(&self.stats),
                    timing,
                );
                tokio::spawn(async move { cashier.run().await })
            })
            .collect();

        for n in 1..=self.config.customer_count {
            let customer = Customer::new(
                CustomerId::new(n),
                self.lanes.clone(),
                Arc::clone(&self.choice),
                Arc::clone(&self.stats),
                self.config.max_shopping_delay,
            );
            tokio::spawn(customer.shop());
        }

        // Join every cashier before reporting, even if one of them failed
        let mut results = Vec::with_capacity(LANE_COUNT);
        for handle in cashier_handles {
            results.push(handle.await.map_err(AppError::from).and_then(|r| r));
        }
        let cashiers = results
            .into_iter()
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                error!(error = %e, "Cashier failed");
                e
            })?;

        let report = SimulationReport {
            cashiers,
            remaining: self.remaining.get(),
            stats: self.stats.snapshot(),
        };
        info!(
            remaining = report.remaining,
            served = report.stats.served,
            balked = report.stats.balked,
            "Supermarket closed"
        );
        Ok(report)
    }
}
