// Customer - One-shot shopping visit

use super::stats::SimulationStats;
use crate::domain::{BoundedQueue, CustomerId, CustomerOutcome, Lane};
use crate::port::ChoiceProvider;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// A single customer: shop, pick a lane, try it, try the other one, or leave
pub struct Customer {
    id: CustomerId,
    lanes: [Arc<BoundedQueue>; 2],
    choice: Arc<dyn ChoiceProvider>,
    stats: Arc<SimulationStats>,
    max_shopping_delay: Duration,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        lanes: [Arc<BoundedQueue>; 2],
        choice: Arc<dyn ChoiceProvider>,
        stats: Arc<SimulationStats>,
        max_shopping_delay: Duration,
    ) -> Self {
        Self {
            id,
            lanes,
            choice,
            stats,
            max_shopping_delay,
        }
    }

    /// Run the visit to completion and record its outcome
    pub async fn shop(self) -> CustomerOutcome {
        let delay = self.choice.shopping_delay(self.max_shopping_delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let outcome = self.join_queue(self.choice.pick_lane());
        self.stats.record_outcome(outcome);
        outcome
    }

    /// Try `first`, then the other lane; never waits for room
    fn join_queue(&self, first: Lane) -> CustomerOutcome {
        if self.queue(first).try_enqueue(self.id).is_ok() {
            info!(customer_id = %self.id, lane = %first, "Customer joined queue");
            return CustomerOutcome::Joined(first);
        }

        let second = first.other();
        debug!(
            customer_id = %self.id,
            lane = %first,
            fallback = %second,
            "Queue full, trying the other one"
        );
        if self.queue(second).try_enqueue(self.id).is_ok() {
            info!(customer_id = %self.id, lane = %second, "Customer joined the other queue");
            return CustomerOutcome::Redirected(second);
        }

        info!(customer_id = %self.id, "Customer left, both queues are full");
        CustomerOutcome::Balked
    }

    fn queue(&self, lane: Lane) -> &BoundedQueue {
        &self.lanes[lane.index()]
    }
}
