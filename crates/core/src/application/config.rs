// Simulation Configuration

use super::cashier::CashierTiming;
use super::constants::*;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters of one supermarket run
///
/// Timings default to the classic values (100ms dequeue wait, 1s idle
/// threshold, 10s backoff, 2s service, up to 3s shopping). Tests shrink them
/// through the `with_*` setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub queue_capacity: usize,
    pub customer_count: u64,
    pub dequeue_timeout: Duration,
    pub idle_threshold: Duration,
    pub idle_backoff: Duration,
    pub service_duration: Duration,
    pub max_shopping_delay: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 1,
            customer_count: 0,
            dequeue_timeout: DEFAULT_DEQUEUE_TIMEOUT,
            idle_threshold: DEFAULT_IDLE_THRESHOLD,
            idle_backoff: DEFAULT_IDLE_BACKOFF,
            service_duration: DEFAULT_SERVICE_DURATION,
            max_shopping_delay: DEFAULT_MAX_SHOPPING_DELAY,
        }
    }
}

impl SimulationConfig {
    pub fn new(queue_capacity: usize, customer_count: u64) -> Self {
        Self {
            queue_capacity,
            customer_count,
            ..Default::default()
        }
    }

    pub fn with_dequeue_timeout(mut self, timeout: Duration) -> Self {
        self.dequeue_timeout = timeout;
        self
    }

    pub fn with_idle_threshold(mut self, threshold: Duration) -> Self {
        self.idle_threshold = threshold;
        self
    }

    pub fn with_idle_backoff(mut self, backoff: Duration) -> Self {
        self.idle_backoff = backoff;
        self
    }

    pub fn with_service_duration(mut self, duration: Duration) -> Self {
        self.service_duration = duration;
        self
    }

    pub fn with_max_shopping_delay(mut self, delay: Duration) -> Self {
        self.max_shopping_delay = delay;
        self
    }

    /// Reject parameters the core cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.queue_capacity == 0 {
            return Err(AppError::Validation(
                "queue capacity must be at least 1".to_string(),
            ));
        }
        if self.dequeue_timeout.is_zero() {
            return Err(AppError::Validation(
                "dequeue timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Timing slice handed to each cashier
    pub fn cashier_timing(&self) -> CashierTiming {
        CashierTiming {
            dequeue_timeout: self.dequeue_timeout,
            idle_threshold: self.idle_threshold,
            idle_backoff: self.idle_backoff,
            service_duration: self.service_duration,
        }
    }
}
