// Bounded Checkout Queue
//
// Fixed-capacity FIFO of customer ids. Producers never block: admission
// fails fast when the queue is full. The single consumer (the lane's cashier)
// waits on a Notify with a bounded timeout.

use super::error::{DomainError, Result};
use super::{CustomerId, Lane};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::Instant;

/// Result of a timed dequeue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeueOutcome {
    /// Front customer removed from the queue
    Served(CustomerId),
    /// No customer appeared before the timeout elapsed
    TimedOut,
}

/// Thread-safe bounded FIFO for one checkout lane
#[derive(Debug)]
pub struct BoundedQueue {
    lane: Lane,
    capacity: usize,
    items: Mutex<VecDeque<CustomerId>>,
    available: Notify,
}

impl BoundedQueue {
    pub fn new(lane: Lane, capacity: usize) -> Self {
        Self {
            lane,
            capacity,
            items: Mutex::new(VecDeque::with_capacity(capacity)),
            available: Notify::new(),
        }
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Admit a customer if there is room, waking at most one waiting consumer
    ///
    /// Never blocks. A full queue is left untouched and `QueueFull` is returned.
    pub fn try_enqueue(&self, id: CustomerId) -> Result<()> {
        {
            let mut items = self.items();
            if items.len() >= self.capacity {
                return Err(DomainError::QueueFull {
                    lane: self.lane,
                    capacity: self.capacity,
                });
            }
            items.push_back(id);
        }
        self.available.notify_one();
        Ok(())
    }

    /// Remove the front customer, waiting up to `timeout` for one to arrive
    ///
    /// The deadline is fixed on entry, so stale wake-ups never stretch the
    /// total wait past `timeout`.
    pub async fn dequeue(&self, timeout: Duration) -> DequeueOutcome {
        let deadline = Instant::now() + timeout;
        loop {
            let notified = self.available.notified();
            tokio::pin!(notified);
            // Register interest before looking, so a push in between is not lost
            notified.as_mut().enable();

            if let Some(id) = self.items().pop_front() {
                return DequeueOutcome::Served(id);
            }

            if tokio::time::timeout_at(deadline, notified).await.is_err() {
                return match self.items().pop_front() {
                    Some(id) => DequeueOutcome::Served(id),
                    None => DequeueOutcome::TimedOut,
                };
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items().len() >= self.capacity
    }

    /// Every mutation is a single push or pop, so a poisoned lock still
    /// guards a consistent deque.
    fn items(&self) -> MutexGuard<'_, VecDeque<CustomerId>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
