// Remaining-customer counter shared by both cashiers

use crate::domain::error::{DomainError, Result};
use std::sync::{Mutex, PoisonError};
use tracing::error;

/// Customers still to be served, guarded by its own lock
///
/// Owned by the coordinator and handed to both cashiers by `Arc`.
/// Decrementing at zero is an invariant violation and is reported
/// instead of wrapping or clamping.
#[derive(Debug)]
pub struct RemainingCustomers {
    count: Mutex<u64>,
}

impl RemainingCustomers {
    pub fn new(total: u64) -> Self {
        Self {
            count: Mutex::new(total),
        }
    }

    /// Record one served customer, returning how many remain
    pub fn decrement(&self) -> Result<u64> {
        let mut count = self.count.lock().unwrap_or_else(PoisonError::into_inner);
        match count.checked_sub(1) {
            Some(next) => {
                *count = next;
                Ok(next)
            }
            None => {
                error!("Served more customers than were ever admitted");
                Err(DomainError::CounterUnderflow)
            }
        }
    }

    pub fn get(&self) -> u64 {
        *self.count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_decrement_counts_down() {
        let remaining = RemainingCustomers::new(2);
        assert_eq!(remaining.decrement(), Ok(1));
        assert_eq!(remaining.decrement(), Ok(0));
        assert_eq!(remaining.get(), 0);
    }

    #[test]
    fn test_decrement_at_zero_is_rejected() {
        let remaining = RemainingCustomers::new(0);
        assert_eq!(remaining.decrement(), Err(DomainError::CounterUnderflow));
        assert_eq!(remaining.get(), 0);
    }

    #[test]
    fn test_concurrent_decrements_are_exact() {
        let remaining = Arc::new(RemainingCustomers::new(1000));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let remaining = Arc::clone(&remaining);
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        remaining.decrement().unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(remaining.get(), 0);
    }
}
