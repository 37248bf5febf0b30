// Domain Error Types

use super::Lane;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Queue {lane} is full (capacity {capacity})")]
    QueueFull { lane: Lane, capacity: usize },

    #[error("Remaining-customer counter would drop below zero")]
    CounterUnderflow,
}

pub type Result<T> = std::result::Result<T, DomainError>;
