// Domain Layer - Queue, lane and customer identities

pub mod customer;
pub mod error;
pub mod queue;

// Re-exports
pub use customer::{CustomerId, CustomerOutcome, Lane};
pub use error::DomainError;
pub use queue::{BoundedQueue, DequeueOutcome};
