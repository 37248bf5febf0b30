// Application Layer - Cashiers, customers and the coordinator

pub mod cashier;
pub mod config;
pub mod constants;
pub mod counter;
pub mod customer;
pub mod stats;
pub mod supermarket;

// Re-exports
pub use cashier::{Cashier, CashierId, CashierSummary, CashierTiming, Termination};
pub use config::SimulationConfig;
pub use counter::RemainingCustomers;
pub use customer::Customer;
pub use stats::{SimulationStats, StatsSnapshot};
pub use supermarket::{SimulationReport, Supermarket};
