// Checkout Core - Queues, Cashiers, Customers & Coordinator
// NO console I/O here; the binary crate owns input parsing and output

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
