// Port Layer - Interfaces for external dependencies

pub mod choice_provider; // For deterministic testing

// Re-exports
pub use choice_provider::{ChoiceProvider, RandomChoiceProvider};
