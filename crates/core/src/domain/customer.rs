// Customer Domain Model

use serde::{Deserialize, Serialize};

/// Customer identifier (1-based, unique per simulation run)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u64);

impl CustomerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two checkout lanes; each lane has its own queue and cashier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Lane {
    One,
    Two,
}

impl Lane {
    pub const ALL: [Lane; 2] = [Lane::One, Lane::Two];

    /// The lane a customer falls back to
    pub fn other(self) -> Lane {
        match self {
            Lane::One => Lane::Two,
            Lane::Two => Lane::One,
        }
    }

    /// Zero-based position, for indexing per-lane arrays
    pub fn index(self) -> usize {
        match self {
            Lane::One => 0,
            Lane::Two => 1,
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lane::One => write!(f, "1"),
            Lane::Two => write!(f, "2"),
        }
    }
}

/// How a customer's single visit ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerOutcome {
    /// Admitted to the lane picked at random
    Joined(Lane),
    /// Picked lane was full, admitted to the other one
    Redirected(Lane),
    /// Both lanes full, left without being served
    Balked,
}

impl CustomerOutcome {
    /// Lane the customer ended up waiting in, if any
    pub fn lane(&self) -> Option<Lane> {
        match self {
            CustomerOutcome::Joined(lane) | CustomerOutcome::Redirected(lane) => Some(*lane),
            CustomerOutcome::Balked => None,
        }
    }
}
