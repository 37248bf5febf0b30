// Simulation constants (no magic values)
use std::time::Duration;

/// How long a single dequeue waits for a customer before giving up (100ms)
pub const DEFAULT_DEQUEUE_TIMEOUT: Duration = Duration::from_millis(100);

/// Time without serving anyone after which a cashier closes the lane (1s)
pub const DEFAULT_IDLE_THRESHOLD: Duration = Duration::from_millis(1000);

/// Pause a cashier takes after a non-terminal dequeue timeout (10s)
pub const DEFAULT_IDLE_BACKOFF: Duration = Duration::from_secs(10);

/// Time spent serving one customer (2s)
pub const DEFAULT_SERVICE_DURATION: Duration = Duration::from_secs(2);

/// Exclusive upper bound of a customer's random shopping time (3s)
pub const DEFAULT_MAX_SHOPPING_DELAY: Duration = Duration::from_secs(3);

/// Number of checkout lanes (one cashier each)
pub const LANE_COUNT: usize = 2;
