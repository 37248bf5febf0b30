// Choice Provider Port (for deterministic testing)

use crate::domain::Lane;
use rand::Rng;
use std::time::Duration;

/// Source of the randomness a customer contributes to scheduling
pub trait ChoiceProvider: Send + Sync {
    /// Pick the lane a customer tries first
    fn pick_lane(&self) -> Lane;

    /// Shopping time before heading to the checkout, in `[0, max)`
    fn shopping_delay(&self, max: Duration) -> Duration;
}

/// Thread-local RNG provider (production)
pub struct RandomChoiceProvider;

impl ChoiceProvider for RandomChoiceProvider {
    fn pick_lane(&self) -> Lane {
        if rand::thread_rng().gen_bool(0.5) {
            Lane::One
        } else {
            Lane::Two
        }
    }

    fn shopping_delay(&self, max: Duration) -> Duration {
        let max_ms = max.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(0..max_ms))
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Mutex, PoisonError};

    /// Every customer picks the same lane after the same delay
    pub struct FixedChoiceProvider {
        lane: Lane,
        delay: Duration,
    }

    impl FixedChoiceProvider {
        pub fn new(lane: Lane) -> Self {
            Self {
                lane,
                delay: Duration::ZERO,
            }
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }
    }

    impl ChoiceProvider for FixedChoiceProvider {
        fn pick_lane(&self) -> Lane {
            self.lane
        }

        fn shopping_delay(&self, _max: Duration) -> Duration {
            self.delay
        }
    }

    /// Hands out lanes in a scripted order, falling back to `Lane::One`
    /// once the script is exhausted. Delays are always zero.
    pub struct ScriptedChoiceProvider {
        lanes: Mutex<VecDeque<Lane>>,
    }

    impl ScriptedChoiceProvider {
        pub fn new(lanes: impl IntoIterator<Item = Lane>) -> Self {
            Self {
                lanes: Mutex::new(lanes.into_iter().collect()),
            }
        }
    }

    impl ChoiceProvider for ScriptedChoiceProvider {
        fn pick_lane(&self) -> Lane {
            self.lanes
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front()
                .unwrap_or(Lane::One)
        }

        fn shopping_delay(&self, _max: Duration) -> Duration {
            Duration::ZERO
        }
    }

}

#[cfg(test)]
mod tests {
    use super::mocks::*;
    use super::*;

    #[test]
    fn test_random_delay_stays_below_max() {
        let provider = RandomChoiceProvider;
        let max = Duration::from_millis(50);
        for _ in 0..200 {
            assert!(provider.shopping_delay(max) < max);
        }
        assert_eq!(provider.shopping_delay(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn test_random_lane_covers_both_lanes() {
        let provider = RandomChoiceProvider;
        let picks: Vec<Lane> = (0..200).map(|_| provider.pick_lane()).collect();
        assert!(picks.contains(&Lane::One));
        assert!(picks.contains(&Lane::Two));
    }

    #[test]
    fn test_scripted_provider_replays_script() {
        let provider = ScriptedChoiceProvider::new([Lane::Two, Lane::Two, Lane::One]);
        assert_eq!(provider.pick_lane(), Lane::Two);
        assert_eq!(provider.pick_lane(), Lane::Two);
        assert_eq!(provider.pick_lane(), Lane::One);
        assert_eq!(provider.pick_lane(), Lane::One);
    }
}
