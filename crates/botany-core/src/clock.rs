//! Time source port.
//!
//! Nothing in the lifecycle path reads ambient time; anything that stamps a
//! bot takes a `Clock` so tests can pin the timeline.

use chrono::Utc;

/// Millisecond-epoch time source.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall-clock adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_epoch_millis() {
        // Anything after 2020 and monotonically plausible.
        let now = SystemClock.now_millis();
        assert!(now > 1_577_836_800_000);
        assert!(SystemClock.now_millis() >= now);
    }
}
