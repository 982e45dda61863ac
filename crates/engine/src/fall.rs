//! Fall module - the gravity timer state machine.
//!
//! `Fall` owns the interval at which the active piece should descend: a base
//! interval derived from the level, and an accelerated interval substituted
//! while soft drop is active. It does not run a timer itself; the surrounding
//! loop schedules ticks at `interval()` and tags them with `timer_id()`.
//! Whenever the effective interval changes the id is bumped, so a tick issued
//! against the old cadence is recognized as stale and ignored.

use std::time::Duration;

use marathon_types::{FALL_INTERVALS_MS, FALL_INTERVAL_FLOOR_MS, SOFT_DROP_DIVISOR};

/// Base fall interval for a level.
pub fn interval_for_level(level: u32) -> Duration {
    let ms = FALL_INTERVALS_MS
        .get(level as usize)
        .copied()
        .unwrap_or(FALL_INTERVAL_FLOOR_MS);
    Duration::from_millis(ms)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fall {
    base: Duration,
    accelerated: bool,
    timer_id: u32,
}

impl Fall {
    pub fn new(level: u32) -> Self {
        Self {
            base: interval_for_level(level),
            accelerated: false,
            timer_id: 0,
        }
    }

    /// The interval the surrounding loop should wait before the next tick.
    pub fn interval(&self) -> Duration {
        if self.accelerated {
            (self.base / SOFT_DROP_DIVISOR as u32).max(Duration::from_millis(1))
        } else {
            self.base
        }
    }

    pub fn is_accelerated(&self) -> bool {
        self.accelerated
    }

    /// Flip soft drop on or off. Retires the current timer identity.
    pub fn toggle_soft_drop(&mut self) {
        self.accelerated = !self.accelerated;
        self.timer_id = self.timer_id.wrapping_add(1);
    }

    /// Re-derive the base interval after a level change. Retires the timer
    /// identity only when the interval actually changed.
    pub fn set_level(&mut self, level: u32) {
        let next = interval_for_level(level);
        if next != self.base {
            self.base = next;
            self.timer_id = self.timer_id.wrapping_add(1);
        }
    }

    pub fn timer_id(&self) -> u32 {
        self.timer_id
    }

    /// Whether a tick carrying `timer_id` belongs to the current timer.
    pub fn accepts(&self, timer_id: u32) -> bool {
        self.timer_id == timer_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_table() {
        assert_eq!(interval_for_level(0), Duration::from_millis(1000));
        assert_eq!(interval_for_level(8), Duration::from_millis(160));
        assert_eq!(interval_for_level(9), Duration::from_millis(120));
        assert_eq!(interval_for_level(40), Duration::from_millis(120));
    }

    #[test]
    fn test_soft_drop_reduces_interval() {
        let mut fall = Fall::new(0);
        let base = fall.interval();

        fall.toggle_soft_drop();
        assert!(fall.is_accelerated());
        assert_eq!(fall.interval(), base / 10);

        fall.toggle_soft_drop();
        assert!(!fall.is_accelerated());
        assert_eq!(fall.interval(), base);
    }

    #[test]
    fn test_toggle_retires_timer_id() {
        let mut fall = Fall::new(0);
        let id = fall.timer_id();
        assert!(fall.accepts(id));

        fall.toggle_soft_drop();
        assert!(!fall.accepts(id));
        assert!(fall.accepts(fall.timer_id()));
    }

    #[test]
    fn test_set_level_changes_id_only_on_new_interval() {
        let mut fall = Fall::new(0);
        let id = fall.timer_id();

        fall.set_level(0);
        assert!(fall.accepts(id));

        fall.set_level(1);
        assert!(!fall.accepts(id));
        assert_eq!(fall.interval(), Duration::from_millis(800));
    }

    #[test]
    fn test_accelerated_interval_floor() {
        let mut fall = Fall::new(30);
        fall.toggle_soft_drop();
        assert_eq!(fall.interval(), Duration::from_millis(12));
        assert!(fall.interval() >= Duration::from_millis(1));
    }
}
