//! One-shot "reveal on first view" animations.
//!
//! Each key is stamped with the clock time it first became visible.  From
//! then on its reveal progress runs from 0 to 1 over a fixed duration and
//! never goes back, even when the key scrolls out of view again.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use super::transform::lerp;

/// Default reveal duration.
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);
/// Rows a revealed block slides up by.
pub const REVEAL_RISE: f64 = 2.0;

/// Ease-out cubic.  Monotonic on `[0, 1]`.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// How a partially revealed block should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// 0 is hidden, 1 fully shown.
    pub opacity: f64,
    /// Rows below the resting position.
    pub offset_rows: f64,
}

impl RevealStyle {
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_rows: 0.0,
    };

    pub fn at(progress: f64) -> Self {
        let eased = ease_out(progress);
        Self {
            opacity: eased,
            offset_rows: lerp(REVEAL_RISE, 0.0, eased),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    first_seen: HashMap<K, Duration>,
    duration: Duration,
    enabled: bool,
}

impl<K: Eq + Hash + Copy> RevealTracker<K> {
    pub fn new(duration: Duration, enabled: bool) -> Self {
        Self {
            first_seen: HashMap::new(),
            duration,
            enabled,
        }
    }

    /// Record visibility at clock time `now`.  Only the first visible
    /// observation of a key counts.
    pub fn observe(&mut self, key: K, visible: bool, now: Duration) {
        if visible {
            self.first_seen.entry(key).or_insert(now);
        }
    }

    pub fn has_seen(&self, key: K) -> bool {
        self.first_seen.contains_key(&key)
    }

    /// Linear reveal progress, delayed by `delay` after first sight.
    pub fn progress(&self, key: K, now: Duration, delay: Duration) -> f64 {
        if !self.enabled {
            return 1.0;
        }
        let Some(&seen) = self.first_seen.get(&key) else {
            return 0.0;
        };
        let elapsed = now.saturating_sub(seen).saturating_sub(delay);
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn style(&self, key: K, now: Duration, delay: Duration) -> RevealStyle {
        RevealStyle::at(self.progress(key, now, delay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn unseen_keys_stay_hidden() {
        let tracker: RevealTracker<u8> = RevealTracker::new(REVEAL_DURATION, true);
        assert_eq!(tracker.progress(1, ms(10_000), Duration::ZERO), 0.0);
        assert_eq!(tracker.style(1, ms(10_000), Duration::ZERO).offset_rows, REVEAL_RISE);
    }

    #[test]
    fn reveal_runs_once_from_first_sight() {
        let mut tracker = RevealTracker::new(ms(600), true);
        tracker.observe("about", false, ms(0));
        tracker.observe("about", true, ms(1_000));
        tracker.observe("about", false, ms(1_100));
        tracker.observe("about", true, ms(5_000));

        assert_eq!(tracker.progress("about", ms(1_300), Duration::ZERO), 0.5);
        assert_eq!(tracker.progress("about", ms(1_600), Duration::ZERO), 1.0);
        assert_eq!(tracker.style("about", ms(9_000), Duration::ZERO), RevealStyle::SHOWN);
    }

    #[test]
    fn delay_staggers_reveal() {
        let mut tracker = RevealTracker::new(ms(600), true);
        tracker.observe(0usize, true, ms(0));
        assert_eq!(tracker.progress(0, ms(200), ms(200)), 0.0);
        assert_eq!(tracker.progress(0, ms(500), ms(200)), 0.5);
    }

    #[test]
    fn disabled_tracker_shows_everything() {
        let tracker: RevealTracker<u8> = RevealTracker::new(REVEAL_DURATION, false);
        assert_eq!(tracker.progress(7, Duration::ZERO, Duration::ZERO), 1.0);
    }

    #[test]
    fn ease_out_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_out(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
        assert_eq!(ease_out(1.0), 1.0);
    }
}
