//! Time-based smoothing for numbers that count up on screen.
//!
//! Values approach their target with exponential ease-out: each step closes
//! a fixed fraction of the remaining distance per unit time.  The approach
//! is monotonic, so a counter never overshoots or runs backwards.

use std::time::Duration;

/// Remaining distance below which the value snaps to the target.
const SNAP_EPSILON: f64 = 0.05;

/// A value easing toward a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Smoothed {
    value: f64,
    target: f64,
    /// Per-second decay rate.  Higher settles faster.
    rate: f64,
}

impl Smoothed {
    pub fn new(value: f64, rate: f64) -> Self {
        Self {
            value,
            target: value,
            rate: rate.max(0.1),
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Move toward the target by `dt` worth of decay.
    pub fn advance(&mut self, dt: Duration) {
        let remaining = self.target - self.value;
        if remaining.abs() < SNAP_EPSILON {
            self.value = self.target;
            return;
        }
        let k = 1.0 - (-self.rate * dt.as_secs_f64()).exp();
        self.value += remaining * k;
        if (self.target - self.value).abs() < SNAP_EPSILON {
            self.value = self.target;
        }
    }

    /// Jump straight to the target.
    pub fn settle(&mut self) {
        self.value = self.target;
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

// ───────────────────────────────────────── counter ───────────

/// A stat like `"15+"` that counts up from zero once it comes into view.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    pub label: &'static str,
    target: u32,
    suffix: String,
    value: Smoothed,
    started: bool,
}

impl Counter {
    /// Counting rate matching a heavily damped spring (settles in ~2s).
    const RATE: f64 = 2.5;

    /// Split `"15+"` into the number `15` and the suffix `"+"`.  A value
    /// without digits counts to 0.
    pub fn parse(value: &str, label: &'static str) -> Self {
        let digits: String = value.chars().filter(char::is_ascii_digit).collect();
        let suffix: String = value.chars().filter(|c| !c.is_ascii_digit()).collect();
        Self {
            label,
            target: digits.parse().unwrap_or(0),
            suffix,
            value: Smoothed::new(0.0, Self::RATE),
            started: false,
        }
    }

    /// Begin counting.  Later calls are ignored.
    pub fn start(&mut self) {
        if !self.started {
            self.started = true;
            self.value.set_target(self.target as f64);
        }
    }

    /// Jump to the final number (animations disabled).
    pub fn finish(&mut self) {
        self.start();
        self.value.settle();
    }

    pub fn advance(&mut self, dt: Duration) {
        self.value.advance(dt);
    }

    /// Current text, e.g. `"12+"`.
    pub fn display(&self) -> String {
        format!("{}{}", self.value.value().floor() as u32, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_is_monotonic_and_settles() {
        let mut s = Smoothed::new(0.0, 3.0);
        s.set_target(15.0);
        let mut prev = 0.0;
        for _ in 0..200 {
            s.advance(Duration::from_millis(50));
            assert!(s.value() >= prev);
            assert!(s.value() <= 15.0);
            prev = s.value();
        }
        assert_eq!(s.value(), 15.0);
    }

    #[test]
    fn counter_parses_value_and_suffix() {
        let mut c = Counter::parse("15+", "Projects Built");
        assert_eq!(c.display(), "0+");
        c.finish();
        assert_eq!(c.display(), "15+");

        let mut c = Counter::parse("n/a", "Nothing");
        c.finish();
        assert_eq!(c.display(), "0n/a");
    }

    #[test]
    fn counter_waits_until_started() {
        let mut c = Counter::parse("3+", "Years");
        c.advance(Duration::from_secs(5));
        assert_eq!(c.display(), "0+");

        c.start();
        for _ in 0..100 {
            c.advance(Duration::from_millis(100));
        }
        assert_eq!(c.display(), "3+");
    }

    #[test]
    fn finish_jumps_to_target() {
        let mut c = Counter::parse("5+", "ML Models");
        c.finish();
        assert_eq!(c.display(), "5+");
    }
}
