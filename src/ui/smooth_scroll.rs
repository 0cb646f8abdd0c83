//! Page-level smooth scroll with exponential ease-out.
//!
//! Input moves the *target* offset; the rendered offset closes a fixed
//! fraction of the remaining distance per unit time, so a jump of a whole
//! section decelerates visibly instead of snapping, at any frame rate.

use std::time::Duration;

/// Frame length `speed` is expressed against.
const REFERENCE_FRAME: f64 = 1.0 / 30.0;

/// Row-offset smooth scroll animator.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    /// Offset currently drawn, in rows.
    current: f64,
    /// Where the page is heading.
    target: f64,
    /// Damping: `distance *= (1 - speed)` every 1/30 s.
    /// Higher speed = faster settle.  Good range: 0.25–0.45.
    speed: f64,
}

impl SmoothScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Aim at an absolute offset.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Shift the target by `delta` rows.
    pub fn scroll_by(&mut self, delta: f64) {
        self.target += delta;
    }

    /// Re-clamp after the page changed size.
    pub fn clamp(&mut self, max: f64) {
        self.target = self.target.clamp(0.0, max);
        self.current = self.current.clamp(0.0, max);
    }

    /// Skip the animation.
    pub fn jump(&mut self) {
        self.current = self.target;
    }

    /// Decay the remaining distance by `dt` worth of time.
    pub fn tick(&mut self, dt: Duration) {
        let distance = self.target - self.current;
        if distance.abs() < 0.25 {
            self.current = self.target;
        } else {
            let frames = dt.as_secs_f64() / REFERENCE_FRAME;
            let k = 1.0 - (1.0 - self.speed).powf(frames);
            self.current += distance * k;
        }
    }

    pub fn offset(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}
