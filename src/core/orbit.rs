//! Orbiting technology logos around the skills badge.
//!
//! Logo `i` circles the center once every `20 + 2i` seconds, alternating
//! between an inner and an outer radius.  Positions are in abstract units
//! with `y` pointing down; the renderer scales them to terminal cells.

use std::f64::consts::TAU;
use std::time::Duration;

/// Inner orbit radius.
pub const BASE_RADIUS: f64 = 200.0;
/// Added to every other logo's radius.
pub const RADIUS_STEP: f64 = 60.0;
/// Radius of the outermost decorative ring.
pub const OUTER_RING: f64 = 270.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub index: usize,
    pub period: Duration,
    pub radius: f64,
}

impl Orbit {
    pub fn for_index(index: usize) -> Self {
        Self {
            index,
            period: Duration::from_secs(20 + 2 * index as u64),
            radius: BASE_RADIUS + (index % 2) as f64 * RADIUS_STEP,
        }
    }

    /// Clockwise angle from twelve o'clock, in radians `[0, TAU)`.
    pub fn angle(&self, elapsed: Duration) -> f64 {
        let turns = elapsed.as_secs_f64() / self.period.as_secs_f64();
        TAU * turns.fract()
    }

    /// `(x, y)` offset from the center at `elapsed`.
    pub fn position(&self, elapsed: Duration) -> (f64, f64) {
        let theta = self.angle(elapsed);
        (self.radius * theta.sin(), -self.radius * theta.cos())
    }
}

/// Orbits for `count` logos, in order.
pub fn orbits(count: usize) -> Vec<Orbit> {
    (0..count).map(Orbit::for_index).collect()
}
