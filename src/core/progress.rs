//! Scroll-progress sampling.
//!
//! A region of the page is watched through the viewport.  Progress is how far
//! the scroll position has travelled between two configured intersections of
//! the region and the viewport, clamped to `[0, 1]`.
//!
//! [`ProgressSignal`] is the single producer: the app publishes it once per
//! frame and every card reads the published value.

use super::transform::{local_progress, Range};

// ───────────────────────────────────────── geometry ──────────

/// A bounded block of the page, in rows from the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Does any part of the region fall inside `viewport`?
    pub fn intersects(&self, viewport: Viewport) -> bool {
        self.top < viewport.scroll + viewport.height && self.bottom() > viewport.scroll
    }
}

/// The visible window onto the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Rows scrolled past the top of the page.
    pub scroll: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll: f64, height: f64) -> Self {
        Self { scroll, height }
    }
}

/// "Fraction `target` of the region meets fraction `viewport` of the
/// viewport".  `START_END` reads "region start meets viewport end".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub target: f64,
    pub viewport: f64,
}

impl Intersection {
    pub const START_END: Self = Self { target: 0.0, viewport: 1.0 };
    pub const START_START: Self = Self { target: 0.0, viewport: 0.0 };
    pub const END_END: Self = Self { target: 1.0, viewport: 1.0 };

    /// Scroll position at which this intersection holds.
    fn scroll_at(self, region: Region, viewport_height: f64) -> f64 {
        region.top + self.target * region.height - self.viewport * viewport_height
    }
}

/// The pair of intersections mapped to progress 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollOffset {
    /// From the region's top reaching the viewport top until its bottom
    /// reaches the viewport bottom.
    pub const CONTAINER: Self = Self {
        start: Intersection::START_START,
        end: Intersection::END_END,
    };

    /// From the region entering at the bottom until its top reaches the
    /// viewport top.
    pub const ENTER: Self = Self {
        start: Intersection::START_END,
        end: Intersection::START_START,
    };
}

/// One progress sample.  A missing region (not mounted) yields 0.
pub fn sample(region: Option<Region>, viewport: Viewport, offset: ScrollOffset) -> f64 {
    let Some(region) = region else {
        return 0.0;
    };
    let from = offset.start.scroll_at(region, viewport.height);
    let to = offset.end.scroll_at(region, viewport.height);
    if !(from.is_finite() && to.is_finite() && viewport.scroll.is_finite()) {
        return 0.0;
    }
    local_progress(viewport.scroll, Range::new(from, to))
}

// ───────────────────────────────────────── signal ────────────

/// Shared progress value for one observed region.
///
/// Written only through [`publish`](Self::publish); readers take a copy via
/// [`get`](Self::get).
#[derive(Debug, Clone)]
pub struct ProgressSignal {
    region: Option<Region>,
    offset: ScrollOffset,
    value: f64,
}

impl ProgressSignal {
    pub fn new(offset: ScrollOffset) -> Self {
        Self {
            region: None,
            offset,
            value: 0.0,
        }
    }

    /// Start observing `region`.  Remounting after an unmount starts from 0.
    pub fn mount(&mut self, region: Region) {
        if self.region.is_none() {
            self.value = 0.0;
        }
        self.region = Some(region);
    }

    pub fn unmount(&mut self) {
        self.region = None;
        self.value = 0.0;
    }

    pub fn is_mounted(&self) -> bool {
        self.region.is_some()
    }

    /// Recompute from the current viewport.  Call once per frame.
    pub fn publish(&mut self, viewport: Viewport) -> f64 {
        self.value = sample(self.region, viewport, self.offset);
        self.value
    }

    pub fn get(&self) -> f64 {
        self.value
    }

    /// Lazily sample a stream of viewport frames against the mounted
    /// region.  Each call starts a fresh sequence.
    pub fn samples<I>(&self, frames: I) -> Samples<I::IntoIter>
    where
        I: IntoIterator<Item = Viewport>,
    {
        Samples {
            region: self.region,
            offset: self.offset,
            frames: frames.into_iter(),
        }
    }
}

/// Iterator returned by [`ProgressSignal::samples`].
#[derive(Debug, Clone)]
pub struct Samples<I> {
    region: Option<Region>,
    offset: ScrollOffset,
    frames: I,
}

impl<I: Iterator<Item = Viewport>> Iterator for Samples<I> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let viewport = self.frames.next()?;
        Some(sample(self.region, viewport, self.offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frames.size_hint()
    }
}
