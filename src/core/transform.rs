//! Progress-to-transform mapping for the stacked project cards.
//!
//! Every card reads the same shared progress value and re-scales it through
//! its own [`Range`] into a local `t`, which is then interpolated into a
//! scale factor.  Nothing here holds state: the same inputs always give the
//! same [`CardTransform`].

/// Scale step between neighbouring cards (`k`).
pub const DEFAULT_SCALE_STEP: f64 = 0.05;

/// How far into the shared progress each successive card starts shrinking.
pub const DEFAULT_RANGE_STEP: f64 = 0.25;

// ───────────────────────────────────────── range ─────────────

/// A window `[start, end]` of the shared progress signal.
///
/// A range with `start > end` is treated as the inverted range
/// `[end, start]` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}

impl Range {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// `(lo, hi)` with `lo <= hi`.
    fn ordered(self) -> (f64, f64) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}

/// Re-scale `p` into the local position `t ∈ [0, 1]` of `range`.
///
/// Below the range `t` is pinned to 0, above it to 1.  A degenerate range
/// (`start == end`) is a step: 1 once `p` reaches it, 0 before.
pub fn local_progress(p: f64, range: Range) -> f64 {
    if p.is_nan() {
        return 0.0;
    }
    let (a, b) = range.ordered();
    if p >= b {
        return 1.0;
    }
    if p <= a {
        return 0.0;
    }
    ((p - a) / (b - a)).clamp(0.0, 1.0)
}

/// Linear interpolation that returns `from` at `t <= 0` and `to` at
/// `t >= 1` exactly, and never leaves the `[from, to]` interval in between.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    (from + (to - from) * t).clamp(lo, hi)
}

/// Map the shared progress `p` through `range` onto `[out_start, out_end]`.
pub fn map_range(p: f64, range: Range, out_start: f64, out_end: f64) -> f64 {
    lerp(out_start, out_end, local_progress(p, range))
}

/// Final scale of card `index` in a stack of `len` cards.
///
/// Earlier cards end up smaller than later ones, so the stack reads as
/// layered: `1 - (len - index) * step`.
pub fn target_scale(len: usize, index: usize, step: f64) -> f64 {
    1.0 - (len as f64 - index as f64) * step
}

/// Vertical offset of card `index`.  Additive and independent of progress.
pub fn offset_y(index: usize, base: f64, step: f64) -> f64 {
    base + index as f64 * step
}

// ───────────────────────────────────────── stack ─────────────

/// Per-item configuration: ordinal plus its window of the shared signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDescriptor {
    pub index: usize,
    pub range: Range,
}

/// Shape of a card stack of `len` items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackConfig {
    pub len: usize,
    /// `k` in `1 - (len - index) * k`.
    pub scale_step: f64,
    /// Item `i` animates over `[i * range_step, 1]`.
    pub range_step: f64,
    /// Offset of the first card, in rows.
    pub base_offset: f64,
    /// Extra rows added per card.
    pub step_rows: f64,
}

impl StackConfig {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            scale_step: DEFAULT_SCALE_STEP,
            range_step: DEFAULT_RANGE_STEP,
            base_offset: 0.0,
            step_rows: 1.0,
        }
    }

    pub fn descriptor(&self, index: usize) -> ItemDescriptor {
        let start = (index as f64 * self.range_step).clamp(0.0, 1.0);
        ItemDescriptor {
            index,
            range: Range::new(start, 1.0),
        }
    }

    /// Descriptors for every item, in list order.
    pub fn descriptors(&self) -> impl Iterator<Item = ItemDescriptor> + '_ {
        (0..self.len).map(|i| self.descriptor(i))
    }
}

/// Visual output for one card.  Always recomputed, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub scale: f64,
    /// Rows, positive is down.
    pub translate_y: f64,
}

impl CardTransform {
    pub fn compute(progress: f64, item: &ItemDescriptor, stack: &StackConfig) -> Self {
        let target = target_scale(stack.len, item.index, stack.scale_step);
        Self {
            scale: map_range(progress, item.range, 1.0, target),
            translate_y: offset_y(item.index, stack.base_offset, stack.step_rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> impl Iterator<Item = f64> {
        (0..=400).map(|i| i as f64 / 400.0)
    }

    #[test]
    fn monotonic_inside_and_constant_outside() {
        let range = Range::new(0.2, 0.7);
        let mut prev = f64::NEG_INFINITY;
        for p in grid() {
            let v = map_range(p, range, 0.0, 10.0);
            assert!(v >= prev, "p={p} v={v} prev={prev}");
            prev = v;
            if p <= 0.2 {
                assert_eq!(v, 0.0);
            }
            if p >= 0.7 {
                assert_eq!(v, 10.0);
            }
        }
    }

    #[test]
    fn boundaries_are_exact() {
        let range = Range::new(0.25, 1.0);
        assert_eq!(map_range(0.25, range, 1.0, 0.85), 1.0);
        assert_eq!(map_range(1.0, range, 1.0, 0.85), 0.85);

        let range = Range::new(0.1, 0.3);
        assert_eq!(map_range(0.1, range, 2.0, 1.0), 2.0);
        assert_eq!(map_range(0.3, range, 2.0, 1.0), 1.0);
    }

    #[test]
    fn midpoint_of_quarter_range() {
        let range = Range::new(0.25, 1.0);
        assert_eq!(local_progress(0.625, range), 0.5);
        assert_eq!(map_range(0.625, range, 2.0, 4.0), 3.0);
    }

    #[test]
    fn degenerate_range_is_a_step() {
        let range = Range::new(0.5, 0.5);
        assert_eq!(map_range(0.5, range, 1.0, 0.8), 0.8);
        assert_eq!(map_range(0.4, range, 1.0, 0.8), 1.0);
        assert_eq!(map_range(0.9, range, 1.0, 0.8), 0.8);
    }

    #[test]
    fn inverted_range_stays_monotonic_and_clamped() {
        let inverted = Range::new(0.8, 0.2);
        let mut prev = f64::NEG_INFINITY;
        for p in grid() {
            let t = local_progress(p, inverted);
            assert!((0.0..=1.0).contains(&t));
            assert!(t >= prev);
            assert_eq!(t, local_progress(p, Range::new(0.2, 0.8)));
            prev = t;
        }
    }

    #[test]
    fn nan_progress_is_neutral() {
        assert_eq!(local_progress(f64::NAN, Range::new(0.0, 1.0)), 0.0);
    }

    #[test]
    fn target_scale_reference_values() {
        assert_eq!(target_scale(5, 5, DEFAULT_SCALE_STEP), 1.0);
        assert!((target_scale(5, 2, 0.05) - 0.85).abs() < 1e-12);

        let scales: Vec<f64> = (0..=5).map(|i| target_scale(5, i, 0.05)).collect();
        assert!(scales.windows(2).all(|w| w[0] < w[1]), "{scales:?}");
    }

    #[test]
    fn offset_is_additive() {
        assert_eq!(offset_y(0, -2.0, 1.0), -2.0);
        assert_eq!(offset_y(3, -2.0, 1.0), 1.0);
    }

    #[test]
    fn descriptors_follow_list_position() {
        let stack = StackConfig::new(5);
        let ranges: Vec<Range> = stack.descriptors().map(|d| d.range).collect();
        assert_eq!(ranges[0], Range::new(0.0, 1.0));
        assert_eq!(ranges[2], Range::new(0.5, 1.0));
        assert_eq!(ranges[4], Range::new(1.0, 1.0));
    }

    #[test]
    fn compute_is_idempotent() {
        let stack = StackConfig::new(5);
        let item = stack.descriptor(1);
        let a = CardTransform::compute(0.61, &item, &stack);
        let b = CardTransform::compute(0.61, &item, &stack);
        assert_eq!(a, b);
    }

    #[test]
    fn last_card_snaps_at_the_end() {
        let stack = StackConfig::new(5);
        let last = stack.descriptor(4);
        assert_eq!(CardTransform::compute(0.99, &last, &stack).scale, 1.0);
        let done = CardTransform::compute(1.0, &last, &stack).scale;
        assert!((done - 0.95).abs() < 1e-12);
    }

    #[test]
    fn cards_shrink_independently_from_one_signal() {
        let stack = StackConfig::new(3);
        let p = 0.5;
        let scales: Vec<f64> = stack
            .descriptors()
            .map(|d| CardTransform::compute(p, &d, &stack).scale)
            .collect();
        // card 0 is half way through [0, 1], card 1 a third of the way
        // through [0.25, 1], card 2 has not started.
        assert!((scales[0] - (1.0 - 0.15 * 0.5)).abs() < 1e-12);
        assert!((scales[1] - (1.0 - 0.10 / 3.0)).abs() < 1e-12);
        assert_eq!(scales[2], 1.0);
    }
}
