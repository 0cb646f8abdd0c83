//! Orbiting technology names around a central "SKILLS" badge.

use std::f64::consts::TAU;
use std::time::Duration;

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::core::orbit::{orbits, BASE_RADIUS, OUTER_RING, RADIUS_STEP};
use crate::ui::theme::Theme;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;
const BADGE: &str = "SKILLS";

pub struct OrbitView<'a> {
    pub tech: &'a [&'a str],
    pub elapsed: Duration,
}

impl<'a> OrbitView<'a> {
    /// Cells per orbit unit, fitting the outer ring plus label room.
    fn unit(area: Rect, label_width: u16) -> f64 {
        let half_h = f64::from(area.height.saturating_sub(1)) / 2.0;
        let half_w = f64::from(area.width.saturating_sub(label_width)) / 2.0;
        (half_h / OUTER_RING).min(half_w / (OUTER_RING * CELL_ASPECT))
    }
}

impl<'a> Widget for OrbitView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height < 5 {
            return;
        }
        let label_width = self.tech.iter().map(|t| t.len() as u16).max().unwrap_or(0);
        let unit = Self::unit(area, label_width);
        let cx = f64::from(area.x) + f64::from(area.width) / 2.0;
        let cy = f64::from(area.y) + f64::from(area.height) / 2.0;
        let to_cell = |x: f64, y: f64| -> (f64, f64) {
            (cx + x * unit * CELL_ASPECT, cy + y * unit)
        };

        let ring = Theme::muted_style();
        for radius in [BASE_RADIUS, BASE_RADIUS + RADIUS_STEP, OUTER_RING] {
            let steps = (radius * unit * 8.0).max(24.0) as usize;
            for i in 0..steps {
                let theta = TAU * i as f64 / steps as f64;
                let (x, y) = to_cell(radius * theta.sin(), -radius * theta.cos());
                put(buf, area, x, y, "·", ring);
            }
        }

        let (bx, by) = to_cell(0.0, 0.0);
        let badge_x = bx - BADGE.len() as f64 / 2.0;
        put_str(buf, area, badge_x, by, BADGE, Theme::heading_style());

        for (orbit, name) in orbits(self.tech.len()).iter().zip(self.tech) {
            let (x, y) = orbit.position(self.elapsed);
            let (x, y) = to_cell(x, y);
            put_str(buf, area, x - name.len() as f64 / 2.0, y, name, Theme::accent_style());
        }
    }
}

fn put(buf: &mut Buffer, area: Rect, x: f64, y: f64, symbol: &str, style: Style) {
    let (x, y) = (x.floor(), y.floor());
    if x < f64::from(area.left())
        || x >= f64::from(area.right())
        || y < f64::from(area.top())
        || y >= f64::from(area.bottom())
    {
        return;
    }
    if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
        cell.set_symbol(symbol).set_style(style);
    }
}

fn put_str(buf: &mut Buffer, area: Rect, x: f64, y: f64, text: &str, style: Style) {
    for (i, ch) in text.chars().enumerate() {
        let mut tmp = [0u8; 4];
        put(buf, area, x + i as f64, y, ch.encode_utf8(&mut tmp), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn find(buf: &Buffer, needle: &str) -> Option<(usize, u16)> {
        (0..buf.area.height).find_map(|y| {
            let text = row(buf, y);
            text.find(needle).map(|b| (text[..b].chars().count(), y))
        })
    }

    #[test]
    fn badge_sits_in_the_middle() {
        let area = Rect::new(0, 0, 60, 21);
        let mut buf = Buffer::empty(area);
        OrbitView { tech: &["Rust"], elapsed: Duration::ZERO }.render(area, &mut buf);
        assert_eq!(find(&buf, "SKILLS"), Some((27, 10)));
    }

    #[test]
    fn first_logo_starts_at_twelve_and_moves_clockwise() {
        let area = Rect::new(0, 0, 60, 21);
        let mut start = Buffer::empty(area);
        OrbitView { tech: &["Rust"], elapsed: Duration::ZERO }.render(area, &mut start);
        let (x0, y0) = find(&start, "Rust").expect("drawn");
        assert!(y0 < 10);

        // A quarter period later it is at three o'clock.
        let mut later = Buffer::empty(area);
        OrbitView { tech: &["Rust"], elapsed: Duration::from_secs(5) }.render(area, &mut later);
        let (x1, y1) = find(&later, "Rust").expect("drawn");
        assert!(x1 > x0);
        assert!(y1 >= 9 && y1 <= 11);
    }
}
