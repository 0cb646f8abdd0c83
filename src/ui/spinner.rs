//! Sending indicator — a small spinner + label rendered in the top-right
//! corner of a given area.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Braille-dot spinner frames.  Cycles through these on each tick.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_TIME: Duration = Duration::from_millis(80);

/// A small "sending…" indicator with a spinning icon.
///
/// Render this on top of the form's border.  It picks its own position
/// (top-right of `area`) and is invisible when `visible` is false.
pub struct SendingIndicator {
    /// Whether to show the indicator at all.
    pub visible: bool,
    /// App clock; drives the spinner frame.
    pub clock: Duration,
}

impl SendingIndicator {
    fn frame(&self) -> &'static str {
        let tick = self.clock.as_millis() / FRAME_TIME.as_millis();
        SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
    }
}

impl Widget for SendingIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.visible || area.width < 16 || area.height == 0 {
            return;
        }

        let label = format!(" {} sending ", self.frame());

        let label_width = label.chars().count() as u16;
        // Position: top-right, inside the border (leave 1 col for the border char).
        let x = area.x + area.width.saturating_sub(label_width + 2);
        let y = area.y; // top border row

        let line = Line::from(Span::styled(
            label,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));

        buf.set_line(x, y, &line, label_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_advance_with_the_clock() {
        let at = |ms| SendingIndicator { visible: true, clock: Duration::from_millis(ms) }.frame();
        assert_eq!(at(0), "⠋");
        assert_eq!(at(80), "⠙");
        assert_eq!(at(800), "⠋");
    }

    #[test]
    fn hidden_indicator_leaves_buffer_alone() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        SendingIndicator { visible: false, clock: Duration::ZERO }.render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
