//! Popup overlay listing the key bindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::config::{Action, AppConfig};
use crate::ui::layout::centered_fixed;

/// Rows that are not bound through the config file.
const FIXED_KEYS: [(&str, &str); 4] = [
    ("Jump to section", "1-7"),
    ("Next / previous field", "Tab/⇧Tab"),
    ("Send message", "Enter/^s"),
    ("Leave form", "Esc"),
];

/// Key binding popup overlay.
pub struct HelpPopup<'a> {
    pub config: &'a AppConfig,
}

impl<'a> Widget for HelpPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // actions + blank + fixed rows + blank + hint + 2 border + 1 top blank
        let height = (Action::ALL.len() + FIXED_KEYS.len()) as u16 + 6;
        let popup = centered_fixed(52, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Controls ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let dim = Style::default().fg(Color::DarkGray);
        let key_style = Style::default().fg(Color::Yellow);
        let inner_width = inner.width as usize;
        let row = |label: &str, keys: String| {
            // Fixed-width columns: label left-aligned, keys right-aligned.
            let label_col = format!("   {label:<22}");
            let keys_width = inner_width.saturating_sub(label_col.chars().count() + 1).max(1);
            Line::from(vec![
                Span::styled(label_col, Style::default().fg(Color::White)),
                Span::styled(format!("{keys:>keys_width$}"), key_style),
            ])
        };

        let mut lines = vec![Line::raw("")];
        for &action in Action::ALL {
            lines.push(row(action.label(), self.config.display_bindings(action)));
        }
        lines.push(Line::raw(""));
        for (label, keys) in FIXED_KEYS {
            lines.push(row(label, keys.to_string()));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("  Any key: close", dim)));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_action() {
        let config = AppConfig::new("owner@example.com");
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        HelpPopup { config: &config }.render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        for action in Action::ALL {
            assert!(text.contains(action.label()), "{}", action.label());
        }
        assert!(text.contains("1-7"));
    }
}
