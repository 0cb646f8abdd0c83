//! The contact form: three boxed fields, inline errors and a status line.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::config::{Action, AppConfig};
use crate::core::contact::{ContactForm, Field, SubmitStatus};
use crate::ui::spinner::SendingIndicator;
use crate::ui::theme::Theme;

const CURSOR: &str = "▏";

pub struct ContactFormView<'a> {
    pub form: &'a ContactForm,
    /// Keystrokes are going to the form.
    pub focused: bool,
    pub clock: Duration,
    pub config: &'a AppConfig,
}

impl<'a> ContactFormView<'a> {
    fn field(&self, field: Field, area: Rect, buf: &mut Buffer) {
        let active = self.focused && self.form.focus == field;
        let error = self.form.error(field);
        let border = if error.is_some() {
            Theme::error_style()
        } else if active {
            Theme::focused_field_style()
        } else {
            Theme::border_style()
        };

        let mut block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        if let Some(err) = error {
            block = block.title_bottom(Span::styled(format!(" {err} "), Theme::error_style()));
        }

        let mut spans = vec![Span::styled(self.form.value(field), Theme::body_style())];
        if active {
            spans.push(Span::styled(
                CURSOR,
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        let mut text = Paragraph::new(Line::from(spans)).block(block);
        if field == Field::Message {
            text = text.wrap(Wrap { trim: false });
        }
        text.render(area, buf);
    }
}

impl<'a> Widget for ContactFormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [name, email, message, status] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .areas(area);

        self.field(Field::Name, name, buf);
        self.field(Field::Email, email, buf);
        self.field(Field::Message, message, buf);

        SendingIndicator {
            visible: self.form.is_sending(),
            clock: self.clock,
        }
        .render(name, buf);

        let line = match &self.form.status {
            SubmitStatus::Idle if self.focused => {
                Line::styled("Tab: next field · Enter on message: send · Esc: back", Theme::muted_style())
            }
            SubmitStatus::Idle => Line::styled(
                format!(
                    "Press {} to write a message",
                    self.config.short_binding(Action::FocusContact)
                ),
                Theme::muted_style(),
            ),
            SubmitStatus::Sending => Line::styled("Sending…", Theme::muted_style()),
            SubmitStatus::Success { .. } => Line::styled(
                "Message sent successfully! I'll get back to you soon.",
                Theme::success_style(),
            ),
            SubmitStatus::Error { .. } => Line::styled(
                "Failed to send message. Please try again.",
                Theme::error_style(),
            ),
        };
        Paragraph::new(line).render(status, buf);
    }
}
