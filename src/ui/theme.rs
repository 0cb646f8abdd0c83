//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── page ───────────────────────────────────────────────────
    pub fn heading_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn body_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn muted_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn chip_style() -> Style {
        Style::default().fg(Color::Black).bg(Color::Gray)
    }

    pub fn stat_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    // ── cards ──────────────────────────────────────────────────
    /// Alternating card backgrounds so stacked cards stay distinct.
    pub fn card_bg(index: usize) -> Color {
        const PALETTE: [Color; 4] = [
            Color::Rgb(30, 30, 36),
            Color::Rgb(22, 33, 40),
            Color::Rgb(36, 28, 40),
            Color::Rgb(26, 36, 28),
        ];
        PALETTE[index % PALETTE.len()]
    }

    pub fn card_pattern_style() -> Style {
        Style::default().fg(Color::Rgb(70, 70, 90))
    }

    // ── form ───────────────────────────────────────────────────
    pub fn error_style() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn success_style() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn focused_field_style() -> Style {
        Style::default().fg(Color::Yellow)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_active_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
