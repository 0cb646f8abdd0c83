//! Static page sections.
//!
//! Each section renders into its own offscreen buffer sized to its page
//! region; [`crate::ui::page::PageView`] places it on screen.  The projects
//! section is not here, it lives in screen space (see `card_stack`).

use std::time::Duration;

use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::state::{ActiveView, AppState};
use crate::core::{content::Credential, page::Section, reveal::RevealStyle};
use crate::ui::contact_form::ContactFormView;
use crate::ui::orbit::OrbitView;
use crate::ui::theme::Theme;

/// Delay between consecutive headline words.
const WORD_STAGGER: Duration = Duration::from_millis(100);
/// Two-column layouts need at least this much width.
const TWO_COLUMN_MIN_WIDTH: u16 = 70;

pub struct SectionView<'a> {
    pub section: Section,
    pub state: &'a AppState,
}

impl<'a> Widget for SectionView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = Rect {
            x: area.x + 2,
            width: area.width.saturating_sub(4),
            ..area
        };
        match self.section {
            Section::Home => hero(self.state, area, buf),
            Section::About => about(self.state, area, buf),
            Section::Projects => {}
            Section::Skills => skills(self.state, area, buf),
            Section::Certifications => certifications(self.state, area, buf),
            Section::Blog => blog(self.state, area, buf),
            Section::Contact => contact(self.state, area, buf),
        }
    }
}

fn heading(title: &str, area: Rect, buf: &mut Buffer) {
    buf.set_string(area.x, area.y, title, Theme::heading_style());
}

fn rows(area: Rect, top: u16, height: u16) -> Rect {
    let y = area.y + top.min(area.height);
    Rect::new(area.x, y, area.width, height.min(area.bottom() - y))
}

fn columns(area: Rect) -> Option<[Rect; 2]> {
    (area.width >= TWO_COLUMN_MIN_WIDTH).then(|| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(2)
            .areas(area)
    })
}

// ───────────────────────────────────────── home ──────────────

/// Greedy word wrap; returns lines of word indices.
fn wrap_words(words: &[&str], width: u16) -> Vec<Vec<usize>> {
    let mut lines: Vec<Vec<usize>> = Vec::new();
    let mut used = 0usize;
    for (i, word) in words.iter().enumerate() {
        let len = word.chars().count();
        match lines.last_mut() {
            Some(line) if used + 1 + len <= usize::from(width) => {
                line.push(i);
                used += 1 + len;
            }
            _ => {
                lines.push(vec![i]);
                used = len;
            }
        }
    }
    lines
}

fn hero(state: &AppState, area: Rect, buf: &mut Buffer) {
    let content = state.content;
    let mid = area.y + area.height / 2;

    let owner = format!("{}  {}", content.monogram, content.owner);
    Paragraph::new(Span::styled(owner, Theme::muted_style()))
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, mid.saturating_sub(4), area.width, 1), buf);

    // Headline words rise in one after another.
    let lines = wrap_words(content.headline, area.width);
    let first_row = mid.saturating_sub(lines.len() as u16);
    for (row, line) in lines.iter().enumerate() {
        let width: usize = line.iter().map(|&i| content.headline[i].chars().count() + 1).sum();
        let mut x = area.x + (area.width.saturating_sub(width.saturating_sub(1) as u16)) / 2;
        for &i in line {
            let word = content.headline[i];
            let delay = WORD_STAGGER * i as u32;
            let style = state.reveals.style(Section::Home, state.clock, delay);
            draw_word(buf, area, x, first_row + row as u16, word, style);
            x += word.chars().count() as u16 + 1;
        }
    }

    let tagline = rows(area, (mid - area.y) + 1, 2);
    Paragraph::new(Span::styled(content.tagline, Theme::body_style()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(tagline, buf);

    if area.height > 2 {
        Paragraph::new(Span::styled("scroll ↓", Theme::muted_style()))
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, area.bottom() - 2, area.width, 1), buf);
    }
}

fn draw_word(buf: &mut Buffer, area: Rect, x: u16, y: u16, word: &str, reveal: RevealStyle) {
    if reveal.opacity < 0.05 {
        return;
    }
    let y = y + reveal.offset_rows.round() as u16;
    if y >= area.bottom() {
        return;
    }
    let mut style = Theme::heading_style();
    if reveal.opacity < 1.0 {
        style = style.add_modifier(Modifier::DIM);
    }
    buf.set_stringn(x, y, word, usize::from(area.right().saturating_sub(x)), style);
}

// ───────────────────────────────────────── about ─────────────

fn about(state: &AppState, area: Rect, buf: &mut Buffer) {
    let content = state.content;
    heading("ABOUT ME", rows(area, 1, 1), buf);
    Paragraph::new(Span::styled(content.about, Theme::body_style()))
        .wrap(Wrap { trim: true })
        .render(rows(area, 3, 3), buf);

    let body = rows(area, 7, area.height.saturating_sub(7));
    let (edu_area, work_area) = match columns(body) {
        Some([left, right]) => (left, Some(right)),
        None => (body, None),
    };

    let mut lines = vec![Line::styled("EDUCATION", Theme::accent_style()), Line::raw("")];
    for e in content.education {
        lines.push(Line::styled(e.degree, Theme::heading_style()));
        lines.push(Line::styled(format!("{} · {}", e.field, e.institution), Theme::body_style()));
        lines.push(Line::styled(format!("{} · {}", e.period, e.score), Theme::muted_style()));
        lines.push(Line::raw(""));
    }
    Paragraph::new(lines).render(edu_area, buf);

    let Some(work_area) = work_area else {
        return;
    };
    let mut lines = vec![Line::styled("EXPERIENCE", Theme::accent_style()), Line::raw("")];
    for w in content.work {
        lines.push(Line::from(vec![
            Span::styled(w.role, Theme::heading_style()),
            Span::styled(format!("  {}", w.period), Theme::muted_style()),
        ]));
        for r in w.responsibilities {
            lines.push(Line::styled(format!("• {r}"), Theme::body_style()));
        }
        lines.push(Line::raw(""));
    }
    Paragraph::new(lines).render(work_area, buf);
}

// ───────────────────────────────────────── skills ────────────

fn skills(state: &AppState, area: Rect, buf: &mut Buffer) {
    let content = state.content;
    let (text, orbit) = match columns(area) {
        Some([left, right]) => (left, right),
        None => {
            let [top, bottom] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(16), Constraint::Min(0)])
                .areas(area);
            (top, bottom)
        }
    };

    heading("SKILLS & EXPERTISE", rows(text, 1, 1), buf);
    Paragraph::new(Span::styled(content.skills_intro, Theme::body_style()))
        .wrap(Wrap { trim: true })
        .render(rows(text, 3, 4), buf);

    let tags: Vec<Span> = content
        .skill_tags
        .iter()
        .flat_map(|t| [Span::styled(format!("[{t}]"), Theme::accent_style()), Span::raw(" ")])
        .collect();
    Paragraph::new(Line::from(tags))
        .wrap(Wrap { trim: true })
        .render(rows(text, 8, 4), buf);

    let stats = rows(text, 13, 2);
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, state.counters.len().max(1) as u32); state.counters.len()])
        .split(stats);
    for (counter, cell) in state.counters.iter().zip(cells.iter()) {
        Paragraph::new(vec![
            Line::styled(counter.display(), Theme::stat_style()),
            Line::styled(counter.label, Theme::muted_style()),
        ])
        .render(*cell, buf);
    }

    OrbitView {
        tech: content.tech,
        elapsed: state.animation_clock(),
    }
    .render(orbit, buf);
}

// ───────────────────────────────────────── certifications ────

fn credential_lines<'a>(title: &'a str, items: impl Iterator<Item = &'a Credential>) -> Vec<Line<'a>> {
    let mut lines = vec![Line::styled(title, Theme::accent_style()), Line::raw("")];
    for c in items {
        lines.push(Line::styled(c.title, Theme::heading_style()));
        let detail = match c.detail {
            Some(d) => format!("{d} · {}", c.when),
            None => c.when.to_string(),
        };
        lines.push(Line::styled(detail, Theme::muted_style()));
        lines.push(Line::raw(""));
    }
    lines
}

fn certifications(state: &AppState, area: Rect, buf: &mut Buffer) {
    let content = state.content;
    heading("CERTIFICATIONS & ACTIVITIES", rows(area, 1, 1), buf);
    let body = rows(area, 4, area.height.saturating_sub(4));
    let certs = credential_lines("CERTIFICATIONS & COURSES", content.certifications());
    let acts = credential_lines("ACTIVITIES", content.activities());
    match columns(body) {
        Some([left, right]) => {
            Paragraph::new(certs).render(left, buf);
            Paragraph::new(acts).render(right, buf);
        }
        None => Paragraph::new(certs).render(body, buf),
    }
}

// ───────────────────────────────────────── blog ──────────────

fn blog(state: &AppState, area: Rect, buf: &mut Buffer) {
    heading("BLOG", rows(area, 1, 1), buf);
    let mut lines = Vec::new();
    for post in state.content.blog {
        let mut spans = vec![
            Span::styled(format!("{:<14}", post.date), Theme::muted_style()),
            Span::styled(format!("{:<22}", post.category), Theme::accent_style()),
            Span::styled(post.title, Theme::heading_style()),
        ];
        if post.link.is_some() {
            spans.push(Span::styled(" ↗", Theme::muted_style()));
        }
        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }
    Paragraph::new(lines).render(rows(area, 3, area.height.saturating_sub(3)), buf);
}

// ───────────────────────────────────────── contact ───────────

/// Rows reserved for the footer at the bottom of the contact section.
const FOOTER_ROWS: u16 = 3;

fn contact(state: &AppState, area: Rect, buf: &mut Buffer) {
    let content = state.content;
    heading("GET IN TOUCH", rows(area, 1, 1), buf);
    buf.set_stringn(
        area.x,
        area.y + 2,
        "Have a project in mind? Send a message.",
        usize::from(area.width),
        Theme::muted_style(),
    );

    let body = rows(area, 4, area.height.saturating_sub(4 + FOOTER_ROWS));
    let form_area = match columns(body) {
        Some([left, right]) => {
            let mut lines = vec![
                Line::styled("EMAIL", Theme::accent_style()),
                Line::styled(content.contact.email, Theme::body_style()),
                Line::raw(""),
                Line::styled("ADDRESS", Theme::accent_style()),
                Line::styled(content.contact.address, Theme::body_style()),
                Line::raw(""),
                Line::styled("ELSEWHERE", Theme::accent_style()),
            ];
            for (name, url) in content.contact.socials {
                lines.push(Line::from(vec![
                    Span::styled(format!("{name:<10}"), Theme::body_style()),
                    Span::styled(*url, Theme::muted_style()),
                ]));
            }
            Paragraph::new(lines).wrap(Wrap { trim: true }).render(left, buf);
            right
        }
        None => body,
    };

    ContactFormView {
        form: &state.form,
        focused: state.active_view == ActiveView::Contact,
        clock: state.clock,
        config: &state.config,
    }
    .render(form_area, buf);

    let footer = rows(area, area.height.saturating_sub(FOOTER_ROWS), FOOTER_ROWS);
    let year = chrono::Local::now().year();
    Paragraph::new(vec![
        Line::raw(""),
        Line::styled(
            format!("© {year} {}. All rights reserved.", content.owner),
            Theme::muted_style(),
        ),
    ])
    .alignment(Alignment::Center)
    .render(footer, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::content::CONTENT;
    use crate::ui::blit::offscreen;

    fn state() -> AppState {
        let mut config = AppConfig::new(CONTENT.contact.email);
        config.animations = false;
        AppState::new(&CONTENT, config, Rect::new(0, 0, 100, 32))
    }

    fn text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    fn render(state: &AppState, section: Section) -> String {
        let height = state.layout.region(section).height as u16;
        text(&offscreen(SectionView { section, state }, 100, height))
    }

    #[test]
    fn wraps_words_greedily() {
        let words = ["Data", "&", "Machine", "Learning"];
        assert_eq!(wrap_words(&words, 14), vec![vec![0, 1, 2], vec![3]]);
        assert_eq!(wrap_words(&words, 80), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn hero_words_stay_hidden_until_seen() {
        let mut config = AppConfig::new(CONTENT.contact.email);
        config.animations = true;
        let mut s = AppState::new(&CONTENT, config, Rect::new(0, 0, 100, 32));
        assert!(!render(&s, Section::Home).contains("Machine"));

        s.advance(Duration::from_secs(2));
        assert!(render(&s, Section::Home).contains("Machine"));
    }

    #[test]
    fn skills_show_settled_counters() {
        let mut s = state();
        s.jump_to(Section::Skills);
        s.advance(Duration::from_millis(33));
        let out = render(&s, Section::Skills);
        assert!(out.contains("15+"));
        assert!(out.contains("SKILLS"));
    }

    #[test]
    fn footer_carries_owner() {
        let out = render(&state(), Section::Contact);
        assert!(out.contains("All rights reserved."));
        assert!(out.contains(CONTENT.contact.email));
    }

    #[test]
    fn certifications_split_by_kind() {
        let out = render(&state(), Section::Certifications);
        assert!(out.contains("CERTIFICATIONS & COURSES"));
        assert!(out.contains("ACTIVITIES"));
    }
}
