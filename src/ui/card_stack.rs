//! Stacked project cards.
//!
//! Every card sits in a viewport-tall slot and sticks to the top of the page
//! while its slot scrolls past, so later cards slide up over earlier ones.
//! Each card is drawn at `scale` around its top-center and nudged down by
//! `translate_y`; both come from the one published stack progress.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::core::{
    content::Project,
    page::ProjectsLayout,
    progress::{sample, ScrollOffset, Viewport},
    transform::{lerp, CardTransform},
};
use crate::ui::blit::{blit, offscreen};
use crate::ui::theme::Theme;

/// Largest card, in cells.
const MAX_CARD_WIDTH: u16 = 100;
const MAX_CARD_HEIGHT: u16 = 20;
const MIN_CARD_HEIGHT: u16 = 8;
/// Narrower cards put the image above the text.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 60;
/// Image zoom at the moment a card's slot enters from below.
const ENTRY_ZOOM: f64 = 2.0;
/// Pattern spacing, in cells, at zoom 1.
const PATTERN_SPACING: f64 = 3.0;

/// Full-size card box for a page column of `width x viewport_height`.
pub fn card_size(width: u16, viewport_height: u16) -> (u16, u16) {
    let w = width.min(MAX_CARD_WIDTH);
    let h = (f64::from(viewport_height) * 0.7).round() as u16;
    (w, h.clamp(MIN_CARD_HEIGHT, MAX_CARD_HEIGHT).min(viewport_height))
}

/// Card box after scaling around its top-center.
pub fn scaled_box(full: Rect, scale: f64) -> Rect {
    let scale = scale.clamp(0.0, 1.0);
    let w = (f64::from(full.width) * scale).round() as u16;
    let h = (f64::from(full.height) * scale).round() as u16;
    Rect::new(full.x + (full.width - w) / 2, full.y, w, h)
}

/// Screen row (relative to the page top) of a sticky slot container.
fn sticky_top(slot_top: f64, release: f64, viewport_height: f64) -> f64 {
    slot_top.max(0.0).min(release - viewport_height)
}

/// Renders every card of the stack in screen space.
pub struct CardStack<'a> {
    pub projects: &'a [Project],
    pub layout: &'a ProjectsLayout,
    pub viewport: Viewport,
    /// One per project, in order.
    pub transforms: &'a [CardTransform],
}

impl<'a> Widget for CardStack<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vh = self.viewport.height;
        let scroll = self.viewport.scroll.round();
        let (card_w, card_h) = card_size(area.width, area.height);
        let pad = f64::from(area.height.saturating_sub(card_h)) / 2.0;
        let Some(last) = self.layout.count.checked_sub(1) else {
            return;
        };
        let release = self.layout.card_slot(last).bottom() - scroll;

        // Later cards are drawn over earlier ones.
        for (index, (project, transform)) in
            self.projects.iter().zip(self.transforms).enumerate()
        {
            let slot = self.layout.card_slot(index);
            let slot_top = slot.top - scroll;
            if slot_top >= vh || release <= 0.0 {
                continue;
            }
            let container = sticky_top(slot_top, release, vh);
            let y = (container + pad + transform.translate_y).round() as i32;
            let full = Rect::new(area.x + (area.width - card_w) / 2, 0, card_w, card_h);
            let scaled = scaled_box(full, transform.scale);
            if scaled.width < 4 || scaled.height < 3 {
                continue;
            }

            let enter = sample(Some(slot), self.viewport, ScrollOffset::ENTER);
            let card = ProjectCard {
                project,
                index,
                image_zoom: lerp(ENTRY_ZOOM, 1.0, enter),
            };
            let rendered = offscreen(card, scaled.width, scaled.height);
            blit(
                &rendered,
                buf,
                area,
                i32::from(scaled.x),
                i32::from(area.y) + y,
                false,
            );
        }
    }
}

/// One project card, drawn to fill whatever box it is given.
pub struct ProjectCard<'a> {
    pub project: &'a Project,
    pub index: usize,
    /// Image zoom, from 2 while entering down to 1.
    pub image_zoom: f64,
}

impl<'a> Widget for ProjectCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg = Theme::card_bg(self.index);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style().bg(bg))
            .style(Style::default().bg(bg));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let direction = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let [image, text] = Layout::default()
            .direction(direction)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(inner);

        render_pattern(image, buf, self.image_zoom);
        self.render_text(text, buf);
    }
}

impl<'a> ProjectCard<'a> {
    fn render_text(&self, area: Rect, buf: &mut Buffer) {
        let area = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        };
        let p = self.project;
        let (shown, hidden) = p.chips();

        let mut chips: Vec<Span> = Vec::new();
        for tech in shown {
            chips.push(Span::styled(format!(" {tech} "), Theme::chip_style()));
            chips.push(Span::raw(" "));
        }
        if hidden > 0 {
            chips.push(Span::styled(format!(" +{hidden} "), Theme::chip_style()));
        }

        let lines = vec![
            Line::styled(format!("{:02}", self.index + 1), Theme::muted_style()),
            Line::styled(p.title, Theme::heading_style()),
            Line::styled(p.category.to_uppercase(), Theme::accent_style()),
            Line::raw(""),
            Line::styled(p.description, Theme::body_style()),
        ];
        let footer_rows = 3;
        let body_rows = area.height.saturating_sub(footer_rows);
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(Rect { height: body_rows, ..area }, buf);

        if area.height < footer_rows {
            return;
        }
        let bottom = area.y + area.height - footer_rows;
        Paragraph::new(Line::from(chips))
            .render(Rect::new(area.x, bottom, area.width, 1), buf);

        let link = if p.github.is_some() {
            "View Project ↗"
        } else {
            ""
        };
        let row = Rect::new(area.x, bottom + 2, area.width, 1);
        Paragraph::new(Span::styled(p.year, Theme::muted_style())).render(row, buf);
        Paragraph::new(Span::styled(
            link,
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ))
        .alignment(Alignment::Right)
        .render(row, buf);
    }
}

/// Stand-in for the project image: a diagonal hatch that spreads out as the
/// zoom grows, centred on the image.
fn render_pattern(area: Rect, buf: &mut Buffer, zoom: f64) {
    let spacing = (PATTERN_SPACING * zoom).round().max(1.0) as i32;
    let cx = i32::from(area.x + area.width / 2);
    let cy = i32::from(area.y + area.height / 2);
    let style = Theme::card_pattern_style();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            // Cells are about twice as tall as wide.
            let d = (i32::from(x) - cx) + 2 * (i32::from(y) - cy);
            if d.rem_euclid(spacing) == 0 {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol("╱").set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::CONTENT;
    use crate::core::page::PageLayout;
    use crate::core::transform::StackConfig;

    fn count(buf: &Buffer, symbol: &str) -> usize {
        buf.content().iter().filter(|c| c.symbol() == symbol).count()
    }

    #[test]
    fn scaling_keeps_top_center_fixed() {
        let full = Rect::new(10, 5, 80, 20);
        assert_eq!(scaled_box(full, 1.0), full);
        let half = scaled_box(full, 0.5);
        assert_eq!(half, Rect::new(30, 5, 40, 10));
    }

    #[test]
    fn sticky_container_pins_then_releases() {
        // below the viewport: follows the slot
        assert_eq!(sticky_top(12.0, 100.0, 30.0), 12.0);
        // scrolled past: pinned at the top
        assert_eq!(sticky_top(-40.0, 100.0, 30.0), 0.0);
        // wrapper ending: pushed up with it
        assert_eq!(sticky_top(-40.0, 20.0, 30.0), -10.0);
    }

    #[test]
    fn zoomed_image_has_sparser_pattern() {
        let area = Rect::new(0, 0, 30, 10);
        let mut wide = Buffer::empty(area);
        render_pattern(area, &mut wide, 2.0);
        let mut tight = Buffer::empty(area);
        render_pattern(area, &mut tight, 1.0);
        assert!(count(&wide, "╱") < count(&tight, "╱"));
    }

    #[test]
    fn card_shows_three_chips_and_overflow() {
        let project = &CONTENT.projects[0];
        let buf = offscreen(
            ProjectCard {
                project,
                index: 0,
                image_zoom: 1.0,
            },
            90,
            16,
        );
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("VisionGuard"));
        assert!(text.contains(" Python "));
        assert!(text.contains(" +1 "));
        assert!(text.contains("01"));
    }

    #[test]
    fn stack_draws_pinned_cards_over_each_other() {
        let vh = 24;
        let layout = PageLayout::new(vh, &CONTENT);
        let projects = layout.projects();
        // Scroll so the third card's slot is at the very top.
        let scroll = projects.card_slot(2).top;
        let viewport = layout.viewport(scroll);
        let stack = StackConfig::new(CONTENT.projects.len());
        let transforms: Vec<_> = stack
            .descriptors()
            .map(|item| CardTransform::compute(0.5, &item, &stack))
            .collect();

        let area = Rect::new(0, 0, 100, vh);
        let mut buf = Buffer::empty(area);
        CardStack {
            projects: CONTENT.projects,
            layout: projects,
            viewport,
            transforms: &transforms,
        }
        .render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        // Third card is on top; the ones before it are covered.
        assert!(text.contains("Global CO"));
        assert!(!text.contains("VisionGuard"));
    }
}
