//! The scrolling page: places every visible section at its offset.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::app::state::AppState;
use crate::core::{
    page::Section,
    progress::Region,
    reveal::RevealStyle,
};
use crate::ui::blit::{blit_revealed, offscreen};
use crate::ui::card_stack::CardStack;
use crate::ui::layout::{centered_column, MAX_PAGE_WIDTH};
use crate::ui::sections::SectionView;
use crate::ui::theme::Theme;

/// The "view all" link fades in a little after the section.
const TAIL_DELAY: Duration = Duration::from_millis(200);

pub struct PageView<'a> {
    pub state: &'a AppState,
}

impl<'a> PageView<'a> {
    /// Screen row of a page row, relative to `area.y`.
    fn screen_row(&self, page_row: f64) -> i32 {
        (page_row - self.state.scroll.offset().round()) as i32
    }

    fn projects(&self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let projects = state.layout.projects();
        let section = state.layout.region(Section::Projects);
        let viewport = state.viewport();

        // Sticky header, pushed off by the end of the section.
        let header_region = projects.header_region();
        let header_h = header_region.height as i32;
        let top = self.screen_row(header_region.top).max(0);
        let top = top.min(self.screen_row(section.bottom()) - header_h);
        let header = offscreen(
            Paragraph::new(vec![
                Line::styled("SELECTED", Theme::heading_style()),
                Line::styled("WORK", Theme::muted_style()),
            ])
            .alignment(Alignment::Center),
            area.width,
            2,
        );
        let header_y = i32::from(area.y) + top + (header_h - 2) / 2;
        blit_revealed(&header, buf, area, i32::from(area.x), header_y, RevealStyle::SHOWN);

        CardStack {
            projects: state.content.projects,
            layout: projects,
            viewport,
            transforms: &state.card_transforms(),
        }
        .render(area, buf);

        let tail = Region::new(
            projects.wrapper().bottom() - projects.tail,
            projects.tail,
        );
        if tail.intersects(viewport) {
            let link = offscreen(
                Paragraph::new(vec![
                    Line::styled("VIEW ALL PROJECTS ↗", Theme::heading_style()),
                    Line::styled(state.content.all_projects_url, Theme::muted_style()),
                ])
                .alignment(Alignment::Center),
                area.width,
                2,
            );
            let y = self.screen_row(tail.top + (tail.height / 2.0).floor() - 1.0);
            let reveal = state.reveals.style(Section::Projects, state.clock, TAIL_DELAY);
            blit_revealed(&link, buf, area, i32::from(area.x), i32::from(area.y) + y, reveal);
        }
    }
}

impl<'a> Widget for PageView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let column = centered_column(area, MAX_PAGE_WIDTH);
        let viewport = state.viewport();

        for section in Section::ALL {
            let region = state.layout.region(section);
            if !region.intersects(viewport) {
                continue;
            }
            if section == Section::Projects {
                self.projects(column, buf);
                continue;
            }
            let rendered = offscreen(
                SectionView { section, state },
                column.width,
                region.height as u16,
            );
            // Home reveals word by word on its own.
            let reveal = if section == Section::Home {
                RevealStyle::SHOWN
            } else {
                state.reveals.style(section, state.clock, Duration::ZERO)
            };
            let y = i32::from(area.y) + self.screen_row(region.top);
            blit_revealed(&rendered, buf, area, i32::from(column.x), y, reveal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::content::CONTENT;
    use crate::ui::layout::AppLayout;

    fn render_at(section: Section) -> String {
        let mut config = AppConfig::new(CONTENT.contact.email);
        config.animations = false;
        let screen = Rect::new(0, 0, 100, 32);
        let mut state = AppState::new(&CONTENT, config, screen);
        state.jump_to(section);
        state.advance(Duration::from_millis(33));

        let area = AppLayout::from_area(screen).page_area;
        let mut buf = Buffer::empty(screen);
        PageView { state: &state }.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn renders_the_section_scrolled_to() {
        assert!(render_at(Section::Blog).contains("BLOG"));
        assert!(render_at(Section::About).contains("ABOUT ME"));
    }

    #[test]
    fn projects_show_header_and_first_card() {
        let out = render_at(Section::Projects);
        assert!(out.contains("SELECTED"));
        assert!(out.contains("VisionGuard"));
    }
}
