//! Top navigation bar: monogram plus numbered section links.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::core::page::Section;
use crate::ui::theme::Theme;

const GAP: u16 = 1;

pub struct NavBar<'a> {
    pub monogram: &'a str,
    pub current: Section,
}

impl<'a> NavBar<'a> {
    fn label(section: Section) -> String {
        format!(" {} {} ", section.index() + 1, section.label())
    }

    /// `(section, x, width)` of every link that fits in `area`.
    pub fn links(&self, area: Rect) -> Vec<(Section, u16, u16)> {
        let mut x = area.x + self.monogram.chars().count() as u16 + 2;
        let mut out = Vec::new();
        for section in Section::ALL {
            let width = Self::label(section).chars().count() as u16;
            if x + width > area.right() {
                break;
            }
            out.push((section, x, width));
            x += width + GAP;
        }
        out
    }

    /// Section whose link covers column `x`.
    pub fn hit_test(&self, area: Rect, x: u16) -> Option<Section> {
        self.links(area)
            .into_iter()
            .find(|&(_, start, width)| x >= start && x < start + width)
            .map(|(section, _, _)| section)
    }
}

impl<'a> Widget for NavBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, Theme::status_bar_style());
        buf.set_stringn(
            area.x + 1,
            area.y,
            self.monogram,
            usize::from(area.width.saturating_sub(1)),
            Theme::title_style().patch(Theme::status_bar_style()),
        );
        for (section, x, _) in self.links(area) {
            let style = if section == self.current {
                Theme::nav_active_style()
            } else {
                Theme::status_bar_style()
            };
            buf.set_string(x, area.y, Self::label(section), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_map_to_links() {
        let nav = NavBar { monogram: "SJ.", current: Section::Home };
        let area = Rect::new(0, 0, 120, 1);
        let links = nav.links(area);
        assert_eq!(links.len(), 7);
        let (section, x, _) = links[2];
        assert_eq!(section, Section::Projects);
        assert_eq!(nav.hit_test(area, x), Some(Section::Projects));
        assert_eq!(nav.hit_test(area, 0), None);
    }

    #[test]
    fn narrow_bar_drops_trailing_links() {
        let nav = NavBar { monogram: "SJ.", current: Section::Home };
        let links = nav.links(Rect::new(0, 0, 30, 1));
        assert!(links.len() < 7);
        assert_eq!(links[0].0, Section::Home);
    }
}
