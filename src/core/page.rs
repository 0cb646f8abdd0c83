//! Vertical page layout: where every section sits, in rows.
//!
//! The page is a single column.  Most sections have a height derived from
//! their content.  The projects section is special: a sticky header followed
//! by one viewport-tall slot per card, so the card stack has room to animate
//! while the user scrolls through it.

use super::content::Content;
use super::progress::{Region, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Certifications,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Certifications,
        Section::Blog,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Certifications => "Certifications",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }

    /// Position in page order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Case-insensitive lookup by label (used by `--section`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(name.trim()))
    }
}

/// Geometry of the projects section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectsLayout {
    pub top: f64,
    /// Sticky "SELECTED WORK" header.
    pub header: f64,
    /// One slot per card, each a viewport tall.
    pub slot: f64,
    pub count: usize,
    /// Space under the last card ("view all" link).
    pub tail: f64,
}

impl ProjectsLayout {
    pub fn card_slot(&self, index: usize) -> Region {
        Region::new(self.top + self.header + index as f64 * self.slot, self.slot)
    }

    /// The block holding every card slot plus the tail.
    pub fn wrapper(&self) -> Region {
        Region::new(
            self.top + self.header,
            self.count as f64 * self.slot + self.tail,
        )
    }

    pub fn header_region(&self) -> Region {
        Region::new(self.top, self.header)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    viewport_height: f64,
    regions: [Region; 7],
    projects: ProjectsLayout,
}

impl PageLayout {
    pub fn new(viewport_height: u16, content: &Content) -> Self {
        let vh = f64::from(viewport_height.max(1));

        let work_rows: usize = content.work.iter().map(|w| 2 + w.responsibilities.len()).sum();
        let about = 10.0 + (content.education.len() * 4).max(work_rows) as f64;

        let header = (vh * 0.35).round().max(5.0);
        let tail = (vh * 0.2).round() + 3.0;
        let projects_height = header + content.projects.len() as f64 * vh + tail;

        let certs = content.certifications().count();
        let acts = content.activities().count();
        let certifications = 6.0 + (certs.max(acts) * 3) as f64;

        let heights = [
            vh.max(16.0),
            about,
            projects_height,
            30.0,
            certifications,
            6.0 + (content.blog.len() * 2) as f64,
            26.0,
        ];

        let mut regions = [Region::default(); 7];
        let mut top = 0.0;
        for (region, height) in regions.iter_mut().zip(heights) {
            *region = Region::new(top, height);
            top += height;
        }

        let projects = ProjectsLayout {
            top: regions[Section::Projects.index()].top,
            header,
            slot: vh,
            count: content.projects.len(),
            tail,
        };

        Self {
            viewport_height: vh,
            regions,
            projects,
        }
    }

    pub fn region(&self, section: Section) -> Region {
        self.regions[section.index()]
    }

    pub fn projects(&self) -> &ProjectsLayout {
        &self.projects
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn viewport(&self, scroll: f64) -> Viewport {
        Viewport::new(scroll, self.viewport_height)
    }

    pub fn total_height(&self) -> f64 {
        self.regions[6].bottom()
    }

    pub fn max_scroll(&self) -> f64 {
        (self.total_height() - self.viewport_height).max(0.0)
    }

    pub fn clamp_scroll(&self, scroll: f64) -> f64 {
        scroll.clamp(0.0, self.max_scroll())
    }

    /// Scroll offset that brings `section` to the top of the viewport.
    pub fn anchor(&self, section: Section) -> f64 {
        self.clamp_scroll(self.region(section).top)
    }

    /// Section the reader is "in": the last one whose top has passed the
    /// upper third of the viewport.
    pub fn section_at(&self, scroll: f64) -> Section {
        let probe = scroll + self.viewport_height / 3.0;
        Section::ALL
            .into_iter()
            .rev()
            .find(|s| self.region(*s).top <= probe)
            .unwrap_or(Section::Home)
    }

    pub fn next_section(&self, scroll: f64) -> Section {
        let current = self.section_at(scroll).index();
        Section::ALL[(current + 1).min(Section::ALL.len() - 1)]
    }

    pub fn prev_section(&self, scroll: f64) -> Section {
        let current = self.section_at(scroll);
        // Mid-section: go back to its own top first.
        if scroll > self.anchor(current) + 0.5 {
            return current;
        }
        Section::ALL[current.index().saturating_sub(1)]
    }
}
