//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).
//! [`AppState::advance`] is the per-frame step: it moves the clock, settles
//! the scroll animation and publishes the shared card-stack progress.

use std::time::Duration;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{
    contact::{ContactForm, ContactPayload},
    content::Content,
    page::{PageLayout, Section},
    progress::{ProgressSignal, ScrollOffset, Viewport},
    relay::RelayError,
    reveal::{RevealTracker, REVEAL_DURATION},
    spring::Counter,
    transform::{CardTransform, StackConfig},
};
use crate::ui::layout::AppLayout;
use crate::ui::smooth_scroll::SmoothScroll;

/// Rows moved per scroll step (arrow key or wheel notch).
pub const SCROLL_STEP: f64 = 3.0;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Page,
    /// Keystrokes go to the contact form.
    Contact,
    Help,
}

/// Top-level application state.
pub struct AppState {
    pub content: &'static Content,
    /// User-configurable keybindings and motion settings.
    pub config: AppConfig,
    /// Full terminal area, for mouse hit-testing.
    pub screen: Rect,
    /// Where every section sits for the current terminal size.
    pub layout: PageLayout,
    pub scroll: SmoothScroll,
    /// Shape of the project card stack.
    pub stack: StackConfig,
    /// Shared progress through the projects section.  Published once per
    /// frame, read by every card.
    pub stack_progress: ProgressSignal,
    pub reveals: RevealTracker<Section>,
    pub counters: Vec<Counter>,
    /// Time since launch, advanced by frames.
    pub clock: Duration,
    pub form: ContactForm,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Validated message waiting to be handed to the relay.
    pub outbox: Option<ContactPayload>,
}

impl AppState {
    pub fn new(content: &'static Content, config: AppConfig, screen: Rect) -> Self {
        let page = AppLayout::from_area(screen).page_area;
        let layout = PageLayout::new(page.height, content);
        let mut stack = StackConfig::new(content.projects.len());
        stack.scale_step = config.stack_step;
        stack.base_offset = base_offset(page.height);

        let mut state = Self {
            content,
            scroll: SmoothScroll::new(config.scroll_smoothing),
            reveals: RevealTracker::new(REVEAL_DURATION, config.animations),
            counters: content
                .stats
                .iter()
                .map(|s| Counter::parse(s.value, s.label))
                .collect(),
            config,
            screen,
            layout,
            stack,
            stack_progress: ProgressSignal::new(ScrollOffset::CONTAINER),
            clock: Duration::ZERO,
            form: ContactForm::default(),
            active_view: ActiveView::default(),
            should_quit: false,
            outbox: None,
        };
        state.advance(Duration::ZERO);
        state
    }

    /// Recompute the page for a new terminal size.  Keeps the reader in the
    /// same section.
    pub fn resize(&mut self, width: u16, height: u16) {
        let section = self.layout.section_at(self.scroll.offset());
        self.screen = Rect::new(0, 0, width, height);
        let page = AppLayout::from_area(self.screen).page_area;
        self.layout = PageLayout::new(page.height, self.content);
        self.stack.base_offset = base_offset(page.height);
        self.scroll.set_target(self.layout.anchor(section));
        self.scroll.jump();
        self.scroll.clamp(self.layout.max_scroll());
        self.sync_stack();
    }

    /// The viewport as currently drawn.
    pub fn viewport(&self) -> Viewport {
        self.layout.viewport(self.scroll.offset())
    }

    pub fn current_section(&self) -> Section {
        self.layout.section_at(self.scroll.target())
    }

    pub fn scroll_by(&mut self, rows: f64) {
        self.scroll.scroll_by(rows);
        self.scroll.clamp(self.layout.max_scroll());
        if !self.config.animations {
            self.scroll.jump();
        }
        self.sync_stack();
    }

    pub fn jump_to(&mut self, section: Section) {
        tracing::debug!(?section, "jump to section");
        self.scroll.set_target(self.layout.anchor(section));
        if !self.config.animations {
            self.scroll.jump();
        }
        self.sync_stack();
    }

    /// One frame.
    pub fn advance(&mut self, dt: Duration) {
        self.clock += dt;
        self.scroll.tick(dt);
        self.sync_stack();
        let viewport = self.viewport();

        for section in Section::ALL {
            let visible = self.layout.region(section).intersects(viewport);
            self.reveals.observe(section, visible, self.clock);
        }

        if self.reveals.has_seen(Section::Skills) {
            for counter in &mut self.counters {
                if self.config.animations {
                    counter.start();
                } else {
                    counter.finish();
                }
            }
        }
        for counter in &mut self.counters {
            counter.advance(dt);
        }

        self.form.expire_status(self.clock);
    }

    /// Producer: mount the projects region while it is on screen and publish
    /// the progress of the viewport about to be drawn.
    fn sync_stack(&mut self) {
        let viewport = self.viewport();
        let projects = self.layout.region(Section::Projects);
        if projects.intersects(viewport) {
            if !self.stack_progress.is_mounted() {
                tracing::debug!("project stack mounted");
            }
            self.stack_progress.mount(projects);
        } else if self.stack_progress.is_mounted() {
            tracing::debug!("project stack unmounted");
            self.stack_progress.unmount();
        }
        self.stack_progress.publish(viewport);
    }

    /// Consumers: one transform per card, all from the same published value.
    pub fn card_transforms(&self) -> Vec<CardTransform> {
        let progress = self.stack_progress.get();
        self.stack
            .descriptors()
            .map(|item| CardTransform::compute(progress, &item, &self.stack))
            .collect()
    }

    /// Clock value for decorative loops; frozen when animations are off.
    pub fn animation_clock(&self) -> Duration {
        if self.config.animations {
            self.clock
        } else {
            Duration::ZERO
        }
    }

    /// Validate the form and queue it for the relay.
    pub fn submit_contact(&mut self) {
        if let Some(payload) = self.form.begin_submit() {
            tracing::info!(from = %payload.email, "contact message queued");
            self.outbox = Some(payload);
        }
    }

    pub fn finish_contact(&mut self, outcome: Result<(), RelayError>) {
        match &outcome {
            Ok(()) => tracing::info!("contact message sent"),
            Err(err) => tracing::warn!("contact message failed: {err}"),
        }
        self.form
            .finish_submit(outcome.map_err(|e| e.to_string()), self.clock);
    }
}

/// Rows the first card is lifted above its slot, about 5% of the viewport.
fn base_offset(viewport_height: u16) -> f64 {
    -(f64::from(viewport_height) * 0.05).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::CONTENT;
    use crate::core::progress::sample;

    fn state() -> AppState {
        let mut config = AppConfig::new(CONTENT.contact.email);
        config.animations = false;
        AppState::new(&CONTENT, config, Rect::new(0, 0, 100, 32))
    }

    #[test]
    fn stack_is_unmounted_until_projects_scroll_into_view() {
        let mut s = state();
        assert!(!s.stack_progress.is_mounted());
        assert!(s.card_transforms().iter().all(|t| t.scale == 1.0));

        s.jump_to(Section::Projects);
        s.advance(Duration::from_millis(33));
        assert!(s.stack_progress.is_mounted());
        assert_eq!(s.stack_progress.get(), 0.0);
    }

    #[test]
    fn scrolling_through_projects_shrinks_earlier_cards() {
        let mut s = state();
        let projects = s.layout.region(Section::Projects);
        let vh = s.layout.viewport_height();
        s.scroll.set_target(projects.top + (projects.height - vh) / 2.0);
        s.scroll.jump();
        s.advance(Duration::from_millis(33));

        let p = s.stack_progress.get();
        assert!((p - 0.5).abs() < 1e-9, "progress {p}");
        let t = s.card_transforms();
        assert!(t[0].scale < t[1].scale);
        assert_eq!(t[4].scale, 1.0);
        assert!(t.windows(2).all(|w| w[1].translate_y - w[0].translate_y == 1.0));

        s.jump_to(Section::Contact);
        s.advance(Duration::from_millis(33));
        assert!(!s.stack_progress.is_mounted());
    }

    #[test]
    fn jumping_publishes_progress_before_the_next_frame() {
        let mut s = state();
        let projects = s.layout.region(Section::Projects);
        let vh = s.layout.viewport_height();
        s.advance(Duration::from_millis(33));

        s.scroll_by(projects.top + (projects.height - vh) / 2.0);
        assert!(s.stack_progress.is_mounted());
        assert!((s.stack_progress.get() - 0.5).abs() < 1e-9);

        s.jump_to(Section::Contact);
        assert!(!s.stack_progress.is_mounted());

        s.jump_to(Section::Projects);
        s.resize(100, 40);
        let projects = s.layout.region(Section::Projects);
        let expected = sample(Some(projects), s.viewport(), ScrollOffset::CONTAINER);
        assert_eq!(s.stack_progress.get(), expected);
    }

    #[test]
    fn counters_start_once_skills_are_seen() {
        let mut s = state();
        assert_eq!(s.counters[1].display(), "0+");
        s.jump_to(Section::Skills);
        s.advance(Duration::from_millis(33));
        assert_eq!(s.counters[1].display(), "15+");
    }

    #[test]
    fn resize_keeps_section() {
        let mut s = state();
        s.jump_to(Section::Blog);
        s.advance(Duration::ZERO);
        s.resize(80, 50);
        assert_eq!(s.current_section(), Section::Blog);
    }

    #[test]
    fn invalid_form_is_not_queued() {
        let mut s = state();
        s.submit_contact();
        assert!(s.outbox.is_none());

        s.form.name = "Ada".into();
        s.form.email = "ada@example.com".into();
        s.form.message = "Would love to collaborate.".into();
        s.submit_contact();
        assert!(s.outbox.is_some());
        assert!(s.form.is_sending());

        s.finish_contact(Ok(()));
        assert!(s.form.name.is_empty());
    }
}
