//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::core::contact::Field;
use crate::core::page::Section;
use crate::ui::layout::{point_in_rect, AppLayout};
use crate::ui::nav::NavBar;

use super::state::{ActiveView, AppState, SCROLL_STEP};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Page => handle_page_key(state, key),
        ActiveView::Contact => handle_contact_key(state, key),
        ActiveView::Help => state.active_view = ActiveView::Page,
    }
}

// ── Page (configurable bindings) ────────────────────────────────

fn handle_page_key(state: &mut AppState, key: KeyEvent) {
    if let KeyCode::Char(c @ '1'..='7') = key.code {
        let index = c as usize - '1' as usize;
        state.jump_to(Section::ALL[index]);
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    let page = state.layout.viewport_height();
    let scroll = state.scroll.target();

    match action {
        Action::ScrollUp => state.scroll_by(-SCROLL_STEP),
        Action::ScrollDown => state.scroll_by(SCROLL_STEP),
        Action::PageUp => state.scroll_by(-(page - 2.0).max(1.0)),
        Action::PageDown => state.scroll_by((page - 2.0).max(1.0)),
        Action::PrevSection => {
            let section = state.layout.prev_section(scroll);
            state.jump_to(section);
        }
        Action::NextSection => {
            let section = state.layout.next_section(scroll);
            state.jump_to(section);
        }
        Action::Top => state.jump_to(Section::Home),
        Action::Bottom => {
            let bottom = state.layout.max_scroll();
            state.scroll.set_target(bottom);
            if !state.config.animations {
                state.scroll.jump();
            }
        }
        Action::FocusContact => {
            state.jump_to(Section::Contact);
            state.active_view = ActiveView::Contact;
        }
        Action::ShowHelp => state.active_view = ActiveView::Help,
        Action::Quit => state.should_quit = true,
    }
}

// ── Contact form ────────────────────────────────────────────────

fn handle_contact_key(state: &mut AppState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => state.active_view = ActiveView::Page,
        KeyCode::Char('s') if ctrl => state.submit_contact(),
        KeyCode::Tab | KeyCode::Down => state.form.focus = state.form.focus.next(),
        KeyCode::BackTab | KeyCode::Up => state.form.focus = state.form.focus.prev(),
        KeyCode::Enter => {
            if state.form.focus == Field::Message {
                state.submit_contact();
            } else {
                state.form.focus = state.form.focus.next();
            }
        }
        KeyCode::Backspace => {
            if !state.form.is_sending() {
                state.form.backspace();
            }
        }
        KeyCode::Char(c) if !ctrl => {
            if !state.form.is_sending() {
                state.form.insert_char(c);
            }
        }
        _ => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view == ActiveView::Help {
        return;
    }
    let layout = AppLayout::from_area(state.screen);

    match mouse.kind {
        MouseEventKind::ScrollDown => state.scroll_by(SCROLL_STEP),
        MouseEventKind::ScrollUp => state.scroll_by(-SCROLL_STEP),
        MouseEventKind::Down(MouseButton::Left) => {
            if !point_in_rect(layout.nav_area, mouse.column, mouse.row) {
                return;
            }
            let nav = NavBar {
                monogram: state.content.monogram,
                current: state.current_section(),
            };
            if let Some(section) = nav.hit_test(layout.nav_area, mouse.column) {
                state.active_view = ActiveView::Page;
                state.jump_to(section);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::content::CONTENT;
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn state() -> AppState {
        let mut config = AppConfig::new(CONTENT.contact.email);
        config.animations = false;
        AppState::new(&CONTENT, config, Rect::new(0, 0, 100, 32))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn digits_jump_to_sections() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Char('6')));
        assert_eq!(s.current_section(), Section::Blog);
        handle_key(&mut s, key(KeyCode::Char('1')));
        assert_eq!(s.scroll.target(), 0.0);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut s = state();
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        handle_key(&mut s, release);
        assert!(!s.should_quit);
        handle_key(&mut s, key(KeyCode::Char('q')));
        assert!(s.should_quit);
    }

    #[test]
    fn section_keys_walk_the_page() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Right));
        assert_eq!(s.current_section(), Section::About);
        handle_key(&mut s, key(KeyCode::Right));
        assert_eq!(s.current_section(), Section::Projects);
        handle_key(&mut s, key(KeyCode::Left));
        assert_eq!(s.current_section(), Section::About);
    }

    #[test]
    fn typing_fills_the_form_and_enter_submits() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Char('c')));
        assert_eq!(s.active_view, ActiveView::Contact);

        type_str(&mut s, "Ada");
        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.form.focus, Field::Email);
        // 'q' is text here, not quit
        type_str(&mut s, "ada@quux.io");
        handle_key(&mut s, key(KeyCode::Tab));
        type_str(&mut s, "Hello there, friend");
        handle_key(&mut s, key(KeyCode::Enter));

        assert!(!s.should_quit);
        assert_eq!(s.form.name, "Ada");
        assert!(s.outbox.is_some());
        assert!(s.form.is_sending());
    }

    #[test]
    fn invalid_submit_reports_errors() {
        let mut s = state();
        s.active_view = ActiveView::Contact;
        handle_key(&mut s, ctrl('s'));
        assert!(s.outbox.is_none());
        assert!(s.form.error(Field::Name).is_some());

        type_str(&mut s, "A");
        assert!(s.form.error(Field::Name).is_none());
        handle_key(&mut s, key(KeyCode::Esc));
        assert_eq!(s.active_view, ActiveView::Page);
    }

    #[test]
    fn help_closes_on_any_key() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Char('?')));
        assert_eq!(s.active_view, ActiveView::Help);
        handle_key(&mut s, key(KeyCode::Char('x')));
        assert_eq!(s.active_view, ActiveView::Page);
    }

    #[test]
    fn wheel_scrolls_and_nav_click_jumps() {
        let mut s = state();
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut s, wheel);
        assert_eq!(s.scroll.target(), SCROLL_STEP);

        let nav = NavBar { monogram: CONTENT.monogram, current: Section::Home };
        let (_, x, _) = nav.links(AppLayout::from_area(s.screen).nav_area)[3];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut s, click);
        s.advance(Duration::ZERO);
        assert_eq!(s.current_section(), Section::Skills);
    }
}
