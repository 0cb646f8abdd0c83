//! Core model – scroll progress, card transforms, page layout and content.
//!
//! Nothing in this module depends on any TUI or rendering crate.  The motion
//! pieces (`progress`, `transform`, `spring`, `orbit`, `reveal`) are pure
//! functions of their inputs plus an explicit clock.

pub mod contact;
pub mod content;
pub mod orbit;
pub mod page;
pub mod progress;
pub mod relay;
pub mod reveal;
pub mod spring;
pub mod transform;
