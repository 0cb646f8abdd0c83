//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into cells on
//! the terminal.  No network I/O happens here.

pub mod blit;
pub mod card_stack;
pub mod contact_form;
pub mod layout;
pub mod nav;
pub mod orbit;
pub mod page;
pub mod popup;
pub mod sections;
pub mod smooth_scroll;
pub mod spinner;
pub mod theme;
