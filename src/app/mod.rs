//! Application layer — state, input handling and background tasks.

pub mod contact_runtime;
pub mod event;
pub mod handler;
pub mod state;
