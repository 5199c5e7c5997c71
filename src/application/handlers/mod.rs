//! Application handlers.

pub mod messages;
pub mod ui;
