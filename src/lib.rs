//! Restaurant menu editor.
//!
//! [`menu::MenuStateMachine`] owns a session's items, screen, form draft
//! and course filter. The [`ui`] module drives it from a terminal; the
//! [`report`] module prints it as plain text.

pub mod args;
pub mod config;
pub mod logging;
pub mod menu;
pub mod report;
pub mod ui;
