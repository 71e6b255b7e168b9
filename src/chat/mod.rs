//! The interactive quote-building session.
//!
//! Provides a REPL-style interface with slash commands on top of the
//! conversation state machine.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatSession, SessionConfig};
