//! Interactive chat mode.
//!
//! Provides a REPL-style interface built on a [`TurnController`], with
//! slash commands for inspecting the session.

/// Slash command parsing and autocomplete.
pub mod command;
mod controller;
mod session;
/// Append-only conversation record.
pub mod transcript;
mod ui;

pub use controller::{SubmitOutcome, TurnController};
pub use session::{ChatSession, SessionConfig};
pub use transcript::{Speaker, Transcript, Turn};
