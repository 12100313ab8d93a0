//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`InputCommand`]s. Gameplay keys become
//! [`crate::types::GameAction`]s; the rest (quit, difficulty and category
//! selection) are handled by the frame loop.

pub mod map;

pub use tui_hangman_types as types;

pub use map::{handle_key_event, InputCommand};
