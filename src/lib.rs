//! TUI Hangman (workspace facade crate).
//!
//! Exposes `tui_hangman::{core,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub mod clock;
pub mod config;

pub use tui_hangman_core as core;
pub use tui_hangman_input as input;
pub use tui_hangman_term as term;
pub use tui_hangman_types as types;
