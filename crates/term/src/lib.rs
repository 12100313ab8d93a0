//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! [`core::GameSnapshot`] into a plain framebuffer which is then flushed to the
//! terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so layout can be unit-tested
//! - Apply the screen-shake offset without the core knowing about columns

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_hangman_core as core;
pub use tui_hangman_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{gallows, GameView, Viewport, SCENE_HEIGHT, SCENE_WIDTH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
