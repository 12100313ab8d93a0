//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the hangman rules, session state and timing logic.
//! It has **zero dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: the same seed and inputs replay the same session
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: runs in any frontend (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`guess`]: secret word, guessed letters, display reconstruction, win/loss
//! - [`economy`]: coin balance, power-up costs and one-shot flags
//! - [`hint`]: delayed auto-guess scheduler
//! - [`shake`]: cosmetic screen shake timer
//! - [`game_state`]: one session tying the above together
//! - [`session`]: word dealing, new game and reset
//! - [`words`]: word supply trait and the built-in word bank
//! - [`rng`]: seeded randomness
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - **Mistakes**: 6 wrong guesses lose the game and reveal the word
//! - **Coins**: +1 per correct letter, `max(1, 5 - mistakes)` bonus on a win
//! - **Power-ups** (one use each per session): Vowel Revealer (2), Second
//!   Chance (3), Letter Eliminator (4)
//! - **Hint**: once per session, guesses a hidden letter after one second
//!
//! # Example
//!
//! ```
//! use tui_hangman_core::{GameRng, Session};
//! use tui_hangman_types::{Category, Difficulty, GameStatus, Letter, HINT_COMMIT_DELAY_MS};
//!
//! let supply = |_: Difficulty, _: Category| Some("CAT".to_string());
//! let mut session = Session::new(supply, Difficulty::Easy, Category::Animals, GameRng::new(1)).unwrap();
//!
//! let game = session.game_mut();
//! game.guess_letter(Letter::new('c').unwrap());
//! assert_eq!(game.display(), "C _ _");
//!
//! game.use_hint();
//! game.tick(HINT_COMMIT_DELAY_MS);
//! assert_eq!(game.board().guessed().len(), 2);
//!
//! for ch in ['A', 'T'] {
//!     game.guess_letter(Letter::new(ch).unwrap());
//! }
//! assert_eq!(game.status(), GameStatus::Won);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. It advances the screen shake, the hint reveal text
//! and the armed hint guess.

pub mod economy;
pub mod error;
pub mod game_state;
pub mod guess;
pub mod hint;
pub mod rng;
pub mod session;
pub mod shake;
pub mod snapshot;
pub mod words;

pub use tui_hangman_types as types;

// Re-export commonly used types for convenience
pub use economy::{Economy, PowerUp};
pub use error::{SessionError, SessionResult};
pub use game_state::GameState;
pub use guess::{display_string, reveal_cells, GuessBoard, GuessOutcome, SecretWord};
pub use hint::HintScheduler;
pub use rng::GameRng;
pub use session::Session;
pub use shake::ScreenShake;
pub use snapshot::{GameSnapshot, HintSnapshot, PowerUpView, ShakeSnapshot};
pub use words::{WordBank, WordSupply};
