//! Key mapping from terminal events to game commands.
//!
//! Every letter key is a guess, so the remaining controls live on digits,
//! punctuation and function keys:
//!
//! | Key | Command |
//! |-----|---------|
//! | `a`-`z` | guess letter |
//! | `1` / `2` / `3` | Vowel Revealer / Second Chance / Letter Eliminator |
//! | `?` or `0` | hint |
//! | `F5` or `Ctrl-R` | reset (new word, same settings) |
//! | `F1` / `F2` / `F3` | new game on easy / medium / hard |
//! | `Tab` | new game in the next category |
//! | `Esc` or `Ctrl-C` | quit |

use crate::types::{Difficulty, GameAction, Letter, PowerUpKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the frame loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Action(GameAction),
    /// New game with this difficulty and the current category.
    SetDifficulty(Difficulty),
    /// New game with the current difficulty and the next category.
    CycleCategory,
    Quit,
}

/// Map keyboard input to a command.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(InputCommand::Quit),
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Some(InputCommand::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') if ctrl => Some(InputCommand::Action(GameAction::Reset)),
        KeyCode::F(5) => Some(InputCommand::Action(GameAction::Reset)),

        // Power-ups and hint
        KeyCode::Char('1') => Some(InputCommand::Action(GameAction::UsePowerUp(PowerUpKind::VowelRevealer))),
        KeyCode::Char('2') => Some(InputCommand::Action(GameAction::UsePowerUp(PowerUpKind::SecondChance))),
        KeyCode::Char('3') => Some(InputCommand::Action(GameAction::UsePowerUp(PowerUpKind::LetterEliminator))),
        KeyCode::Char('?') | KeyCode::Char('0') => Some(InputCommand::Action(GameAction::UseHint)),

        // Session
        KeyCode::F(1) => Some(InputCommand::SetDifficulty(Difficulty::Easy)),
        KeyCode::F(2) => Some(InputCommand::SetDifficulty(Difficulty::Medium)),
        KeyCode::F(3) => Some(InputCommand::SetDifficulty(Difficulty::Hard)),
        KeyCode::Tab => Some(InputCommand::CycleCategory),

        // Guesses
        KeyCode::Char(ch) if !ctrl => Letter::new(ch).map(|l| InputCommand::Action(GameAction::Guess(l))),

        _ => None,
    }
}
