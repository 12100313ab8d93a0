//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no required dependencies, making them usable
//! in any context (core logic, terminal rendering, input mapping).
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_MISTAKES` | 6 | Wrong guesses before the game is lost |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `HINT_COMMIT_DELAY_MS` | 1000 | Delay before a hint auto-guesses its letter |
//! | `HINT_REVEAL_MS` | 3000 | How long the hint letter stays on screen |
//! | `SHAKE_DURATION_MS` | 300 | Screen shake length after a wrong guess |
//!
//! # Examples
//!
//! ```
//! use tui_hangman_types::{Category, Difficulty, Letter, PowerUpKind};
//!
//! let letter = Letter::new('q').unwrap();
//! assert_eq!(letter.as_char(), 'Q');
//!
//! assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
//! assert_eq!(Category::from_str("animals"), Some(Category::Animals));
//! assert_eq!(PowerUpKind::SecondChance.cost(), 3);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wrong guesses allowed before the game is lost.
pub const MAX_MISTAKES: u8 = 6;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Delay between arming a hint and the automatic guess.
pub const HINT_COMMIT_DELAY_MS: u32 = 1000;

/// Cosmetic lifetime of the hint reveal text.
pub const HINT_REVEAL_MS: u32 = 3000;

/// Screen shake duration after a wrong guess.
pub const SHAKE_DURATION_MS: u32 = 300;

/// Peak screen shake offset, in terminal columns.
pub const SHAKE_INTENSITY: u8 = 2;

/// Upper bound of the win bonus (`max(1, WIN_BONUS_BASE - mistakes)`).
pub const WIN_BONUS_BASE: u32 = 5;

/// Coins awarded per correct letter.
pub const COINS_PER_HIT: u32 = 1;

/// Letters the Letter Eliminator removes at most.
pub const ELIMINATOR_LETTERS: usize = 3;

/// Display placeholder for an unrevealed position.
pub const PLACEHOLDER: char = '_';

/// Vowels considered by the Vowel Revealer.
pub const VOWELS: [Letter; 5] = [
    Letter(b'A'),
    Letter(b'E'),
    Letter(b'I'),
    Letter(b'O'),
    Letter(b'U'),
];

/// A single uppercase ASCII letter (`A..=Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "char", try_from = "char"))]
pub struct Letter(u8);

impl Letter {
    /// Build a letter, normalising lowercase ASCII input.
    ///
    /// Returns `None` for anything outside `a..=z` / `A..=Z`.
    ///
    /// ```
    /// use tui_hangman_types::Letter;
    ///
    /// assert_eq!(Letter::new('a'), Letter::new('A'));
    /// assert!(Letter::new('1').is_none());
    /// assert!(Letter::new('é').is_none());
    /// ```
    pub fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self(ch.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based alphabet position (`A` = 0).
    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// All 26 letters in alphabetical order.
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        (b'A'..=b'Z').map(Letter)
    }

    pub fn is_vowel(self) -> bool {
        VOWELS.contains(&self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Letter> for char {
    fn from(value: Letter) -> Self {
        value.as_char()
    }
}

impl TryFrom<char> for Letter {
    type Error = String;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Letter::new(value).ok_or_else(|| format!("not an ASCII letter: {value:?}"))
    }
}

/// Word difficulty; decides word length band and starting coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Coins granted at the start of a session.
    pub fn starting_coins(&self) -> u32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 2,
            Difficulty::Hard => 1,
        }
    }

    /// Parse difficulty from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Word category offered by the word supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    #[default]
    General,
    Animals,
    Science,
    Geography,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Animals,
        Category::Science,
        Category::Geography,
    ];

    /// Parse category from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "general" => Some(Category::General),
            "animals" => Some(Category::Animals),
            "science" => Some(Category::Science),
            "geography" => Some(Category::Geography),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Animals => "animals",
            Category::Science => "science",
            Category::Geography => "geography",
        }
    }

    /// Next category in display order, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Category::General => Category::Animals,
            Category::Animals => Category::Science,
            Category::Science => Category::Geography,
            Category::Geography => Category::General,
        }
    }
}

/// The three one-shot power-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PowerUpKind {
    /// Guess one random unguessed vowel of the word
    VowelRevealer,
    /// Forgive one mistake
    SecondChance,
    /// Strike out up to three letters that are not in the word
    LetterEliminator,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::VowelRevealer,
        PowerUpKind::SecondChance,
        PowerUpKind::LetterEliminator,
    ];

    pub fn cost(&self) -> u32 {
        match self {
            PowerUpKind::VowelRevealer => 2,
            PowerUpKind::SecondChance => 3,
            PowerUpKind::LetterEliminator => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PowerUpKind::VowelRevealer => "Vowel Revealer",
            PowerUpKind::SecondChance => "Second Chance",
            PowerUpKind::LetterEliminator => "Letter Eliminator",
        }
    }

    /// Position in [`PowerUpKind::ALL`].
    pub fn slot(&self) -> usize {
        match self {
            PowerUpKind::VowelRevealer => 0,
            PowerUpKind::SecondChance => 1,
            PowerUpKind::LetterEliminator => 2,
        }
    }
}

/// Tri-state game status. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Game actions that can be applied to a session
///
/// These are produced by the input layer and routed by the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Guess a letter
    Guess(Letter),
    /// Spend coins on a power-up
    UsePowerUp(PowerUpKind),
    /// Arm the delayed hint
    UseHint,
    /// Deal a new word with the current difficulty/category
    Reset,
    /// Deal a new word with a different difficulty/category
    NewGame(Difficulty, Category),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_rejects_non_alpha() {
        assert!(Letter::new(' ').is_none());
        assert!(Letter::new('-').is_none());
        assert!(Letter::new('9').is_none());
    }

    #[test]
    fn test_letter_index_and_alphabet() {
        let all: Vec<Letter> = Letter::alphabet().collect();
        assert_eq!(all.len(), 26);
        assert_eq!(all[0].as_char(), 'A');
        assert_eq!(all[25].as_char(), 'Z');
        assert_eq!(Letter::new('c').unwrap().index(), 2);
    }

    #[test]
    fn test_vowels() {
        let vowels: String = Letter::alphabet()
            .filter(|l| l.is_vowel())
            .map(Letter::as_char)
            .collect();
        assert_eq!(vowels, "AEIOU");
    }

    #[test]
    fn test_starting_coins() {
        assert_eq!(Difficulty::Easy.starting_coins(), 3);
        assert_eq!(Difficulty::Medium.starting_coins(), 2);
        assert_eq!(Difficulty::Hard.starting_coins(), 1);
    }

    #[test]
    fn test_power_up_costs_and_slots() {
        assert_eq!(PowerUpKind::VowelRevealer.cost(), 2);
        assert_eq!(PowerUpKind::SecondChance.cost(), 3);
        assert_eq!(PowerUpKind::LetterEliminator.cost(), 4);
        for (i, kind) in PowerUpKind::ALL.iter().enumerate() {
            assert_eq!(kind.slot(), i);
        }
    }

    #[test]
    fn test_category_cycle() {
        let mut c = Category::General;
        for _ in 0..Category::ALL.len() {
            c = c.next();
        }
        assert_eq!(c, Category::General);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
    }

    #[test]
    fn timing_defaults() {
        assert_eq!(MAX_MISTAKES, 6);
        assert_eq!(HINT_COMMIT_DELAY_MS, 1000);
        assert_eq!(HINT_REVEAL_MS, 3000);
        assert!(HINT_REVEAL_MS > HINT_COMMIT_DELAY_MS);
    }
}
