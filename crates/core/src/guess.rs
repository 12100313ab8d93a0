//! Guess engine - secret word, guessed letters, mistakes and win/loss
//!
//! The display is never edited in place. It is recomputed from the secret word
//! and the guessed-letter set by [`reveal_cells`], so a position can only be
//! revealed by a letter that was actually guessed (or by the full reveal on a
//! loss). Because the guessed set only grows, revelation is monotonic.

use arrayvec::ArrayVec;

use crate::types::{GameStatus, Letter, MAX_MISTAKES, PLACEHOLDER};

/// Every letter can be guessed at most once.
pub type GuessedLetters = ArrayVec<Letter, 26>;

/// Validated secret word: non-empty, uppercase ASCII letters only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretWord {
    letters: Vec<Letter>,
}

impl SecretWord {
    /// Parse a word handed out by a word supply.
    ///
    /// Lowercase input is accepted and normalised. Returns `None` for an empty
    /// word or one containing anything other than ASCII letters.
    pub fn parse(word: &str) -> Option<Self> {
        let letters = word
            .chars()
            .map(Letter::new)
            .collect::<Option<Vec<_>>>()?;
        if letters.is_empty() {
            return None;
        }
        Some(Self { letters })
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    pub fn as_string(&self) -> String {
        self.letters.iter().map(|l| l.as_char()).collect()
    }
}

/// Result of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Repeat guess or game already over; nothing changed.
    Ignored,
    /// Letter is in the word.
    Hit { occurrences: usize, won: bool },
    /// Letter is not in the word.
    Miss { lost: bool },
}

/// Compute the display cells for a word.
///
/// A position is `Some(letter)` when its letter has been guessed or when
/// `full_reveal` is set, and `None` (a placeholder) otherwise.
pub fn reveal_cells(secret: &SecretWord, guessed: &[Letter], full_reveal: bool) -> Vec<Option<Letter>> {
    secret
        .letters()
        .iter()
        .map(|&l| (full_reveal || guessed.contains(&l)).then_some(l))
        .collect()
}

/// Render display cells as `"C _ T"`.
pub fn display_string(cells: &[Option<Letter>]) -> String {
    let mut out = String::with_capacity(cells.len() * 2);
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(cell.map_or(PLACEHOLDER, Letter::as_char));
    }
    out
}

/// Per-session guessing state.
#[derive(Debug, Clone)]
pub struct GuessBoard {
    secret: SecretWord,
    guessed: GuessedLetters,
    mistakes: u8,
    status: GameStatus,
}

impl GuessBoard {
    pub fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            guessed: GuessedLetters::new(),
            mistakes: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Guessed letters in the order they were added.
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    pub fn mistakes(&self) -> u8 {
        self.mistakes
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_letter_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn cells(&self) -> Vec<Option<Letter>> {
        reveal_cells(&self.secret, &self.guessed, self.status == GameStatus::Lost)
    }

    pub fn display(&self) -> String {
        let mut out = String::new();
        self.display_into(&mut out);
        out
    }

    /// Write the display string into `out`, reusing its allocation.
    pub fn display_into(&self, out: &mut String) {
        out.clear();
        let full_reveal = self.status == GameStatus::Lost;
        for (i, &l) in self.secret.letters().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let shown = full_reveal || self.guessed.contains(&l);
            out.push(if shown { l.as_char() } else { PLACEHOLDER });
        }
    }

    /// Whether any position is still a placeholder.
    pub fn has_hidden(&self) -> bool {
        self.secret.letters().iter().any(|l| !self.guessed.contains(l))
    }

    /// Distinct letters of the word not yet revealed, in word order.
    pub fn unrevealed_letters(&self) -> Vec<Letter> {
        let mut out: Vec<Letter> = Vec::new();
        for &l in self.secret.letters() {
            if !self.guessed.contains(&l) && !out.contains(&l) {
                out.push(l);
            }
        }
        out
    }

    /// Letters of the alphabet that are neither guessed nor in the word.
    pub fn absent_unguessed_letters(&self) -> Vec<Letter> {
        Letter::alphabet()
            .filter(|&l| !self.secret.contains(l) && !self.guessed.contains(&l))
            .collect()
    }

    /// Evaluate a guess.
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.is_game_over() || self.is_letter_guessed(letter) {
            return GuessOutcome::Ignored;
        }
        self.guessed.push(letter);

        let occurrences = self.secret.letters().iter().filter(|&&l| l == letter).count();
        if occurrences > 0 {
            let won = !self.has_hidden();
            if won {
                self.status = GameStatus::Won;
            }
            GuessOutcome::Hit { occurrences, won }
        } else {
            self.mistakes = (self.mistakes + 1).min(MAX_MISTAKES);
            let lost = self.mistakes >= MAX_MISTAKES;
            if lost {
                self.status = GameStatus::Lost;
            }
            GuessOutcome::Miss { lost }
        }
    }

    /// Record a letter known to be absent without counting it as a mistake.
    ///
    /// Returns false if the letter is in the word, already guessed, or the
    /// game is over.
    pub(crate) fn strike_out(&mut self, letter: Letter) -> bool {
        if self.is_game_over() || self.secret.contains(letter) || self.is_letter_guessed(letter) {
            return false;
        }
        self.guessed.push(letter);
        true
    }

    /// Remove one mistake (floor 0). Returns false if there was none to remove.
    pub(crate) fn forgive_mistake(&mut self) -> bool {
        if self.is_game_over() || self.mistakes == 0 {
            return false;
        }
        self.mistakes -= 1;
        true
    }
}
