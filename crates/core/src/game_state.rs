//! Game state module - one hangman session
//!
//! Ties together the guess board, the coin economy, the hint scheduler and the
//! cosmetic screen shake. Every inbound event (guess, power-up, hint, frame
//! tick) enters through [`GameState`], so coin rewards and shake triggers are
//! applied identically no matter where a guess came from.

use log::{debug, info};

use crate::economy::{coins_for, Economy};
use crate::guess::{GuessBoard, GuessOutcome, SecretWord};
use crate::hint::HintScheduler;
use crate::rng::GameRng;
use crate::shake::ScreenShake;
use crate::snapshot::{GameSnapshot, HintSnapshot, PowerUpView, ShakeSnapshot};
use crate::types::*;

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    board: GuessBoard,
    economy: Economy,
    hint: HintScheduler,
    shake: ScreenShake,
    rng: GameRng,
    difficulty: Difficulty,
    category: Category,
    /// Monotonic episode id (increments on every new deal).
    episode_id: u32,
}

impl GameState {
    /// Deal a fresh session around `secret`.
    pub fn new(secret: SecretWord, difficulty: Difficulty, category: Category, rng: GameRng) -> Self {
        Self {
            board: GuessBoard::new(secret),
            economy: Economy::new(difficulty),
            hint: HintScheduler::new(),
            shake: ScreenShake::new(),
            rng,
            difficulty,
            category,
            episode_id: 0,
        }
    }

    pub(crate) fn with_episode_id(mut self, episode_id: u32) -> Self {
        self.episode_id = episode_id;
        self
    }

    pub fn board(&self) -> &GuessBoard {
        &self.board
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn hint(&self) -> &HintScheduler {
        &self.hint
    }

    pub fn shake(&self) -> &ScreenShake {
        &self.shake
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn coins(&self) -> u32 {
        self.economy.coins()
    }

    pub fn mistakes(&self) -> u8 {
        self.board.mistakes()
    }

    pub fn display(&self) -> String {
        self.board.display()
    }

    pub fn is_letter_guessed(&self, letter: Letter) -> bool {
        self.board.is_letter_guessed(letter)
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    #[cfg(test)]
    pub(crate) fn economy_mut(&mut self) -> &mut Economy {
        &mut self.economy
    }

    /// Guess a letter and apply coin rewards and feedback.
    pub fn guess_letter(&mut self, letter: Letter) -> GuessOutcome {
        let outcome = self.board.guess(letter);
        match outcome {
            GuessOutcome::Ignored => {}
            GuessOutcome::Hit { occurrences, won } => {
                let earned = coins_for(outcome, self.board.mistakes());
                self.economy.earn(earned);
                debug!("hit {letter} x{occurrences}, +{earned} coins");
                if won {
                    info!(
                        "won episode {} with {} mistakes, {} coins",
                        self.episode_id,
                        self.board.mistakes(),
                        self.economy.coins()
                    );
                }
            }
            GuessOutcome::Miss { lost } => {
                self.shake.trigger_default();
                debug!("miss {letter}, mistakes {}", self.board.mistakes());
                if lost {
                    info!(
                        "lost episode {}, word was {}",
                        self.episode_id,
                        self.board.secret().as_string()
                    );
                }
            }
        }
        outcome
    }

    /// Spend coins on a power-up and apply its effect.
    ///
    /// Returns false (no state change) if it was already used or is not
    /// affordable. Once the game is over the purchase still goes through but
    /// the effect does nothing.
    pub fn use_power_up(&mut self, kind: PowerUpKind) -> bool {
        if !self.economy.purchase(kind) {
            debug!("power-up {} unavailable", kind.name());
            return false;
        }
        debug!("power-up {} bought, {} coins left", kind.name(), self.economy.coins());
        if self.board.is_game_over() {
            return true;
        }

        match kind {
            PowerUpKind::VowelRevealer => {
                let candidates: Vec<Letter> = VOWELS
                    .iter()
                    .copied()
                    .filter(|&v| self.board.secret().contains(v) && !self.board.is_letter_guessed(v))
                    .collect();
                if let Some(vowel) = self.rng.pick(&candidates) {
                    self.guess_letter(vowel);
                }
            }
            PowerUpKind::SecondChance => {
                self.board.forgive_mistake();
            }
            PowerUpKind::LetterEliminator => {
                let candidates = self.board.absent_unguessed_letters();
                for letter in self.rng.sample(&candidates, ELIMINATOR_LETTERS) {
                    self.board.strike_out(letter);
                }
            }
        }
        true
    }

    /// Arm the delayed hint on a random unrevealed letter.
    ///
    /// The hinted letter always occurs in the word, so when it fires it is a
    /// correct guess unless the player guessed it first or the game ended.
    pub fn use_hint(&mut self) -> bool {
        if !self.hint.available() || self.board.is_game_over() {
            return false;
        }
        let candidates = self.board.unrevealed_letters();
        let Some(letter) = self.rng.pick(&candidates) else {
            return false;
        };
        debug!("hint armed on {letter}");
        self.hint.arm(letter)
    }

    /// Advance all timers by `elapsed_ms`.
    ///
    /// Returns the outcome of the hint auto-guess if it fired this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<GuessOutcome> {
        self.shake.tick(elapsed_ms);
        let letter = self.hint.tick(elapsed_ms)?;
        debug!("hint fired on {letter}");
        Some(self.guess_letter(letter))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.display_into(&mut out.display);
        out.word_len = self.board.secret().len();
        out.guessed.clear();
        out.guessed.extend(self.board.guessed().iter().map(|l| l.as_char()));
        out.mistakes = self.board.mistakes();
        out.max_mistakes = MAX_MISTAKES;
        out.status = self.board.status();
        out.coins = self.economy.coins();
        out.power_ups = self.economy.power_ups().map(|p| PowerUpView {
            kind: p.kind,
            name: p.name(),
            cost: p.cost(),
            used: p.used,
            affordable: self.economy.can_afford(p.kind),
        });
        out.hint = HintSnapshot {
            available: self.hint.available(),
            letter: self.hint.reveal().map(|r| r.letter.as_char()),
            countdown_secs: self.hint.reveal().map_or(0, |r| r.countdown_secs()),
            pending_progress: self.hint.pending().map(|p| p.progress()),
        };
        out.shake = ShakeSnapshot {
            active: self.shake.active(),
            intensity: self.shake.intensity(),
            elapsed_ms: self.shake.elapsed_ms(),
            duration_ms: self.shake.duration_ms(),
            offset: self.shake.offset(),
        };
        out.difficulty = self.difficulty;
        out.category = self.category;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
