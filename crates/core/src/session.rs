//! Session controller - deals words and restarts games
//!
//! A [`Session`] owns the word supply and the current [`GameState`]. Starting a
//! new game asks the supply for a word, validates it and replaces the whole
//! game state, which also drops any armed hint and running shake.

use log::{info, warn};

use crate::error::{SessionError, SessionResult};
use crate::game_state::GameState;
use crate::guess::{GuessOutcome, SecretWord};
use crate::rng::GameRng;
use crate::types::{Category, Difficulty, GameAction};
use crate::words::WordSupply;

pub struct Session<W> {
    supply: W,
    game: GameState,
    rng: GameRng,
}

impl<W: WordSupply> Session<W> {
    /// Create a session and deal its first word.
    pub fn new(mut supply: W, difficulty: Difficulty, category: Category, mut rng: GameRng) -> SessionResult<Self> {
        let secret = deal(&mut supply, difficulty, category)?;
        let game = GameState::new(secret, difficulty, category, rng.fork());
        info!(
            "episode 0: {} letters, {} / {}",
            game.board().secret().len(),
            difficulty.as_str(),
            category.as_str()
        );
        Ok(Self { supply, game, rng })
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    /// Deal a new word and reset every per-session value.
    ///
    /// On error the current game is left untouched.
    pub fn start_new_game(&mut self, difficulty: Difficulty, category: Category) -> SessionResult<()> {
        let secret = match deal(&mut self.supply, difficulty, category) {
            Ok(secret) => secret,
            Err(err) => {
                warn!("cannot start new game: {err}");
                return Err(err);
            }
        };
        let episode_id = self.game.episode_id().wrapping_add(1);
        self.game = GameState::new(secret, difficulty, category, self.rng.fork()).with_episode_id(episode_id);
        info!(
            "episode {episode_id}: {} letters, {} / {}",
            self.game.board().secret().len(),
            difficulty.as_str(),
            category.as_str()
        );
        Ok(())
    }

    /// Re-deal with the current difficulty and category.
    pub fn reset_game(&mut self) -> SessionResult<()> {
        self.start_new_game(self.game.difficulty(), self.game.category())
    }

    /// Advance the current game's timers.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.game.tick(elapsed_ms);
    }

    /// Apply a game action
    ///
    /// Returns whether the action changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> SessionResult<bool> {
        let changed = match action {
            GameAction::Guess(letter) => self.game.guess_letter(letter) != GuessOutcome::Ignored,
            GameAction::UsePowerUp(kind) => self.game.use_power_up(kind),
            GameAction::UseHint => self.game.use_hint(),
            GameAction::Reset => {
                self.reset_game()?;
                true
            }
            GameAction::NewGame(difficulty, category) => {
                self.start_new_game(difficulty, category)?;
                true
            }
        };
        Ok(changed)
    }
}

/// Ask the supply for a word and validate it.
fn deal<W: WordSupply>(supply: &mut W, difficulty: Difficulty, category: Category) -> SessionResult<SecretWord> {
    let word = supply
        .get_word(difficulty, category)
        .ok_or(SessionError::NoWord {
            difficulty,
            category,
        })?;
    SecretWord::parse(&word).ok_or(SessionError::InvalidWord(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameStatus, Letter, PowerUpKind};
    use crate::words::WordBank;

    fn l(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    /// Supply that hands out a fixed sequence of words.
    struct Scripted(Vec<&'static str>);

    impl WordSupply for Scripted {
        fn get_word(&mut self, _: Difficulty, _: Category) -> Option<String> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0).to_string())
            }
        }
    }

    fn session(words: Vec<&'static str>) -> Session<Scripted> {
        Session::new(Scripted(words), Difficulty::Easy, Category::Animals, GameRng::new(1)).unwrap()
    }

    #[test]
    fn test_new_session_deals_first_word() {
        let s = session(vec!["CAT", "DOG"]);
        assert_eq!(s.game().board().secret().as_string(), "CAT");
        assert_eq!(s.game().episode_id(), 0);
        assert_eq!(s.game().coins(), 3);
    }

    #[test]
    fn test_empty_supply_is_an_error() {
        let err = Session::new(Scripted(vec![]), Difficulty::Hard, Category::Science, GameRng::new(1))
            .err()
            .unwrap();
        assert_eq!(
            err,
            SessionError::NoWord {
                difficulty: Difficulty::Hard,
                category: Category::Science
            }
        );
    }

    #[test]
    fn test_malformed_word_is_an_error() {
        let err = Session::new(Scripted(vec![""]), Difficulty::Easy, Category::General, GameRng::new(1))
            .err()
            .unwrap();
        assert_eq!(err, SessionError::InvalidWord(String::new()));
    }

    #[test]
    fn test_start_new_game_resets_everything() {
        let mut s = session(vec!["CAT", "DOG"]);
        s.game_mut().guess_letter(l('Z'));
        s.game_mut().guess_letter(l('C'));
        s.game_mut().use_hint();
        s.game_mut().use_power_up(PowerUpKind::VowelRevealer);

        s.start_new_game(Difficulty::Hard, Category::General).unwrap();
        let g = s.game();
        assert_eq!(g.board().secret().as_string(), "DOG");
        assert_eq!(g.display(), "_ _ _");
        assert!(g.board().guessed().is_empty());
        assert_eq!(g.mistakes(), 0);
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.coins(), 1);
        assert!(g.hint().available());
        assert!(!g.hint().is_armed());
        assert!(!g.shake().active());
        assert!(g.economy().power_ups().iter().all(|p| !p.used));
        assert_eq!(g.episode_id(), 1);
        assert_eq!(g.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_new_game_cancels_armed_hint() {
        let mut s = session(vec!["CAT", "DOG"]);
        assert!(s.game_mut().use_hint());
        s.reset_game().unwrap();
        s.tick(5_000);
        assert!(s.game().board().guessed().is_empty());
    }

    #[test]
    fn test_failed_restart_keeps_current_game() {
        let mut s = session(vec!["CAT"]);
        s.game_mut().guess_letter(l('C'));
        assert!(s.reset_game().is_err());
        assert_eq!(s.game().display(), "C _ _");
        assert_eq!(s.game().episode_id(), 0);
    }

    #[test]
    fn test_reset_keeps_difficulty_and_category() {
        let mut s = Session::new(
            WordBank::new(GameRng::new(9)),
            Difficulty::Medium,
            Category::Geography,
            GameRng::new(9),
        )
        .unwrap();
        s.reset_game().unwrap();
        assert_eq!(s.game().difficulty(), Difficulty::Medium);
        assert_eq!(s.game().category(), Category::Geography);
        assert_eq!(s.game().coins(), 2);
    }

    #[test]
    fn test_apply_action_routes() {
        let mut s = session(vec!["CAT", "DOG", "EEL"]);
        assert!(s.apply_action(GameAction::Guess(l('C'))).unwrap());
        assert!(!s.apply_action(GameAction::Guess(l('C'))).unwrap());
        assert!(s.apply_action(GameAction::UseHint).unwrap());
        assert!(!s.apply_action(GameAction::UseHint).unwrap());
        assert!(s
            .apply_action(GameAction::UsePowerUp(PowerUpKind::SecondChance))
            .unwrap());
        assert!(s.apply_action(GameAction::Reset).unwrap());
        assert_eq!(s.game().board().secret().as_string(), "DOG");
        assert!(s
            .apply_action(GameAction::NewGame(Difficulty::Hard, Category::Science))
            .unwrap());
        assert_eq!(s.game().category(), Category::Science);
        assert!(s.apply_action(GameAction::Reset).is_err());
    }
}
