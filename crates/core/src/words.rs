//! Word supply - the source of secret words
//!
//! The engine only depends on the [`WordSupply`] trait. [`WordBank`] is the
//! built-in supply with a fixed list per difficulty/category; word length
//! grows with difficulty (easy 3-5, medium 6-8, hard 9+).

use crate::rng::GameRng;
use crate::types::{Category, Difficulty};

/// Anything that can deal a secret word.
///
/// Words are expected to be uppercase ASCII letters. Returning `None` (or a
/// malformed word) makes the session refuse to start.
pub trait WordSupply {
    fn get_word(&mut self, difficulty: Difficulty, category: Category) -> Option<String>;
}

impl<F> WordSupply for F
where
    F: FnMut(Difficulty, Category) -> Option<String>,
{
    fn get_word(&mut self, difficulty: Difficulty, category: Category) -> Option<String> {
        self(difficulty, category)
    }
}

const GENERAL_EASY: &[&str] = &["BOOK", "LAMP", "CHAIR", "DOOR", "CUP", "BREAD", "CLOCK", "SHOE"];
const GENERAL_MEDIUM: &[&str] = &["WINDOW", "GARDEN", "PENCIL", "BLANKET", "KITCHEN", "BICYCLE", "LADDER", "MIRROR"];
const GENERAL_HARD: &[&str] = &["ADVENTURE", "TELEPHONE", "MICROWAVE", "NEWSPAPER", "FURNITURE", "HOUSEHOLD", "BOOKSHELF"];

const ANIMALS_EASY: &[&str] = &["CAT", "DOG", "LION", "BEAR", "WOLF", "HORSE", "SHEEP", "FROG"];
const ANIMALS_MEDIUM: &[&str] = &["GIRAFFE", "MONKEY", "RABBIT", "DOLPHIN", "PENGUIN", "TURTLE", "SPARROW", "BADGER"];
const ANIMALS_HARD: &[&str] = &["CROCODILE", "CHAMELEON", "PORCUPINE", "ALLIGATOR", "BUTTERFLY", "ORANGUTAN", "SALAMANDER"];

const SCIENCE_EASY: &[&str] = &["ATOM", "CELL", "GENE", "ACID", "LENS", "MASS", "HEAT", "IRON"];
const SCIENCE_MEDIUM: &[&str] = &["PROTON", "NEURON", "ENZYME", "PLASMA", "GRAVITY", "OXYGEN", "MAGNET", "FOSSIL"];
const SCIENCE_HARD: &[&str] = &["MOLECULES", "CHROMOSOME", "ATMOSPHERE", "TELESCOPE", "THERMOMETER", "PHOTOSYNTHESIS", "ECOSYSTEM"];

const GEOGRAPHY_EASY: &[&str] = &["NILE", "PERU", "CHAD", "OHIO", "ALPS", "BAY", "DELTA", "COAST"];
const GEOGRAPHY_MEDIUM: &[&str] = &["CANADA", "SAHARA", "ISLAND", "VOLCANO", "GLACIER", "CANYON", "PLATEAU", "ICELAND"];
const GEOGRAPHY_HARD: &[&str] = &["ARGENTINA", "MEDITERRANEAN", "ARCHIPELAGO", "AUSTRALIA", "HIMALAYAS", "PENINSULA", "MADAGASCAR"];

/// Word list for a difficulty/category pair.
pub fn word_list(difficulty: Difficulty, category: Category) -> &'static [&'static str] {
    match (category, difficulty) {
        (Category::General, Difficulty::Easy) => GENERAL_EASY,
        (Category::General, Difficulty::Medium) => GENERAL_MEDIUM,
        (Category::General, Difficulty::Hard) => GENERAL_HARD,
        (Category::Animals, Difficulty::Easy) => ANIMALS_EASY,
        (Category::Animals, Difficulty::Medium) => ANIMALS_MEDIUM,
        (Category::Animals, Difficulty::Hard) => ANIMALS_HARD,
        (Category::Science, Difficulty::Easy) => SCIENCE_EASY,
        (Category::Science, Difficulty::Medium) => SCIENCE_MEDIUM,
        (Category::Science, Difficulty::Hard) => SCIENCE_HARD,
        (Category::Geography, Difficulty::Easy) => GEOGRAPHY_EASY,
        (Category::Geography, Difficulty::Medium) => GEOGRAPHY_MEDIUM,
        (Category::Geography, Difficulty::Hard) => GEOGRAPHY_HARD,
    }
}

/// Built-in word supply backed by static lists.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    rng: GameRng,
}

impl WordBank {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl WordSupply for WordBank {
    fn get_word(&mut self, difficulty: Difficulty, category: Category) -> Option<String> {
        self.rng
            .pick(word_list(difficulty, category))
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_list_is_valid() {
        for difficulty in Difficulty::ALL {
            for category in Category::ALL {
                let list = word_list(difficulty, category);
                assert!(!list.is_empty());
                for word in list {
                    assert!(
                        word.chars().all(|c| c.is_ascii_uppercase()),
                        "bad word {word}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_length_bands() {
        for category in Category::ALL {
            for word in word_list(Difficulty::Easy, category) {
                assert!((3..=5).contains(&word.len()), "{word}");
            }
            for word in word_list(Difficulty::Medium, category) {
                assert!((6..=8).contains(&word.len()), "{word}");
            }
            for word in word_list(Difficulty::Hard, category) {
                assert!(word.len() >= 9, "{word}");
            }
        }
    }

    #[test]
    fn test_word_bank_returns_listed_word() {
        let mut bank = WordBank::new(GameRng::new(3));
        let word = bank.get_word(Difficulty::Easy, Category::Animals).unwrap();
        assert!(ANIMALS_EASY.contains(&word.as_str()));
    }

    #[test]
    fn test_closure_supply() {
        let mut supply = |_: Difficulty, _: Category| Some("CAT".to_string());
        assert_eq!(
            supply.get_word(Difficulty::Hard, Category::General).as_deref(),
            Some("CAT")
        );
    }
}
