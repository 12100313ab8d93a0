//! Session errors.
//!
//! Gameplay operations never fail; invalid guesses, power-ups and hints are
//! silent no-ops. The only failure is a word supply that cannot deal a usable
//! word, which is surfaced when a session starts.

use thiserror::Error;

use crate::types::{Category, Difficulty};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The word supply had nothing for this difficulty/category.
    #[error("no word available for {} / {}", .difficulty.as_str(), .category.as_str())]
    NoWord {
        difficulty: Difficulty,
        category: Category,
    },

    /// The word supply returned an empty or non-alphabetic word.
    #[error("word supply returned an invalid word: {0:?}")]
    InvalidWord(String),
}

pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SessionError::NoWord {
            difficulty: Difficulty::Hard,
            category: Category::Science,
        };
        assert_eq!(err.to_string(), "no word available for hard / science");
        assert_eq!(
            SessionError::InvalidWord("A1".into()).to_string(),
            "word supply returned an invalid word: \"A1\""
        );
    }
}
