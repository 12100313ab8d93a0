//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::types::{Category, Difficulty};

#[derive(Debug, Clone, Parser)]
#[command(name = "tui-hangman")]
#[command(about = "Terminal hangman with coins, power-ups and a delayed hint")]
#[command(version)]
pub struct Config {
    /// Starting difficulty (easy, medium, hard)
    #[arg(short, long, env = "HANGMAN_DIFFICULTY", default_value = "medium", value_parser = parse_difficulty)]
    pub difficulty: Difficulty,

    /// Starting word category (general, animals, science, geography)
    #[arg(short, long, env = "HANGMAN_CATEGORY", default_value = "general", value_parser = parse_category)]
    pub category: Category,

    /// Seed for word selection and power-up picks; random when omitted
    #[arg(short, long, env = "HANGMAN_SEED")]
    pub seed: Option<u64>,

    /// Log file (the terminal itself is owned by the game)
    #[arg(long, env = "HANGMAN_LOG_FILE", default_value = "tui-hangman.log")]
    pub log_file: PathBuf,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| {
        let names: Vec<_> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
        format!("unknown difficulty '{s}', expected one of: {}", names.join(", "))
    })
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::from_str(s).ok_or_else(|| {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category '{s}', expected one of: {}", names.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::try_parse_from(["tui-hangman"]).unwrap();
        assert_eq!(cfg.difficulty, Difficulty::Medium);
        assert_eq!(cfg.category, Category::General);
        assert_eq!(cfg.log_file, PathBuf::from("tui-hangman.log"));
    }

    #[test]
    fn test_flags_parse() {
        let cfg = Config::try_parse_from([
            "tui-hangman",
            "--difficulty",
            "hard",
            "--category",
            "animals",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(cfg.difficulty, Difficulty::Hard);
        assert_eq!(cfg.category, Category::Animals);
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(Config::try_parse_from(["tui-hangman", "-d", "brutal"]).is_err());
    }
}
