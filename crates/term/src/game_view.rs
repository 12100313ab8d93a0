//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PowerUpView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GameStatus;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Width of the laid-out scene in columns.
pub const SCENE_WIDTH: u16 = 58;
/// Height of the laid-out scene in rows.
pub const SCENE_HEIGHT: u16 = 18;

const GALLOWS_ROWS: usize = 7;

const TITLE: CellStyle = CellStyle::fg(Rgb::new(240, 220, 120)).bold();
const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const MUTED: CellStyle = CellStyle::fg(Rgb::new(130, 130, 140)).dim();
const WORD: CellStyle = CellStyle::fg(Rgb::new(120, 220, 240)).bold();
const GOOD: CellStyle = CellStyle::fg(Rgb::new(110, 220, 120)).bold();
const BAD: CellStyle = CellStyle::fg(Rgb::new(230, 90, 90)).bold();
const COIN: CellStyle = CellStyle::fg(Rgb::new(250, 200, 60)).bold();

/// Gallows figure after `mistakes` wrong guesses (0..=6).
pub fn gallows(mistakes: u8) -> [String; GALLOWS_ROWS] {
    let part = |n: u8, ch: char| if mistakes >= n { ch } else { ' ' };
    [
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, 'O')),
        format!(" {}{}{}  |", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!(" {} {}  |", part(5, '/'), part(6, '\\')),
        "      |".to_string(),
        "=======".to_string(),
    ]
}

/// Stateless terminal renderer for the hangman screen.
#[derive(Debug, Clone, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            fb.resize(viewport.width, viewport.height);
        } else {
            fb.clear();
        }

        let ox = viewport.width.saturating_sub(SCENE_WIDTH) as i32 / 2 + snap.shake.offset as i32;
        let oy = viewport.height.saturating_sub(SCENE_HEIGHT) as i32 / 2;

        // Header.
        fb.put_str(ox, oy, "H A N G M A N", TITLE);
        let header = format!(
            "{} / {}   #{}",
            snap.difficulty.as_str(),
            snap.category.as_str(),
            snap.episode_id
        );
        fb.put_str(ox + SCENE_WIDTH as i32 - header.len() as i32, oy, &header, MUTED);

        // Gallows on the left.
        let figure = if snap.mistakes > 0 { BAD } else { VALUE };
        for (i, line) in gallows(snap.mistakes).iter().enumerate() {
            fb.put_str(ox, oy + 2 + i as i32, line, figure);
        }

        // Word and counters on the right.
        let px = ox + 12;
        let word_style = match snap.status {
            GameStatus::Won => GOOD,
            GameStatus::Lost => BAD,
            GameStatus::InProgress => WORD,
        };
        fb.put_str(px, oy + 2, &snap.display, word_style);

        let x = fb.put_str(px, oy + 4, "Mistakes ", LABEL);
        fb.put_str(x, oy + 4, &format!("{}/{}", snap.mistakes, snap.max_mistakes), VALUE);
        let x = fb.put_str(px + 18, oy + 4, "Coins ", LABEL);
        fb.put_str(x, oy + 4, &snap.coins.to_string(), COIN);

        let x = fb.put_str(px, oy + 6, "Guessed ", LABEL);
        let guessed: String = snap
            .guessed
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        fb.put_str(x, oy + 6, if guessed.is_empty() { "-" } else { &guessed }, VALUE);

        // Power-ups and hint.
        let mut y = oy + 10;
        fb.put_str(ox, y, "POWER-UPS", LABEL);
        for (i, p) in snap.power_ups.iter().enumerate() {
            y += 1;
            self.draw_power_up(fb, ox, y, i + 1, p);
        }
        y += 1;
        let (hint_text, hint_style) = hint_line(snap);
        let x = fb.put_str(ox, y, "[?] Hint  ", VALUE);
        fb.put_str(x, y, &hint_text, hint_style);

        // Status banner.
        y += 2;
        match snap.status {
            GameStatus::Won => {
                fb.put_str(ox, y, "YOU WIN!  F5 for a new word", GOOD);
            }
            GameStatus::Lost => {
                fb.put_str(ox, y, "GAME OVER  F5 for a new word", BAD);
            }
            GameStatus::InProgress => {
                fb.put_str(ox, y, "type a letter to guess", MUTED);
            }
        }
        fb.put_str(
            ox,
            y + 1,
            "F1-F3 difficulty  Tab category  F5 reset  Esc quit",
            MUTED,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_power_up(&self, fb: &mut FrameBuffer, x: i32, y: i32, key: usize, p: &PowerUpView) {
        let style = if p.usable() { VALUE } else { MUTED };
        let line = format!("[{key}] {:<18} {} coins", p.name, p.cost);
        let end = fb.put_str(x, y, &line, style);
        if p.used {
            fb.put_str(end + 2, y, "used", MUTED);
        } else if !p.affordable {
            fb.put_str(end + 2, y, "need coins", MUTED);
        }
    }
}

fn hint_line(snap: &GameSnapshot) -> (String, CellStyle) {
    if let Some(letter) = snap.hint.letter {
        let mut text = format!("{letter}  ({}s)", snap.hint.countdown_secs);
        if let Some(progress) = snap.hint.pending_progress {
            let filled = (progress * 10.0).round() as usize;
            text.push_str("  ");
            text.push_str(&"#".repeat(filled));
            text.push_str(&".".repeat(10 - filled.min(10)));
        }
        (text, COIN)
    } else if snap.hint.available && snap.playable() {
        ("ready".to_string(), VALUE)
    } else {
        ("used".to_string(), MUTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallows_grows_with_mistakes() {
        let empty = gallows(0);
        assert_eq!(empty[2].trim(), "|");
        let full = gallows(6);
        assert_eq!(full[2], "  O   |");
        assert_eq!(full[3], " /|\\  |");
        assert_eq!(full[4], " / \\  |");
        for m in 0..=6 {
            assert!(gallows(m).iter().all(|l| l.chars().count() == 7));
        }
    }

    #[test]
    fn test_hint_line_states() {
        let mut snap = GameSnapshot::default();
        snap.hint.available = true;
        assert_eq!(hint_line(&snap).0, "ready");

        snap.hint.available = false;
        snap.hint.letter = Some('E');
        snap.hint.countdown_secs = 3;
        snap.hint.pending_progress = Some(0.5);
        assert_eq!(hint_line(&snap).0, "E  (3s)  #####.....");

        snap.hint.letter = None;
        assert_eq!(hint_line(&snap).0, "used");
    }
}
