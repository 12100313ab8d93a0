use tui_hangman::core::{GameRng, GameSnapshot, Session};
use tui_hangman::term::{GameView, Viewport, SCENE_HEIGHT, SCENE_WIDTH};
use tui_hangman::types::{Category, Difficulty, GameStatus, Letter};

fn snapshot_for(word: &'static str, guesses: &[char]) -> GameSnapshot {
    let supply = move |_: Difficulty, _: Category| Some(word.to_string());
    let mut s = Session::new(supply, Difficulty::Medium, Category::General, GameRng::new(1)).unwrap();
    for &ch in guesses {
        s.game_mut().guess_letter(Letter::new(ch).unwrap());
    }
    s.game().snapshot()
}

fn exact_viewport() -> Viewport {
    Viewport::new(SCENE_WIDTH, SCENE_HEIGHT)
}

#[test]
fn term_view_renders_word_and_counters() {
    let snap = snapshot_for("CAT", &['C']);
    let fb = GameView::default().render(&snap, exact_viewport());
    let text = fb.text();

    assert!(fb.row_text(0).starts_with("H A N G M A N"));
    assert!(fb.row_text(0).ends_with("medium / general   #0"));
    assert!(fb.row_text(2).contains("C _ _"));
    assert!(text.contains("Mistakes 0/6"));
    assert!(text.contains("Coins 3"));
    assert!(text.contains("Guessed C"));
    assert!(text.contains("Vowel Revealer"));
    assert!(text.contains("[?] Hint  ready"));
}

#[test]
fn term_view_draws_gallows_and_loss_banner() {
    let snap = snapshot_for("DOG", &['A', 'B', 'C', 'E', 'F', 'H']);
    assert_eq!(snap.status, GameStatus::Lost);
    // Let the shake settle so columns are stable.
    let mut snap = snap;
    snap.shake = Default::default();

    let fb = GameView::default().render(&snap, exact_viewport());
    assert!(fb.row_text(2).ends_with("D O G"));
    assert!(fb.row_text(4).starts_with("  O   |     Mistakes 6/6"));
    assert!(fb.row_text(5).starts_with(" /|\\  |"));
    assert!(fb.row_text(6).starts_with(" / \\  |"));
    assert!(fb.text().contains("GAME OVER"));
}

#[test]
fn term_view_shifts_scene_by_shake_offset() {
    let calm = {
        let mut s = snapshot_for("CAT", &['Z']);
        s.shake = Default::default();
        s
    };
    let shaken = snapshot_for("CAT", &['Z']);
    assert!(shaken.shake.active);
    assert_eq!(shaken.shake.offset, 2);

    let vp = Viewport::new(SCENE_WIDTH + 10, SCENE_HEIGHT);
    let a = GameView::default().render(&calm, vp);
    let b = GameView::default().render(&shaken, vp);

    let title = |fb: &tui_hangman::term::FrameBuffer| fb.row_text(0).find('H').unwrap();
    assert_eq!(title(&b), title(&a) + 2);
}

#[test]
fn term_view_centres_in_large_viewport() {
    let snap = snapshot_for("CAT", &[]);
    let fb = GameView::default().render(&snap, Viewport::new(SCENE_WIDTH + 20, SCENE_HEIGHT + 6));
    assert_eq!(fb.row_text(3).find('H'), Some(10));
    assert!(fb.row_text(0).is_empty());
}
