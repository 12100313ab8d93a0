use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_hangman::core::{display_string, reveal_cells, GameRng, GameSnapshot, GameState, SecretWord};
use tui_hangman::term::{FrameBuffer, GameView, Viewport};
use tui_hangman::types::{Category, Difficulty, Letter, TICK_MS};

fn new_game(word: &str) -> GameState {
    GameState::new(
        SecretWord::parse(word).unwrap(),
        Difficulty::Medium,
        Category::General,
        GameRng::new(12345),
    )
}

fn bench_tick(c: &mut Criterion) {
    let mut state = new_game("THERMOMETER");
    state.use_hint();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(TICK_MS));
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    let letters: Vec<Letter> = Letter::alphabet().collect();

    c.bench_function("guess_alphabet", |b| {
        b.iter(|| {
            let mut state = new_game("BOOKSHELF");
            for &letter in &letters {
                state.guess_letter(black_box(letter));
            }
            state
        })
    });
}

fn bench_display(c: &mut Criterion) {
    let secret = SecretWord::parse("ATMOSPHERE").unwrap();
    let guessed: Vec<Letter> = "AEST".chars().filter_map(Letter::new).collect();

    c.bench_function("display_string", |b| {
        b.iter(|| display_string(&reveal_cells(black_box(&secret), black_box(&guessed), false)))
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let mut state = new_game("ADVENTURE");
    state.guess_letter(Letter::new('e').unwrap());
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);
    let view = GameView::default();

    c.bench_function("snapshot_render_80x24", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_full_game,
    bench_display,
    bench_snapshot_and_render
);
criterion_main!(benches);
