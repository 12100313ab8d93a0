//! Terminal hangman runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`.
//! Logs go to a file because the game owns the terminal.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};

use tui_hangman::clock::FrameClock;
use tui_hangman::config::Config;
use tui_hangman::core::{GameRng, GameSnapshot, Session, WordBank};
use tui_hangman::input::{handle_key_event, InputCommand};
use tui_hangman::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_hangman::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let mut rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let bank = WordBank::new(rng.fork());
    let session = Session::new(bank, config.difficulty, config.category, rng)
        .context("failed to start first game")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("cannot open log file {}", config.log_file.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut session: Session<WordBank>) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;
    let mut clock = FrameClock::new(TICK_MS as u64, now_ms());

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.game().snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = Duration::from_millis(clock.timeout_ms(now_ms()));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = handle_key_event(key) {
                        let game = session.game();
                        let action = match command {
                            InputCommand::Quit => return Ok(()),
                            InputCommand::Action(action) => action,
                            InputCommand::SetDifficulty(difficulty) => {
                                GameAction::NewGame(difficulty, game.category())
                            }
                            InputCommand::CycleCategory => {
                                GameAction::NewGame(game.difficulty(), game.category().next())
                            }
                        };
                        if let Err(err) = session.apply_action(action) {
                            error!("{action:?} failed: {err}");
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if let Some(elapsed_ms) = clock.tick(now_ms()) {
            session.tick(elapsed_ms);
        }
    }
}
