//! Terminal runner (default binary).
//!
//! Owns the clock and the input loop: elapsed wall time is fed into the
//! game each tick, so drop speed is independent of the render rate. Input
//! uses crossterm; rendering goes through the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use blockfall::core::Game;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{Command, SessionSignal, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = Game::new(seed);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = blockfall::core::RenderSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.render_snapshot_into(&mut snap);
        view.render_into(&snap, &game.status(), Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    if should_quit(key) {
                        return Ok(());
                    }
                    apply_key(&mut game, key.code);
                }
            }
        }

        // Feed real elapsed time, not the nominal tick length, so a slow
        // frame does not slow the fall.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis() as u32);
        }
    }
}

fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
}

fn apply_key(game: &mut Game, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('a') => {
            game.handle_command(Command::MoveLeft);
        }
        KeyCode::Right | KeyCode::Char('d') => {
            game.handle_command(Command::MoveRight);
        }
        KeyCode::Up | KeyCode::Char('w') => {
            game.handle_command(Command::Rotate);
        }
        KeyCode::Down | KeyCode::Char('s') => {
            game.handle_command(Command::SoftDrop);
        }
        KeyCode::Enter => game.handle_signal(SessionSignal::Start),
        KeyCode::Char('p') => game.handle_signal(SessionSignal::Pause),
        KeyCode::Char('r') => game.handle_signal(SessionSignal::Reset),
        _ => {}
    }
}
