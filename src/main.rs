//! Terminal marathon runner (default binary).
//!
//! Outer event loop only: it polls for key events with a timeout derived
//! from the engine's fall interval, maps keys to commands, and delivers fall
//! ticks tagged with the engine's current timer identity. All game rules
//! live in `marathon-engine`.

use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use marathon_tetris::engine::Game;
use marathon_tetris::input::{handle_key_event, should_quit};
use marathon_tetris::term::{GameView, TerminalRenderer};
use marathon_tetris::types::Command;

fn main() -> Result<()> {
    let start_level = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid starting level: {arg:?}"))?,
        None => 0,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, start_level);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, start_level: u32) -> Result<()> {
    let mut game = Game::new(start_level, rand::random())?;
    let view = GameView;

    let mut last_fall = Instant::now();

    loop {
        term.draw(&view.render(&game))?;

        let interval = game.fall_interval();
        let timeout = interval.saturating_sub(last_fall.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.handle(command)?;
                    }
                }
            }
        }

        if last_fall.elapsed() >= game.fall_interval() {
            last_fall = Instant::now();
            game.handle(Command::FallTick {
                timer_id: game.timer_id(),
            })?;
        }
    }
}
