//! Terminal jartris runner (default binary).
//!
//! Drives the pure core session from a crossterm event loop: one gravity
//! tick per frame, key presses mapped to commands, and a game-over screen
//! that folds the final score into the persistent player roster.

use std::env;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use jartris::core::Session;
use jartris::input::{command_for_key, should_quit};
use jartris::roster::{Roster, RECORDS_FILE};
use jartris::term::TerminalRenderer;
use jartris::types::TICK_MS;

/// Outcome of one gameplay loop
enum Outcome {
    Quit,
    Over,
}

fn main() -> Result<()> {
    let player = env::args().nth(1).unwrap_or_else(|| "Player1".to_string());
    let mut roster = Roster::load(RECORDS_FILE)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut roster, &player);

    // Always try to restore terminal state.
    let _ = term.exit();

    roster.save(RECORDS_FILE)?;
    result
}

fn run(term: &mut TerminalRenderer, roster: &mut Roster, player: &str) -> Result<()> {
    loop {
        let mut session = Session::new(time_seed());

        match play(term, &mut session)? {
            Outcome::Quit => return Ok(()),
            Outcome::Over => {
                roster.record_score(player, session.score());
                roster.sort();
                term.draw_game_over(roster, session.score())?;
                if !wait_for_continue()? {
                    return Ok(());
                }
            }
        }
    }
}

/// One session's gameplay loop, at ~60 frames per second
fn play(term: &mut TerminalRenderer, session: &mut Session) -> Result<Outcome> {
    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        term.draw(session)?;

        if session.is_over() {
            return Ok(Outcome::Over);
        }

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(Outcome::Quit);
                    }
                    if let Some(command) = command_for_key(key) {
                        session.apply(command);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }
    }
}

/// Block on the game-over prompt: true to start another session
fn wait_for_continue() -> Result<bool> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
                KeyCode::Char('n') | KeyCode::Char('N') => return Ok(false),
                _ if should_quit(key) => return Ok(false),
                _ => {}
            }
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
