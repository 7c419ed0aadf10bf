//! GameView: writes session state as queued crossterm commands.
//!
//! Two terminal columns per jar cell to compensate for glyph aspect ratio.
//! All functions take any `Write` target so they can be exercised in tests
//! without a real terminal.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::core::Session;
use crate::roster::Roster;
use crate::types::{ShapeKind, JAR_N_COLS, JAR_N_ROWS};

/// Terminal column of the jar's left wall
const JAR_X: u16 = 34;
/// Terminal row of the jar's top
const JAR_Y: u16 = 1;
/// Terminal columns per jar cell
const CELL_W: u16 = 2;

const WALL_COLOR: Color = Color::Rgb {
    r: 192,
    g: 192,
    b: 192,
};
const EMPTY_COLOR: Color = Color::Rgb {
    r: 64,
    g: 64,
    b: 64,
};

/// Classic color map for the seven shapes
pub fn shape_color(kind: ShapeKind) -> Color {
    let (r, g, b) = match kind {
        ShapeKind::T => (255, 0, 0),
        ShapeKind::Q => (0, 255, 0),
        ShapeKind::I => (0, 0, 255),
        ShapeKind::Z => (127, 127, 255),
        ShapeKind::S => (255, 127, 127),
        ShapeKind::J => (255, 255, 127),
        ShapeKind::L => (127, 127, 127),
    };
    Color::Rgb { r, g, b }
}

const HELP_LINES: [&str; 6] = [
    "Space - Drop figure",
    "Left  - Move figure left",
    "Right - Move figure right",
    "Up    - Rotate counter-clockwise",
    "Down  - Rotate clockwise",
    "Q     - Quit",
];

/// Draw one full gameplay frame: help, jar, next preview, score
pub fn draw_session(out: &mut impl Write, session: &Session) -> Result<()> {
    out.queue(Clear(ClearType::All))?;

    for (i, line) in HELP_LINES.iter().enumerate() {
        out.queue(MoveTo(1, 1 + i as u16))?;
        out.queue(SetForegroundColor(WALL_COLOR))?;
        out.queue(Print(line))?;
    }

    draw_jar(out, session)?;
    draw_next_preview(out, session)?;
    draw_score(out, session.score())?;

    out.queue(ResetColor)?;
    Ok(())
}

fn draw_jar(out: &mut impl Write, session: &Session) -> Result<()> {
    let jar = session.jar();
    let inner_w = JAR_N_COLS as u16 * CELL_W;

    for row in 0..JAR_N_ROWS as u16 {
        let y = JAR_Y + row;
        out.queue(MoveTo(JAR_X, y))?;
        out.queue(SetForegroundColor(WALL_COLOR))?;
        out.queue(Print('|'))?;

        for (col, cell) in jar.row(row as usize).iter().enumerate() {
            let x = JAR_X + 1 + col as u16 * CELL_W;
            out.queue(MoveTo(x, y))?;
            match cell {
                Some(kind) => {
                    out.queue(SetForegroundColor(shape_color(*kind)))?;
                    out.queue(Print("██"))?;
                }
                None => {
                    out.queue(SetForegroundColor(EMPTY_COLOR))?;
                    out.queue(Print(" ."))?;
                }
            }
        }

        out.queue(MoveTo(JAR_X + 1 + inner_w, y))?;
        out.queue(SetForegroundColor(WALL_COLOR))?;
        out.queue(Print('|'))?;
    }

    // Floor.
    out.queue(MoveTo(JAR_X, JAR_Y + JAR_N_ROWS as u16))?;
    out.queue(SetForegroundColor(WALL_COLOR))?;
    let mut floor = String::with_capacity(inner_w as usize + 2);
    floor.push('+');
    for _ in 0..inner_w {
        floor.push('-');
    }
    floor.push('+');
    out.queue(Print(floor))?;
    Ok(())
}

fn draw_next_preview(out: &mut impl Write, session: &Session) -> Result<()> {
    let x = JAR_X + JAR_N_COLS as u16 * CELL_W + 6;
    out.queue(MoveTo(x, JAR_Y + 1))?;
    out.queue(SetForegroundColor(WALL_COLOR))?;
    out.queue(Print("Next:"))?;

    let pattern = session.next_pattern();
    let color = shape_color(session.next_kind());
    for (r, row) in pattern.rows().iter().enumerate() {
        out.queue(MoveTo(x, JAR_Y + 3 + r as u16))?;
        out.queue(SetForegroundColor(color))?;
        let mut line = String::new();
        for b in row.bytes() {
            line.push_str(if b == b'#' { "██" } else { "  " });
        }
        out.queue(Print(line))?;
    }
    Ok(())
}

fn draw_score(out: &mut impl Write, score: u32) -> Result<()> {
    let x = JAR_X + JAR_N_COLS as u16 * CELL_W + 6;
    out.queue(MoveTo(x, JAR_Y + 9))?;
    out.queue(SetForegroundColor(WALL_COLOR))?;
    out.queue(Print(format!("Score: {}", score)))?;
    Ok(())
}

/// Game-over overlay: final score, best players, continue prompt
pub fn draw_game_over(out: &mut impl Write, roster: &Roster, score: u32) -> Result<()> {
    let x = JAR_X - 8;
    out.queue(MoveTo(x, 4))?;
    out.queue(SetForegroundColor(Color::Rgb {
        r: 255,
        g: 255,
        b: 127,
    }))?;
    out.queue(Print(format!("GAME OVER   final score: {}", score)))?;

    out.queue(MoveTo(x, 6))?;
    out.queue(SetForegroundColor(Color::Rgb {
        r: 127,
        g: 127,
        b: 255,
    }))?;
    out.queue(Print("Best players"))?;

    for (i, player) in roster.players().iter().enumerate() {
        out.queue(MoveTo(x, 8 + i as u16))?;
        out.queue(Print(format!(
            "{:2} {:<20} {:>8}",
            i + 1,
            player.name,
            player.score
        )))?;
    }

    out.queue(MoveTo(x, 9 + roster.len() as u16))?;
    out.queue(SetForegroundColor(Color::Rgb {
        r: 255,
        g: 255,
        b: 127,
    }))?;
    out.queue(Print("Continue? Y/N"))?;
    out.queue(ResetColor)?;
    Ok(())
}
