//! Terminal rendering layer.
//!
//! `renderer` owns the raw-mode/alternate-screen lifecycle; `game_view`
//! writes the jar, preview, score, and overlays as queued crossterm
//! commands against any `Write` target so it stays unit-testable.

pub mod game_view;
pub mod renderer;

pub use renderer::TerminalRenderer;
