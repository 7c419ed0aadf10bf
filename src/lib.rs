//! Jartris: a terminal falling-block puzzle.
//!
//! `core` holds the deterministic simulation engine; everything else is
//! glue around it: key mapping, the crossterm renderer, and the player
//! roster that outlives a single session.

pub mod core;
pub mod input;
pub mod roster;
pub mod term;
pub mod types;
