//! Session module - the piece lifecycle state machine
//!
//! Owns the jar, the active figure and its anchor, the next-figure
//! lookahead, the score, and the gravity tick counter. The session is
//! single-threaded and turn-based: the caller serializes commands and tick
//! advancement, and every operation completes synchronously.
//!
//! The active figure stays stamped into the jar at all times so the
//! renderer can read grid contents directly. A move or rotation attempt is
//! atomic: unstamp, test the candidate placement, stamp at whichever
//! position survived.

use crate::core::figure::Figure;
use crate::core::jar::Jar;
use crate::core::rng::ShapeRng;
use crate::core::shapes::Pattern;
use crate::types::{Anchor, Command, Lifecycle, ShapeKind, Spin, TICKS_PER_FALL};

/// Candidate step for an atomic move attempt
#[derive(Debug, Clone, Copy)]
enum Step {
    Shift(i8),
    Down,
    Rotate(Spin),
}

/// One game session: grid, active figure, lookahead, score, gravity clock
#[derive(Debug, Clone)]
pub struct Session {
    jar: Jar,
    figure: Figure,
    anchor: Anchor,
    next: ShapeKind,
    rng: ShapeRng,
    score: u32,
    ticks: u32,
    lifecycle: Lifecycle,
}

impl Session {
    /// Start a session: empty jar, first figure spawned, lookahead drawn
    pub fn new(seed: u32) -> Self {
        let mut rng = ShapeRng::new(seed);
        let first = rng.draw();
        let next = rng.draw();

        let mut session = Self {
            jar: Jar::new(),
            figure: Figure::new(first),
            anchor: Anchor::spawn(),
            next,
            rng,
            score: 0,
            ticks: 0,
            lifecycle: Lifecycle::Playing,
        };
        // The jar is empty, so the first spawn always fits.
        session.jar.stamp(&session.figure, session.anchor);
        session
    }

    pub fn jar(&self) -> &Jar {
        &self.jar
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Shape identifier of the next-figure lookahead
    pub fn next_kind(&self) -> ShapeKind {
        self.next
    }

    /// Pattern of the next figure's first rotation state (for previews)
    pub fn next_pattern(&self) -> Pattern {
        Figure::new(self.next).pattern()
    }

    /// Cumulative count of cleared rows. Monotonically non-decreasing.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_over(&self) -> bool {
        self.lifecycle == Lifecycle::Over
    }

    /// Gravity ticks accumulated since the last forced fall or spawn
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Apply a command. Returns whether the figure actually moved.
    ///
    /// A rejected move is a normal outcome, not an error. Commands are
    /// ignored once the session is over.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.is_over() {
            return false;
        }
        match command {
            Command::MoveLeft => self.attempt(Step::Shift(-1)),
            Command::MoveRight => self.attempt(Step::Shift(1)),
            Command::RotateCw => self.attempt(Step::Rotate(Spin::Clockwise)),
            Command::RotateCcw => self.attempt(Step::Rotate(Spin::CounterClockwise)),
            Command::SoftDrop => self.attempt(Step::Down),
            Command::HardDrop => self.hard_drop(),
        }
    }

    /// Advance the gravity clock by one tick.
    ///
    /// Every `TICKS_PER_FALL` ticks a forced down-move runs; if it fails the
    /// figure has come to rest and lock resolution follows. Sideways moves
    /// and rotations never trigger lock resolution, only this forced fall.
    pub fn tick(&mut self) {
        if self.is_over() {
            return;
        }
        self.ticks += 1;
        if self.ticks >= TICKS_PER_FALL {
            self.ticks = 0;
            self.forced_fall();
        }
    }

    /// Atomic move attempt: unstamp, test the candidate, stamp the survivor
    fn attempt(&mut self, step: Step) -> bool {
        self.jar.unstamp(&self.figure, self.anchor);

        let mut figure = self.figure;
        let mut anchor = self.anchor;
        match step {
            Step::Shift(dc) => anchor.col += dc,
            Step::Down => anchor.row += 1,
            Step::Rotate(spin) => figure.rotate(spin),
        }

        let ok = self.jar.can_place(&figure, anchor);
        if ok {
            self.figure = figure;
            self.anchor = anchor;
        }
        self.jar.stamp(&self.figure, self.anchor);
        ok
    }

    /// Repeat the down-step until it fails, within this call.
    ///
    /// Does not lock: the next forced fall will fail and resolve the lock.
    fn hard_drop(&mut self) -> bool {
        let mut moved = false;
        while self.attempt(Step::Down) {
            moved = true;
        }
        moved
    }

    /// Gravity-driven down-move; a failure means the figure is at rest
    fn forced_fall(&mut self) {
        if self.attempt(Step::Down) {
            return;
        }
        if self.anchor.row == 0 {
            // Could not even begin falling: the jar is full to the brim.
            self.lifecycle = Lifecycle::Over;
            return;
        }
        // The figure is already stamped at its rest position; committing it
        // is just ceasing to treat it as active.
        let cleared = self.jar.clear_completed_rows();
        self.score += cleared as u32;
        self.spawn_next();
    }

    /// Promote the lookahead to active and draw a fresh lookahead
    fn spawn_next(&mut self) {
        self.figure = Figure::new(self.next);
        self.anchor = Anchor::spawn();
        self.next = self.rng.draw();
        self.ticks = 0;

        if self.jar.can_place(&self.figure, self.anchor) {
            self.jar.stamp(&self.figure, self.anchor);
        } else {
            // No room to spawn: the session is unrecoverable.
            self.lifecycle = Lifecycle::Over;
        }
    }

    #[cfg(test)]
    pub(crate) fn jar_mut(&mut self) -> &mut Jar {
        &mut self.jar
    }

    /// Replace the active figure, re-stamping at the new position (tests)
    #[cfg(test)]
    pub(crate) fn force_active(&mut self, kind: ShapeKind, anchor: Anchor) {
        self.jar.unstamp(&self.figure, self.anchor);
        self.figure = Figure::new(kind);
        self.anchor = anchor;
        self.jar.stamp(&self.figure, self.anchor);
    }
}
