//! Figure module - one active piece instance
//!
//! A figure is a shape kind plus the index of its current rotation state.
//! Rotation here is purely structural: it changes which pattern the figure
//! reports. Whether the rotated pattern fits in the jar is decided by the
//! jar and the session, not by the figure.

use crate::core::shapes::{rotation_states, Pattern};
use crate::types::{ShapeKind, Spin};

/// An active piece: shape kind and current rotation index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    kind: ShapeKind,
    rot: usize,
}

impl Figure {
    /// Create a figure in its first rotation state
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind, rot: 0 }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Current rotation index
    pub fn rotation(&self) -> usize {
        self.rot
    }

    /// Number of rotation states this figure's shape has
    pub fn rotation_count(&self) -> usize {
        rotation_states(self.kind).len()
    }

    /// The active rotation state's pattern. Side-effect free.
    pub fn pattern(&self) -> Pattern {
        rotation_states(self.kind)[self.rot]
    }

    /// Advance or retreat the rotation index, wrapping circularly.
    ///
    /// Always succeeds structurally.
    pub fn rotate(&mut self, spin: Spin) {
        let count = self.rotation_count();
        self.rot = match spin {
            Spin::Clockwise => (self.rot + 1) % count,
            Spin::CounterClockwise => (self.rot + count - 1) % count,
        };
    }
}
