//! Shape table - static catalog of figure rotation patterns
//!
//! Each shape has one or more rotation states. A state is a rectangular
//! pattern of rows, `'#'` for a filled cell and `'.'` for an empty one.
//! The rotation-state counts and cell layouts follow the classic jar
//! encoding: T has 4 states, Q (the square) has 1, I and the skews have 2,
//! J and L have 3.

use crate::types::ShapeKind;

/// One rotation state: ordered rows of filled/empty cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    rows: &'static [&'static str],
}

impl Pattern {
    const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    /// Pattern rows, top to bottom
    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }

    /// Height of the bounding box in cells
    pub fn height(&self) -> i8 {
        self.rows.len() as i8
    }

    /// Width of the bounding box in cells
    pub fn width(&self) -> i8 {
        self.rows[0].len() as i8
    }

    /// Whether the cell at (row, col) within the bounding box is filled
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .map_or(false, |r| r.as_bytes().get(col) == Some(&b'#'))
    }

    /// Iterate the (row, col) offsets of all filled cells
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + 'static {
        let rows = self.rows;
        rows.iter().enumerate().flat_map(|(r, row)| {
            row.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'#')
                .map(move |(c, _)| (r as i8, c as i8))
        })
    }
}

const T_STATES: &[Pattern] = &[
    Pattern::new(&["###", ".#."]),
    Pattern::new(&[".#", "##", ".#"]),
    Pattern::new(&[".#.", "###"]),
    Pattern::new(&["#.", "##", "#."]),
];

const Q_STATES: &[Pattern] = &[Pattern::new(&["##", "##"])];

const I_STATES: &[Pattern] = &[
    Pattern::new(&["#", "#", "#", "#"]),
    Pattern::new(&["####"]),
];

const Z_STATES: &[Pattern] = &[
    Pattern::new(&["##.", ".##"]),
    Pattern::new(&[".#", "##", "#."]),
];

const S_STATES: &[Pattern] = &[
    Pattern::new(&[".##", "##."]),
    Pattern::new(&["#.", "##", ".#"]),
];

const J_STATES: &[Pattern] = &[
    Pattern::new(&[".#", ".#", "##"]),
    Pattern::new(&["#..", "###"]),
    Pattern::new(&["##", "#.", "#."]),
];

const L_STATES: &[Pattern] = &[
    Pattern::new(&["#.", "#.", "##"]),
    Pattern::new(&["###", "#.."]),
    Pattern::new(&["##", ".#", ".#"]),
];

/// Ordered rotation states for a shape kind. Static and total.
pub fn rotation_states(kind: ShapeKind) -> &'static [Pattern] {
    match kind {
        ShapeKind::T => T_STATES,
        ShapeKind::Q => Q_STATES,
        ShapeKind::I => I_STATES,
        ShapeKind::Z => Z_STATES,
        ShapeKind::S => S_STATES,
        ShapeKind::J => J_STATES,
        ShapeKind::L => L_STATES,
    }
}
