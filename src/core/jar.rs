//! Jar module - manages the playing field grid
//!
//! The jar is a 10x20 grid where each cell is empty or filled with a shape
//! kind. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom) and col
//! ranges 0..9 (left to right). The active figure is kept materialized in
//! the grid via `stamp`, and erased with `unstamp` only for the instant a
//! move or rotation is being validated.

use crate::core::figure::Figure;
use crate::types::{Anchor, Cell, JAR_N_COLS, JAR_N_ROWS};

/// Total number of cells in the jar
const JAR_SIZE: usize = (JAR_N_COLS as usize) * (JAR_N_ROWS as usize);

/// The playing field - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jar {
    /// Flat array of cells, row-major order (row * N_COLS + col)
    cells: [Cell; JAR_SIZE],
}

impl Jar {
    /// Create a new empty jar
    pub fn new() -> Self {
        Self {
            cells: [None; JAR_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= JAR_N_ROWS as i8 || col < 0 || col >= JAR_N_COLS as i8 {
            return None;
        }
        Some((row as usize) * (JAR_N_COLS as usize) + (col as usize))
    }

    pub fn n_rows(&self) -> u8 {
        JAR_N_ROWS
    }

    pub fn n_cols(&self) -> u8 {
        JAR_N_COLS
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a cell is within bounds and empty
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if a cell is within bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check whether the figure's pattern fits at the given anchor.
    ///
    /// Every filled pattern cell must land on a column inside the jar, on a
    /// row above the floor, and on an empty cell. Short-circuits on the
    /// first violation. Callers validating a move of the active figure must
    /// `unstamp` it first so it does not collide with itself.
    pub fn can_place(&self, figure: &Figure, anchor: Anchor) -> bool {
        figure.pattern().filled_cells().all(|(dr, dc)| {
            let row = anchor.row + dr;
            let col = anchor.col + dc;
            col >= 0 && col < JAR_N_COLS as i8 && row < JAR_N_ROWS as i8
                && self.is_empty_at(row, col)
        })
    }

    /// Mark every filled cell of the figure's pattern as occupied.
    ///
    /// Used both to commit a locked figure and to keep the in-flight figure
    /// visible to grid queries.
    pub fn stamp(&mut self, figure: &Figure, anchor: Anchor) {
        for (dr, dc) in figure.pattern().filled_cells() {
            self.set(anchor.row + dr, anchor.col + dc, Some(figure.kind()));
        }
    }

    /// Inverse of `stamp`: clear those same cells back to empty.
    pub fn unstamp(&mut self, figure: &Figure, anchor: Anchor) {
        for (dr, dc) in figure.pattern().filled_cells() {
            self.set(anchor.row + dr, anchor.col + dc, None);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_complete(&self, row: usize) -> bool {
        if row >= JAR_N_ROWS as usize {
            return false;
        }
        let start = row * JAR_N_COLS as usize;
        let end = start + JAR_N_COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove a row: shift all rows above it down by one and clear the top.
    /// Uses copy_within for the memory movement.
    fn remove_row(&mut self, row: usize) {
        let width = JAR_N_COLS as usize;
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            let dst_start = r * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }
        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Clear all completed rows and return how many were cleared.
    ///
    /// Single top-to-bottom pass: each complete row is removed and an empty
    /// row is inserted at the top, so rows above shift down while rows below
    /// keep their index. Adjacent complete rows therefore resolve correctly
    /// in one pass.
    pub fn clear_completed_rows(&mut self) -> usize {
        let mut cleared = 0;
        for row in 0..JAR_N_ROWS as usize {
            if self.is_row_complete(row) {
                self.remove_row(row);
                cleared += 1;
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, for rendering
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * JAR_N_COLS as usize;
        &self.cells[start..start + JAR_N_COLS as usize]
    }
}

impl Default for Jar {
    fn default() -> Self {
        Self::new()
    }
}
