//! Matrix module - the playing-field grid.
//!
//! The matrix is 10 columns by 22 rows; the top 2 rows are a hidden buffer
//! where pieces spawn. Flat array storage, row-major order.
//!
//! The active piece is always stamped onto the grid. Movement and rotation
//! remove it, validate the candidate position against the resting board, and
//! re-stamp either the candidate or the original. Coordinates: (x, y) with x
//! ranging 0..9 left to right and y ranging 0..21 top to bottom.

use arrayvec::ArrayVec;

use marathon_types::{Cell, MATRIX_HEIGHT, MATRIX_WIDTH};

use crate::error::EngineError;
use crate::tetrimino::Tetrimino;

/// Total number of cells on the matrix.
const MATRIX_SIZE: usize = (MATRIX_WIDTH as usize) * (MATRIX_HEIGHT as usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    /// Flat array of cells, row-major order (y * WIDTH + x).
    cells: [Cell; MATRIX_SIZE],
}

impl Matrix {
    /// Create a new empty matrix.
    pub fn new() -> Self {
        Self {
            cells: [None; MATRIX_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= MATRIX_WIDTH as i8 || y < 0 || y >= MATRIX_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (MATRIX_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        MATRIX_WIDTH
    }

    pub fn height(&self) -> u8 {
        MATRIX_HEIGHT
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty.
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether every filled cell of the piece maps to an empty in-bounds
    /// cell. Callers must have removed the piece from the grid first, so the
    /// test runs against the resting board.
    pub fn fits(&self, piece: &Tetrimino) -> bool {
        piece
            .cell_positions()
            .iter()
            .all(|&(x, y)| self.is_empty(x, y))
    }

    /// Stamp the piece's filled cells onto the grid at its current position.
    ///
    /// Fails without mutating if any target cell is occupied or out of bounds;
    /// at spawn time that failure is the game-over condition upstream.
    pub fn add_piece(&mut self, piece: &Tetrimino) -> Result<(), EngineError> {
        for &(x, y) in piece.cell_positions().iter() {
            if !self.is_empty(x, y) {
                return Err(EngineError::PlacementConflict { x, y });
            }
        }
        for &(x, y) in piece.cell_positions().iter() {
            self.set(x, y, Some(piece.kind));
        }
        Ok(())
    }

    /// Clear the piece's filled cells from the grid.
    pub fn remove_piece(&mut self, piece: &Tetrimino) {
        for &(x, y) in piece.cell_positions().iter() {
            self.set(x, y, None);
        }
    }

    /// Check if a row is completely filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= MATRIX_HEIGHT as usize {
            return false;
        }
        let start = y * MATRIX_WIDTH as usize;
        let end = start + MATRIX_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y` and shift all rows above it down by one.
    fn remove_row(&mut self, y: usize) {
        if y >= MATRIX_HEIGHT as usize {
            return;
        }

        let width = MATRIX_WIDTH as usize;

        // copy_within handles overlapping ranges safely.
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Detect and remove completed rows after a piece locks.
    ///
    /// Only the rows spanned by the locked piece can have completed, so only
    /// those are scanned. Returns how many rows were removed; rows above the
    /// removed ones shift down and the top rows end up empty.
    pub fn clear_completed_rows(&mut self, piece: &Tetrimino) -> usize {
        let mut full_rows: ArrayVec<usize, 4> = ArrayVec::new();

        for &(_, y) in piece.cell_positions().iter() {
            if y < 0 {
                continue;
            }
            let row = y as usize;
            if self.is_row_full(row) && !full_rows.contains(&row) {
                full_rows.push(row);
            }
        }

        // Clearing a row only moves the rows above it, so clearing from the
        // topmost full row down keeps the remaining indices valid.
        full_rows.sort_unstable();
        for &row in full_rows.iter() {
            self.remove_row(row);
        }

        full_rows.len()
    }

    /// Number of filled cells on the grid (locked cells plus the stamped
    /// active piece).
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Reference to the internal cells array, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new()
    }
}
