//! Tetrimino module - the active falling piece.
//!
//! A tetrimino is a kind, an orientation, and a top-left anchor position in
//! grid coordinates. Every movement operation follows the same protocol:
//! remove the piece from the matrix, validate the candidate transform against
//! the resting board, then commit the candidate or restore the original.
//! A rejected operation leaves both the piece and the grid exactly as they
//! were and reports `Ok(false)`.

use marathon_types::{PieceKind, Rotation};

use crate::error::EngineError;
use crate::matrix::Matrix;
use crate::pieces::{shape, PieceShape, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetrimino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetrimino {
    /// Create a tetrimino at its canonical spawn transform.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Mino offsets for the current orientation.
    pub fn shape(&self) -> PieceShape {
        shape(self.kind, self.rotation)
    }

    /// Absolute grid positions of the four filled cells.
    pub fn cell_positions(&self) -> [(i8, i8); 4] {
        let mut out = [(0, 0); 4];
        for (slot, (dx, dy)) in out.iter_mut().zip(self.shape()) {
            *slot = (self.x + dx, self.y + dy);
        }
        out
    }

    /// Remove-validate-commit for a candidate transform.
    fn try_transform(
        &mut self,
        matrix: &mut Matrix,
        candidate: Tetrimino,
    ) -> Result<bool, EngineError> {
        matrix.remove_piece(self);
        if matrix.fits(&candidate) {
            matrix.add_piece(&candidate)?;
            *self = candidate;
            Ok(true)
        } else {
            matrix.add_piece(self)?;
            Ok(false)
        }
    }

    /// Move one column left. `Ok(false)` when the move would collide.
    pub fn move_left(&mut self, matrix: &mut Matrix) -> Result<bool, EngineError> {
        let candidate = Self {
            x: self.x - 1,
            ..*self
        };
        self.try_transform(matrix, candidate)
    }

    /// Move one column right. `Ok(false)` when the move would collide.
    pub fn move_right(&mut self, matrix: &mut Matrix) -> Result<bool, EngineError> {
        let candidate = Self {
            x: self.x + 1,
            ..*self
        };
        self.try_transform(matrix, candidate)
    }

    /// Move one row down. `Ok(false)` when the piece is resting.
    pub fn move_down(&mut self, matrix: &mut Matrix) -> Result<bool, EngineError> {
        let candidate = Self {
            y: self.y + 1,
            ..*self
        };
        self.try_transform(matrix, candidate)
    }

    /// Rotate a quarter turn. A rotation that would collide is rejected
    /// outright; there is no wall-kick search.
    pub fn rotate(&mut self, matrix: &mut Matrix, clockwise: bool) -> Result<bool, EngineError> {
        let rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        let candidate = Self { rotation, ..*self };
        self.try_transform(matrix, candidate)
    }

    /// Pure predicate: can the piece descend one row? No mutation; the
    /// piece's own stamped cells count as empty.
    pub fn can_move_down(&self, matrix: &Matrix) -> bool {
        let current = self.cell_positions();
        current.iter().all(|&(x, y)| {
            let below = (x, y + 1);
            current.contains(&below) || matrix.is_empty(below.0, below.1)
        })
    }
}
