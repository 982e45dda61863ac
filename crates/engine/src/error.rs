//! Engine error types.
//!
//! Engine operations signal real invariant violations through `Result`;
//! intentionally-ignored no-ops (a rejected move, a stale tick, a second hold
//! in one cycle) are not errors. The orchestration layer decides whether a
//! placement conflict at spawn time means game over.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A piece cell would land outside the matrix or on an occupied cell.
    PlacementConflict { x: i8, y: i8 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlacementConflict { x, y } => {
                write!(f, "placement conflict at ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for EngineError {}
