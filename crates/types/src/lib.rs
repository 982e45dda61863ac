//! Core types shared across the workspace.
//! This crate contains pure data types with no external dependencies.

/// Playing-field dimensions. The matrix is 2 rows taller than the visible
/// playfield; pieces spawn in the hidden buffer rows at the top.
pub const MATRIX_WIDTH: u8 = 10;
pub const MATRIX_HEIGHT: u8 = 22;
pub const HIDDEN_ROWS: u8 = 2;
pub const VISIBLE_ROWS: u8 = MATRIX_HEIGHT - HIDDEN_ROWS;

/// Number of upcoming pieces exposed by the bag preview.
pub const PREVIEW_LEN: usize = 5;

/// Fall intervals by level (milliseconds). Levels beyond the table use the floor.
pub const FALL_INTERVALS_MS: [u64; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];
pub const FALL_INTERVAL_FLOOR_MS: u64 = 120;

/// Soft drop divides the base fall interval by this factor.
pub const SOFT_DROP_DIVISOR: u64 = 10;

/// Line clear scoring, indexed by lines cleared in one lock (classic rules).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Lines required to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetrimino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order. One full bag is a permutation of this set.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Discrete commands consumed by the engine.
///
/// `FallTick` carries the identity of the fall timer that produced it so the
/// engine can ignore ticks from a timer that has since been replaced (for
/// example after a soft-drop toggle changed the interval).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDropToggle,
    HardDrop,
    Hold,
    FallTick { timer_id: u32 },
}

/// Cell on the matrix (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
