//! Shape tables for every piece kind and orientation.
//!
//! Each shape is 4 mino offsets from the piece origin inside a 3x3 box
//! (4x4 for I). Rotation is pure table lookup; legality against the matrix
//! is checked by the caller. There is no wall-kick search.

use marathon_types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece origin.
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the piece origin.
pub type PieceShape = [MinoOffset; 4];

/// Canonical spawn column. Combined with y = 0 and `Rotation::North` this is
/// the spawn transform for every kind; the hidden buffer rows keep freshly
/// spawned pieces above the visible playfield.
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = 0;

/// Get the shape (mino offsets) for a piece kind and rotation.
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match (kind, rotation) {
        (PieceKind::I, Rotation::North) => [(0, 1), (1, 1), (2, 1), (3, 1)],
        (PieceKind::I, Rotation::East) => [(2, 0), (2, 1), (2, 2), (2, 3)],
        (PieceKind::I, Rotation::South) => [(0, 2), (1, 2), (2, 2), (3, 2)],
        (PieceKind::I, Rotation::West) => [(1, 0), (1, 1), (1, 2), (1, 3)],

        // O occupies the same cells in every orientation.
        (PieceKind::O, _) => [(1, 0), (2, 0), (1, 1), (2, 1)],

        (PieceKind::T, Rotation::North) => [(1, 0), (0, 1), (1, 1), (2, 1)],
        (PieceKind::T, Rotation::East) => [(1, 0), (1, 1), (2, 1), (1, 2)],
        (PieceKind::T, Rotation::South) => [(0, 1), (1, 1), (2, 1), (1, 2)],
        (PieceKind::T, Rotation::West) => [(1, 0), (0, 1), (1, 1), (1, 2)],

        (PieceKind::S, Rotation::North) => [(1, 0), (2, 0), (0, 1), (1, 1)],
        (PieceKind::S, Rotation::East) => [(1, 0), (1, 1), (2, 1), (2, 2)],
        (PieceKind::S, Rotation::South) => [(1, 1), (2, 1), (0, 2), (1, 2)],
        (PieceKind::S, Rotation::West) => [(0, 0), (0, 1), (1, 1), (1, 2)],

        (PieceKind::Z, Rotation::North) => [(0, 0), (1, 0), (1, 1), (2, 1)],
        (PieceKind::Z, Rotation::East) => [(2, 0), (1, 1), (2, 1), (1, 2)],
        (PieceKind::Z, Rotation::South) => [(0, 1), (1, 1), (1, 2), (2, 2)],
        (PieceKind::Z, Rotation::West) => [(1, 0), (0, 1), (1, 1), (0, 2)],

        (PieceKind::J, Rotation::North) => [(0, 0), (0, 1), (1, 1), (2, 1)],
        (PieceKind::J, Rotation::East) => [(1, 0), (2, 0), (1, 1), (1, 2)],
        (PieceKind::J, Rotation::South) => [(0, 1), (1, 1), (2, 1), (2, 2)],
        (PieceKind::J, Rotation::West) => [(1, 0), (1, 1), (0, 2), (1, 2)],

        (PieceKind::L, Rotation::North) => [(2, 0), (0, 1), (1, 1), (2, 1)],
        (PieceKind::L, Rotation::East) => [(1, 0), (1, 1), (1, 2), (2, 2)],
        (PieceKind::L, Rotation::South) => [(0, 1), (1, 1), (2, 1), (0, 2)],
        (PieceKind::L, Rotation::West) => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn test_every_shape_has_four_distinct_minos() {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                let s = shape(kind, rotation);
                for (i, a) in s.iter().enumerate() {
                    for b in s.iter().skip(i + 1) {
                        assert_ne!(a, b, "{kind:?} {rotation:?} has duplicate minos");
                    }
                }
            }
        }
    }

    #[test]
    fn test_shapes_fit_bounding_box() {
        for kind in PieceKind::ALL {
            let max = if kind == PieceKind::I { 3 } else { 2 };
            for rotation in ROTATIONS {
                for (dx, dy) in shape(kind, rotation) {
                    assert!(dx >= 0 && dx <= max, "{kind:?} {rotation:?} x={dx}");
                    assert!(dy >= 0 && dy <= max, "{kind:?} {rotation:?} y={dy}");
                }
            }
        }
    }

    #[test]
    fn test_o_piece_rotation_invariant() {
        let north = shape(PieceKind::O, Rotation::North);
        for rotation in ROTATIONS {
            assert_eq!(shape(PieceKind::O, rotation), north);
        }
    }

    #[test]
    fn test_i_piece_north() {
        assert_eq!(
            shape(PieceKind::I, Rotation::North),
            [(0, 1), (1, 1), (2, 1), (3, 1)]
        );
    }
}
