//! Shapes module - canonical piece shape table
//!
//! The engine itself is shape-agnostic: callers pass any set of local offsets
//! to `spawn`. This table is a convenience for hosts that want the standard
//! seven pieces. Every shape includes the (0, 0) offset, so all of them have
//! a rotation pivot.

use blockfall_types::{PieceKind, TileOffset};

/// Local offsets for one piece, relative to the spawn anchor
pub type Shape = [TileOffset; 4];

/// Get the canonical shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => [(-1, 0), (0, 0), (1, 0), (2, 0)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, -1)],
        PieceKind::S => [(1, -1), (0, -1), (0, 0), (-1, 0)],
        PieceKind::Z => [(-1, -1), (0, -1), (0, 0), (1, 0)],
        PieceKind::J => [(-1, -1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::L => [(1, -1), (-1, 0), (0, 0), (1, 0)],
    }
}
