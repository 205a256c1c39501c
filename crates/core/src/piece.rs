//! Piece module - the active falling piece
//!
//! Each tile of a piece carries two coordinates: its local `offset` relative
//! to the pivot tile and its current absolute board position. Offsets start
//! as the spawn-time shape and are the key distinguishing the tiles;
//! translation never touches them. A committed rotation replaces each offset
//! with its quarter-turned value and re-derives the position from the pivot
//! tile's absolute position, so rotations compose: cw then ccw restores the
//! piece, and four turns in one direction are the identity.
//!
//! The tile array order is stable for the piece's lifetime; order itself is
//! irrelevant to correctness.

use blockfall_types::{Pos, Spin, TileOffset};

/// One tile of the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Local offset relative to the pivot tile; rewritten only by rotation
    pub offset: TileOffset,
    /// Current absolute board position
    pub pos: Pos,
}

/// Active falling piece - a stable-order array of offset/position pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    tiles: Vec<Tile>,
}

impl ActivePiece {
    /// Build a piece from local offsets and a spawn anchor.
    /// Duplicate offsets collapse to a single tile (mapping semantics: the
    /// offset is the key). Positions are not validated here; the engine
    /// checks candidates against the field before committing them.
    pub fn from_shape(shape: &[TileOffset], anchor_col: i32, anchor_row: i32) -> Self {
        let mut tiles: Vec<Tile> = Vec::with_capacity(shape.len());
        for &(dx, dy) in shape {
            if tiles.iter().any(|tile| tile.offset == (dx, dy)) {
                continue;
            }
            tiles.push(Tile {
                offset: (dx, dy),
                pos: (dx + anchor_col, dy + anchor_row),
            });
        }
        Self { tiles }
    }

    /// Number of tiles; fixed for the piece's lifetime
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Current absolute positions, in stable tile order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.tiles.iter().map(|tile| tile.pos)
    }

    /// Current local offsets, in stable tile order
    pub fn offsets(&self) -> impl Iterator<Item = TileOffset> + '_ {
        self.tiles.iter().map(|tile| tile.offset)
    }

    /// Absolute position of the pivot tile (local offset (0, 0)), if any
    pub fn pivot_pos(&self) -> Option<Pos> {
        self.tiles
            .iter()
            .find(|tile| tile.offset == (0, 0))
            .map(|tile| tile.pos)
    }

    /// Candidate piece translated by (dx, dy); offsets are untouched
    pub fn translated(&self, dx: i32, dy: i32) -> ActivePiece {
        ActivePiece {
            tiles: self
                .tiles
                .iter()
                .map(|tile| Tile {
                    offset: tile.offset,
                    pos: (tile.pos.0 + dx, tile.pos.1 + dy),
                })
                .collect(),
        }
    }

    /// Candidate piece turned a quarter turn around the pivot tile.
    /// Every offset is rotated and every position re-derived from the
    /// pivot's absolute position; the pivot itself stays put.
    /// Returns None if the piece has no tile with local offset (0, 0).
    pub fn rotated(&self, spin: Spin) -> Option<ActivePiece> {
        let (px, py) = self.pivot_pos()?;
        Some(ActivePiece {
            tiles: self
                .tiles
                .iter()
                .map(|tile| {
                    let (rx, ry) = spin.apply(tile.offset);
                    Tile {
                        offset: (rx, ry),
                        pos: (rx + px, ry + py),
                    }
                })
                .collect(),
        })
    }
}
