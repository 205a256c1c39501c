//! Engine module - the command API over field and active piece
//!
//! All movement follows a try-and-reject policy: a full candidate position
//! set is computed, validated against bounds and the settled field, and
//! committed wholesale or dropped. The engine is never left in a partially
//! applied state, and illegal shifts/rotations are silent no-ops at the
//! public surface. The `try_*` methods expose the richer [`MoveOutcome`]
//! for hosts and tests that want to know why a command did nothing.

use blockfall_types::{ConfigError, Pos, Spin, TileOffset};

use crate::field::Field;
use crate::piece::ActivePiece;
use crate::scoring::line_clear_points;
use crate::snapshot::BoardSnapshot;

/// Result of attempting a movement command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Candidate validated and committed
    Applied,
    /// A tile would leave the board
    RejectedBounds,
    /// A tile would land on a settled tile
    RejectedCollision,
    /// No piece in play
    NoActivePiece,
    /// Rotation requested on a piece with no (0, 0) home offset
    NoPivot,
}

impl MoveOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}

/// The board engine - owns the settled field, the active piece, and the score
#[derive(Debug, Clone)]
pub struct BoardEngine {
    field: Field,
    active: Option<ActivePiece>,
    score: u64,
}

impl BoardEngine {
    /// Create an empty board. Both dimensions must be positive.
    pub fn new(cols: i32, rows: i32) -> Result<Self, ConfigError> {
        if cols <= 0 {
            return Err(ConfigError::NonPositiveCols(cols));
        }
        if rows <= 0 {
            return Err(ConfigError::NonPositiveRows(rows));
        }
        Ok(Self {
            field: Field::new(cols, rows),
            active: None,
            score: 0,
        })
    }

    pub fn cols(&self) -> i32 {
        self.field.cols()
    }

    pub fn rows(&self) -> i32 {
        self.field.rows()
    }

    /// Cumulative score; only ever increases
    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn has_active_piece(&self) -> bool {
        self.active.as_ref().is_some_and(|piece| !piece.is_empty())
    }

    /// Read-only view of the settled field
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The active piece, if one is in play
    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Union of settled and active tile positions.
    /// Duplicates are impossible: the active piece never overlaps the field.
    pub fn tiles(&self) -> Vec<Pos> {
        let mut result: Vec<Pos> = self.field.occupied_positions().collect();
        if let Some(active) = self.active.as_ref() {
            result.extend(active.positions());
        }
        result
    }

    /// Spawn a new piece from local offsets at the given anchor.
    /// On success the previous active piece (if any) is replaced wholesale
    /// and `true` is returned. On failure the engine is untouched and
    /// `false` is returned; empty shapes always fail.
    pub fn spawn(&mut self, shape: &[TileOffset], anchor_col: i32, anchor_row: i32) -> bool {
        if shape.is_empty() {
            return false;
        }
        let candidate = ActivePiece::from_shape(shape, anchor_col, anchor_row);
        if !self.check_piece(&candidate).is_applied() {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Shift the active piece one column left; silently ignores illegal moves
    pub fn shift_left(&mut self) {
        let _ = self.try_shift(-1);
    }

    /// Shift the active piece one column right; silently ignores illegal moves
    pub fn shift_right(&mut self) {
        let _ = self.try_shift(1);
    }

    /// Rotate the active piece a quarter turn clockwise around its pivot;
    /// silently ignores illegal rotations
    pub fn rotate_cw(&mut self) {
        let _ = self.try_rotate(Spin::Cw);
    }

    /// Rotate the active piece a quarter turn counter-clockwise around its
    /// pivot; silently ignores illegal rotations
    pub fn rotate_ccw(&mut self) {
        let _ = self.try_rotate(Spin::Ccw);
    }

    /// Move the active piece down one row. If no downward position is legal,
    /// the piece settles where it is and line clearing runs.
    pub fn step_down(&mut self) {
        match self.try_translate(0, 1) {
            MoveOutcome::Applied | MoveOutcome::NoActivePiece => {}
            _ => self.lock_active(),
        }
    }

    /// Drop the active piece straight down to its resting position, settle
    /// it, and run line clearing. No-op without an active piece.
    pub fn hard_drop(&mut self) {
        if self.active.is_none() {
            return;
        }
        while self.try_translate(0, 1).is_applied() {}
        self.lock_active();
    }

    /// Horizontal shift with the full outcome reported
    pub fn try_shift(&mut self, dx: i32) -> MoveOutcome {
        self.try_translate(dx, 0)
    }

    /// Rotation with the full outcome reported
    pub fn try_rotate(&mut self, spin: Spin) -> MoveOutcome {
        let candidate = match self.active.as_ref() {
            None => return MoveOutcome::NoActivePiece,
            Some(active) => match active.rotated(spin) {
                None => return MoveOutcome::NoPivot,
                Some(candidate) => candidate,
            },
        };
        self.commit_if_valid(candidate)
    }

    /// Capture the full externally visible state
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(self)
    }

    fn try_translate(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        let candidate = match self.active.as_ref() {
            None => return MoveOutcome::NoActivePiece,
            Some(active) => active.translated(dx, dy),
        };
        self.commit_if_valid(candidate)
    }

    /// Validate a candidate piece and replace the active piece wholesale if
    /// it is legal; an illegal candidate leaves the engine untouched
    fn commit_if_valid(&mut self, candidate: ActivePiece) -> MoveOutcome {
        let outcome = self.check_piece(&candidate);
        if outcome.is_applied() {
            self.active = Some(candidate);
        }
        outcome
    }

    fn check_piece(&self, candidate: &ActivePiece) -> MoveOutcome {
        for (x, y) in candidate.positions() {
            if self.field.is_out_of_bounds(x, y) {
                return MoveOutcome::RejectedBounds;
            }
            if self.field.is_occupied(x, y) {
                return MoveOutcome::RejectedCollision;
            }
        }
        MoveOutcome::Applied
    }

    /// Settle the active piece at its current position, then clear full rows
    /// and award `k^2` points for `k` cleared rows
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        let positions: Vec<Pos> = active.positions().collect();
        // Cannot fail: the active piece never overlaps the settled field
        let settled = self.field.settle(&positions);
        debug_assert!(settled);

        let cleared = self.field.clear_full_rows();
        self.score = self.score.saturating_add(line_clear_points(cleared.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S_SHAPE: [TileOffset; 4] = [(1, -1), (0, -1), (0, 0), (-1, 0)];

    #[test]
    fn test_new_rejects_non_positive_dimensions() {
        assert_eq!(
            BoardEngine::new(0, 22).unwrap_err(),
            ConfigError::NonPositiveCols(0)
        );
        assert_eq!(
            BoardEngine::new(10, -3).unwrap_err(),
            ConfigError::NonPositiveRows(-3)
        );
        assert!(BoardEngine::new(1, 1).is_ok());
    }

    #[test]
    fn test_spawn_rejects_empty_shape() {
        let mut engine = BoardEngine::new(10, 22).unwrap();
        assert!(!engine.spawn(&[], 4, 1));
        assert!(!engine.has_active_piece());
    }

    #[test]
    fn test_failed_spawn_keeps_previous_piece() {
        let mut engine = BoardEngine::new(10, 22).unwrap();
        assert!(engine.spawn(&S_SHAPE, 4, 1));
        let before = engine.tiles();

        // Out of bounds at row -1
        assert!(!engine.spawn(&S_SHAPE, 4, 0));
        assert!(engine.has_active_piece());
        assert_eq!(engine.tiles(), before);
    }

    #[test]
    fn test_try_shift_outcomes() {
        let mut engine = BoardEngine::new(10, 22).unwrap();
        assert_eq!(engine.try_shift(-1), MoveOutcome::NoActivePiece);

        assert!(engine.spawn(&[(0, 0)], 0, 0));
        assert_eq!(engine.try_shift(-1), MoveOutcome::RejectedBounds);
        assert_eq!(engine.try_shift(1), MoveOutcome::Applied);
    }

    #[test]
    fn test_try_shift_collision_outcome() {
        let mut engine = BoardEngine::new(10, 22).unwrap();
        // Settle a single tile at (2, 21) by dropping a 1-tile piece
        assert!(engine.spawn(&[(0, 0)], 2, 0));
        engine.hard_drop();
        assert!(!engine.has_active_piece());

        assert!(engine.spawn(&[(0, 0)], 1, 21));
        assert_eq!(engine.try_shift(1), MoveOutcome::RejectedCollision);
        assert_eq!(engine.tiles(), vec![(2, 21), (1, 21)]);
    }

    #[test]
    fn test_rotate_without_pivot_is_noop() {
        let mut engine = BoardEngine::new(10, 22).unwrap();
        assert!(engine.spawn(&[(1, 0), (2, 0)], 3, 3));
        let before = engine.tiles();

        assert_eq!(engine.try_rotate(Spin::Cw), MoveOutcome::NoPivot);
        engine.rotate_cw();
        engine.rotate_ccw();
        assert_eq!(engine.tiles(), before);
    }

    #[test]
    fn test_step_down_without_piece_is_safe() {
        let mut engine = BoardEngine::new(10, 22).unwrap();
        engine.step_down();
        engine.hard_drop();
        assert_eq!(engine.score(), 0);
        assert!(engine.tiles().is_empty());
    }

    #[test]
    fn test_step_down_locks_at_floor() {
        let mut engine = BoardEngine::new(10, 3).unwrap();
        assert!(engine.spawn(&[(0, 0)], 5, 2));

        // Already at the floor: the failed step settles the piece in place
        engine.step_down();
        assert!(!engine.has_active_piece());
        assert!(engine.field().is_occupied(5, 2));
    }

    #[test]
    fn test_lock_runs_line_clear_and_scores() {
        let mut engine = BoardEngine::new(2, 4).unwrap();
        // Fill the bottom row with a 2-tile horizontal piece
        assert!(engine.spawn(&[(0, 0), (1, 0)], 0, 0));
        engine.hard_drop();

        assert_eq!(engine.score(), 1);
        assert!(engine.tiles().is_empty());
    }
}
