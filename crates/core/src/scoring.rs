//! Scoring module - line-clear reward rules
//!
//! Compatibility note:
//! The reward for clearing `k` rows in one placement is `k^2`, so multi-line
//! clears pay superlinearly (1, 4, 9, 16, ...). This matches the rules this
//! engine is compatible with; do not swap in a classic scoring table without
//! a rules change.

/// Points awarded for clearing `lines` full rows in a single placement
pub fn line_clear_points(lines: usize) -> u64 {
    let lines = lines as u64;
    lines * lines
}
