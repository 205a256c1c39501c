//! Core board-engine logic - pure, deterministic, and testable
//!
//! This crate contains the complete rules of the falling-block game. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: every command is a bounded, synchronous computation
//! - **Testable**: unit tests for every rule, property tests for invariants
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`field`]: settled-tile grid with occupancy checks and line clearing
//! - [`piece`]: active piece keyed by spawn-offset tile identity
//! - [`engine`]: the command API (spawn, shift, rotate, step, drop, query)
//! - [`scoring`]: quadratic line-clear reward
//! - [`shapes`]: canonical shape table for the standard seven pieces
//! - [`snapshot`]: serializable view of the engine state
//!
//! # Game Rules
//!
//! - Movement is try-and-reject: candidates are validated against bounds and
//!   the settled field, then committed wholesale or dropped silently
//! - Rotation pivots on the tile spawned at local offset (0, 0); tile
//!   identities are never reassigned, so four quarter turns are the identity
//! - A failed downward step settles the piece where it stands, clears every
//!   full row, awards `k^2` points for `k` rows, and compacts the field
//! - The engine never spawns pieces on its own; the host decides when and
//!   with what shape
//!
//! # Example
//!
//! ```
//! use blockfall_core::BoardEngine;
//!
//! let mut engine = BoardEngine::new(10, 22).expect("valid dimensions");
//!
//! assert!(engine.spawn(&[(1, -1), (0, -1), (0, 0), (-1, 0)], 4, 1));
//! engine.shift_left();
//! engine.rotate_cw();
//! engine.hard_drop();
//!
//! assert!(!engine.has_active_piece());
//! assert_eq!(engine.tiles().len(), 4);
//! ```

pub mod engine;
pub mod field;
pub mod piece;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use engine::{BoardEngine, MoveOutcome};
pub use field::Field;
pub use piece::{ActivePiece, Tile};
pub use scoring::line_clear_points;
pub use shapes::get_shape;
pub use snapshot::BoardSnapshot;
