//! Snapshot module - serializable view of the engine state
//!
//! Hosts render from snapshots instead of poking at engine internals, and
//! the serde derives let embedders ship the state across a process boundary.

use serde::{Deserialize, Serialize};

use blockfall_types::Pos;

use crate::engine::BoardEngine;

/// Externally visible board state at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub cols: i32,
    pub rows: i32,
    pub score: u64,
    /// Settled positions, row-major order
    pub settled: Vec<Pos>,
    /// Active piece positions in stable tile order, if a piece is in play
    pub active: Option<Vec<Pos>>,
}

impl BoardSnapshot {
    /// Union of settled and active positions, matching `BoardEngine::tiles`
    pub fn tiles(&self) -> Vec<Pos> {
        let mut result = self.settled.clone();
        if let Some(active) = &self.active {
            result.extend(active.iter().copied());
        }
        result
    }
}

impl From<&BoardEngine> for BoardSnapshot {
    fn from(engine: &BoardEngine) -> Self {
        Self {
            cols: engine.cols(),
            rows: engine.rows(),
            score: engine.score(),
            settled: engine.field().occupied_positions().collect(),
            active: engine
                .active()
                .map(|piece| piece.positions().collect()),
        }
    }
}
