//! Core types shared across the workspace
//! This crate contains pure data types with no external dependencies

/// Absolute board coordinate as (column, row).
/// Columns increase rightward, rows increase downward; (0, 0) is the
/// top-left corner. Candidate positions may go negative before validation.
pub type Pos = (i32, i32);

/// Local tile offset relative to a piece's spawn anchor.
/// Doubles as the tile's identity for the piece's lifetime.
pub type TileOffset = (i32, i32);

/// Rotation direction for the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Cw,
    Ccw,
}

impl Spin {
    /// Rotate a local offset one quarter turn around the origin.
    /// Cw maps (dx, dy) -> (-dy, dx); Ccw maps (dx, dy) -> (dy, -dx).
    pub fn apply(self, (dx, dy): TileOffset) -> TileOffset {
        match self {
            Spin::Cw => (-dy, dx),
            Spin::Ccw => (dy, -dx),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Spin::Cw => "cw",
            Spin::Ccw => "ccw",
        }
    }
}

/// Standard falling-block piece kinds
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
    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// All kinds, in a fixed order
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

/// Board construction error - dimensions must be positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NonPositiveCols(i32),
    NonPositiveRows(i32),
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        "invalid_config"
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfigError::NonPositiveCols(_) => "board column count must be positive",
            ConfigError::NonPositiveRows(_) => "board row count must be positive",
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveCols(cols) => {
                write!(f, "{}: {}", self.message(), cols)
            }
            ConfigError::NonPositiveRows(rows) => {
                write!(f, "{}: {}", self.message(), rows)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
