use serde::{Deserialize, Serialize};

/// A player as it appears inside a single log line: `"name<id><steam_id><side>"`.
///
/// Every event carries its own copy; nothing links players across lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub id: i64,
    pub steam_id: String,
    /// `CT`, `TERRORIST`, `Unassigned`, or empty when the line has no side.
    pub side: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionFloat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Money change reported as `a + b = result`. The arithmetic is not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub a: i64,
    pub b: i64,
    pub result: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no match")]
    NoMatch,
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid recognizer pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl ParseError {
    /// True for the two prefix failures, the only ones [`crate::parse`] can return.
    pub fn is_prefix_error(&self) -> bool {
        matches!(self, ParseError::NoMatch | ParseError::InvalidTimestamp(_))
    }
}
