use std::fmt;

use crate::Point;

/// A rule violation. Recoverable: the move is refused and the prior state kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoError {
    Occupied,
    KoViolation,
    Suicide,
}

impl GoError {
    /// The reason string reported to callers alongside an invalid move.
    pub fn reason(self) -> &'static str {
        match self {
            GoError::Occupied => "occupied",
            GoError::KoViolation => "ko violation",
            GoError::Suicide => "suicide",
        }
    }
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl std::error::Error for GoError {}

/// Failure to obtain or interpret an analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The external engine could not be reached or gave no answer.
    Unavailable(String),
    /// The external engine answered with something unusable.
    Malformed(String),
    Config(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Unavailable(msg) => write!(f, "analysis unavailable: {msg}"),
            AnalysisError::Malformed(msg) => write!(f, "malformed analysis: {msg}"),
            AnalysisError::Config(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<serde_json::Error> for AnalysisError {
    fn from(e: serde_json::Error) -> Self {
        AnalysisError::Config(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    Empty,
    InvalidColumn(char),
    InvalidRow(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Empty => write!(f, "empty coordinate"),
            CoordError::InvalidColumn(c) => write!(f, "invalid column '{c}'"),
            CoordError::InvalidRow(s) => write!(f, "invalid row '{s}'"),
        }
    }
}

impl std::error::Error for CoordError {}

/// A serialized board or position that breaks a board invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    BadSize(u8),
    CellCount { expected: usize, found: usize },
    OffBoard(Point),
    KoOccupied(Point),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::BadSize(size) => write!(f, "unsupported board size {size}"),
            StateError::CellCount { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
            StateError::OffBoard((col, row)) => write!(f, "point ({col}, {row}) is off the board"),
            StateError::KoOccupied((col, row)) => {
                write!(f, "ko point ({col}, {row}) is occupied")
            }
        }
    }
}

impl std::error::Error for StateError {}
