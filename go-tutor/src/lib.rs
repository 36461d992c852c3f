//! Go rules and positional analysis for a tutoring board.
//!
//! [`BoardState`] applies moves (captures, suicide, ko). The analysis
//! modules read a [`Grid`] and produce report fragments that [`Analyzer`]
//! assembles into an [`AnalysisReport`].

pub mod board;
pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod group;
pub mod history;
pub mod influence;
pub mod report;
pub mod safety;
pub mod shapes;
pub mod stone;
pub mod turn;

/// A board point as `(column, row)`, zero-based from the top-left corner.
pub type Point = (u8, u8);

pub use board::{BoardState, Captures, MoveOutcome};
pub use config::{AnalysisConfig, InfluenceConfig};
pub use error::{AnalysisError, CoordError, GoError, StateError};
pub use grid::Grid;
pub use group::{Group, resolve_group};
pub use history::History;
pub use influence::{Influence, estimate_influence};
pub use report::{
    AnalysisReport, Analyzer, LocalHeuristic, OwnershipSource, PrecomputedOwnership, Source,
};
pub use safety::{GroupSafety, assess_safety};
pub use shapes::{PATTERNS, ShapeKind, ShapeMatch, ShapePattern, match_shapes};
pub use stone::Stone;
pub use turn::{Move, Turn};
