//! Assembling the positional report handed to the commentary layer.
//!
//! Territory can come from an external engine when the caller has one; the
//! local influence heuristic answers whenever it does not, or when the
//! external answer is unusable.

use std::fmt;

use serde::Serialize;

use crate::Point;
use crate::board::{BoardState, Captures};
use crate::config::{AnalysisConfig, InfluenceConfig};
use crate::coord::label;
use crate::error::AnalysisError;
use crate::grid::Grid;
use crate::influence::{Influence, influence_map};
use crate::safety::{GroupSafety, assess_safety};
use crate::shapes::{PATTERNS, ShapeMatch, match_shapes};

/// Something that can score point ownership for a position.
///
/// Values are row-major, one per point, in `[-1, 1]` with Black positive.
pub trait OwnershipSource {
    fn ownership(&self, grid: &Grid) -> Result<Vec<f64>, AnalysisError>;
}

/// The distance-weighted influence estimate. Always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHeuristic {
    config: InfluenceConfig,
}

impl LocalHeuristic {
    pub fn new(config: InfluenceConfig) -> Self {
        LocalHeuristic { config }
    }

    pub fn estimate(&self, grid: &Grid) -> Vec<f64> {
        influence_map(grid, &self.config)
    }
}

impl OwnershipSource for LocalHeuristic {
    fn ownership(&self, grid: &Grid) -> Result<Vec<f64>, AnalysisError> {
        Ok(self.estimate(grid))
    }
}

/// An external engine's answer, fetched by the caller before analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecomputedOwnership {
    answer: Result<Vec<f64>, AnalysisError>,
}

impl PrecomputedOwnership {
    pub fn new(values: Vec<f64>) -> Self {
        PrecomputedOwnership { answer: Ok(values) }
    }

    /// The engine could not be asked, e.g. the request failed.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        PrecomputedOwnership {
            answer: Err(AnalysisError::Unavailable(reason.into())),
        }
    }

    /// Parse a JSON array of numbers.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Vec<f64>>(json) {
            Ok(values) => Self::new(values),
            Err(e) => PrecomputedOwnership {
                answer: Err(AnalysisError::Malformed(e.to_string())),
            },
        }
    }
}

impl OwnershipSource for PrecomputedOwnership {
    fn ownership(&self, grid: &Grid) -> Result<Vec<f64>, AnalysisError> {
        let values = self.answer.clone()?;
        let expected = grid.cells().len();
        if values.len() != expected {
            return Err(AnalysisError::Malformed(format!(
                "expected {expected} ownership values, got {}",
                values.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(AnalysisError::Malformed("non-finite ownership value".into()));
        }
        Ok(values)
    }
}

/// Which source produced the territory estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    External,
    Heuristic,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::External => write!(f, "engine"),
            Source::Heuristic => write!(f, "local heuristic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub size: u8,
    pub influence: Influence,
    pub source: Source,
    pub captures: Captures,
    pub last_move: Option<Point>,
    pub shapes: Vec<ShapeMatch>,
    pub dangers: Vec<GroupSafety>,
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Analyzer { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Estimate territory, preferring `external` when given.
    ///
    /// An external failure is logged and replaced by the local heuristic; it
    /// never reaches the caller.
    pub fn territory(
        &self,
        grid: &Grid,
        external: Option<&dyn OwnershipSource>,
    ) -> (Influence, Source) {
        let threshold = self.config.influence.threshold;
        if let Some(engine) = external {
            match engine.ownership(grid) {
                Ok(values) => {
                    return (
                        Influence::from_ownership(&values, threshold),
                        Source::External,
                    );
                }
                Err(e) => tracing::warn!("external analysis failed, using local heuristic: {e}"),
            }
        }
        let values = LocalHeuristic::new(self.config.influence).estimate(grid);
        (Influence::from_ownership(&values, threshold), Source::Heuristic)
    }

    pub fn analyze(
        &self,
        state: &BoardState,
        external: Option<&dyn OwnershipSource>,
    ) -> AnalysisReport {
        let grid = state.grid();
        let (influence, source) = self.territory(grid, external);
        let shapes = if self.config.detect_shapes {
            match_shapes(grid, PATTERNS)
        } else {
            Vec::new()
        };
        let dangers = assess_safety(grid, self.config.danger_liberties);
        tracing::debug!(
            %source,
            shapes = shapes.len(),
            dangers = dangers.len(),
            "position analyzed"
        );

        AnalysisReport {
            size: grid.size(),
            influence,
            source,
            captures: state.captures(),
            last_move: state.last_move(),
            shapes,
            dangers,
        }
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Estimated territory ({}): Black {}, White {}",
            self.source, self.influence.black, self.influence.white
        )?;
        writeln!(
            f,
            "Captures: Black {}, White {}",
            self.captures.black, self.captures.white
        )?;
        if let Some(p) = self.last_move {
            writeln!(f, "Last move: {}", label(p, self.size))?;
        }

        if self.shapes.is_empty() {
            writeln!(f, "Shapes: none")?;
        } else {
            writeln!(f, "Shapes:")?;
            for m in &self.shapes {
                writeln!(
                    f,
                    "- {} ({}) for {} at {}",
                    m.pattern,
                    m.kind,
                    m.stone,
                    label(m.anchor, self.size)
                )?;
            }
        }

        if self.dangers.is_empty() {
            writeln!(f, "Groups in danger: none")?;
        } else {
            writeln!(f, "Groups in danger:")?;
            for g in &self.dangers {
                let plural = if g.liberties == 1 { "liberty" } else { "liberties" };
                write!(
                    f,
                    "- {} group of {} at {} with {} {plural}",
                    g.stone,
                    g.size,
                    label(g.anchor, self.size),
                    g.liberties
                )?;
                if g.in_atari() {
                    write!(f, " (atari)")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
