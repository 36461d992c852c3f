use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play(Point),
    Pass,
}

/// A move made by one side, as recorded in a [`History`](crate::History).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub stone: Stone,
    pub kind: Move,
}

impl Turn {
    pub fn play(stone: Stone, point: Point) -> Self {
        Turn {
            stone,
            kind: Move::Play(point),
        }
    }

    pub fn pass(stone: Stone) -> Self {
        Turn {
            stone,
            kind: Move::Pass,
        }
    }

    pub fn point(&self) -> Option<Point> {
        match self.kind {
            Move::Play(p) => Some(p),
            Move::Pass => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.kind == Move::Pass
    }

    /// Render with board labels, e.g. `B D4` or `W pass`.
    pub fn describe(&self, size: u8) -> String {
        match self.kind {
            Move::Play(p) => format!("{} {}", self.stone.initial(), crate::coord::label(p, size)),
            Move::Pass => format!("{} pass", self.stone.initial()),
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Move::Play((col, row)) => write!(f, "{} ({col}, {row})", self.stone.initial()),
            Move::Pass => write!(f, "{} pass", self.stone.initial()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_has_a_point() {
        let t = Turn::play(Stone::Black, (3, 15));
        assert_eq!(t.point(), Some((3, 15)));
        assert!(!t.is_pass());
        assert_eq!(t.describe(19), "B D4");
        assert_eq!(t.to_string(), "B (3, 15)");
    }

    #[test]
    fn pass_has_no_point() {
        let t = Turn::pass(Stone::White);
        assert_eq!(t.point(), None);
        assert!(t.is_pass());
        assert_eq!(t.describe(19), "W pass");
    }

    #[test]
    fn serializes_with_lowercase_kind() {
        let json = serde_json::to_string(&Turn::pass(Stone::Black)).unwrap();
        assert_eq!(json, r#"{"stone":1,"kind":"pass"}"#);
        let json = serde_json::to_string(&Turn::play(Stone::White, (1, 2))).unwrap();
        assert_eq!(json, r#"{"stone":-1,"kind":{"play":[1,2]}}"#);
    }
}
