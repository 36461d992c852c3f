//! Detection of well-known good and bad shapes.
//!
//! A pattern is a small template drawn from the point of view of one color:
//!
//! - `X`: a stone of the color being matched
//! - `O`: a stone of the other color
//! - `.`: an empty point
//! - `?`: anything
//!
//! Templates are tried in all four rotations and for both colors.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::Point;
use crate::grid::Grid;
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Good,
    Bad,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Good => write!(f, "good"),
            ShapeKind::Bad => write!(f, "bad"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Own,
    Other,
    Empty,
    Any,
}

impl Cell {
    fn from_char(c: char) -> Self {
        match c {
            'X' => Cell::Own,
            'O' => Cell::Other,
            '.' => Cell::Empty,
            _ => Cell::Any,
        }
    }

    fn is_stone(self) -> bool {
        matches!(self, Cell::Own | Cell::Other)
    }

    /// The grid value this cell requires when `Own` is `stone`, or `None` for a wildcard.
    fn expected(self, stone: Stone) -> Option<i8> {
        match self {
            Cell::Own => Some(stone.cell()),
            Cell::Other => Some(stone.opp().cell()),
            Cell::Empty => Some(0),
            Cell::Any => None,
        }
    }
}

/// Rows of cells; all rows have the same length.
pub type Template = Vec<Vec<Cell>>;

/// A named template. Rows may be rectangular (Bamboo Joint is 2×3); every
/// template fits in 3×3 and must lie wholly on the board to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapePattern {
    pub name: &'static str,
    pub kind: ShapeKind,
    pub rows: &'static [&'static str],
}

impl ShapePattern {
    pub fn template(&self) -> Template {
        self.rows
            .iter()
            .map(|row| row.chars().map(Cell::from_char).collect())
            .collect()
    }
}

pub static PATTERNS: &[ShapePattern] = &[
    ShapePattern {
        name: "Empty Triangle",
        kind: ShapeKind::Bad,
        rows: &["XX", "X."],
    },
    ShapePattern {
        name: "Dumpling",
        kind: ShapeKind::Bad,
        rows: &["XX", "XX"],
    },
    ShapePattern {
        name: "Ponnuki",
        kind: ShapeKind::Good,
        rows: &["?X?", "X.X", "?X?"],
    },
    ShapePattern {
        name: "Bamboo Joint",
        kind: ShapeKind::Good,
        rows: &["X.X", "X.X"],
    },
];

/// Rotate a template 90° clockwise.
pub fn rotate(template: &Template) -> Template {
    let height = template.len();
    let width = template.first().map_or(0, Vec::len);
    (0..width)
        .map(|c| (0..height).rev().map(|r| template[r][c]).collect())
        .collect()
}

/// The template in its 0°, 90°, 180° and 270° orientations.
pub fn rotations(template: &Template) -> [Template; 4] {
    let r90 = rotate(template);
    let r180 = rotate(&r90);
    let r270 = rotate(&r180);
    [template.clone(), r90, r180, r270]
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ShapeMatch {
    pub pattern: &'static str,
    pub kind: ShapeKind,
    pub stone: Stone,
    /// First stone of the template as placed on the board.
    pub anchor: Point,
}

/// Find every occurrence of `patterns` on the board.
///
/// Results are in discovery order with duplicates (e.g. from the rotations
/// of a symmetric pattern) removed.
pub fn match_shapes(grid: &Grid, patterns: &[ShapePattern]) -> Vec<ShapeMatch> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for pattern in patterns {
        for template in rotations(&pattern.template()) {
            for stone in Stone::BOTH {
                for m in scan(grid, pattern, &template, stone) {
                    if seen.insert(m.clone()) {
                        found.push(m);
                    }
                }
            }
        }
    }

    found
}

/// Slide one oriented, color-assigned template over every offset where it fits.
fn scan(grid: &Grid, pattern: &ShapePattern, template: &Template, stone: Stone) -> Vec<ShapeMatch> {
    let size = grid.size() as usize;
    let height = template.len();
    let width = template.first().map_or(0, Vec::len);
    if height == 0 || width == 0 || height > size || width > size {
        return Vec::new();
    }

    let Some(anchor) = first_stone_cell(template) else {
        return Vec::new();
    };

    let mut matches = Vec::new();
    for top in 0..=size - height {
        for left in 0..=size - width {
            if fits(grid, template, stone, left, top) {
                matches.push(ShapeMatch {
                    pattern: pattern.name,
                    kind: pattern.kind,
                    stone,
                    anchor: ((left + anchor.0) as u8, (top + anchor.1) as u8),
                });
            }
        }
    }
    matches
}

fn fits(grid: &Grid, template: &Template, stone: Stone, left: usize, top: usize) -> bool {
    let cells = grid.cells();
    let size = grid.size() as usize;
    template.iter().enumerate().all(|(r, row)| {
        row.iter().enumerate().all(|(c, cell)| {
            cell.expected(stone)
                .is_none_or(|want| cells[(top + r) * size + left + c] == want)
        })
    })
}

/// Template offset `(col, row)` of the first stone cell in row-major order.
fn first_stone_cell(template: &Template) -> Option<(usize, usize)> {
    template.iter().enumerate().find_map(|(r, row)| {
        row.iter().position(|cell| cell.is_stone()).map(|c| (c, r))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(name: &str) -> ShapePattern {
        *PATTERNS.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn rotates_clockwise() {
        let t = ShapePattern {
            name: "t",
            kind: ShapeKind::Bad,
            rows: &["X.", "O?"],
        }
        .template();
        let r = rotate(&t);
        assert_eq!(
            r,
            vec![vec![Cell::Other, Cell::Own], vec![Cell::Any, Cell::Empty]]
        );
        let [_, _, _, r270] = rotations(&t);
        assert_eq!(rotate(&r270), t);
    }

    #[test]
    fn rotates_rectangles() {
        let t = pattern("Bamboo Joint").template();
        let r = rotate(&t);
        assert_eq!(r.len(), 3);
        assert!(r.iter().all(|row| row.len() == 2));
        assert_eq!(r[1], vec![Cell::Empty, Cell::Empty]);
    }

    #[test]
    fn finds_single_empty_triangle() {
        let grid = Grid::from_layout(&[".....", ".BB..", ".B...", ".....", "....."]);
        let found = match_shapes(&grid, &[pattern("Empty Triangle")]);
        assert_eq!(
            found,
            vec![ShapeMatch {
                pattern: "Empty Triangle",
                kind: ShapeKind::Bad,
                stone: Stone::Black,
                anchor: (1, 1),
            }]
        );
    }

    #[test]
    fn empty_triangle_needs_the_empty_point() {
        let grid = Grid::from_layout(&["BB.", "BW.", "..."]);
        assert!(match_shapes(&grid, &[pattern("Empty Triangle")]).is_empty());
    }

    #[test]
    fn finds_rotated_white_triangle() {
        let grid = Grid::from_layout(&["....", "..W.", ".WW.", "...."]);
        let found = match_shapes(&grid, &[pattern("Empty Triangle")]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].stone, Stone::White);
        assert_eq!(found[0].anchor, (2, 1));
    }

    #[test]
    fn symmetric_pattern_reported_once() {
        let grid = Grid::from_layout(&[".B.", "B.B", ".B."]);
        let found = match_shapes(&grid, &[pattern("Ponnuki")]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ShapeKind::Good);
        assert_eq!(found[0].anchor, (1, 0));
    }

    #[test]
    fn wildcards_accept_anything() {
        let grid = Grid::from_layout(&["WBW", "B.B", "WBB"]);
        let found = match_shapes(&grid, &[pattern("Ponnuki")]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].stone, Stone::Black);
    }

    #[test]
    fn finds_bamboo_joint_in_both_orientations() {
        let grid = Grid::from_layout(&["B.B..", "B.B..", ".....", "...WW", "....."]);
        let grid = grid
            .with_stone((3, 1), Some(Stone::White))
            .with_stone((4, 1), Some(Stone::White));
        let found = match_shapes(&grid, &[pattern("Bamboo Joint")]);
        let stones: Vec<Stone> = found.iter().map(|m| m.stone).collect();
        assert_eq!(found.len(), 2);
        assert!(stones.contains(&Stone::Black));
        assert!(stones.contains(&Stone::White));
    }

    #[test]
    fn pattern_larger_than_board_never_matches() {
        let grid = Grid::from_layout(&["BB", "BB"]);
        assert!(match_shapes(&grid, &[pattern("Ponnuki")]).is_empty());
        assert_eq!(match_shapes(&grid, &[pattern("Dumpling")]).len(), 1);
    }

    #[test]
    fn matching_is_repeatable() {
        let grid = Grid::from_layout(&["BB.W", "B.WW", ".B.W", "BBW."]);
        assert_eq!(match_shapes(&grid, PATTERNS), match_shapes(&grid, PATTERNS));
    }

    #[test]
    fn catalogue_templates_are_rectangular() {
        for p in PATTERNS {
            let t = p.template();
            assert!(t.iter().all(|row| row.len() == t[0].len()), "{}", p.name);
            assert!(t.len() <= 3 && t[0].len() <= 3, "{}", p.name);
            assert!(first_stone_cell(&t).is_some(), "{}", p.name);
        }
    }
}
