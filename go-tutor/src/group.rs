use serde::Serialize;

use crate::Point;
use crate::grid::Grid;
use crate::stone::Stone;

/// A maximal set of 4-connected stones of one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub stone: Stone,
    /// Members in discovery order; the seed point comes first.
    pub stones: Vec<Point>,
    pub has_liberties: bool,
}

impl Group {
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }
}

/// Flood-fill the group of `stone` containing `point`.
///
/// The caller guarantees `point` holds `stone`; the grid is not consulted
/// for the seed itself.
pub fn resolve_group(grid: &Grid, point: Point, stone: Stone) -> Group {
    let mut visited = vec![false; grid.cells().len()];
    resolve_with(grid, point, stone, &mut visited)
}

/// Flood fill sharing a visited bitset across calls.
fn resolve_with(grid: &Grid, point: Point, stone: Stone, visited: &mut [bool]) -> Group {
    let mut stones = Vec::new();
    let mut has_liberties = false;
    let mut stack = vec![point];

    while let Some(p) = stack.pop() {
        let vi = grid.idx(p);
        if visited[vi] {
            continue;
        }
        visited[vi] = true;
        stones.push(p);
        for n in grid.neighbors(p) {
            match grid.stone_at(n) {
                None => has_liberties = true,
                Some(s) if s == stone && !visited[grid.idx(n)] => stack.push(n),
                Some(_) => {}
            }
        }
    }

    Group {
        stone,
        stones,
        has_liberties,
    }
}

/// The distinct empty points adjacent to any of `stones`.
pub fn liberties(grid: &Grid, stones: &[Point]) -> Vec<Point> {
    let mut seen = vec![false; grid.cells().len()];
    let mut libs = Vec::new();
    for &p in stones {
        for n in grid.neighbors(p) {
            let ni = grid.idx(n);
            if !seen[ni] && grid.stone_at(n).is_none() {
                seen[ni] = true;
                libs.push(n);
            }
        }
    }
    libs
}

/// Every maximal group on the board, seeded in row-major order.
pub fn all_groups(grid: &Grid) -> Vec<Group> {
    let mut visited = vec![false; grid.cells().len()];
    let mut groups = Vec::new();
    for point in grid.points() {
        let Some(stone) = grid.stone_at(point) else {
            continue;
        };
        if visited[grid.idx(point)] {
            continue;
        }
        groups.push(resolve_with(grid, point, stone, &mut visited));
    }
    groups
}
