use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::coord::{self, MAX_SIZE};
use crate::error::StateError;
use crate::stone::Stone;

/// A square board stored as a flat row-major array (1 = Black, -1 = White, 0 = empty).
///
/// Grids are never mutated in place through the public API: every update
/// returns a new grid, so earlier positions can be held safely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct Grid {
    cells: Vec<i8>,
    size: u8,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct GridData {
    cells: Vec<i8>,
    size: u8,
}

impl TryFrom<GridData> for Grid {
    type Error = StateError;

    fn try_from(data: GridData) -> Result<Self, StateError> {
        if !(1..=MAX_SIZE).contains(&data.size) {
            return Err(StateError::BadSize(data.size));
        }
        let expected = data.size as usize * data.size as usize;
        if data.cells.len() != expected {
            return Err(StateError::CellCount {
                expected,
                found: data.cells.len(),
            });
        }
        Ok(Grid {
            cells: data.cells.into_iter().map(i8::signum).collect(),
            size: data.size,
        })
    }
}

impl Grid {
    /// Create an empty board of side `size`.
    pub fn new(size: u8) -> Self {
        assert!(
            (1..=MAX_SIZE).contains(&size),
            "board size must be between 1 and {MAX_SIZE}, got {size}"
        );
        Grid {
            cells: vec![0; size as usize * size as usize],
            size,
        }
    }

    /// Create a grid from a square matrix of cell values.
    pub fn from_rows(rows: Vec<Vec<i8>>) -> Self {
        let size = rows.len();
        assert!(
            size > 0 && size <= MAX_SIZE as usize && rows.iter().all(|r| r.len() == size),
            "malformed board matrix"
        );
        Grid {
            cells: rows.into_iter().flatten().map(i8::signum).collect(),
            size: size as u8,
        }
    }

    /// Build a grid from an ASCII layout: `B`/`X` Black, `W`/`O` White, anything else empty.
    pub fn from_layout(layout: &[&str]) -> Self {
        let rows = layout
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| Stone::cell_of(Stone::from_symbol(c)))
                    .collect()
            })
            .collect();
        Grid::from_rows(rows)
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn on_board(&self, (col, row): Point) -> bool {
        col < self.size && row < self.size
    }

    /// The stone at `point`, or `None` for an empty or off-board point.
    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_cell(self.cells[self.idx(point)])
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| (col, row)))
    }

    /// The 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (col, row): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if col > 0 {
            result.push((col - 1, row));
        }
        if col + 1 < self.size {
            result.push((col + 1, row));
        }
        if row > 0 {
            result.push((col, row - 1));
        }
        if row + 1 < self.size {
            result.push((col, row + 1));
        }
        result
    }

    /// A copy of this grid with `point` set to `stone` (or cleared).
    pub fn with_stone(&self, point: Point, stone: Option<Stone>) -> Grid {
        let mut grid = self.clone();
        grid.set(point, stone);
        grid
    }

    // -- Internal helpers --

    #[inline]
    pub(crate) fn idx(&self, (col, row): Point) -> usize {
        assert!(
            self.on_board((col, row)),
            "point ({col}, {row}) is off a board of size {}",
            self.size
        );
        row as usize * self.size as usize + col as usize
    }

    pub(crate) fn set(&mut self, point: Point, stone: Option<Stone>) {
        let i = self.idx(point);
        self.cells[i] = Stone::cell_of(stone);
    }
}

impl fmt::Display for Grid {
    /// Text dump: column letters on top, row numbers counting down from the size.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.to_string().len();
        write!(f, "{:width$}", "")?;
        for col in 0..self.size {
            write!(f, " {}", coord::column_letter(col))?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:>width$}", self.size - row)?;
            for col in 0..self.size {
                let c = self.stone_at((col, row)).map_or('.', Stone::symbol);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
