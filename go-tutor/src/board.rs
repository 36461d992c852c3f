use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::{GoError, StateError};
use crate::grid::Grid;
use crate::group::resolve_group;
use crate::stone::Stone;

/// Stones captured by each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// One position in a game.
///
/// States are immutable: applying a move yields a new state and leaves the
/// old one valid, so callers can keep whatever history they need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateData")]
pub struct BoardState {
    grid: Grid,
    captures: Captures,
    last_move: Option<Point>,
    ko_point: Option<Point>,
}

/// Unchecked wire form of a [`BoardState`].
#[derive(Deserialize)]
struct StateData {
    grid: Grid,
    #[serde(default)]
    captures: Captures,
    last_move: Option<Point>,
    ko_point: Option<Point>,
}

impl TryFrom<StateData> for BoardState {
    type Error = StateError;

    fn try_from(data: StateData) -> Result<Self, StateError> {
        for point in data.last_move.into_iter().chain(data.ko_point) {
            if !data.grid.on_board(point) {
                return Err(StateError::OffBoard(point));
            }
        }
        if let Some(ko) = data.ko_point.filter(|&ko| data.grid.stone_at(ko).is_some()) {
            return Err(StateError::KoOccupied(ko));
        }
        Ok(BoardState {
            grid: data.grid,
            captures: data.captures,
            last_move: data.last_move,
            ko_point: data.ko_point,
        })
    }
}

/// Result of [`BoardState::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub valid: bool,
    /// The new state, or the unchanged prior state when the move was refused.
    pub state: BoardState,
    pub reason: Option<GoError>,
}

impl BoardState {
    pub fn new(size: u8) -> Self {
        Self::from_grid(Grid::new(size))
    }

    /// Start from an arbitrary position with no captures, last move or ko.
    pub fn from_grid(grid: Grid) -> Self {
        BoardState {
            grid,
            captures: Captures::default(),
            last_move: None,
            ko_point: None,
        }
    }

    // -- Accessors --

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> u8 {
        self.grid.size()
    }

    pub fn captures(&self) -> Captures {
        self.captures
    }

    pub fn last_move(&self) -> Option<Point> {
        self.last_move
    }

    pub fn ko_point(&self) -> Option<Point> {
        self.ko_point
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.grid.stone_at(point)
    }

    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        self.play(point, stone).is_ok()
    }

    // -- Transitions --

    /// Apply a move, reporting rule violations through the outcome rather than an error.
    ///
    /// Panics if `point` is off the board.
    pub fn apply_move(&self, point: Point, stone: Stone) -> MoveOutcome {
        match self.play(point, stone) {
            Ok(state) => MoveOutcome {
                valid: true,
                state,
                reason: None,
            },
            Err(e) => MoveOutcome {
                valid: false,
                state: self.clone(),
                reason: Some(e),
            },
        }
    }

    /// Place a stone, resolve captures and ko. Returns the next state or the violated rule.
    pub fn play(&self, point: Point, stone: Stone) -> Result<BoardState, GoError> {
        let (col, row) = point;
        assert!(
            self.grid.on_board(point),
            "move ({col}, {row}) is off a board of size {}",
            self.size()
        );

        if self.grid.stone_at(point).is_some() {
            tracing::debug!(?point, %stone, "move rejected: occupied");
            return Err(GoError::Occupied);
        }
        if self.ko_point == Some(point) {
            tracing::debug!(?point, %stone, "move rejected: ko violation");
            return Err(GoError::KoViolation);
        }

        let mut grid = self.grid.with_stone(point, Some(stone));

        let opponent = stone.opp();
        let mut dead = Vec::new();
        for n in self.grid.neighbors(point) {
            if grid.stone_at(n) != Some(opponent) {
                continue;
            }
            let chain = resolve_group(&grid, n, opponent);
            if !chain.has_liberties {
                for &p in &chain.stones {
                    grid.set(p, None);
                }
                dead.extend(chain.stones);
            }
        }

        let own = resolve_group(&grid, point, stone);
        if dead.is_empty() && !own.has_liberties {
            tracing::debug!(?point, %stone, "move rejected: suicide");
            return Err(GoError::Suicide);
        }

        let mut captures = self.captures;
        if !dead.is_empty() {
            tracing::debug!(?point, %stone, count = dead.len(), "stones captured");
            captures.add(stone, dead.len() as u32);
        }

        let ko_point = match dead.as_slice() {
            [single] if own.len() == 1 && own.has_liberties => Some(*single),
            _ => None,
        };

        Ok(BoardState {
            grid,
            captures,
            last_move: Some(point),
            ko_point,
        })
    }

    /// Pass: the position is unchanged but any ko restriction lapses.
    pub fn pass(&self) -> BoardState {
        BoardState {
            last_move: None,
            ko_point: None,
            ..self.clone()
        }
    }
}
