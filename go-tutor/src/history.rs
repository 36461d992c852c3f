use crate::Point;
use crate::board::BoardState;
use crate::error::GoError;
use crate::stone::Stone;
use crate::turn::Turn;

/// Caller-side game history: an arena of positions plus a cursor.
///
/// `states[0]` is the starting position and `states[i + 1]` is the result of
/// `turns[i]`. Stepping back and forth only moves `current`; playing from an
/// earlier position discards the positions after it.
#[derive(Debug, Clone)]
pub struct History {
    states: Vec<BoardState>,
    turns: Vec<Turn>,
    current: usize,
}

impl History {
    pub fn new(size: u8) -> Self {
        Self::from_state(BoardState::new(size))
    }

    pub fn from_state(start: BoardState) -> Self {
        History {
            states: vec![start],
            turns: Vec::new(),
            current: 0,
        }
    }

    // -- Accessors --

    pub fn current(&self) -> &BoardState {
        &self.states[self.current]
    }

    pub fn size(&self) -> u8 {
        self.current().size()
    }

    /// Number of turns on the recorded line.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn view_index(&self) -> usize {
        self.current
    }

    pub fn is_at_start(&self) -> bool {
        self.current == 0
    }

    pub fn is_at_latest(&self) -> bool {
        self.current == self.turns.len()
    }

    /// Turns leading to the current position.
    pub fn turns(&self) -> &[Turn] {
        &self.turns[..self.current]
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns().last()
    }

    /// Black moves first, then the sides alternate.
    pub fn to_play(&self) -> Stone {
        match self.last_turn() {
            Some(t) => t.stone.opp(),
            None => Stone::Black,
        }
    }

    // -- Game actions --

    /// Play for the side to move. On a rule violation nothing changes.
    pub fn play(&mut self, point: Point) -> Result<&BoardState, GoError> {
        let stone = self.to_play();
        let next = self.current().play(point, stone)?;
        self.push(Turn::play(stone, point), next);
        Ok(self.current())
    }

    pub fn pass(&mut self) -> &BoardState {
        let stone = self.to_play();
        let next = self.current().pass();
        self.push(Turn::pass(stone), next);
        self.current()
    }

    fn push(&mut self, turn: Turn, state: BoardState) {
        self.states.truncate(self.current + 1);
        self.turns.truncate(self.current);
        self.states.push(state);
        self.turns.push(turn);
        self.current += 1;
    }

    // -- Navigation --

    pub fn undo(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn redo(&mut self) -> bool {
        if self.is_at_latest() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn to_start(&mut self) {
        self.current = 0;
    }

    pub fn to_latest(&mut self) {
        self.current = self.turns.len();
    }
}
