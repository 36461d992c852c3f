use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

/// A stone color. Empty points are represented by the absence of a stone.
///
/// The discriminants are the grid cell values, so a color doubles as the
/// sign of its contribution to influence and ownership maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    pub const BOTH: [Stone; 2] = [Stone::Black, Stone::White];

    /// Read a grid cell. Only the sign matters; zero is empty.
    pub fn from_cell(v: i8) -> Option<Self> {
        match v.signum() {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    /// Grid cell value for an optional stone.
    pub fn cell_of(stone: Option<Stone>) -> i8 {
        stone.map_or(0, |s| s as i8)
    }

    pub fn cell(self) -> i8 {
        self as i8
    }

    /// +1.0 for Black, -1.0 for White.
    pub fn sign(self) -> f64 {
        f64::from(self.cell())
    }

    /// Read a layout character: `B`/`X` Black, `W`/`O` White.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'B' | 'X' => Some(Stone::Black),
            'W' | 'O' => Some(Stone::White),
            _ => None,
        }
    }

    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Prefix used in move lists, as in `B D4`.
    pub fn initial(self) -> char {
        match self {
            Stone::Black => 'B',
            Stone::White => 'W',
        }
    }

    /// Character used in text board dumps.
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
        }
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
