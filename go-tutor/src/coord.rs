//! Human-readable board coordinates.
//!
//! Columns are lettered from the left, skipping `I`. Rows are numbered from
//! the top starting at the board size, so the top-left corner of a 19×19
//! board is `A19` and the bottom-right is `T1`.

use crate::Point;
use crate::error::CoordError;

/// Column letters in board order. `I` is never used.
const COLUMNS: &[u8; 25] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Largest board that can be labelled.
pub const MAX_SIZE: u8 = COLUMNS.len() as u8;

pub fn column_letter(col: u8) -> char {
    assert!(col < MAX_SIZE, "column {col} cannot be labelled");
    COLUMNS[col as usize] as char
}

/// Label a point on a board of side `size`, e.g. `(3, 15)` on 19×19 is `D4`.
pub fn label((col, row): Point, size: u8) -> String {
    assert!(col < size, "column {col} is off a board of size {size}");
    assert!(row < size, "row {row} is off a board of size {size}");
    format!("{}{}", column_letter(col), size - row)
}

/// Parse a label produced by [`label`]. Letters are case-insensitive.
pub fn parse_label(text: &str, size: u8) -> Result<Point, CoordError> {
    let text = text.trim();
    let mut chars = text.chars();
    let letter = chars.next().ok_or(CoordError::Empty)?;
    let upper = letter.to_ascii_uppercase();

    let col = COLUMNS
        .iter()
        .position(|&c| c as char == upper)
        .filter(|&c| c < size as usize)
        .ok_or(CoordError::InvalidColumn(letter))?;

    let digits = chars.as_str();
    let number: u8 = digits
        .parse()
        .map_err(|_| CoordError::InvalidRow(digits.to_string()))?;
    if number == 0 || number > size {
        return Err(CoordError::InvalidRow(digits.to_string()));
    }

    Ok((col as u8, size - number))
}
