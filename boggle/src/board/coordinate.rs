use serde::{Deserialize, Serialize};

/// Identifies a single tile by its row and column.
///
/// A coordinate carries no knowledge of the board it refers to. Whether it
/// is in bounds is decided by [`Board::contains()`](crate::Board::contains).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the two coordinates are neighbors in one of the eight directions.
    ///
    /// A coordinate is never adjacent to itself.
    pub fn is_adjacent_to(self, other: Coordinate) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
