use crate::{Coordinate, MAX_TILES};

/// The error type for [`Board::tile_at()`](crate::Board::tile_at).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    pub row: usize,
    pub col: usize,
}

impl From<Coordinate> for OutOfBounds {
    fn from(coord: Coordinate) -> Self {
        Self {
            row: coord.row,
            col: coord.col,
        }
    }
}

impl std::error::Error for OutOfBounds {}

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Coordinate ({}, {}) lies outside of the board",
            self.row, self.col
        )
    }
}

/// The error type for [`Board::new()`](crate::Board::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    NoTiles,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    EmptyTile {
        row: usize,
        col: usize,
    },
    TooManyTiles {
        num_tiles: usize,
    },
}

impl std::error::Error for BoardError {}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::NoTiles => write!(f, "A board needs at least one row and one column"),
            BoardError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} tiles, but the first row has {}",
                row, found, expected
            ),
            BoardError::EmptyTile { row, col } => {
                write!(f, "The tile at ({}, {}) has no letters on it", row, col)
            }
            BoardError::TooManyTiles { num_tiles } => write!(
                f,
                "A board has at most {} tiles, but {} were given",
                MAX_TILES, num_tiles
            ),
        }
    }
}
