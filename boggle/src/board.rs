mod coordinate;
mod error;

use std::str::FromStr;

pub use coordinate::*;
pub use error::*;

use crate::visualize_board;

/// The largest number of tiles a board may have.
pub const MAX_TILES: usize = 64;

/// A rectangular grid of letter tiles.
///
/// Each tile holds a short, non-empty string. Usually that's a single letter,
/// but cubes like "Qu" put several letters on one tile. Tile contents are
/// stored in lowercase, so that they can be compared with the words in a
/// [`Dictionary`](crate::Dictionary) directly.
///
/// Boards are immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// The tiles in row-major order.
    tiles: Vec<String>,
    num_rows: usize,
    num_cols: usize,
}

impl Board {
    /// Creates a new board from a list of rows.
    ///
    /// ```
    /// # use boggle::{Board, Coordinate};
    /// let board = Board::new([["C", "A"], ["T", "S"]]).unwrap();
    /// assert_eq!(board.tile_at(Coordinate::new(1, 0)), Ok("t"));
    /// ```
    pub fn new<R, T>(rows: R) -> Result<Self, BoardError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut tiles = Vec::new();
        let mut num_rows = 0;
        let mut num_cols = 0;
        for (row, row_tiles) in rows.into_iter().enumerate() {
            let len_before = tiles.len();
            for (col, tile) in row_tiles.into_iter().enumerate() {
                let tile = tile.as_ref().trim();
                if tile.is_empty() {
                    return Err(BoardError::EmptyTile { row, col });
                }
                tiles.push(tile.to_lowercase());
            }
            let found = tiles.len() - len_before;
            if row == 0 {
                num_cols = found;
            } else if found != num_cols {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: num_cols,
                    found,
                });
            }
            num_rows += 1;
        }

        if tiles.is_empty() {
            return Err(BoardError::NoTiles);
        }
        if tiles.len() > MAX_TILES {
            return Err(BoardError::TooManyTiles {
                num_tiles: tiles.len(),
            });
        }

        Ok(Self {
            tiles,
            num_rows,
            num_cols,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn num_tiles(&self) -> usize {
        self.tiles.len()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.num_rows && coord.col < self.num_cols
    }

    /// The position of the tile in row-major order, if it's on the board.
    pub fn index_of(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.num_cols + coord.col)
        } else {
            None
        }
    }

    /// The inverse of [`Self::index_of()`].
    ///
    /// Panics if the index is not below [`Self::num_tiles()`].
    pub fn coordinate_of(&self, idx: usize) -> Coordinate {
        assert!(idx < self.tiles.len());
        Coordinate::new(idx / self.num_cols, idx % self.num_cols)
    }

    /// The letters on the tile at the given coordinate.
    pub fn tile_at(&self, coord: Coordinate) -> Result<&str, OutOfBounds> {
        self.index_of(coord)
            .map(|idx| self.tiles[idx].as_str())
            .ok_or(OutOfBounds::from(coord))
    }

    /// Whether a path may step directly from `a` to `b`.
    ///
    /// This holds when `b` is one of the (up to) eight tiles surrounding `a`,
    /// diagonals included. It never holds for `a == b`.
    pub fn are_adjacent(&self, a: Coordinate, b: Coordinate) -> bool {
        a.is_adjacent_to(b)
    }

    /// All coordinates on the board, in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.tiles.len()).map(|idx| self.coordinate_of(idx))
    }

    /// The coordinates on the board that are adjacent to `coord`.
    pub fn neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        let row_max = (coord.row + 1).min(self.num_rows.saturating_sub(1));
        let col_max = (coord.col + 1).min(self.num_cols.saturating_sub(1));
        let col_min = coord.col.saturating_sub(1);
        (coord.row.saturating_sub(1)..=row_max)
            .flat_map(move |row| (col_min..=col_max).map(move |col| Coordinate::new(row, col)))
            .filter(move |&other| other != coord)
    }

    /// Copies the tiles into a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.tiles
            .chunks(self.num_cols)
            .map(|row| row.to_vec())
            .collect()
    }

    // Tile lookup for indices that are known to be valid.
    pub(crate) fn tile_by_index(&self, idx: usize) -> &str {
        &self.tiles[idx]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}

/// Parses a board from its rows.
///
/// Rows are separated by `/` or line breaks. Within a row, tiles are either
/// separated by whitespace, or, if the row contains no whitespace, every
/// letter is a tile of its own, except that a `Q` directly followed by a `U`
/// is read as a single "Qu" tile.
///
/// ```
/// # use boggle::{Board, Coordinate};
/// let board: Board = "QUE/EN".parse().unwrap();
/// assert_eq!(board.num_cols(), 2);
/// assert_eq!(board.tile_at(Coordinate::new(0, 0)), Ok("qu"));
///
/// let board: Board = "Qu E / E N".parse().unwrap();
/// assert_eq!(board.num_cols(), 2);
/// ```
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<String>> = s
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(split_row)
            .collect();
        Board::new(rows)
    }
}

fn split_row(row: &str) -> Vec<String> {
    if row.contains(char::is_whitespace) {
        return row.split_whitespace().map(String::from).collect();
    }
    let mut tiles = Vec::new();
    let mut chars = row.chars().peekable();
    while let Some(c) = chars.next() {
        let mut tile = String::from(c);
        if c.eq_ignore_ascii_case(&'q') {
            if let Some(u) = chars.next_if(|u| u.eq_ignore_ascii_case(&'u')) {
                tile.push(u);
            }
        }
        tiles.push(tile);
    }
    tiles
}

/// Shorthand for creating boards from a string.
///
/// This macro is just calling the [`FromStr`] instance of [`Board`], see
/// there for the format.
/// ```
/// # use boggle::{board, Board};
/// assert_eq!(
///     board!("CA/TS"),
///     Board::new([["c", "a"], ["t", "s"]]).unwrap()
/// );
/// ```
#[macro_export]
macro_rules! board {
    ($rows:literal) => {
        <$crate::Board as std::str::FromStr>::from_str($rows)
            .expect("Invalid board given to board! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use board;
