use std::collections::BTreeMap;

use tracing::debug;

use crate::{Board, Coordinate, Dictionary, TileSet};

/// Finds every word of the dictionary that can be traced on the board.
///
/// Each word is returned together with one path that spells it. When
/// several paths spell the same word, the first one found is kept (the search
/// starts from the tiles in row-major order and visits neighbors in row-major
/// order, so the result is deterministic).
///
/// This is a depth-first search from every tile. A branch is abandoned as
/// soon as the letters spelled so far are not the beginning of any word in
/// the dictionary.
///
/// ```
/// # use boggle::{board, find_words, Coordinate, Dictionary};
/// let board = board!("CA/TS");
/// let dict = Dictionary::new(["cat", "cats", "tact"]);
/// let words = find_words(&board, &dict);
/// assert_eq!(words.keys().collect::<Vec<_>>(), vec!["cat", "cats"]);
/// assert_eq!(
///     words["cat"],
///     vec![Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(1, 0)]
/// );
/// ```
pub fn find_words(board: &Board, dictionary: &Dictionary) -> BTreeMap<String, Vec<Coordinate>> {
    let adjacency: Vec<Vec<usize>> = board
        .coordinates()
        .map(|coord| {
            board
                .neighbors(coord)
                .filter_map(|neighbor| board.index_of(neighbor))
                .collect()
        })
        .collect();

    let mut search = WordSearch {
        board,
        dictionary,
        adjacency: &adjacency,
        visited: TileSet::new(),
        path: Vec::with_capacity(board.num_tiles()),
        spelled: String::new(),
        found: BTreeMap::new(),
    };
    for start in 0..board.num_tiles() {
        search.extend(start);
    }

    debug!(
        num_words = search.found.len(),
        num_tiles = board.num_tiles(),
        "Found all words on the board"
    );
    search.found
}

// The state of the depth-first search.
//
// `visited`, `path` and `spelled` always describe the same partial path, and are
// restored when backtracking.
struct WordSearch<'a> {
    board: &'a Board,
    dictionary: &'a Dictionary,
    /// The indices of the neighbors of each tile.
    adjacency: &'a [Vec<usize>],
    visited: TileSet,
    path: Vec<usize>,
    spelled: String,
    found: BTreeMap<String, Vec<Coordinate>>,
}

impl<'a> WordSearch<'a> {
    /// Tries to add the tile to the current path, and continues from there.
    fn extend(&mut self, tile_idx: usize) {
        let len_before = self.spelled.len();
        self.spelled.push_str(self.board.tile_by_index(tile_idx));

        if self.dictionary.has_lowercase_prefix(&self.spelled) {
            self.visited = self.visited.insert(tile_idx);
            self.path.push(tile_idx);

            if self.dictionary.contains_lowercase(&self.spelled)
                && !self.found.contains_key(&self.spelled)
            {
                let witness = self
                    .path
                    .iter()
                    .map(|&idx| self.board.coordinate_of(idx))
                    .collect();
                self.found.insert(self.spelled.clone(), witness);
            }

            let adjacency = self.adjacency;
            for &neighbor in &adjacency[tile_idx] {
                if !self.visited.contains(neighbor) {
                    self.extend(neighbor);
                }
            }

            self.path.pop();
            self.visited = self.visited.remove(tile_idx);
        }

        self.spelled.truncate(len_before);
    }
}
