use quickcheck::{Arbitrary, Gen};

use crate::{Board, Coordinate, Dictionary};

// Few letters, so that random words have a real chance of being on the board
const TILES: [&str; 5] = ["a", "b", "e", "t", "qu"];

/// A small board and a dictionary with words that are (mostly) spelled by
/// random walks on that board.
#[derive(Clone, Debug)]
pub struct BoardWithWords {
    pub board: Board,
    pub dictionary: Dictionary,
}

impl Arbitrary for BoardWithWords {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_rows = 1 + usize::arbitrary(g) % 3;
        let num_cols = 1 + usize::arbitrary(g) % 3;
        let rows: Vec<Vec<&str>> = (0..num_rows)
            .map(|_| {
                (0..num_cols)
                    .map(|_| *g.choose(&TILES).unwrap())
                    .collect()
            })
            .collect();
        let board = Board::new(rows).unwrap();

        let mut words = Vec::new();
        for _ in 0..(usize::arbitrary(g) % 12) {
            if bool::arbitrary(g) {
                words.push(random_walk(&board, g));
            } else {
                let len = 1 + usize::arbitrary(g) % 5;
                words.push((0..len).map(|_| *g.choose(&TILES).unwrap()).collect());
            }
        }

        BoardWithWords {
            board,
            dictionary: Dictionary::new(words),
        }
    }
}

// Spells a walk over adjacent tiles. Tiles may be visited twice, so
// the result is not necessarily on the board.
fn random_walk(board: &Board, g: &mut Gen) -> String {
    let mut coord = *g.choose(&board.coordinates().collect::<Vec<_>>()).unwrap();
    let mut word = String::new();
    for _ in 0..(1 + usize::arbitrary(g) % 6) {
        word.push_str(board.tile_at(coord).unwrap());
        let neighbors: Vec<Coordinate> = board.neighbors(coord).collect();
        match g.choose(&neighbors) {
            Some(&next) => coord = next,
            None => break,
        }
    }
    word
}

/// Coordinates close to the origin, so that adjacency checks see both outcomes.
impl Arbitrary for Coordinate {
    fn arbitrary(g: &mut Gen) -> Self {
        Coordinate {
            row: usize::arbitrary(g) % 6,
            col: usize::arbitrary(g) % 6,
        }
    }
}
