use rand::seq::SliceRandom;
use rand::Rng;

use crate::Board;

/// The number of rows and columns of a classic board.
pub const BOARD_SIZE: usize = 4;

/// The sixteen cubes of the classic game, one of them with a "Qu" face.
pub static CLASSIC_DICE: [[&str; 6]; 16] = [
    ["A", "E", "A", "N", "E", "G"],
    ["A", "H", "S", "P", "C", "O"],
    ["A", "S", "P", "F", "F", "K"],
    ["O", "B", "J", "O", "A", "B"],
    ["I", "O", "T", "M", "U", "C"],
    ["R", "Y", "V", "D", "E", "L"],
    ["L", "R", "E", "I", "X", "D"],
    ["E", "I", "U", "N", "E", "S"],
    ["W", "N", "G", "E", "E", "H"],
    ["L", "N", "H", "N", "R", "Z"],
    ["T", "S", "T", "I", "Y", "D"],
    ["O", "W", "T", "O", "A", "T"],
    ["E", "R", "T", "T", "Y", "L"],
    ["T", "O", "E", "S", "S", "I"],
    ["T", "E", "R", "W", "H", "V"],
    ["N", "U", "I", "H", "M", "Qu"],
];

/// Shakes the classic cubes into a 4x4 board.
///
/// Every cube is used exactly once, in a random position and showing a random face.
pub fn roll_board<R: Rng>(rng: &mut R) -> Board {
    let mut dice = CLASSIC_DICE;
    dice.shuffle(rng);
    let faces: Vec<&str> = dice.iter().map(|die| roll(die, rng)).collect();
    Board::new(faces.chunks(BOARD_SIZE)).expect("The classic dice form a valid board")
}

/// Creates a board with `size` rows and columns.
///
/// For the classic size this is the same as [`roll_board()`]. Otherwise there
/// are not exactly enough cubes, so each tile is rolled with a cube picked at
/// random from the classic set.
///
/// Panics if `size` is zero or the board would have more than
/// [`MAX_TILES`](crate::MAX_TILES) tiles.
pub fn roll_board_of_size<R: Rng>(rng: &mut R, size: usize) -> Board {
    if size == BOARD_SIZE {
        return roll_board(rng);
    }
    assert!(size > 0 && size * size <= crate::MAX_TILES);
    let faces: Vec<&str> = (0..size * size)
        .map(|_| {
            let die = &CLASSIC_DICE[rng.gen_range(0..CLASSIC_DICE.len())];
            roll(die, rng)
        })
        .collect();
    Board::new(faces.chunks(size)).expect("Board size was checked above")
}

fn roll<'a, R: Rng>(die: &[&'a str; 6], rng: &mut R) -> &'a str {
    die[rng.gen_range(0..die.len())]
}
