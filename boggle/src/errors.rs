use crate::Coordinate;

/// The error type for [`Board::validate_path()`](crate::Board::validate_path), i.e. for
/// a path that does not trace a word on the board.
///
/// `idx` is the position in the path of the coordinate that broke the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalPath {
    Empty,
    OutOfBounds {
        idx: usize,
        coord: Coordinate,
    },
    RepeatedTile {
        idx: usize,
        coord: Coordinate,
    },
    NotAdjacent {
        idx: usize,
        from: Coordinate,
        to: Coordinate,
    },
}

impl std::error::Error for IllegalPath {}

/// Spells out the position of the element at `idx` in a sequence, for error
/// messages: "first" for 0 up to "fifth", then "6th" and so on.
pub fn ordinal_number(idx: usize) -> String {
    match idx {
        0 => String::from("first"),
        1 => String::from("second"),
        2 => String::from("third"),
        3 => String::from("fourth"),
        4 => String::from("fifth"),
        _ => {
            let num = idx + 1;
            let suffix = match (num % 10, num % 100) {
                (_, 11..=13) => "th",
                (1, _) => "st",
                (2, _) => "nd",
                (3, _) => "rd",
                _ => "th",
            };
            format!("{}{}", num, suffix)
        }
    }
}

impl std::fmt::Display for IllegalPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPath::Empty => write!(f, "The path does not contain any tiles"),
            IllegalPath::OutOfBounds { idx, coord } => write!(
                f,
                "The {} tile of the path, {}, is not on the board",
                ordinal_number(*idx),
                coord
            ),
            IllegalPath::RepeatedTile { idx, coord } => write!(
                f,
                "The {} tile of the path, {}, was already used earlier in the path",
                ordinal_number(*idx),
                coord
            ),
            IllegalPath::NotAdjacent { idx, from, to } => write!(
                f,
                "The {} tile of the path, {}, is not adjacent to the previous tile {}",
                ordinal_number(*idx),
                to,
                from
            ),
        }
    }
}
