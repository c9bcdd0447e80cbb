use crate::Board;

/// Draws the board as a box of tiles, with row and column indices.
///
/// ```
/// # use boggle::{board, visualize_board};
/// let expected = [
///     "     0  1",
///     "   ╭──────╮",
///     " 0 │ C  A │",
///     " 1 │ T  Qu│",
///     "   ╰──────╯",
/// ]
/// .join("\n");
/// assert_eq!(visualize_board(&board!("CA/TQU")), expected);
/// ```
pub fn visualize_board(board: &Board) -> String {
    // Every tile takes up three columns, tiles with more letters overflow
    let width = 3 * board.num_cols();

    let mut result = String::from("    ");
    for j in 0..board.num_cols() {
        result += &format!("{:>2} ", j);
    }
    result = result.trim_end().to_string();
    result += "\n   ╭";
    result += &"─".repeat(width);
    result += "╮";

    for (i, row) in board.to_rows().iter().enumerate() {
        result += &format!("\n{:>2} │", i);
        let mut line = String::new();
        for tile in row {
            line += &format!(" {:<2}", capitalize(tile));
        }
        result += &line;
        result += "│";
    }

    result += "\n   ╰";
    result += &"─".repeat(width);
    result += "╯";
    result
}

fn capitalize(tile: &str) -> String {
    let mut chars = tile.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
