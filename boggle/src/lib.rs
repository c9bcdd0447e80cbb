//! The rules of Boggle: boards of letter tiles, tracing words on them, and
//! keeping score in a game.
//!
//! A game is a [`GameSession`] on a [`Board`], which is built from a
//! [`Dictionary`]. All words of the dictionary that can be traced on the board
//! are found up front with [`find_words()`]. Players then submit paths of
//! tiles, and each new word scores the square of its number of tiles.
pub use bitset::TileSet;
pub use board::*;
pub use dice::*;
pub use dictionary::*;
pub use enumerate::*;
pub use errors::*;
pub use protocol::*;
pub use session::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod bitset;
mod board;
mod dice;
mod dictionary;
mod enumerate;
mod errors;
mod path;
mod protocol;
mod session;
mod visualization;
