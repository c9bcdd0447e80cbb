/// A set of tile indices, as returned by [`Board::index_of()`](crate::Board::index_of).
///
/// Only indices below [`MAX_TILES`](crate::MAX_TILES) can be stored, which is why
/// boards are limited to that many tiles.
///
/// Like the other small value types in this crate, the "mutating" methods
/// return a new set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSet {
    bits: u64,
}

impl TileSet {
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn contains(self, idx: usize) -> bool {
        debug_assert!(idx < 64);
        (self.bits & (1u64 << idx)) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, idx: usize) -> Self {
        debug_assert!(idx < 64);
        Self {
            bits: self.bits | (1u64 << idx),
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, idx: usize) -> Self {
        debug_assert!(idx < 64);
        Self {
            bits: self.bits & !(1u64 << idx),
        }
    }
}
