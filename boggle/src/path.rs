use crate::{Board, Coordinate, IllegalPath, TileSet};

impl Board {
    /// Checks that the path traces a legal word on this board.
    ///
    /// The rules are checked in order: the path must not be empty, every
    /// coordinate must be on the board, no tile may be used twice and every
    /// step must go to an adjacent tile. The first violation is reported.
    pub fn validate_path(&self, path: &[Coordinate]) -> Result<(), IllegalPath> {
        if path.is_empty() {
            return Err(IllegalPath::Empty);
        }

        let mut visited = TileSet::new();
        for (idx, &coord) in path.iter().enumerate() {
            let tile_idx = self
                .index_of(coord)
                .ok_or(IllegalPath::OutOfBounds { idx, coord })?;
            if visited.contains(tile_idx) {
                return Err(IllegalPath::RepeatedTile { idx, coord });
            }
            visited = visited.insert(tile_idx);
        }

        for (idx, pair) in path.windows(2).enumerate() {
            if !self.are_adjacent(pair[0], pair[1]) {
                return Err(IllegalPath::NotAdjacent {
                    idx: idx + 1,
                    from: pair[0],
                    to: pair[1],
                });
            }
        }
        Ok(())
    }

    /// Spells out the word traced by the path.
    ///
    /// The letters of the tiles are concatenated, so a path over the four
    /// tiles "qu", "e", "e", "n" spells "queen". The path is validated first.
    pub fn resolve_path(&self, path: &[Coordinate]) -> Result<String, IllegalPath> {
        self.validate_path(path)?;
        let mut word = String::new();
        for (idx, &coord) in path.iter().enumerate() {
            let tile_idx = self
                .index_of(coord)
                .ok_or(IllegalPath::OutOfBounds { idx, coord })?;
            word.push_str(self.tile_by_index(tile_idx));
        }
        Ok(word)
    }
}
