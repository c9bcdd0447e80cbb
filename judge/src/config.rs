use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use boggle::{Dictionary, BOARD_SIZE, MAX_TILES};
use serde::{Deserialize, Serialize};

/// Settings for a game, usually read from a JSON file.
///
/// Missing fields take their default value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Path to the word list, with one word per line.
    pub dictionary: PathBuf,
    /// How long a game lasts. Zero means no limit.
    pub time_limit_secs: u64,
    /// The number of rows and columns of a random board.
    pub board_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("boggle_dict.txt"),
            time_limit_secs: 180,
            board_size: BOARD_SIZE,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open config file '{}'", path.display()))?;
        let config: GameConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse config file '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let too_big = self
            .board_size
            .checked_mul(self.board_size)
            .map_or(true, |num_tiles| num_tiles > MAX_TILES);
        if self.board_size == 0 || too_big {
            anyhow::bail!(
                "Board size {} is not supported, it must be between 1 and 8",
                self.board_size
            );
        }
        Ok(())
    }

    pub fn time_limit(&self) -> Option<Duration> {
        if self.time_limit_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.time_limit_secs))
        }
    }
}

/// Reads a word list with one word per line.
pub fn load_dictionary(path: &Path) -> anyhow::Result<Dictionary> {
    let file = File::open(path)
        .with_context(|| format!("Could not open dictionary '{}'", path.display()))?;
    let dictionary = Dictionary::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not read dictionary '{}'", path.display()))?;
    if dictionary.is_empty() {
        anyhow::bail!("Dictionary '{}' does not contain any words", path.display());
    }
    Ok(dictionary)
}
