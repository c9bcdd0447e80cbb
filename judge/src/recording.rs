use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use boggle::{Board, Request, Response};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Collects the requests of a game and writes them to a JSON file in a directory.
pub struct Recorder {
    directory: PathBuf,
    recording: GameRecording,
}

impl Recorder {
    pub fn new(directory: PathBuf, board: &Board, seed: Option<u64>) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            directory,
            recording: GameRecording {
                seed,
                board: board.to_rows(),
                requests: Vec::new(),
                final_score: None,
            },
        })
    }

    pub fn store_request(&mut self, elapsed: Duration, request: Request, response: Response) {
        if let Response::Finalized { score, .. } = &response {
            self.recording.final_score = Some(*score);
        }
        self.recording.requests.push(RecordedRequest {
            elapsed_ms: elapsed.as_millis() as u64,
            request,
            response,
        });
    }

    /// Writes the recording into the first free `game_NNNNNN.json` file, and
    /// returns its path.
    pub fn write_game_recording(self) -> anyhow::Result<PathBuf> {
        let mut num = 1;
        let filepath = loop {
            let candidate = self.directory.join(format!("game_{:0>6}.json", num));
            if !candidate.exists() {
                break candidate;
            }
            num += 1;
        };
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, &self.recording)?;
        writer.flush()?;
        info!(path = %filepath.display(), "Wrote game recording");
        Ok(filepath)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameRecording {
    /// The seed the board was rolled with, if it was random.
    pub seed: Option<u64>,
    pub board: Vec<Vec<String>>,
    pub requests: Vec<RecordedRequest>,
    pub final_score: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordedRequest {
    /// Time since the start of the game.
    pub elapsed_ms: u64,
    pub request: Request,
    pub response: Response,
}
