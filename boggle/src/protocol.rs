use serde::{Deserialize, Serialize};

use crate::{Coordinate, GameSession, SessionState, SubmitOutcome};

/// Request from a front end to the game.
///
/// Front ends that drive a game over a pipe send one JSON-serialized request
/// per line, and receive one [`Response`] per line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request the tiles of the board.
    ///
    /// The response is a [`Response::Board`].
    Board,
    /// Submit a path of tiles as a word.
    ///
    /// The response is a [`Response::Submitted`].
    Submit { path: Vec<Coordinate> },
    /// Request the score and the found words.
    ///
    /// The response is a [`Response::Status`].
    Status,
    /// End the game.
    ///
    /// The response is a [`Response::Finalized`].
    Finalize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    Board {
        /// The tiles, row by row, in lowercase.
        rows: Vec<Vec<String>>,
    },
    Submitted {
        accepted: bool,
        /// The word, if it was accepted.
        word: Option<String>,
        score: u32,
        /// Whether an accepted word was long enough to deserve a special mention.
        long_word: bool,
    },
    Status {
        score: u32,
        /// The words found so far, in the order they were found.
        found_words: Vec<String>,
        ended: bool,
    },
    Finalized {
        score: u32,
        /// The words that were on the board but not found, in alphabetical order.
        missed_words: Vec<String>,
    },
}

impl GameSession {
    /// Answers a single request.
    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::Board => Response::Board {
                rows: self.board().to_rows(),
            },
            Request::Submit { path } => {
                let long_word = self.is_long_word(&path);
                match self.submit(&path) {
                    SubmitOutcome::Accepted { word, score, .. } => Response::Submitted {
                        accepted: true,
                        word: Some(word),
                        score,
                        long_word,
                    },
                    SubmitOutcome::Rejected { score } => Response::Submitted {
                        accepted: false,
                        word: None,
                        score,
                        long_word: false,
                    },
                }
            }
            Request::Status => Response::Status {
                score: self.score(),
                found_words: self.found_words().to_vec(),
                ended: self.state() == SessionState::Ended,
            },
            Request::Finalize => Response::Finalized {
                score: self.finalize(),
                missed_words: self
                    .remaining_words()
                    .map(|(word, _)| String::from(word))
                    .collect(),
            },
        }
    }
}
