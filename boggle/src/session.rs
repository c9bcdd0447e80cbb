use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{find_words, Board, Coordinate, Dictionary, IllegalPath};

/// Whether a [`GameSession`] still accepts words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Active,
    Ended,
}

/// Summarizes the outcome of submitting a path.
///
/// A rejection does not say why the path was rejected: an illegal path, a
/// word that is not in the dictionary, a word that cannot be traced on this
/// board and a word that was already found all look the same.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum SubmitOutcome {
    Accepted {
        word: String,
        /// The points for this word, i.e. the number of tiles squared.
        points: u32,
        /// The score after adding the points.
        score: u32,
    },
    Rejected {
        /// The unchanged score.
        score: u32,
    },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }

    /// The word that was found, if the path was accepted.
    pub fn word(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Accepted { word, .. } => Some(word),
            SubmitOutcome::Rejected { .. } => None,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            SubmitOutcome::Accepted { score, .. } | SubmitOutcome::Rejected { score } => *score,
        }
    }
}

/// The points for a word traced over `num_tiles` tiles.
///
/// Note that this counts tiles, not letters, so "queen" over a "Qu" tile
/// is worth 16 points, not 25.
pub fn points_for_path(num_tiles: usize) -> u32 {
    let num_tiles = u32::try_from(num_tiles).unwrap_or(u32::MAX);
    num_tiles.saturating_mul(num_tiles)
}

/// A single game on one board.
///
/// When the session is created, all words of the dictionary that can be
/// traced on the board are computed. These are the candidates. Each
/// accepted submission moves a word from the candidates to the found words
/// and increases the score.
///
/// ```
/// # use boggle::{board, Coordinate, Dictionary, GameSession};
/// let dict = Dictionary::new(["cat", "cats", "at"]);
/// let mut session = GameSession::new(board!("CA/TS"), &dict);
/// let cat = [Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(1, 0)];
///
/// let outcome = session.submit(&cat);
/// assert_eq!(outcome.word(), Some("cat"));
/// assert_eq!(session.score(), 9);
///
/// // Finding the same word again doesn't count
/// assert!(!session.submit(&cat).is_accepted());
/// assert_eq!(session.finalize(), 9);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    /// Words that are on the board but have not been found yet, each with a
    /// path that spells it.
    candidates: BTreeMap<String, Vec<Coordinate>>,
    /// The number of words that were on the board at the start.
    num_realizable_words: usize,
    found_words: Vec<String>,
    score: u32,
    state: SessionState,
}

impl GameSession {
    /// Starts a new game. This searches the board for all words in the
    /// dictionary, which is the expensive part of a game.
    pub fn new(board: Board, dictionary: &Dictionary) -> Self {
        let candidates = find_words(&board, dictionary);
        debug!(
            num_words = candidates.len(),
            dictionary_size = dictionary.len(),
            "Started new session"
        );
        Self {
            board,
            num_realizable_words: candidates.len(),
            candidates,
            found_words: Vec::new(),
            score: 0,
            state: SessionState::Active,
        }
    }

    /// Submits a path of tiles as a word.
    ///
    /// If the path is legal and spells a word that is on the board and
    /// has not been found yet, the word is recorded and the score increases
    /// by the squared number of tiles. Otherwise nothing changes.
    pub fn submit(&mut self, path: &[Coordinate]) -> SubmitOutcome {
        let rejected = SubmitOutcome::Rejected { score: self.score };

        if self.state == SessionState::Ended {
            debug!("Rejected submission, the session has ended");
            return rejected;
        }

        let word = match self.board.resolve_path(path) {
            Ok(word) => word,
            Err(err @ IllegalPath::OutOfBounds { .. }) => {
                warn!(%err, "Rejected submission");
                return rejected;
            }
            Err(err) => {
                debug!(%err, "Rejected submission");
                return rejected;
            }
        };

        if self.candidates.remove(&word).is_none() {
            debug!(%word, "Rejected submission, not a word on this board or already found");
            return rejected;
        }

        let points = points_for_path(path.len());
        self.score = self.score.saturating_add(points);
        self.found_words.push(word.clone());
        debug!(%word, points, score = self.score, "Accepted submission");

        SubmitOutcome::Accepted {
            word,
            points,
            score: self.score,
        }
    }

    /// Is the path long enough to deserve a special mention?
    ///
    /// This is the case when it has more tiles than the board has rows. It
    /// does not influence the score.
    pub fn is_long_word(&self, path: &[Coordinate]) -> bool {
        path.len() > self.board.num_rows()
    }

    /// Ends the session and returns the final score.
    ///
    /// All later submissions are rejected. Calling this again is harmless.
    pub fn finalize(&mut self) -> u32 {
        if self.state == SessionState::Active {
            self.state = SessionState::Ended;
            debug!(
                score = self.score,
                num_found = self.found_words.len(),
                num_missed = self.candidates.len(),
                "Session ended"
            );
        }
        self.score
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The words found so far, in the order they were found.
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The words that are on the board but have not been found (yet), in
    /// alphabetical order, each with a path that spells it.
    pub fn remaining_words(&self) -> impl Iterator<Item = (&str, &[Coordinate])> + '_ {
        self.candidates
            .iter()
            .map(|(word, path)| (word.as_str(), path.as_slice()))
    }

    /// The number of dictionary words that could be traced on the board when
    /// the session started.
    pub fn num_realizable_words(&self) -> usize {
        self.num_realizable_words
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::BoardWithWords;
    use crate::board;

    fn path(coords: &[(usize, usize)]) -> Vec<Coordinate> {
        coords.iter().copied().map(Coordinate::from).collect()
    }

    fn cats_session() -> GameSession {
        // "at" and "sat" are on the board, since (0, 1) and (1, 0) are diagonal
        // neighbors. "tact" needs a second "t".
        let dict = Dictionary::new(["cat", "cats", "at", "sat", "tact"]);
        GameSession::new(board!("CA/TS"), &dict)
    }

    quickcheck! {
        fn submitting_every_word_scores_tiles_squared(input: BoardWithWords) -> bool {
            let mut session = GameSession::new(input.board, &input.dictionary);
            let witnesses: Vec<(String, Vec<Coordinate>)> = session
                .remaining_words()
                .map(|(word, path)| (String::from(word), path.to_vec()))
                .collect();
            let mut expected_score = 0;
            for (word, path) in &witnesses {
                let before = session.found_words().len();
                let outcome = session.submit(path);
                expected_score += (path.len() * path.len()) as u32;
                if outcome.word() != Some(word.as_str())
                    || outcome.score() != expected_score
                    || session.found_words().len() != before + 1
                {
                    return false;
                }
                // Second submission is always rejected
                if session.submit(path).is_accepted() || session.score() != expected_score {
                    return false;
                }
            }
            session.remaining_words().next().is_none()
                && session.found_words().len() == session.num_realizable_words()
        }
    }

    #[test]
    fn end_to_end() {
        let mut session = cats_session();
        assert_eq!(session.num_realizable_words(), 4);
        assert_eq!(session.score(), 0);

        let cat = path(&[(0, 0), (0, 1), (1, 0)]);
        assert_eq!(
            session.submit(&cat),
            SubmitOutcome::Accepted {
                word: String::from("cat"),
                points: 9,
                score: 9
            }
        );
        assert_eq!(session.submit(&cat), SubmitOutcome::Rejected { score: 9 });
        assert_eq!(session.score(), 9);

        let at = path(&[(0, 1), (1, 0)]);
        assert_eq!(session.submit(&at).word(), Some("at"));
        assert_eq!(session.score(), 13);

        let cats = path(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(session.submit(&cats).score(), 29);
        assert_eq!(session.found_words(), ["cat", "at", "cats"]);

        let remaining: Vec<&str> = session.remaining_words().map(|(word, _)| word).collect();
        assert_eq!(remaining, vec!["sat"]);
    }

    #[test]
    fn same_word_by_another_path_is_rejected() {
        let dict = Dictionary::new(["aa"]);
        let mut session = GameSession::new(board!("AA/BA"), &dict);
        assert!(session.submit(&path(&[(0, 0), (0, 1)])).is_accepted());
        assert!(!session.submit(&path(&[(0, 1), (1, 1)])).is_accepted());
        assert_eq!(session.found_words(), ["aa"]);
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn words_that_are_not_on_the_board_are_rejected() {
        let mut session = cats_session();
        // Legal path, but "tc" is not a word
        assert!(!session.submit(&path(&[(1, 0), (0, 0)])).is_accepted());
        // Illegal paths
        assert!(!session.submit(&[]).is_accepted());
        assert!(!session.submit(&path(&[(0, 0), (0, 0)])).is_accepted());
        assert!(!session.submit(&path(&[(0, 0), (5, 5)])).is_accepted());
        assert_eq!(session.score(), 0);
        assert!(session.found_words().is_empty());
        assert_eq!(session.remaining_words().count(), 4);
    }

    #[test]
    fn scoring_counts_tiles_not_letters() {
        let dict = Dictionary::new(["queen"]);
        let mut session = GameSession::new(board!("Qu E / N E"), &dict);
        let outcome = session.submit(&path(&[(0, 0), (0, 1), (1, 1), (1, 0)]));
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                word: String::from("queen"),
                points: 16,
                score: 16
            }
        );
    }

    #[test]
    fn long_words() {
        let session = cats_session();
        assert!(!session.is_long_word(&path(&[(0, 0), (0, 1)])));
        assert!(session.is_long_word(&path(&[(0, 0), (0, 1), (1, 0)])));

        let session = GameSession::new(board!("ABCD/EFGH/IJKL/MNOP"), &Dictionary::default());
        let four = path(&[(0, 0), (0, 1), (0, 2), (0, 3)]);
        let five = path(&[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)]);
        assert!(!session.is_long_word(&four));
        assert!(session.is_long_word(&five));
    }

    #[test]
    fn no_submissions_after_the_end() {
        let mut session = cats_session();
        assert!(session.submit(&path(&[(0, 1), (1, 0)])).is_accepted());
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.finalize(), 4);
        assert_eq!(session.state(), SessionState::Ended);

        let cat = path(&[(0, 0), (0, 1), (1, 0)]);
        assert_eq!(session.submit(&cat), SubmitOutcome::Rejected { score: 4 });
        assert_eq!(session.found_words(), ["at"]);
        assert_eq!(session.finalize(), 4);
        assert_eq!(session.state(), SessionState::Ended);
    }

    #[test]
    fn points() {
        assert_eq!(points_for_path(1), 1);
        assert_eq!(points_for_path(3), 9);
        assert_eq!(points_for_path(8), 64);
    }
}
