use std::io::Write;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use anyhow::Context;
use boggle::{GameSession, Request, Response, SessionState};
use tracing::{debug, info};

use crate::player::{parse_line, Protocol};
use crate::recording::Recorder;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnd {
    Quit,
    TimeUp,
    EndOfInput,
}

/// Runs the game until the player quits, the input ends or the time is up.
///
/// Every line from `input` is answered on `output`. The session is always
/// finalized when this returns successfully.
///
/// Returns an error only on communication failure, or on a malformed JSON
/// request. Text input that can't be understood is answered with "try again".
pub fn play_game<W: Write>(
    session: &mut GameSession,
    input: &Receiver<String>,
    output: &mut W,
    protocol: Protocol,
    time_limit: Option<Duration>,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameEnd> {
    let start = Instant::now();
    let deadline = time_limit.map(|limit| start + limit);

    let game_end = loop {
        let line = match deadline {
            Some(deadline) => {
                match input.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                    Ok(_) if Instant::now() >= deadline => break GameEnd::TimeUp,
                    Ok(line) => line,
                    Err(RecvTimeoutError::Timeout) => break GameEnd::TimeUp,
                    Err(RecvTimeoutError::Disconnected) => break GameEnd::EndOfInput,
                }
            }
            None => match input.recv() {
                Ok(line) => line,
                Err(_) => break GameEnd::EndOfInput,
            },
        };

        let request = match parse_line(protocol, &line) {
            Ok(Some(request)) => request,
            Ok(None) => continue,
            Err(err) if protocol == Protocol::Text => {
                debug!(%err, "Could not understand input");
                writeln!(output, "try again ({})", err)?;
                output.flush()?;
                continue;
            }
            Err(err) => return Err(err).with_context(|| format!("Could not handle '{}'", line)),
        };

        let is_finalize = request == Request::Finalize;
        exchange(session, request, output, protocol, start.elapsed(), recorder)?;
        if is_finalize {
            break GameEnd::Quit;
        }
    };

    if game_end == GameEnd::TimeUp && protocol == Protocol::Text {
        writeln!(output, "time is up!")?;
    }
    if session.state() == SessionState::Active {
        exchange(
            session,
            Request::Finalize,
            output,
            protocol,
            start.elapsed(),
            recorder,
        )?;
    }

    info!(
        score = session.score(),
        num_found = session.found_words().len(),
        num_words = session.num_realizable_words(),
        ?game_end,
        "Game over"
    );
    Ok(game_end)
}

// Answers a single request and records it.
fn exchange<W: Write>(
    session: &mut GameSession,
    request: Request,
    output: &mut W,
    protocol: Protocol,
    elapsed: Duration,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<()> {
    let response = session.handle(request.clone());
    match protocol {
        Protocol::Text => write_text_response(output, session, &response)?,
        Protocol::Json => {
            serde_json::to_writer(&mut *output, &response)?;
            writeln!(output)?;
        }
    }
    output.flush()?;

    if let Some(recorder) = recorder {
        recorder.store_request(elapsed, request, response);
    }
    Ok(())
}

fn write_text_response<W: Write>(
    output: &mut W,
    session: &GameSession,
    response: &Response,
) -> std::io::Result<()> {
    match response {
        Response::Board { .. } => writeln!(output, "{}", session.board()),
        Response::Submitted {
            accepted: true,
            word,
            score,
            long_word,
        } => {
            writeln!(
                output,
                "accepted {} (score {})",
                word.as_deref().unwrap_or_default(),
                score
            )?;
            if *long_word {
                writeln!(output, "long word!")?;
            }
            Ok(())
        }
        Response::Submitted { .. } => writeln!(output, "try again"),
        Response::Status {
            score,
            found_words,
            ended,
        } => {
            let state = if *ended { "ended" } else { "running" };
            writeln!(
                output,
                "score {}, game {}, found: {}",
                score,
                state,
                found_words.join(", ")
            )
        }
        Response::Finalized {
            score,
            missed_words,
        } => {
            writeln!(output, "game over, final score {}", score)?;
            writeln!(output, "found: {}", session.found_words().join(", "))?;
            writeln!(output, "missed: {}", missed_words.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use boggle::{board, Dictionary};

    use super::*;

    fn cats_session() -> GameSession {
        let dict = Dictionary::new(["cat", "cats", "at", "sat"]);
        GameSession::new(board!("CA/TS"), &dict)
    }

    fn play(
        session: &mut GameSession,
        protocol: Protocol,
        lines: &[&str],
    ) -> (GameEnd, String) {
        let (sender, receiver) = mpsc::channel();
        for line in lines {
            sender.send(String::from(*line)).unwrap();
        }
        drop(sender);
        let mut output = Vec::new();
        let game_end =
            play_game(session, &receiver, &mut output, protocol, None, &mut None).unwrap();
        (game_end, String::from_utf8(output).unwrap())
    }

    #[test]
    fn text_game() {
        let mut session = cats_session();
        let (game_end, output) = play(
            &mut session,
            Protocol::Text,
            &["0,0 0,1 1,0", "", "0,0 0,1 1,0", "0,1 1,0", "nonsense", "status", "quit", "1,1 0,1 1,0"],
        );
        assert_eq!(game_end, GameEnd::Quit);
        assert_eq!(session.score(), 13);
        assert_eq!(session.found_words(), ["cat", "at"]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "accepted cat (score 9)",
                "long word!",
                "try again",
                "accepted at (score 13)",
                "try again (The first tile should be written as row,column)",
                "score 13, game running, found: cat, at",
                "game over, final score 13",
                "found: cat, at",
                "missed: cats, sat",
            ]
        );
    }

    #[test]
    fn end_of_input_finalizes() {
        let mut session = cats_session();
        let (game_end, output) = play(&mut session, Protocol::Text, &["1,1 0,1 1,0"]);
        assert_eq!(game_end, GameEnd::EndOfInput);
        assert_eq!(session.state(), SessionState::Ended);
        assert!(output.contains("game over, final score 9"));
    }

    #[test]
    fn json_game() {
        let mut session = cats_session();
        let (game_end, output) = play(
            &mut session,
            Protocol::Json,
            &[
                r#"{"type":"Submit","path":[{"row":0,"col":1},{"row":1,"col":0}]}"#,
                r#"{"type":"Finalize"}"#,
            ],
        );
        assert_eq!(game_end, GameEnd::Quit);
        let responses: Vec<Response> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(
            responses,
            vec![
                Response::Submitted {
                    accepted: true,
                    word: Some(String::from("at")),
                    score: 4,
                    long_word: false
                },
                Response::Finalized {
                    score: 4,
                    missed_words: vec![
                        String::from("cat"),
                        String::from("cats"),
                        String::from("sat")
                    ]
                },
            ]
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut session = cats_session();
        let (sender, receiver) = mpsc::channel();
        sender.send(String::from("0,1 1,0")).unwrap();
        drop(sender);
        let result = play_game(
            &mut session,
            &receiver,
            &mut Vec::new(),
            Protocol::Json,
            None,
            &mut None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn time_limit() {
        let mut session = cats_session();
        // Keep the sender alive, so that only the timer can end the game
        let (_sender, receiver) = mpsc::channel::<String>();
        let mut output = Vec::new();
        let game_end = play_game(
            &mut session,
            &receiver,
            &mut output,
            Protocol::Text,
            Some(Duration::from_millis(50)),
            &mut None,
        )
        .unwrap();
        assert_eq!(game_end, GameEnd::TimeUp);
        assert_eq!(session.state(), SessionState::Ended);
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("time is up!\ngame over, final score 0\n"));
    }
}
