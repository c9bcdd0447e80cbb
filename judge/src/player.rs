use std::io::BufRead;
use std::sync::mpsc::{self, Receiver};

use boggle::{Coordinate, Request};
use clap::ValueEnum;
use tracing::trace;

use crate::error::InvalidInput;

/// How the player talks to the judge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Protocol {
    /// Paths typed as `row,col row,col ...`, answered in plain words.
    Text,
    /// One JSON request per line, answered with one JSON response per line.
    Json,
}

/// Reads lines from stdin on a separate thread, so that the game loop can
/// stop waiting when the time is up.
///
/// The channel is closed when stdin reaches EOF.
pub fn spawn_line_reader() -> Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin().lock();
        for line in stdin.lines() {
            let Ok(line) = line else {
                break;
            };
            trace!(name: "Received line", line = %line);
            if sender.send(line).is_err() {
                // The game is over
                break;
            }
        }
    });
    receiver
}

/// Turns a line of input into a request, or `None` for a blank line.
pub fn parse_line(protocol: Protocol, line: &str) -> Result<Option<Request>, InvalidInput> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    match protocol {
        Protocol::Json => serde_json::from_str(line)
            .map(Some)
            .map_err(|err| InvalidInput::InvalidRequest {
                err: err.to_string(),
            }),
        Protocol::Text => parse_text_command(line).map(Some),
    }
}

fn parse_text_command(line: &str) -> Result<Request, InvalidInput> {
    match line.to_lowercase().as_str() {
        "quit" | "q" => Ok(Request::Finalize),
        "board" | "b" => Ok(Request::Board),
        "status" | "s" => Ok(Request::Status),
        _ => parse_path(line).map(|path| Request::Submit { path }),
    }
}

/// Parses a path written as `row,col` pairs separated by whitespace.
pub fn parse_path(line: &str) -> Result<Vec<Coordinate>, InvalidInput> {
    line.split_whitespace()
        .enumerate()
        .map(|(tile_idx, pair)| {
            let (row, col) = pair
                .split_once(',')
                .ok_or(InvalidInput::MissingComma { tile_idx })?;
            let parse = |num: &str| {
                num.trim()
                    .parse::<usize>()
                    .map_err(|err| InvalidInput::InvalidNumber { tile_idx, err })
            };
            Ok(Coordinate::new(parse(row)?, parse(col)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_paths() {
        assert_eq!(
            parse_path("0,0 0,1  1,0"),
            Ok(vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 0)
            ])
        );
        assert_eq!(
            parse_path("0,0 01"),
            Err(InvalidInput::MissingComma { tile_idx: 1 })
        );
        assert!(matches!(
            parse_path("0,0 1,-1"),
            Err(InvalidInput::InvalidNumber { tile_idx: 1, .. })
        ));
    }

    #[test]
    fn text_commands() {
        assert_eq!(parse_line(Protocol::Text, "   "), Ok(None));
        assert_eq!(parse_line(Protocol::Text, "QUIT"), Ok(Some(Request::Finalize)));
        assert_eq!(parse_line(Protocol::Text, "status"), Ok(Some(Request::Status)));
        assert_eq!(
            parse_line(Protocol::Text, " 2,3 "),
            Ok(Some(Request::Submit {
                path: vec![Coordinate::new(2, 3)]
            }))
        );
    }

    #[test]
    fn json_requests() {
        assert_eq!(
            parse_line(Protocol::Json, r#"{"type":"Status"}"#),
            Ok(Some(Request::Status))
        );
        assert!(matches!(
            parse_line(Protocol::Json, "0,0 0,1"),
            Err(InvalidInput::InvalidRequest { .. })
        ));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            InvalidInput::MissingComma { tile_idx: 6 }.to_string(),
            "The 7th tile should be written as row,column"
        );
    }
}
