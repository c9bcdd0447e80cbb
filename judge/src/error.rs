use boggle::ordinal_number;

#[derive(Debug, PartialEq, Eq)]
/// Error type for a line of player input that could not be understood.
pub enum InvalidInput {
    MissingComma {
        tile_idx: usize,
    },
    InvalidNumber {
        tile_idx: usize,
        err: std::num::ParseIntError,
    },
    InvalidRequest {
        err: String,
    },
}

impl std::error::Error for InvalidInput {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidInput::InvalidNumber { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInput::MissingComma { tile_idx } => write!(
                f,
                "The {} tile should be written as row,column",
                ordinal_number(*tile_idx)
            ),
            InvalidInput::InvalidNumber { tile_idx, err: _ } => write!(
                f,
                "The {} tile has an invalid row or column",
                ordinal_number(*tile_idx)
            ),
            InvalidInput::InvalidRequest { err } => write!(f, "Invalid request: {}", err),
        }
    }
}
