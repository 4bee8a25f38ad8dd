//! Error types for the tic-tac-toe oracle

use thiserror::Error;

/// Main error type for the oracle crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board must have exactly {expected} cells, got {got} in '{input}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        input: String,
    },

    #[error("invalid cell '{token}' at position {position} in '{input}' (expected 0, 1 or 2)")]
    InvalidCellToken {
        token: String,
        position: usize,
        input: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid move: position {position} is out of bounds or already occupied")]
    InvalidMove { position: usize },

    #[error("board '{board}' yields {count} distinct canonical children (at most 7 allowed)")]
    TooManyCanonicalChildren { board: String, count: usize },

    #[error("non-terminal board '{board}' yields no canonical children")]
    NoCanonicalChildren { board: String },

    #[error("game graph has {got} canonical boards, expected {expected}")]
    UnexpectedNodeCount { expected: usize, got: usize },

    #[error("board '{board}' is not a node of the game graph")]
    UnknownBoard { board: String },

    #[error("successor '{board}' was not solved before its parent level")]
    UnsolvedSuccessor { board: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error signals a defect in graph construction rather than bad input.
    ///
    /// Builder defects are fatal: no query may be served from a graph that
    /// produced one.
    pub fn is_builder_defect(&self) -> bool {
        matches!(
            self,
            Error::TooManyCanonicalChildren { .. }
                | Error::NoCanonicalChildren { .. }
                | Error::UnexpectedNodeCount { .. }
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defects_are_classified() {
        let defect = Error::NoCanonicalChildren {
            board: "0,0,0,0,0,0,0,0,0".to_string(),
        };
        assert!(defect.is_builder_defect());

        let input = Error::InvalidPieceCounts {
            x_count: 3,
            o_count: 0,
        };
        assert!(!input.is_builder_defect());
    }

    #[test]
    fn input_errors_echo_the_offending_input() {
        let err = Error::InvalidBoardLength {
            expected: 9,
            got: 2,
            input: "1,2".to_string(),
        };
        assert!(err.to_string().contains("'1,2'"));
    }
}
