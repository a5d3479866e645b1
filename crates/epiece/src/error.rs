use core::fmt;

use thiserror::Error;

/// Which of the two inputs a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// The byte string being split.
    Subject,
    /// The literal the subject is split on.
    Delimiter,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Input::Subject => "subject",
            Input::Delimiter => "delimiter",
        })
    }
}

/// Reasons a split call is rejected.
///
/// Every variant is raised before scanning starts, so a failed call never
/// produces partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    /// The caller passed the wrong number of arguments.
    #[error("expected {expected} arguments, got {actual}")]
    InvalidArgumentCount {
        /// Number of arguments the operation takes.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },
    /// The subject or the delimiter is longer than its configured maximum.
    #[error("{input} is {len} bytes long, the maximum is {max}")]
    InputTooLarge {
        /// The offending input.
        input: Input,
        /// Its length in bytes.
        len: usize,
        /// The inclusive limit it exceeded.
        max: usize,
    },
    /// A string input holds a character outside the Latin-1 range.
    #[error("{input} has non-Latin-1 character {ch:?} at position {position}")]
    InvalidEncoding {
        /// The offending input.
        input: Input,
        /// Character index of the first offending character.
        position: usize,
        /// The offending character.
        ch: char,
    },
}
