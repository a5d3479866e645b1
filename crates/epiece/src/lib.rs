//! Split byte strings on a literal, possibly multi-byte, delimiter.
//!
//! The scan is a single left-to-right pass: wherever the delimiter matches,
//! the bytes gathered so far become a segment and the cursor skips past the
//! delimiter. The trailing segment is always emitted, so the result is never
//! empty and joining it with the delimiter gives back the subject.
//!
//! ```rust
//! let pieces = epiece::split(b"a::b::c", b"::").unwrap();
//! assert_eq!(pieces, ["a", "b", "c"]);
//!
//! let pieces = epiece::piece(",a,", ",").unwrap();
//! assert_eq!(pieces, ["", "a", ""]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
pub mod latin1;
mod options;
mod pieces;
mod splitter;

#[cfg(test)]
mod tests;

pub use error::{Input, PieceError};
pub use options::{EmptyDelimiter, MAX_DELIMITER_LEN, MAX_SUBJECT_LEN, SplitOptions};
pub use pieces::Pieces;
pub use splitter::{PIECE_ARITY, Segment, Splitter, piece, piece_args, split};
