use alloc::{string::String, vec::Vec};

use bstr::BString;

use crate::{
    error::{Input, PieceError},
    latin1,
    options::{EmptyDelimiter, SplitOptions},
    pieces::Pieces,
};

/// One owned output segment.
pub type Segment = BString;

/// Number of arguments [`piece_args`] expects: the subject and the delimiter.
pub const PIECE_ARITY: usize = 2;

/// Splits subjects on a literal delimiter under a fixed set of
/// [`SplitOptions`].
///
/// A `Splitter` holds no buffers between calls and is freely shared across
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Splitter {
    options: SplitOptions,
}

impl Splitter {
    /// Create a splitter applying `options`.
    #[must_use]
    pub fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    /// The options this splitter applies.
    #[must_use]
    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// Split `subject` on every leftmost non-overlapping occurrence of
    /// `delimiter`.
    ///
    /// The result holds at least one segment, and joining it with `delimiter`
    /// reproduces `subject`.
    ///
    /// # Errors
    ///
    /// Returns [`PieceError::InputTooLarge`] if either input is over its
    /// limit.
    pub fn split(&self, subject: &[u8], delimiter: &[u8]) -> Result<Vec<Segment>, PieceError> {
        check_len(Input::Subject, subject.len(), self.options.max_subject_len)?;
        check_len(
            Input::Delimiter,
            delimiter.len(),
            self.options.max_delimiter_len,
        )?;

        let segments: Vec<Segment> =
            if delimiter.is_empty() && self.options.empty_delimiter == EmptyDelimiter::EachByte {
                if subject.is_empty() {
                    alloc::vec![Segment::default()]
                } else {
                    subject.chunks(1).map(Segment::from).collect()
                }
            } else {
                Pieces::new(subject, delimiter).map(Segment::from).collect()
            };

        trace_split!(
            subject_len = subject.len(),
            delimiter_len = delimiter.len(),
            segments = segments.len(),
            "split subject"
        );
        Ok(segments)
    }

    /// Split Latin-1 strings, returning Latin-1 strings.
    ///
    /// Limits count characters, one Latin-1 byte each. Both lengths are
    /// checked before anything is converted; the subject is converted first,
    /// so an invalid subject is reported ahead of an invalid delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`PieceError::InputTooLarge`] as for [`split`](Self::split),
    /// and [`PieceError::InvalidEncoding`] if an input has a character above
    /// U+00FF.
    pub fn piece(&self, subject: &str, delimiter: &str) -> Result<Vec<String>, PieceError> {
        check_char_len(Input::Subject, subject, self.options.max_subject_len)?;
        check_char_len(Input::Delimiter, delimiter, self.options.max_delimiter_len)?;

        let subject = latin1::encode(subject, Input::Subject).inspect_err(log_reject)?;
        let delimiter = latin1::encode(delimiter, Input::Delimiter).inspect_err(log_reject)?;
        Ok(self
            .split(&subject, &delimiter)?
            .iter()
            .map(|segment| latin1::decode(segment))
            .collect())
    }

    /// Take the subject and delimiter from an argument list, as a host
    /// runtime hands them over.
    ///
    /// # Errors
    ///
    /// Returns [`PieceError::InvalidArgumentCount`] unless exactly
    /// [`PIECE_ARITY`] arguments are given, otherwise fails as
    /// [`piece`](Self::piece) does.
    pub fn piece_args<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<String>, PieceError> {
        let [subject, delimiter] = args else {
            let err = PieceError::InvalidArgumentCount {
                expected: PIECE_ARITY,
                actual: args.len(),
            };
            log_reject(&err);
            return Err(err);
        };
        self.piece(subject.as_ref(), delimiter.as_ref())
    }
}

fn check_len(input: Input, len: usize, max: usize) -> Result<(), PieceError> {
    if len <= max {
        return Ok(());
    }
    let err = PieceError::InputTooLarge { input, len, max };
    log_reject(&err);
    Err(err)
}

/// Character-count form of [`check_len`]. A string no longer in bytes than
/// `max` cannot have more than `max` characters, so counting is skipped then.
fn check_char_len(input: Input, text: &str, max: usize) -> Result<(), PieceError> {
    if text.len() <= max {
        return Ok(());
    }
    check_len(input, text.chars().count(), max)
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn log_reject(err: &PieceError) {
    debug_reject!(error = %err, "rejected split input");
}

/// Split `subject` on `delimiter` with the default [`SplitOptions`].
///
/// ```rust
/// let pieces = epiece::split(b"a,,b", b",").unwrap();
/// assert_eq!(pieces, ["a", "", "b"]);
/// ```
///
/// # Errors
///
/// Returns [`PieceError::InputTooLarge`] if the subject is over 1 MiB or the
/// delimiter over 128 bytes.
pub fn split(subject: &[u8], delimiter: &[u8]) -> Result<Vec<Segment>, PieceError> {
    Splitter::default().split(subject, delimiter)
}

/// Split Latin-1 strings with the default [`SplitOptions`].
///
/// # Errors
///
/// See [`Splitter::piece`].
pub fn piece(subject: &str, delimiter: &str) -> Result<Vec<String>, PieceError> {
    Splitter::default().piece(subject, delimiter)
}

/// Split an argument list of Latin-1 strings with the default
/// [`SplitOptions`].
///
/// ```rust
/// use epiece::PieceError;
///
/// assert_eq!(epiece::piece_args(&["a:b", ":"]).unwrap(), ["a", "b"]);
/// assert_eq!(
///     epiece::piece_args(&["a:b"]),
///     Err(PieceError::InvalidArgumentCount { expected: 2, actual: 1 })
/// );
/// ```
///
/// # Errors
///
/// See [`Splitter::piece_args`].
pub fn piece_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<String>, PieceError> {
    Splitter::default().piece_args(args)
}
