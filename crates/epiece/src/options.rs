/// Default inclusive maximum length of the subject, in bytes (1 MiB).
pub const MAX_SUBJECT_LEN: usize = 1024 * 1024;

/// Default inclusive maximum length of the delimiter, in bytes.
pub const MAX_DELIMITER_LEN: usize = 128;

/// What to do when the delimiter is empty.
///
/// An empty pattern matches everywhere without consuming input, so there is
/// no single obvious answer; the caller picks one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmptyDelimiter {
    /// Return the whole subject as a single segment.
    #[default]
    Unsplit,
    /// Return every byte of the subject as its own segment.
    ///
    /// An empty subject still yields one empty segment.
    EachByte,
}

/// Limits and policies applied by a [`Splitter`](crate::Splitter).
///
/// # Default
///
/// A 1 MiB subject limit, a 128 byte delimiter limit and
/// [`EmptyDelimiter::Unsplit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitOptions {
    /// Inclusive maximum subject length in bytes.
    ///
    /// # Default
    ///
    /// [`MAX_SUBJECT_LEN`]
    pub max_subject_len: usize,

    /// Inclusive maximum delimiter length in bytes.
    ///
    /// # Default
    ///
    /// [`MAX_DELIMITER_LEN`]
    pub max_delimiter_len: usize,

    /// Policy for an empty delimiter.
    ///
    /// # Default
    ///
    /// [`EmptyDelimiter::Unsplit`]
    pub empty_delimiter: EmptyDelimiter,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            max_subject_len: MAX_SUBJECT_LEN,
            max_delimiter_len: MAX_DELIMITER_LEN,
            empty_delimiter: EmptyDelimiter::default(),
        }
    }
}
