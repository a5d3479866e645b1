use core::iter::FusedIterator;

use bstr::ByteSlice;

/// Borrowing iterator over the segments of a subject.
///
/// Yields the bytes between consecutive non-overlapping delimiter matches,
/// found leftmost first. The final segment, possibly empty, is always
/// yielded, so the iterator produces at least one item.
///
/// With an empty delimiter the whole subject is yielded once.
///
/// No length limits are applied here; see [`Splitter`](crate::Splitter) for
/// the validated, owning form.
///
/// ```rust
/// use epiece::Pieces;
///
/// let pieces: Vec<&[u8]> = Pieces::new(b",a,,b", b",").collect();
/// let expected: [&[u8]; 4] = [b"", b"a", b"", b"b"];
/// assert_eq!(pieces, expected);
/// ```
#[derive(Debug, Clone)]
pub struct Pieces<'a> {
    subject: &'a [u8],
    delimiter: &'a [u8],
    /// Start of the segment being gathered. `None` once the trailing segment
    /// has been yielded.
    cursor: Option<usize>,
}

impl<'a> Pieces<'a> {
    /// Start scanning `subject` for `delimiter`.
    #[must_use]
    pub fn new(subject: &'a [u8], delimiter: &'a [u8]) -> Self {
        Self {
            subject,
            delimiter,
            cursor: Some(0),
        }
    }

    /// The part of the subject not yet yielded, or `None` once exhausted.
    #[must_use]
    pub fn remainder(&self) -> Option<&'a [u8]> {
        self.cursor.map(|start| &self.subject[start..])
    }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor?;
        let rest = &self.subject[start..];

        // `find` reports the leftmost full match; a delimiter that would run
        // past the end of the subject never matches.
        let found = if self.delimiter.is_empty() {
            None
        } else {
            rest.find(self.delimiter)
        };
        match found {
            Some(offset) => {
                self.cursor = Some(start + offset + self.delimiter.len());
                Some(&rest[..offset])
            }
            None => {
                self.cursor = None;
                Some(rest)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remainder() {
            None => (0, Some(0)),
            Some(_) if self.delimiter.is_empty() => (1, Some(1)),
            Some(rest) => (1, Some(rest.len() / self.delimiter.len() + 1)),
        }
    }
}

impl FusedIterator for Pieces<'_> {}
