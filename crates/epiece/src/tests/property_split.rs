use alloc::{boxed::Box, string::String, vec::Vec};

use bstr::ByteSlice;
use quickcheck::{Arbitrary, Gen, QuickCheck};

use crate::{Input, Pieces, Segment, latin1, split};

/// A short delimiter over a tiny alphabet, so that it actually occurs in
/// generated subjects.
#[derive(Clone, Debug)]
struct Needle(Vec<u8>);

/// A subject over the same alphabet as [`Needle`].
#[derive(Clone, Debug)]
struct Haystack(Vec<u8>);

const ALPHABET: &[u8] = b"ab:";

fn pick(g: &mut Gen, len: usize) -> Vec<u8> {
    (0..len).map(|_| *g.choose(ALPHABET).unwrap()).collect()
}

impl Arbitrary for Needle {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 1 + usize::arbitrary(g) % 3;
        Needle(pick(g, len))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            self.0
                .shrink()
                .filter(|d| !d.is_empty())
                .map(Needle),
        )
    }
}

impl Arbitrary for Haystack {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 64;
        Haystack(pick(g, len))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Haystack))
    }
}

fn rejoin(segments: &[Segment], delimiter: &[u8]) -> Vec<u8> {
    let parts: Vec<&[u8]> = segments.iter().map(|s| s.as_slice()).collect();
    parts.join(delimiter)
}

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: joining the segments with the delimiter gives back the subject.
#[test]
fn join_restores_subject() {
    fn prop(subject: Haystack, delimiter: Needle) -> bool {
        let segments = split(&subject.0, &delimiter.0).unwrap();
        !segments.is_empty() && rejoin(&segments, &delimiter.0) == subject.0
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Haystack, Needle) -> bool);
}

/// Property: the round trip also holds for arbitrary bytes.
#[test]
fn join_restores_arbitrary_bytes() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(subject: Vec<u8>, delimiter: Vec<u8>) -> bool {
        if delimiter.is_empty() {
            return true;
        }
        let segments = split(&subject, &delimiter).unwrap();
        rejoin(&segments, &delimiter) == subject
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> bool);
}

/// Property: no segment contains the delimiter, because matches are taken
/// leftmost first.
#[test]
fn segments_never_contain_delimiter() {
    fn prop(subject: Haystack, delimiter: Needle) -> bool {
        split(&subject.0, &delimiter.0)
            .unwrap()
            .iter()
            .all(|segment| segment.find(&delimiter.0).is_none())
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Haystack, Needle) -> bool);
}

/// Property: the scan agrees with `bstr`'s substring splitter.
#[test]
fn agrees_with_bstr_split_str() {
    fn prop(subject: Haystack, delimiter: Needle) -> bool {
        let ours: Vec<&[u8]> = Pieces::new(&subject.0, &delimiter.0).collect();
        let theirs: Vec<&[u8]> = subject.0.split_str(&delimiter.0).collect();
        ours == theirs
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Haystack, Needle) -> bool);
}

/// Property: every Latin-1 string survives encode then decode.
#[test]
fn latin1_round_trip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let text: String = latin1::decode(&bytes);
        latin1::encode(&text, Input::Subject).is_ok_and(|encoded| encoded == bytes)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}
