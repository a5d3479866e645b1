#![no_main]
use arbitrary::Arbitrary;
use epiece::{EmptyDelimiter, Pieces, SplitOptions, Splitter};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    each_byte: bool,
    delimiter: &'a [u8],
    subject: &'a [u8],
}

fn split(input: Input<'_>) {
    let splitter = Splitter::new(SplitOptions {
        empty_delimiter: if input.each_byte {
            EmptyDelimiter::EachByte
        } else {
            EmptyDelimiter::Unsplit
        },
        ..Default::default()
    });

    let Ok(segments) = splitter.split(input.subject, input.delimiter) else {
        assert!(
            input.delimiter.len() > epiece::MAX_DELIMITER_LEN
                || input.subject.len() > epiece::MAX_SUBJECT_LEN
        );
        return;
    };
    assert!(!segments.is_empty());

    let parts: Vec<&[u8]> = segments.iter().map(|s| s.as_slice()).collect();
    assert_eq!(parts.join(input.delimiter), input.subject);

    if !input.delimiter.is_empty() {
        let borrowed: Vec<&[u8]> = Pieces::new(input.subject, input.delimiter).collect();
        assert_eq!(borrowed, parts);
    }
}

fuzz_target!(|input: Input<'_>| split(input));
