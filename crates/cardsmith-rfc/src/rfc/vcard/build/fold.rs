//! vCard line folding.

use cardsmith_core::constants::CRLF;

/// Maximum line length in octets (not characters) per RFC 6350 §3.2.
const MAX_LINE_OCTETS: usize = 75;

/// Splits a content line into physical segments of at most 75 octets.
///
/// Every segment after the first is written with a leading space, so it may
/// only hold 74 octets of content. Splits happen on UTF-8 boundaries.
fn fold_segments(line: &str) -> Vec<&str> {
    let mut segments = Vec::with_capacity(line.len() / (MAX_LINE_OCTETS - 1) + 1);
    let mut start = 0;
    let mut budget = MAX_LINE_OCTETS;

    for (idx, c) in line.char_indices() {
        if idx + c.len_utf8() - start > budget {
            segments.push(&line[start..idx]);
            start = idx;
            budget = MAX_LINE_OCTETS - 1;
        }
    }
    segments.push(&line[start..]);

    segments
}

/// Folds a content line to the maximum length.
///
/// Lines longer than 75 octets are folded by inserting CRLF + space.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let segments = fold_segments(line);
    let mut folded = String::with_capacity(line.len() + segments.len() * 3);

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            folded.push_str(CRLF);
            folded.push(' ');
        }
        folded.push_str(segment);
    }

    folded
}
