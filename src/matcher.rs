//! Delimiter-pair matching and the detection pipeline entry point.
//!
//! Each configured style is scanned independently with its own compiled
//! pattern; the raw matches from every style are then sorted by start
//! offset and folded through the merger into a disjoint range list.

use crate::merger;
use crate::range::StyledRange;
use crate::style::{CURRENCY, ESCAPE, StyleDescriptor, StyleSheet};

/// Find every styled range in `text` under the given sheet.
///
/// Runs the per-style matchers, sorts their raw matches by start offset
/// (stable, so same-start ties keep sheet declaration order), and merges
/// overlapping matches of different styles into disjoint multi-style
/// ranges. Offsets in the result are byte offsets into `text`, inclusive
/// on both ends, delimiters included.
///
/// Text with none of the configured delimiter characters short-circuits to
/// an empty list without scanning or allocating.
///
/// # Examples
///
/// ```
/// use chatstyle::{StyleSheet, TextStyle, find_matches};
///
/// let ranges = find_matches("*bold* text", StyleSheet::chat());
/// assert_eq!(ranges.len(), 1);
/// assert_eq!((ranges[0].start, ranges[0].end), (0, 5));
/// assert!(ranges[0].styles.contains(TextStyle::Bold));
/// ```
pub fn find_matches(text: &str, sheet: &StyleSheet) -> Vec<StyledRange> {
    if !sheet.occurs_in(text) {
        return Vec::new();
    }

    let mut raw: Vec<StyledRange> = Vec::new();
    for descriptor in sheet.descriptors() {
        scan(text, descriptor, &mut raw);
    }
    log::trace!("found {} raw matches in {} bytes", raw.len(), text.len());

    raw.sort_by_key(|m| m.start);
    merger::merge(raw)
}

/// Scan one style's pattern over `text`, appending well-formed matches.
///
/// The compiled pattern covers the pair shape (`D\S…\SD`, single line);
/// the adjacency rules around the pair run here. A delimiter standing next
/// to a word character, the currency symbol, or the escape character never
/// opens or closes a match.
fn scan(text: &str, descriptor: &StyleDescriptor, out: &mut Vec<StyledRange>) {
    let mut from = 0;
    while let Some(found) = descriptor.pattern().find_at(text, from) {
        let start = found.start();
        if blocked_before(text, start) {
            // Delimiters are ASCII, so start + 1 is a char boundary.
            from = start + 1;
            continue;
        }
        match close_position(text, descriptor, found.end()) {
            Some(end) => {
                out.push(StyledRange::new(start, end - 1, descriptor.style()));
                from = end;
            }
            None => from = start + 1,
        }
    }
}

/// Settle the closing delimiter for a match whose pair shape ends at
/// `end` (exclusive).
///
/// If the character after the closing delimiter blocks it, the closing
/// position slides to the next delimiter occurrence on the same line that
/// still has non-whitespace content before it. This is what a
/// backtracking engine does when a trailing look-ahead fails against a
/// lazy quantifier. Returns the exclusive end of the settled match, or
/// `None` when every candidate on the line is blocked.
fn close_position(text: &str, descriptor: &StyleDescriptor, mut end: usize) -> Option<usize> {
    loop {
        if !blocked_after(text, end) {
            return Some(end);
        }
        end = extend_close(text, descriptor, end)?;
    }
}

/// Find the next viable closing-delimiter candidate after `end`.
fn extend_close(text: &str, descriptor: &StyleDescriptor, end: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let delimiter = descriptor.delimiter() as u8;

    let mut at = end;
    while at < bytes.len() {
        // Matches never span a line break.
        if bytes[at] == b'\n' || bytes[at] == b'\r' {
            return None;
        }
        if bytes[at] == delimiter {
            // `at` is a char boundary: the delimiter byte is ASCII.
            let before = text[..at].chars().next_back();
            if before.is_some_and(|c| !c.is_whitespace()) {
                return Some(at + 1);
            }
        }
        at += 1;
    }
    None
}

/// Whether the character ending at byte `start` blocks a delimiter there.
fn blocked_before(text: &str, start: usize) -> bool {
    text[..start].chars().next_back().is_some_and(blocks_delimiter)
}

/// Whether the character starting at byte `end` blocks a delimiter there.
fn blocked_after(text: &str, end: usize) -> bool {
    text[end..].chars().next().is_some_and(blocks_delimiter)
}

/// The adjacency-blocking class.
///
/// Punctuation and whitespace may sit next to a delimiter; word characters
/// may not (so `2*3*4` stays plain arithmetic). The currency symbol and
/// the escape character are carved out of the punctuation class: `$` so
/// prices never style, `\` so any delimiter can be escaped.
fn blocks_delimiter(c: char) -> bool {
    if c == CURRENCY || c == ESCAPE {
        return true;
    }
    !(c.is_whitespace() || c.is_ascii_punctuation())
}
