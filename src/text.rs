//! Projection of merged ranges onto render-ready styled text.
//!
//! This is the consumer side of the detection pipeline: delimiters are
//! stripped and spans are re-addressed against the stripped text, so a
//! renderer can attach visual attributes without redoing any index math.

use crate::matcher::find_matches;
use crate::range::StyleSet;
use crate::style::{StyleSheet, TextStyle};

/// A styled region of the stripped text.
///
/// Unlike [`StyledRange`], offsets here address the *stripped* text and
/// `end` is exclusive, ready for slicing.
///
/// [`StyledRange`]: crate::StyledRange
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledSpan {
    /// Start byte offset (inclusive) in the stripped text.
    pub start: usize,
    /// End byte offset (exclusive) in the stripped text.
    pub end: usize,
    /// Styles to apply to this region.
    pub styles: StyleSet,
}

/// A message with its markup resolved: plain text plus styled spans.
///
/// # Examples
///
/// ```
/// use chatstyle::{StyleSheet, StyledText, TextStyle};
///
/// let styled = StyledText::parse("*bold* and plain", StyleSheet::chat());
/// assert_eq!(styled.text(), "bold and plain");
/// assert_eq!(styled.spans().len(), 1);
/// assert_eq!(styled.spans()[0].start..styled.spans()[0].end, 0..4);
/// assert!(styled.spans()[0].styles.contains(TextStyle::Bold));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledText {
    /// The message text with delimiter characters stripped.
    text: String,
    /// Styled regions of `text`, disjoint and ascending.
    spans: Vec<StyledSpan>,
}

impl StyledText {
    /// Detect markup in `input` and resolve it to stripped text and spans.
    ///
    /// Text without any configured delimiter comes back unchanged with no
    /// spans. Malformed markup is not an error; unmatched delimiters stay
    /// in the text as ordinary characters.
    pub fn parse(input: &str, sheet: &StyleSheet) -> StyledText {
        let ranges = find_matches(input, sheet);
        if ranges.is_empty() {
            return StyledText::plain(input);
        }

        let mut text = String::with_capacity(input.len());
        let mut spans = Vec::with_capacity(ranges.len());
        let mut last = 0;

        for range in &ranges {
            let start = range.start;
            let end = range.end_exclusive();
            if last < start {
                text.push_str(&input[last..start]);
            }

            // Strip one leading and one trailing delimiter per accumulated
            // style, in accumulation order. Checking against the whole set
            // lets tightly nested delimiters come off in either order.
            let mut content = &input[start..end];
            for _ in 0..range.styles.len() {
                if content
                    .chars()
                    .next()
                    .is_some_and(|c| is_delimiter_of(&range.styles, sheet, c))
                {
                    content = &content[1..];
                }
                if content
                    .chars()
                    .next_back()
                    .is_some_and(|c| is_delimiter_of(&range.styles, sheet, c))
                {
                    content = &content[..content.len() - 1];
                }
            }

            let span_start = text.len();
            text.push_str(content);
            spans.push(StyledSpan {
                start: span_start,
                end: text.len(),
                styles: range.styles.clone(),
            });
            last = end;
        }

        if last < input.len() {
            text.push_str(&input[last..]);
        }

        StyledText { text, spans }
    }

    /// Plain text with no styling.
    pub fn plain(text: impl Into<String>) -> StyledText {
        StyledText {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// The stripped message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The styled spans, disjoint and ascending.
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Returns true if no markup was detected.
    pub fn is_plain(&self) -> bool {
        self.spans.is_empty()
    }

    /// Length of the stripped text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the stripped text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The styles active at a byte offset of the stripped text.
    pub fn styles_at(&self, offset: usize) -> &[TextStyle] {
        self.spans
            .iter()
            .find(|s| offset >= s.start && offset < s.end)
            .map(|s| s.styles.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over runs of uniformly styled text.
    ///
    /// Yields `(text, styles)` for every styled span and every unstyled
    /// gap between them, in order; gaps carry an empty style slice.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            styled: self,
            next_span: 0,
            pos: 0,
        }
    }
}

fn is_delimiter_of(styles: &StyleSet, sheet: &StyleSheet, c: char) -> bool {
    styles
        .iter()
        .any(|&style| sheet.delimiter_for(style) == Some(c))
}

/// Iterator over uniformly styled runs of a [`StyledText`].
pub struct Segments<'a> {
    styled: &'a StyledText,
    next_span: usize,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = (&'a str, &'a [TextStyle]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.styled.text.len() {
            return None;
        }

        match self.styled.spans.get(self.next_span) {
            Some(span) if span.start == self.pos => {
                self.next_span += 1;
                self.pos = span.end;
                Some((
                    &self.styled.text[span.start..span.end],
                    span.styles.as_slice(),
                ))
            }
            Some(span) => {
                let text = &self.styled.text[self.pos..span.start];
                self.pos = span.start;
                Some((text, &[]))
            }
            None => {
                let text = &self.styled.text[self.pos..];
                self.pos = self.styled.text.len();
                Some((text, &[]))
            }
        }
    }
}
