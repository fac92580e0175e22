//! Style identifiers and the delimiter registry.
//!
//! A [`StyleSheet`] maps delimiter characters to [`TextStyle`] identifiers
//! and carries one precompiled pattern per style. One narrow pattern per
//! style is used (as opposed to one universal rich-text pattern) because a
//! universal pattern would backtrack far more, potentially exponentially
//! ("catastrophic backtracking").

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::StyleSheetError;

/// The character that escapes a delimiter: `\*` never starts bold text.
pub const ESCAPE: char = '\\';

/// The currency symbol, excluded from the punctuation class so that prices
/// like `$9` keep international feature parity without enumerating every
/// currency symbol.
pub const CURRENCY: char = '$';

/// Identifies a visual attribute independent of how it is rendered.
///
/// The renderer decides what "bold" looks like; this crate only reports
/// which ranges carry it. `Custom` lets embedders register additional
/// single-character styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Bold/increased intensity.
    Bold,
    /// Italic text.
    Italic,
    /// Strikethrough text.
    Strikethrough,
    /// An embedder-defined style, named by an arbitrary tag character.
    Custom(char),
}

/// A configured style: its delimiter, identifier, and compiled pattern.
#[derive(Clone, Debug)]
pub struct StyleDescriptor {
    style: TextStyle,
    delimiter: char,
    pattern: Regex,
}

impl StyleDescriptor {
    fn new(delimiter: char, style: TextStyle) -> Result<Self, StyleSheetError> {
        if delimiter == ESCAPE || delimiter == CURRENCY {
            return Err(StyleSheetError::ReservedDelimiter(delimiter));
        }
        if !delimiter.is_ascii_punctuation() {
            return Err(StyleSheetError::InvalidDelimiter(delimiter));
        }

        // Lazy inner content, so the first closing delimiter after valid
        // content terminates the match. `\S` and `[^\r\n]` keep a match on
        // a single line. Minimum content is two characters.
        let quoted = regex::escape(&delimiter.to_string());
        let pattern = format!(r"{quoted}\S[^\r\n]*?\S{quoted}");
        let pattern = Regex::new(&pattern)
            .map_err(|_| StyleSheetError::InvalidDelimiter(delimiter))?;

        Ok(Self {
            style,
            delimiter,
            pattern,
        })
    }

    /// The style this descriptor matches for.
    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// The delimiter character that opens and closes the style.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The compiled delimiter-pair pattern.
    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// The default chat styles: `*bold*`, `_italic_`, `~strikethrough~`.
static CHAT: Lazy<StyleSheet> = Lazy::new(|| {
    StyleSheet::new([
        ('*', TextStyle::Bold),
        ('_', TextStyle::Italic),
        ('~', TextStyle::Strikethrough),
    ])
    .expect("default chat styles are valid")
});

/// An immutable, validated set of style configurations.
///
/// The sheet is built once and passed explicitly into the matching entry
/// points, so tests and embedders can use registries with custom or fewer
/// styles. Declaration order is meaningful: styles are scanned, and
/// same-start ties folded, in the order they were registered.
///
/// # Examples
///
/// ```
/// use chatstyle::{StyleSheet, TextStyle};
///
/// let sheet = StyleSheet::new([('+', TextStyle::Custom('+'))]).unwrap();
/// assert_eq!(sheet.descriptors().len(), 1);
///
/// // NOTE: only single characters can delimit a style; multi-character
/// // delimiters are unsupported.
/// assert!(StyleSheet::new([]).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct StyleSheet {
    styles: Vec<StyleDescriptor>,
}

impl StyleSheet {
    /// Build a sheet from `(delimiter, style)` pairs.
    ///
    /// Fails eagerly on an empty or inconsistent configuration rather than
    /// mid-scan; see [`StyleSheetError`].
    pub fn new<I>(styles: I) -> Result<Self, StyleSheetError>
    where
        I: IntoIterator<Item = (char, TextStyle)>,
    {
        let mut descriptors: Vec<StyleDescriptor> = Vec::new();
        for (delimiter, style) in styles {
            if descriptors.iter().any(|d| d.delimiter == delimiter) {
                return Err(StyleSheetError::DuplicateDelimiter(delimiter));
            }
            if descriptors.iter().any(|d| d.style == style) {
                return Err(StyleSheetError::DuplicateStyle(style));
            }
            descriptors.push(StyleDescriptor::new(delimiter, style)?);
        }
        if descriptors.is_empty() {
            return Err(StyleSheetError::Empty);
        }
        Ok(Self {
            styles: descriptors,
        })
    }

    /// The default chat sheet: `*` bold, `_` italic, `~` strikethrough.
    pub fn chat() -> &'static StyleSheet {
        &CHAT
    }

    /// The configured styles, in declaration order.
    pub fn descriptors(&self) -> &[StyleDescriptor] {
        &self.styles
    }

    /// Look up the delimiter registered for a style.
    pub fn delimiter_for(&self, style: TextStyle) -> Option<char> {
        self.styles
            .iter()
            .find(|d| d.style == style)
            .map(|d| d.delimiter)
    }

    /// Returns true if `c` is one of the configured delimiters.
    pub fn is_delimiter(&self, c: char) -> bool {
        self.styles.iter().any(|d| d.delimiter == c)
    }

    /// Returns true if any configured delimiter occurs in `text`.
    ///
    /// This is the fast path: a message with no delimiter characters can
    /// skip matching entirely.
    pub fn occurs_in(&self, text: &str) -> bool {
        self.styles.iter().any(|d| text.contains(d.delimiter))
    }
}
