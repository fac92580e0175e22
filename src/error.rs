//! Error types for style-sheet configuration.

use thiserror::Error;

use crate::style::TextStyle;

/// Errors that can occur when building a [`StyleSheet`].
///
/// Configuration is the only fallible part of the crate: matching, merging
/// and rendering degrade gracefully instead of failing.
///
/// [`StyleSheet`]: crate::StyleSheet
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleSheetError {
    /// The sheet was built from no styles at all.
    #[error("style sheet has no styles")]
    Empty,

    /// A delimiter is not an ASCII punctuation character.
    ///
    /// Word characters sit inside the adjacency-blocking class, so such a
    /// delimiter could never open or close a match.
    #[error("delimiter {0:?} is not an ASCII punctuation character")]
    InvalidDelimiter(char),

    /// A delimiter is the currency symbol or the escape character.
    ///
    /// Both are carved out of the punctuation class, so they block any
    /// delimiter standing next to them, their own included.
    #[error("delimiter {0:?} is reserved and cannot delimit a style")]
    ReservedDelimiter(char),

    /// The same delimiter was registered for two styles.
    #[error("delimiter {0:?} is registered twice")]
    DuplicateDelimiter(char),

    /// The same style was registered under two delimiters.
    #[error("style {0:?} is registered twice")]
    DuplicateStyle(TextStyle),
}
