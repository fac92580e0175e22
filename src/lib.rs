//! Inline markup detection for chat-message rendering.
//!
//! This crate finds lightweight inline markup — `*bold*`, `_italic_`,
//! `~strikethrough~`, and their combinations — in plain text and resolves
//! it into a list of non-overlapping, possibly multi-style ranges.
//!
//! # Overview
//!
//! Detection runs in two stages:
//!
//! - each configured style is matched independently with its own compiled
//!   delimiter-pair pattern;
//! - the raw matches from all styles are sorted and folded into disjoint
//!   ranges, splitting a range wherever two styles partially overlap and
//!   accumulating the styles active over each piece.
//!
//! Markup that is malformed, escaped (`\*`), glued to a word character, or
//! spread across lines simply does not match; there is no error path for
//! message text.
//!
//! # Usage
//!
//! ```
//! use chatstyle::{StyleSheet, StyledText, TextStyle, find_matches};
//!
//! // Raw ranges over the original text (inclusive byte offsets).
//! let ranges = find_matches("*bold text _with italic_ inside*", StyleSheet::chat());
//! assert_eq!(ranges.len(), 3);
//! assert!(ranges[1].styles.contains(TextStyle::Bold));
//! assert!(ranges[1].styles.contains(TextStyle::Italic));
//!
//! // Or go straight to render-ready text: delimiters stripped, spans
//! // re-addressed against the stripped text.
//! let styled = StyledText::parse("*bold* _italic_", StyleSheet::chat());
//! assert_eq!(styled.text(), "bold italic");
//! assert_eq!(styled.spans().len(), 2);
//! ```
//!
//! Styles are injectable configuration: build a custom [`StyleSheet`] to
//! use different delimiters or fewer styles.

pub mod error;
pub mod matcher;
mod merger;
pub mod range;
pub mod style;
pub mod text;

// Re-export main types at crate root
pub use error::StyleSheetError;
pub use matcher::find_matches;
pub use range::{StyleSet, StyledRange};
pub use style::{StyleDescriptor, StyleSheet, TextStyle};
pub use text::{StyledSpan, StyledText};
