//! Range and style-set types shared by the matcher and the merger.

use crate::style::TextStyle;

/// The set of styles active over a range.
///
/// Backed by a small vector so that insertion order is preserved: the
/// renderer strips delimiters in the order styles were accumulated.
/// Inserting a style that is already present is a no-op, so a set never
/// holds duplicates. Value semantics throughout; when the merger splits a
/// range it clones the set rather than sharing it, so later inserts into
/// one half cannot corrupt the other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSet(Vec<TextStyle>);

impl StyleSet {
    /// A set holding a single style.
    pub fn of(style: TextStyle) -> Self {
        Self(vec![style])
    }

    /// Add a style; keeps the set duplicate-free.
    pub fn insert(&mut self, style: TextStyle) {
        if !self.0.contains(&style) {
            self.0.push(style);
        }
    }

    /// Add every style from `other`, preserving accumulation order.
    pub fn merge(&mut self, other: &StyleSet) {
        for &style in other.iter() {
            self.insert(style);
        }
    }

    /// Returns true if the set holds `style`.
    pub fn contains(&self, style: TextStyle) -> bool {
        self.0.contains(&style)
    }

    /// Number of styles in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set holds no styles.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate styles in accumulation order.
    pub fn iter(&self) -> std::slice::Iter<'_, TextStyle> {
        self.0.iter()
    }

    /// The styles as a slice, in accumulation order.
    pub fn as_slice(&self) -> &[TextStyle] {
        &self.0
    }
}

impl FromIterator<TextStyle> for StyleSet {
    fn from_iter<I: IntoIterator<Item = TextStyle>>(iter: I) -> Self {
        let mut set = StyleSet::default();
        for style in iter {
            set.insert(style);
        }
        set
    }
}

/// A span of the source text carrying one or more styles.
///
/// `start` and `end` are byte offsets into the original (unstripped) text
/// and are both inclusive: they point at the opening and closing delimiter
/// characters. The matcher produces single-style ranges; the merger grows
/// the style set as overlapping matches fold in. Ranges in merged output
/// are pairwise disjoint and sorted ascending by `start`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledRange {
    /// Byte offset of the opening delimiter (inclusive).
    pub start: usize,
    /// Byte offset of the closing delimiter (inclusive).
    pub end: usize,
    /// Styles active over this range, in accumulation order.
    pub styles: StyleSet,
}

impl StyledRange {
    /// A single-style range, as produced by the matcher.
    pub fn new(start: usize, end: usize, style: TextStyle) -> Self {
        Self {
            start,
            end,
            styles: StyleSet::of(style),
        }
    }

    /// The exclusive end offset, one past the closing delimiter.
    ///
    /// The single conversion point between the core's inclusive ends and
    /// the renderer's exclusive slicing; keeping it in one place avoids
    /// off-by-one drift between the two.
    pub fn end_exclusive(&self) -> usize {
        self.end + 1
    }

    /// Length of the range in bytes, delimiters included.
    pub fn len(&self) -> usize {
        self.end_exclusive() - self.start
    }

    /// Check if this range overlaps another.
    ///
    /// Matches the merger's overlap rule: two ranges that only touch at
    /// one inclusive endpoint do not count as overlapping.
    pub fn overlaps(&self, other: &StyledRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}
