//! Detection pipeline tests: matching, merging, and their invariants.

use chatstyle::TextStyle::{Bold, Italic, Strikethrough};
use chatstyle::{StyleSet, StyleSheet, StyledRange, TextStyle, find_matches};

fn styles(list: &[TextStyle]) -> StyleSet {
    list.iter().copied().collect()
}

fn range(start: usize, end: usize, list: &[TextStyle]) -> StyledRange {
    StyledRange {
        start,
        end,
        styles: styles(list),
    }
}

// ============================================================================
// Single styles
// ============================================================================

#[test]
fn single_bold() {
    let ranges = find_matches("*bold*", StyleSheet::chat());
    assert_eq!(ranges, vec![range(0, 5, &[Bold])]);
}

#[test]
fn single_italic() {
    let ranges = find_matches("_italic_", StyleSheet::chat());
    assert_eq!(ranges, vec![range(0, 7, &[Italic])]);
}

#[test]
fn single_strikethrough() {
    let ranges = find_matches("~strike~", StyleSheet::chat());
    assert_eq!(ranges, vec![range(0, 7, &[Strikethrough])]);
}

#[test]
fn styled_word_inside_sentence() {
    let ranges = find_matches("this is *important* stuff", StyleSheet::chat());
    assert_eq!(ranges, vec![range(8, 18, &[Bold])]);
}

// ============================================================================
// Multiple disjoint styles
// ============================================================================

#[test]
fn three_disjoint_styles() {
    let ranges = find_matches("*bold* _italic_ ~strikethrough~", StyleSheet::chat());
    assert_eq!(
        ranges,
        vec![
            range(0, 5, &[Bold]),
            range(7, 14, &[Italic]),
            range(16, 30, &[Strikethrough]),
        ]
    );
}

#[test]
fn repeated_style() {
    let ranges = find_matches("*one* and *two*", StyleSheet::chat());
    assert_eq!(ranges, vec![range(0, 4, &[Bold]), range(10, 14, &[Bold])]);
}

// ============================================================================
// Overlapping styles
// ============================================================================

#[test]
fn full_overlap_merges() {
    let ranges = find_matches("*_bold and italic_*", StyleSheet::chat());
    assert_eq!(ranges, vec![range(0, 18, &[Bold, Italic])]);
}

#[test]
fn triple_overlap_merges() {
    let ranges = find_matches("~*_strikethrough bold and italic_*~", StyleSheet::chat());
    assert_eq!(ranges, vec![range(0, 34, &[Strikethrough, Bold, Italic])]);
}

#[test]
fn partial_overlap_splits_outer_range() {
    let ranges = find_matches("*bold text _with italic_ inside*", StyleSheet::chat());
    assert_eq!(
        ranges,
        vec![
            range(0, 10, &[Bold]),
            range(11, 23, &[Bold, Italic]),
            range(24, 31, &[Bold]),
        ]
    );
}

#[test]
fn overlap_with_already_split_region_stays_disjoint() {
    // The italic fold splits the bold range into three pieces; the strike
    // match then overlaps an earlier piece than the last one placed. Its
    // styles do not compose, and the output must stay disjoint and
    // well-formed.
    let ranges = find_matches("*aaaaaaaaa _~bbbbbbb~.._ cccccc*", StyleSheet::chat());
    assert_eq!(
        ranges,
        vec![
            range(0, 10, &[Bold]),
            range(11, 23, &[Bold, Italic]),
            range(24, 31, &[Bold]),
        ]
    );
    for m in &ranges {
        assert!(m.end >= m.start);
    }
    for pair in ranges.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
}

// ============================================================================
// Disqualified markup
// ============================================================================

#[test]
fn disqualified_candidates_yield_nothing() {
    // Word-glued opener, space after opener, word-glued closer, and an
    // escaped opener: every candidate fails on its own grounds.
    let text = r"d*bold* _ italic_ ~strikethrough~d \*more bold*";
    assert!(find_matches(text, StyleSheet::chat()).is_empty());
}

#[test]
fn word_character_before_opening_delimiter() {
    assert!(find_matches("d*bold*", StyleSheet::chat()).is_empty());
}

#[test]
fn word_character_after_closing_delimiter() {
    assert!(find_matches("*bold*d", StyleSheet::chat()).is_empty());
}

#[test]
fn escaped_delimiter_never_matches() {
    assert!(find_matches(r"\*bold*", StyleSheet::chat()).is_empty());
    assert!(find_matches(r"\_italic\_", StyleSheet::chat()).is_empty());
}

#[test]
fn currency_blocks_adjacent_delimiter() {
    assert!(find_matches("$*12* of gum", StyleSheet::chat()).is_empty());
}

#[test]
fn ordinary_punctuation_does_not_block() {
    let ranges = find_matches("he said: *hi there*!", StyleSheet::chat());
    assert_eq!(ranges, vec![range(9, 18, &[Bold])]);
}

#[test]
fn whitespace_just_inside_delimiters_blocks() {
    assert!(find_matches("* bold*", StyleSheet::chat()).is_empty());
    assert!(find_matches("*bold *", StyleSheet::chat()).is_empty());
}

#[test]
fn unpaired_delimiter_yields_nothing() {
    assert!(find_matches("a lone * in text", StyleSheet::chat()).is_empty());
}

// ============================================================================
// Line breaks
// ============================================================================

#[test]
fn no_match_across_line_breaks() {
    let text = "_italic\nover\nmultiple\nlines_";
    assert!(find_matches(text, StyleSheet::chat()).is_empty());
}

#[test]
fn matches_confined_to_one_line() {
    let ranges = find_matches("*first*\n*second*", StyleSheet::chat());
    assert_eq!(ranges, vec![range(0, 6, &[Bold]), range(8, 15, &[Bold])]);
}

// ============================================================================
// Fast path
// ============================================================================

#[test]
fn no_delimiters_short_circuits() {
    assert!(find_matches("a perfectly plain message!", StyleSheet::chat()).is_empty());
}

#[test]
fn empty_text() {
    assert!(find_matches("", StyleSheet::chat()).is_empty());
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn output_is_disjoint_ascending_and_well_formed() {
    let samples = [
        "*bold* _italic_ ~strikethrough~",
        "*bold text _with italic_ inside*",
        "~*_all three_*~",
        "*a b* _c d_ *e f* mixed ~g h~ text",
        "~outer _inner_ more outer text here~ and *bold*",
    ];
    for text in samples {
        let ranges = find_matches(text, StyleSheet::chat());
        for m in &ranges {
            assert!(m.end >= m.start, "degenerate range in {text:?}");
        }
        for pair in ranges.windows(2) {
            assert!(
                pair[0].end <= pair[1].start,
                "overlapping output for {text:?}: {pair:?}"
            );
        }
    }
}

#[test]
fn style_sets_carry_no_duplicates() {
    let ranges = find_matches("~*_all three_*~", StyleSheet::chat());
    for m in &ranges {
        let slice = m.styles.as_slice();
        for (i, style) in slice.iter().enumerate() {
            assert!(!slice[i + 1..].contains(style));
        }
    }
}

// ============================================================================
// Custom sheets
// ============================================================================

#[test]
fn custom_delimiter() {
    let sheet = StyleSheet::new([('+', TextStyle::Custom('+'))]).unwrap();
    let ranges = find_matches("+loud+ and *quiet*", &sheet);
    assert_eq!(ranges, vec![range(0, 5, &[TextStyle::Custom('+')])]);
}

#[test]
fn reduced_sheet_ignores_other_delimiters() {
    let sheet = StyleSheet::new([('*', Bold)]).unwrap();
    let ranges = find_matches("*bold* _italic_", &sheet);
    assert_eq!(ranges, vec![range(0, 5, &[Bold])]);
}
