//! Overlap resolution: folds raw per-style matches into disjoint ranges.
//!
//! The fold walks matches sorted by start offset and compares each one to
//! the last range already placed. Non-overlapping matches append;
//! overlapping matches either merge their style into the existing range
//! (splitting it where the boundaries differ enough) or are dropped.

use crate::range::StyledRange;

/// Merge sorted raw matches into a disjoint, ascending, multi-style list.
///
/// Expects `sorted` ascending by `start`. The fold is strictly sequential:
/// every step depends on the ranges placed so far. Never fails; any input,
/// including pathological fully-overlapping sets, folds to a valid
/// disjoint list.
pub(crate) fn merge(sorted: Vec<StyledRange>) -> Vec<StyledRange> {
    let mut merged: Vec<StyledRange> = Vec::with_capacity(sorted.len());
    for m in sorted {
        fold_in(&mut merged, m);
    }
    merged
}

/// Fold one match into the accumulated range list.
///
/// The `max_gap` threshold (sum of both style-set sizes) bounds how far
/// apart two overlapping boundaries may sit before the region between them
/// becomes its own range. Tightly nested delimiters like `~*_x_*~` differ
/// by one position per style and merge in place; a styled word nested in a
/// longer differently-styled sentence is carved out as a distinct range.
fn fold_in(merged: &mut Vec<StyledRange>, m: StyledRange) {
    let (prev_start, prev_end, prev_styles) = match merged.last() {
        None => {
            merged.push(m);
            return;
        }
        Some(prev) => (prev.start, prev.end, prev.styles.len()),
    };

    if m.start >= prev_end {
        merged.push(m);
        return;
    }

    if m.end >= prev_end {
        // The match runs past the range already in place. These styles do
        // not compose; the earlier match keeps the overlapping region.
        log::trace!("dropping match [{}, {}]: extends past [{}, {}]", m.start, m.end, prev_start, prev_end);
        return;
    }

    if m.start < prev_start {
        // A trailing split leaves the last range starting after an earlier
        // match's interior; a match reaching back before that start does
        // not compose either. Splitting here would produce an inverted
        // range.
        log::trace!("dropping match [{}, {}]: starts before [{}, {}]", m.start, m.end, prev_start, prev_end);
        return;
    }

    let max_gap = prev_styles + m.styles.len();
    let mut at = merged.len() - 1;

    if m.start > prev_start + max_gap {
        // Carve off the part of prev that ends before the match begins.
        let lead = StyledRange {
            start: prev_start,
            end: m.start - 1,
            styles: merged[at].styles.clone(),
        };
        log::trace!("splitting leading [{}, {}] off [{}, {}]", lead.start, lead.end, prev_start, prev_end);
        merged.insert(at, lead);
        at += 1;
        merged[at].start = m.start;
    }

    if merged[at].end > m.end + max_gap {
        // Split prev around the match's end; both halves keep prev's
        // styles, the match's styles land on the first half below.
        let prev = merged.remove(at);
        log::trace!("splitting [{}, {}] at {}", prev.start, prev.end, m.end);
        merged.push(StyledRange {
            start: prev.start,
            end: m.end,
            styles: prev.styles.clone(),
        });
        merged.push(StyledRange {
            start: m.end + 1,
            end: prev.end,
            styles: prev.styles,
        });
    }

    merged[at].styles.merge(&m.styles);
}
