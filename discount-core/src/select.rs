//! Greedy earliest-finish selection.
//!
//! Sorting by end timestamp and accepting every interval that starts no
//! earlier than the last accepted end yields a maximum-cardinality set of
//! pairwise non-overlapping intervals. Contact at a single instant
//! (`previous.end == next.start`) is not overlap.
//!
//! The one exception is a zero-length interval tied on end with a longer one:
//! ties keep input order, so the longer one may win and the point interval is
//! rejected even though both could coexist.

use discount_types::{DiscountError, Item};

use crate::interval::{Interval, intervals_from_items};

/// Select the maximum set of pairwise non-overlapping intervals.
///
/// Returns the accepted item identifiers in acceptance order: ascending by end
/// timestamp, ties broken by input position (stable sort). Intervals with
/// `start > end` are accepted or rejected by the same rule and never break
/// termination.
#[must_use]
pub fn select_max_non_overlapping(intervals: &[Interval]) -> Vec<String> {
    let mut order: Vec<&Interval> = intervals.iter().collect();
    order.sort_by(|a, b| a.end.cmp(&b.end));

    let mut selected = Vec::new();
    let mut last_end = None;
    for iv in order {
        if last_end.is_none_or(|end| end <= iv.start) {
            selected.push(iv.item_id.clone());
            last_end = Some(iv.end);
        }
    }
    selected
}

/// Derive intervals for `items` and select among them.
///
/// # Errors
/// Returns `MissingTimestamp` for the first item lacking a timestamp; nothing is
/// selected in that case.
pub fn select_items(items: &[Item]) -> Result<Vec<String>, DiscountError> {
    let intervals = intervals_from_items(items)?;
    Ok(select_max_non_overlapping(&intervals))
}
