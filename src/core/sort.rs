//! Stable reordering of chart rows by value.

use std::cmp::Ordering;

use crate::core::{config::SortOrder, data::Entry};

impl SortOrder {
    /// Reorder `entries` in place. Equal values keep their query order in
    /// both directions.
    pub fn apply(self, entries: &mut [Entry]) {
        match self {
            Self::Original => {}
            Self::Ascending => entries.sort_by(|l, r| by_value(l, r)),
            Self::Descending => entries.sort_by(|l, r| by_value(r, l)),
        }
    }
}

/// Values are finite, so the `Equal` fallback never fires. `-0` and `0`
/// compare equal and keep query order.
#[inline]
fn by_value(l: &Entry, r: &Entry) -> Ordering {
    l.value.partial_cmp(&r.value).unwrap_or(Ordering::Equal)
}
