//! Sum, maximum and average over the data rows.

use crate::core::data::Entry;

/// Aggregates over data rows only; the synthetic rows are not included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total: f64,
    /// Never below zero, so an all-negative chart scales to nothing.
    pub max: f64,
    pub average: f64,
}

impl Summary {
    /// Summarise `entries`.
    ///
    /// With no entries the average would be `0 / 0`; it falls back to `0.0`
    /// so the renderer only ever sees finite numbers.
    #[must_use]
    pub fn of(entries: &[Entry]) -> Self {
        let (total, max) = entries
            .iter()
            .fold((0.0_f64, 0.0_f64), |(sum, max), e| (sum + e.value, max.max(e.value)));
        let count = entries.len();
        #[allow(clippy::cast_precision_loss)]
        let average = if count == 0 { 0.0 } else { total / count as f64 };
        Self {
            count,
            total,
            max,
            average,
        }
    }
}
