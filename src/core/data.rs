//! Chart rows as parsed from the query, plus value parsing and display.

use std::fmt::{self, Display};

use crate::core::constants::DECIMAL_PRECISION;

/// One label/value pair contributing a row to the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub label: String,
    pub value: f64,
}

impl Entry {
    #[inline]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Parse a raw query value into a finite number.
///
/// Integers and decimals are both accepted. Anything else, including `NaN`
/// and infinities, yields `None` so the caller can drop the token.
/// `-0` comes back as `0`.
#[inline]
#[must_use]
pub fn parse_value(text: &str) -> Option<f64> {
    lexical_core::parse::<f64>(text.as_bytes())
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v + 0.0)
}

/// Display adapter: integral values without decimals, everything else with two.
#[derive(Clone, Copy, Debug)]
pub struct DisplayValue(pub f64);

impl Display for DisplayValue {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == self.0.trunc() {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.prec$}", self.0, prec = DECIMAL_PRECISION)
        }
    }
}
