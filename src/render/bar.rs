//! Values to block-character bars with eighth-block precision.
//!
//! The largest value spans `BAR_UNITS` full blocks. Each block is split into
//! eight sub-units; whole blocks are drawn as `█` and the leftover eighths as
//! a single partial glyph from `PARTIAL_BLOCKS`.

use std::fmt::{self, Display, Write};

use crate::core::constants::{
    BAR_UNITS, EIGHTHS, FULL_BLOCK, MAX_UNITS, MIN_MARKER, PARTIAL_BLOCKS,
};

/// Value covered by one full block for a chart whose largest value is `max`.
///
/// `0.0` when `max` is not positive, which makes every scaled bar empty.
#[inline]
#[must_use]
pub fn increment(max: f64) -> f64 {
    if max > 0.0 { max / BAR_UNITS } else { 0.0 }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Bar {
    full: usize,
    eighths: u8,
}

impl Bar {
    /// Bar for `value` on a scale of `increment` per block.
    ///
    /// Sub-units are truncated toward zero; negative values and a zero
    /// increment give an empty bar. Never wider than `BAR_UNITS` blocks, even
    /// when `value * 8` overflows to infinity.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn scaled(value: f64, increment: f64) -> Self {
        if increment <= 0.0 {
            return Self::default();
        }
        let units = ((value * EIGHTHS as f64 / increment) as i64).min(MAX_UNITS);
        if units <= 0 {
            return Self::default();
        }
        Self {
            full: (units / EIGHTHS) as usize,
            eighths: (units % EIGHTHS) as u8,
        }
    }

    /// Whole blocks only, no partial glyph.
    #[inline]
    #[must_use]
    pub fn solid(full: usize) -> Self {
        Self { full, eighths: 0 }
    }

    /// Number of full block characters.
    #[inline]
    #[must_use]
    pub fn full(&self) -> usize {
        self.full
    }

    #[inline]
    #[must_use]
    pub fn eighths(&self) -> u8 {
        self.eighths
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full == 0 && self.eighths == 0
    }

    /// Rendered width in characters; an empty bar still draws its marker.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        if self.is_empty() {
            1
        } else {
            self.full + usize::from(self.eighths > 0)
        }
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_char(MIN_MARKER);
        }
        for _ in 0..self.full {
            f.write_char(FULL_BLOCK)?;
        }
        if self.eighths > 0 {
            f.write_char(PARTIAL_BLOCKS[usize::from(self.eighths)])?;
        }
        Ok(())
    }
}
