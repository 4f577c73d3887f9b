//! A collection of constants.

/// The widest data bar spans 25 full block characters.
pub const BAR_UNITS: f64 = 25.0;

/// Every full block is split into eighths for the partial glyph.
pub const EIGHTHS: i64 = 8;

/// Sub-units of the widest possible bar.
pub const MAX_UNITS: i64 = 25 * EIGHTHS;

/// `█` U+2588
pub const FULL_BLOCK: char = '\u{2588}';

/// `▏` U+258F, drawn when a value rounds down to an empty bar
pub const MIN_MARKER: char = '\u{258F}';

/// Partial glyphs indexed by the eighths remainder.
///
/// Remainder `r` maps to U+2588 + (8 - r), so a larger remainder gets a fuller
/// glyph. Index 0 is never drawn.
pub const PARTIAL_BLOCKS: [char; 8] = [
    FULL_BLOCK, '\u{258F}', '\u{258E}', '\u{258D}', '\u{258C}', '\u{258B}', '\u{258A}', '\u{2589}',
];

/// Label of the synthetic average row.
pub const AVG_LABEL: &str = "Avg.";
/// Label of the synthetic total row.
pub const TOTAL_LABEL: &str = "Total";

/// The value column is never narrower than four characters.
///
/// `7` becomes `   7`
pub const MIN_VALUE_WIDTH: usize = 4;

/// Non-integral values are shown with two decimal places.
///
/// 11.8333 becomes 11.83
pub const DECIMAL_PRECISION: usize = 2;

/// Number of rows generated for an empty query.
pub const FILLER_ROWS: usize = 6;
/// Filler values are drawn from `0..=FILLER_MAX`.
pub const FILLER_MAX: u32 = 100;

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
