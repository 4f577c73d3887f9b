//! Public-facing crate root – re-exports + one-shot helpers.

pub mod cli;
pub mod core;
pub mod present;
pub mod render;

pub use crate::core::{
    aggregate::Summary,
    config::{ChartOptions, ChartOptionsBuilder, SortOrder},
    data::{DisplayValue, Entry},
    error::{BarcharError, ConfigError},
    filler::{fill_if_blank, filler_query},
    query::{ParsedQuery, parse},
    rng::{Lcg, NumberSource},
};

pub use present::{PageConfig, Shape};
pub use render::{Bar, Chart, Row};

/// Render the chart text for a raw query string. A blank query gets six
/// random months from a time-seeded generator.
#[must_use]
pub fn render_query(raw: &str) -> String {
    render_query_with(raw, &mut Lcg::seed_from_time())
}

/// Same as [`render_query`] with a caller-provided number source.
#[must_use]
pub fn render_query_with<S: NumberSource + ?Sized>(raw: &str, source: &mut S) -> String {
    Chart::from_query(&fill_if_blank(raw, source)).to_string()
}
