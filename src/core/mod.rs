//! Aggregates the chart "business logic" layer.

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod filler;
pub mod query;
pub mod rng;
pub mod sort;

// re-export frequently-used items for convenience
pub use aggregate::Summary;
pub use config::{ChartOptions, ChartOptionsBuilder, SortOrder};
pub use constants::{AVG_LABEL, BAR_UNITS, DECIMAL_PRECISION, MIN_VALUE_WIDTH, TOTAL_LABEL};
pub use data::{DisplayValue, Entry};
pub use error::{BarcharError, ConfigError};
pub use filler::{fill_if_blank, filler_query};
pub use query::{ParsedQuery, parse};
pub use rng::{Lcg, NumberSource};
