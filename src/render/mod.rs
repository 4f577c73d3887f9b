pub mod bar;
pub mod chart;

pub use bar::{Bar, increment};
pub use chart::{Chart, Row};
