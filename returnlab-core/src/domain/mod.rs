//! Domain types for ReturnLab

pub mod observation;
pub mod series;

pub use observation::Observation;
pub use series::{PriceSeries, SeriesError};
