//! ReturnLab core — trailing one-year return distributions from CSV price history.
//!
//! Pipeline: CSV loader → price series → return sampler → percentile report.

pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod report;

pub use analysis::{
    nearest_rank_percentiles, sample_returns, PercentilePoint, SampleError, SamplerConfig,
};
pub use config::{ConfigError, ReportConfig, SeriesLayout, SeriesSpec};
pub use data::{load_btc, load_csv, load_sp500, LoadError};
pub use domain::{Observation, PriceSeries, SeriesError};
pub use report::{build_series_report, run_report, ReportError, SeriesReport};
