//! Trailing-return sampling and nearest-rank percentiles

pub mod percentile;
pub mod sampler;

pub use percentile::{
    nearest_rank_percentiles, percentile_index, PercentilePoint, PERCENTILE_STEP,
};
pub use sampler::{sample_returns, SampleError, SamplerConfig, DAYS_PER_YEAR, MAX_DURATION_DAYS};
