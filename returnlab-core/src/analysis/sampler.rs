//! Return sampler — walks a daily calendar grid and pairs each date with the
//! date one modeled year later.
//!
//! One year is exactly `horizon_days` (365) calendar days; leap years are not
//! special-cased. Steps are calendar days, not trading days: weekend and
//! holiday gaps are bridged by `PriceSeries::as_of`.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::{PriceSeries, SeriesError};

/// Length of the modeled year in days.
pub const DAYS_PER_YEAR: i64 = 365;

/// Upper bound for `horizon_days` and `step_days` (10,000 years).
pub const MAX_DURATION_DAYS: i64 = 3_652_425;

/// Errors that stop a sampler walk.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("date arithmetic out of range: {date} shifted by {days} days")]
    DateOverflow { date: NaiveDate, days: i64 },
}

/// Durations driving the sampler walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Distance between the two prices of one return, in days.
    pub horizon_days: i64,
    /// Cursor advance per sample, in days.
    pub step_days: i64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            horizon_days: DAYS_PER_YEAR,
            step_days: 1,
        }
    }
}

impl SamplerConfig {
    /// Both durations must lie in `1..=MAX_DURATION_DAYS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("horizon_days", self.horizon_days),
            ("step_days", self.step_days),
        ] {
            if !(1..=MAX_DURATION_DAYS).contains(&value) {
                return Err(ConfigError::InvalidDuration { field, value });
            }
        }
        Ok(())
    }
}

fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate, SampleError> {
    date.checked_add_signed(Duration::days(days))
        .ok_or(SampleError::DateOverflow { date, days })
}

/// Percentage returns `100 * (p1 - p0) / p0` for every cursor date from the
/// first observation up to `latest - horizon` inclusive.
///
/// A zero starting price is not guarded and yields an infinite or NaN return.
/// The sample is empty when the series spans less than one horizon.
pub fn sample_returns(
    series: &PriceSeries,
    config: &SamplerConfig,
) -> Result<Vec<f64>, SampleError> {
    config.validate()?;
    let (earliest, latest) = series.range();
    let window_end = shift(latest, -config.horizon_days)?;

    let mut returns = Vec::new();
    let mut cursor = earliest;
    while cursor <= window_end {
        let p0 = series.as_of(cursor)?.value;
        let p1 = series.as_of(shift(cursor, config.horizon_days)?)?.value;
        returns.push(100.0 * (p1 - p0) / p0);
        cursor = shift(cursor, config.step_days)?;
    }
    Ok(returns)
}
