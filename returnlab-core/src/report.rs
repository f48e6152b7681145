//! Report — per-series percentile blocks and the run that produces them.
//!
//! `run_report` computes every series before rendering any of them, so a
//! failure in a later series leaves no partial report behind.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::analysis::{
    nearest_rank_percentiles, sample_returns, PercentilePoint, SampleError, SamplerConfig,
};
use crate::config::{ConfigError, ReportConfig, SeriesSpec};
use crate::data::{LoadError, DATE_FORMAT};

/// Errors that abort a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(
        "{name}: {span_days} days of history is shorter than the \
         {horizon_days}-day horizon, no returns to rank"
    )]
    InsufficientHistory {
        name: String,
        span_days: i64,
        horizon_days: i64,
    },
}

/// Computed percentile distribution of trailing returns for one series.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesReport {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub sample_size: usize,
    pub percentiles: Vec<PercentilePoint>,
}

impl SeriesReport {
    /// Text block: header line, one line per percentile, blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{} data from {} to {}:",
            self.name,
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        );
        for point in &self.percentiles {
            let _ = writeln!(
                out,
                "  {:>3}'th percentile return: {:+5.0}%",
                point.percentile, point.value
            );
        }
        out.push('\n');
        out
    }
}

/// Load, sample and rank a single series.
pub fn build_series_report(
    spec: &SeriesSpec,
    sampler: &SamplerConfig,
) -> Result<SeriesReport, ReportError> {
    sampler.validate()?;
    let series = spec.load()?;
    let (start, end) = series.range();
    log::debug!(
        "{}: {} observations from {} to {}",
        spec.name,
        series.len(),
        start,
        end
    );

    let returns = sample_returns(&series, sampler)?;
    if returns.is_empty() {
        return Err(ReportError::InsufficientHistory {
            name: spec.name.clone(),
            span_days: (end - start).num_days(),
            horizon_days: sampler.horizon_days,
        });
    }
    log::info!("{}: {} trailing returns sampled", spec.name, returns.len());

    Ok(SeriesReport {
        name: spec.name.clone(),
        start,
        end,
        sample_size: returns.len(),
        percentiles: nearest_rank_percentiles(&returns),
    })
}

/// Run every configured series and return the full report text.
pub fn run_report(config: &ReportConfig) -> Result<String, ReportError> {
    config.validate()?;
    let reports = config
        .series
        .iter()
        .map(|spec| build_series_report(spec, &config.sampler))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(reports.iter().map(SeriesReport::render).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn render_matches_report_layout() {
        let report = SeriesReport {
            name: "sp500".into(),
            start: d(2019, 1, 2),
            end: d(2020, 1, 3),
            sample_size: 2,
            percentiles: (0..=100)
                .step_by(5)
                .map(|p| PercentilePoint {
                    percentile: p,
                    value: if p < 50 { -3.4 } else { 22.38 },
                })
                .collect(),
        };
        let text = report.render();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines[0], "sp500 data from 2019-01-02 to 2020-01-03:");
        assert_eq!(lines[1], "    0'th percentile return:    -3%");
        assert_eq!(lines[2], "    5'th percentile return:    -3%");
        assert_eq!(lines[11], "   50'th percentile return:   +22%");
        assert_eq!(lines[21], "  100'th percentile return:   +22%");
        // 21 percentile lines, blank separator, trailing empty split
        assert_eq!(lines.len(), 24);
        assert_eq!(lines[22], "");
        assert!(text.ends_with("%\n\n"));
    }

    #[test]
    fn render_pads_large_returns() {
        let report = SeriesReport {
            name: "btc".into(),
            start: d(2015, 1, 1),
            end: d(2021, 1, 1),
            sample_size: 1,
            percentiles: vec![PercentilePoint {
                percentile: 100,
                value: 1234.6,
            }],
        };
        assert!(report.render().contains("  100'th percentile return: +1235%\n"));
    }
}
