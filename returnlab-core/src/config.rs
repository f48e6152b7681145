//! Report configuration — which files to read and how to sample them.
//!
//! The binary always runs `ReportConfig::default()`: `sp500.csv` then
//! `Coinbase_BTCUSD_d.csv` from the working directory, one-year horizon,
//! daily steps. The same structure parses from TOML so tests and embedders
//! can inject their own files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::SamplerConfig;
use crate::data::{load_btc, load_csv, load_sp500, LoadError};
use crate::domain::PriceSeries;

/// Errors from building or validating a report configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse report config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be a positive number of days, got {value}")]
    InvalidDuration { field: &'static str, value: i64 },

    #[error("report config lists no series")]
    NoSeries,
}

/// Column layout of a CSV price file, selecting its loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeriesLayout {
    /// S&P 500 export: date in column 0, price in column 4.
    Sp500,
    /// Coinbase BTC-USD export: date in column 1, price in column 3.
    Btc,
    /// Any other file, by zero-based column index.
    Custom {
        date_column: usize,
        price_column: usize,
    },
}

/// One named CSV price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    /// Label printed in the report header.
    pub name: String,
    pub path: PathBuf,
    pub layout: SeriesLayout,
}

impl SeriesSpec {
    /// S&P 500 daily history from `sp500.csv`.
    pub fn sp500() -> Self {
        Self {
            name: "sp500".into(),
            path: PathBuf::from("sp500.csv"),
            layout: SeriesLayout::Sp500,
        }
    }

    /// Coinbase BTC-USD daily history from `Coinbase_BTCUSD_d.csv`.
    pub fn btc() -> Self {
        Self {
            name: "btc".into(),
            path: PathBuf::from("Coinbase_BTCUSD_d.csv"),
            layout: SeriesLayout::Btc,
        }
    }

    /// Load the file with the loader for its layout.
    pub fn load(&self) -> Result<PriceSeries, LoadError> {
        match self.layout {
            SeriesLayout::Sp500 => load_sp500(&self.path),
            SeriesLayout::Btc => load_btc(&self.path),
            SeriesLayout::Custom {
                date_column,
                price_column,
            } => load_csv(&self.path, date_column, price_column),
        }
    }
}

/// Full configuration of one report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Series in report order.
    pub series: Vec<SeriesSpec>,
    #[serde(default)]
    pub sampler: SamplerConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            series: vec![SeriesSpec::sp500(), SeriesSpec::btc()],
            sampler: SamplerConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Parse and validate a configuration from TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.series.is_empty() {
            return Err(ConfigError::NoSeries);
        }
        self.sampler.validate()
    }

    /// Resolve relative series paths against `dir`. Absolute paths are kept.
    pub fn with_base_dir(mut self, dir: impl AsRef<Path>) -> Self {
        for spec in &mut self.series {
            if spec.path.is_relative() {
                spec.path = dir.as_ref().join(&spec.path);
            }
        }
        self
    }
}
