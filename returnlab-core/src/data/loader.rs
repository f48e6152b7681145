//! CSV loader — header row plus one observation per data row.
//!
//! The date and price columns are chosen by zero-based index. Every data row
//! must parse; the first bad row aborts the load with its line number and the
//! offending field. The returned series is sorted ascending by date no matter
//! how the file is ordered.

use std::fs::File;
use std::io::Read;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Observation, PriceSeries};

/// Date format of the date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const SP500_DATE_COLUMN: usize = 0;
pub const SP500_PRICE_COLUMN: usize = 4;
pub const BTC_DATE_COLUMN: usize = 1;
pub const BTC_PRICE_COLUMN: usize = 3;

/// Errors from loading a CSV price file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("'{}' has no header row (first row is already data)", path.display())]
    MissingHeader { path: PathBuf },

    #[error("'{}' line {line}: bad {field} '{value}': {reason}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("'{}' has no data rows after the header", path.display())]
    EmptySeries { path: PathBuf },
}

/// Parse a `YYYY-MM-DD` date: exactly four year digits, two month digits and
/// two day digits. No sign, padding or surrounding whitespace is accepted.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err("expected YYYY-MM-DD".into());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| e.to_string())
}

/// Load the S&P 500 history (date in column 0, price in column 4).
pub fn load_sp500(path: impl AsRef<Path>) -> Result<PriceSeries, LoadError> {
    load_csv(path, SP500_DATE_COLUMN, SP500_PRICE_COLUMN)
}

/// Load the Coinbase BTC-USD history (date in column 1, price in column 3).
pub fn load_btc(path: impl AsRef<Path>) -> Result<PriceSeries, LoadError> {
    load_csv(path, BTC_DATE_COLUMN, BTC_PRICE_COLUMN)
}

/// Load a CSV file with a header row into a sorted price series.
pub fn load_csv(
    path: impl AsRef<Path>,
    date_column: usize,
    price_column: usize,
) -> Result<PriceSeries, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::FileError {
        path: path.to_path_buf(),
        source,
    })?;
    let series = parse_rows(file, path, date_column, price_column)?;
    log::debug!(
        "loaded {} observations from {}",
        series.len(),
        path.display()
    );
    Ok(series)
}

/// Parse CSV content from any reader. `source` is used only in error messages.
pub fn parse_rows<R: Read>(
    reader: R,
    source: &Path,
    date_column: usize,
    price_column: usize,
) -> Result<PriceSeries, LoadError> {
    let csv_err = |e: csv::Error| LoadError::Csv {
        path: source.to_path_buf(),
        source: e,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let header = rdr.headers().map_err(csv_err)?;
    if let Some(first) = header.get(date_column) {
        if parse_date(first).is_ok() {
            return Err(LoadError::MissingHeader {
                path: source.to_path_buf(),
            });
        }
    }

    let mut observations = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(csv_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let malformed = |field: &'static str, value: &str, reason: String| {
            LoadError::MalformedRow {
                path: source.to_path_buf(),
                line,
                field,
                value: value.to_string(),
                reason,
            }
        };

        let raw_date = record
            .get(date_column)
            .ok_or_else(|| malformed("date", "", format!("missing column {date_column}")))?;
        let raw_price = record
            .get(price_column)
            .ok_or_else(|| malformed("price", "", format!("missing column {price_column}")))?;

        let date = parse_date(raw_date).map_err(|reason| malformed("date", raw_date, reason))?;
        let value: f64 = raw_price
            .parse()
            .map_err(|e: ParseFloatError| malformed("price", raw_price, e.to_string()))?;

        observations.push(Observation::new(date, value));
    }

    // Empty is the only way construction fails.
    PriceSeries::new(observations).map_err(|_| LoadError::EmptySeries {
        path: source.to_path_buf(),
    })
}
