//! PriceSeries — immutable, date-sorted price history with as-of lookup.
//!
//! The series is sorted once at construction. Lookups never re-sort; `as_of`
//! is a binary search over the sorted observations.

use chrono::NaiveDate;
use thiserror::Error;

use super::observation::Observation;

/// Errors from series construction and lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("price series has no observations")]
    Empty,

    #[error("no observation on or after {query} (series ends {latest})")]
    OutOfRange { query: NaiveDate, latest: NaiveDate },
}

/// Non-empty sequence of observations, ascending by date.
///
/// Duplicate dates are kept in their input order (stable sort).
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    observations: Vec<Observation>,
}

impl PriceSeries {
    /// Build a series from observations in any order.
    pub fn new(mut observations: Vec<Observation>) -> Result<Self, SeriesError> {
        if observations.is_empty() {
            return Err(SeriesError::Empty);
        }
        observations.sort_by_key(|o| o.date);
        Ok(Self { observations })
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn first(&self) -> &Observation {
        &self.observations[0]
    }

    pub fn last(&self) -> &Observation {
        &self.observations[self.observations.len() - 1]
    }

    /// (earliest date, latest date).
    pub fn range(&self) -> (NaiveDate, NaiveDate) {
        (self.first().date, self.last().date)
    }

    /// Observation at the earliest date not before `date`.
    ///
    /// An exact match wins; otherwise the search moves forward over gaps such
    /// as weekends. Fails when `date` is after the last observation.
    pub fn as_of(&self, date: NaiveDate) -> Result<&Observation, SeriesError> {
        let idx = self.observations.partition_point(|o| o.date < date);
        self.observations
            .get(idx)
            .ok_or(SeriesError::OutOfRange {
                query: date,
                latest: self.last().date,
            })
    }
}
