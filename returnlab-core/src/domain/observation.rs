//! Observation — a single dated price.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One (date, price) data point. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_serializes_date_as_iso() {
        let obs = Observation::new(NaiveDate::from_ymd_opt(2019, 1, 2).unwrap(), 2640.0);
        let json = serde_json::to_string(&obs).unwrap();
        assert_eq!(json, r#"{"date":"2019-01-02","value":2640.0}"#);
    }
}
