//! Property tests for series lookup, loading and percentile ranking.
//!
//! Uses proptest to verify:
//! 1. As-of exactness — querying an observation's own date returns it
//! 2. As-of forward-only — the result is never dated before the query
//! 3. Load order independence — N data rows load as N sorted observations
//! 4. Percentile shape — 21 points, non-decreasing

use std::path::Path;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use returnlab_core::data::parse_rows;
use returnlab_core::{nearest_rank_percentiles, Observation, PriceSeries};

// ── Strategies (proptest) ────────────────────────────────────────────

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()
}

/// Distinct day offsets in arbitrary order.
fn arb_day_offsets() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(0..2000_i64, 1..60)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn arb_price() -> impl Strategy<Value = f64> {
    (1.0..100_000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_series() -> impl Strategy<Value = PriceSeries> {
    arb_day_offsets()
        .prop_flat_map(|offsets| {
            let n = offsets.len();
            (Just(offsets), prop::collection::vec(arb_price(), n))
        })
        .prop_map(|(offsets, prices)| {
            let observations = offsets
                .into_iter()
                .zip(prices)
                .map(|(off, p)| Observation::new(base_date() + Duration::days(off), p))
                .collect();
            PriceSeries::new(observations).unwrap()
        })
}

// ── 1 & 2. As-of lookup ──────────────────────────────────────────────

proptest! {
    /// Querying an element's own date returns exactly that element.
    #[test]
    fn as_of_exact_match_returns_element(series in arb_series()) {
        for obs in series.observations() {
            prop_assert_eq!(series.as_of(obs.date).unwrap(), obs);
        }
    }

    /// as_of never returns an observation dated before the query, and the
    /// result is the earliest such observation.
    #[test]
    fn as_of_never_looks_back(series in arb_series(), query_off in -30..2000_i64) {
        let query = base_date() + Duration::days(query_off);
        let (_, latest) = series.range();
        match series.as_of(query) {
            Ok(obs) => {
                prop_assert!(obs.date >= query);
                prop_assert!(series
                    .observations()
                    .iter()
                    .all(|o| o.date < query || o.date >= obs.date));
            }
            Err(_) => prop_assert!(query > latest),
        }
    }
}

// ── 3. Loading ───────────────────────────────────────────────────────

proptest! {
    /// N data rows in any order load as N observations sorted by date.
    #[test]
    fn load_is_order_independent(
        offsets in arb_day_offsets(),
        price in arb_price(),
    ) {
        let mut content = String::from("Date,Open,High,Low,Close\n");
        for off in &offsets {
            let date = base_date() + Duration::days(*off);
            content.push_str(&format!("{date},0,0,0,{price}\n"));
        }

        let series = parse_rows(content.as_bytes(), Path::new("prop.csv"), 0, 4).unwrap();
        prop_assert_eq!(series.len(), offsets.len());
        prop_assert!(series
            .observations()
            .windows(2)
            .all(|w| w[0].date <= w[1].date));
        prop_assert!(series.observations().iter().all(|o| o.value == price));
    }
}

// ── 4. Percentiles ───────────────────────────────────────────────────

proptest! {
    /// Any non-empty sample yields 21 non-decreasing points at 0, 5, ..., 100.
    #[test]
    fn percentiles_are_monotonic(
        sample in prop::collection::vec(-100.0..1000.0_f64, 1..500),
    ) {
        let points = nearest_rank_percentiles(&sample);
        prop_assert_eq!(points.len(), 21);
        for (i, p) in points.iter().enumerate() {
            prop_assert_eq!(p.percentile, 5 * i as u32);
        }
        prop_assert!(points.windows(2).all(|w| w[0].value <= w[1].value));
    }
}
