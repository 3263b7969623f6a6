//! Monthly mean aggregation.

use std::collections::BTreeMap;

use super::model::{MonthKey, Row, Series, SeriesPoint};

/// Running sum and count for one `(year, month)` bucket.
#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    total: f64,
    count: u32,
}

impl Bucket {
    fn add(&mut self, value: f64) {
        self.total += value;
        self.count += 1;
    }

    /// Buckets are only created alongside their first row, so `count > 0`.
    fn mean(&self) -> f64 {
        self.total / f64::from(self.count)
    }
}

/// Group rows by `(year, month)` and emit one mean per group, oldest first.
///
/// The `BTreeMap` keyed on [`MonthKey`] yields calendar order directly, so
/// "2021 February" precedes "2021 March" which precedes "2021 October".
pub fn monthly_means(rows: &[Row]) -> Series {
    let mut buckets: BTreeMap<MonthKey, Bucket> = BTreeMap::new();
    for row in rows {
        buckets.entry(row.key()).or_default().add(row.value);
    }

    Series::new(
        buckets
            .into_iter()
            .map(|(key, bucket)| SeriesPoint {
                label: key.to_string(),
                value: bucket.mean(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Month;

    fn row(year: i32, month: Month, value: f64) -> Row {
        Row {
            category: "A".into(),
            year,
            month,
            value,
        }
    }

    #[test]
    fn empty_input_gives_empty_series() {
        assert!(monthly_means(&[]).is_empty());
    }

    #[test]
    fn averages_each_bucket() {
        let rows = vec![
            row(2020, Month::January, 10.0),
            row(2020, Month::January, 20.0),
            row(2020, Month::January, 33.0),
            row(2020, Month::February, 5.0),
        ];
        let series = monthly_means(&rows);
        assert_eq!(series.labels(), vec!["2020 January", "2020 February"]);
        assert!((series.values()[0] - 21.0).abs() < 1e-9);
        assert!((series.values()[1] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn orders_chronologically_not_alphabetically() {
        let rows = vec![
            row(2021, Month::October, 1.0),
            row(2022, Month::April, 2.0),
            row(2021, Month::March, 3.0),
            row(2021, Month::February, 4.0),
            row(2020, Month::December, 5.0),
        ];
        let series = monthly_means(&rows);
        assert_eq!(
            series.labels(),
            vec![
                "2020 December",
                "2021 February",
                "2021 March",
                "2021 October",
                "2022 April",
            ]
        );
    }

    #[test]
    fn distinct_years_stay_distinct() {
        let rows = vec![row(201, Month::January, 1.0), row(2011, Month::January, 9.0)];
        let series = monthly_means(&rows);
        assert_eq!(series.len(), 2);
        assert_eq!(series.values(), vec![1.0, 9.0]);
    }
}
