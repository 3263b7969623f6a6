use std::collections::BTreeMap;

use super::model::Row;

/// Mean value per non-empty category, highest first. Ties keep category
/// order.
pub fn category_means(rows: &[Row]) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<&str, (f64, u32)> = BTreeMap::new();
    for row in rows.iter().filter(|r| !r.category.is_empty()) {
        let entry = sums.entry(row.category.as_str()).or_default();
        entry.0 += row.value;
        entry.1 += 1;
    }

    let mut means: Vec<(String, f64)> = sums
        .into_iter()
        .map(|(category, (total, count))| (category.to_string(), total / f64::from(count)))
        .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means
}

/// Summed value per year, largest first. Ties keep year order.
pub fn yearly_totals(rows: &[Row]) -> Vec<(i32, f64)> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.year).or_default() += row.value;
    }

    let mut ranked: Vec<(i32, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}
