use std::borrow::Cow;

use super::model::{Row, RowSet, Selection};

// ---------------------------------------------------------------------------
// Category filter
// ---------------------------------------------------------------------------

/// Rows matching `selection`, in their original relative order.
///
/// `Selection::All` hands back the whole row set without copying.
pub fn filter_rows<'a>(rows: &'a RowSet, selection: &Selection) -> Cow<'a, [Row]> {
    match selection {
        Selection::All => Cow::Borrowed(rows.rows()),
        Selection::Category(category) => Cow::Owned(
            rows.rows()
                .iter()
                .filter(|r| &r.category == category)
                .cloned()
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Month;

    fn row(category: &str, value: f64) -> Row {
        Row {
            category: category.to_string(),
            year: 2020,
            month: Month::March,
            value,
        }
    }

    fn sample() -> RowSet {
        RowSet::new(vec![row("A", 1.0), row("B", 2.0), row("A", 3.0), row("C", 4.0)])
    }

    #[test]
    fn all_borrows_full_row_set() {
        let rows = sample();
        let filtered = filter_rows(&rows, &Selection::All);
        assert!(matches!(filtered, Cow::Borrowed(_)));
        assert_eq!(&*filtered, rows.rows());
    }

    #[test]
    fn category_keeps_matching_rows_in_order() {
        let rows = sample();
        let filtered = filter_rows(&rows, &Selection::Category("A".into()));
        let values: Vec<f64> = filtered.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![1.0, 3.0]);
        assert!(filtered.iter().all(|r| r.category == "A"));
    }

    #[test]
    fn category_named_all_is_not_the_sentinel() {
        let rows = RowSet::new(vec![row("All", 1.0), row("B", 2.0)]);
        let filtered = filter_rows(&rows, &Selection::Category("All".into()));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn unknown_category_is_empty() {
        let rows = sample();
        assert!(filter_rows(&rows, &Selection::Category("Z".into())).is_empty());
    }
}
