use std::collections::BTreeSet;

use super::model::{CategoryDomain, RowSet};

/// Build the category drop-down domain: distinct non-empty categories in
/// case-sensitive lexicographic order. The "All" sentinel is implicit in
/// [`CategoryDomain`] and always comes first.
pub fn category_domain(rows: &RowSet) -> CategoryDomain {
    let distinct: BTreeSet<&str> = rows
        .rows()
        .iter()
        .map(|r| r.category.as_str())
        .filter(|c| !c.is_empty())
        .collect();

    CategoryDomain::from_sorted(distinct.into_iter().map(str::to_string).collect())
}
