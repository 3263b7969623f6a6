use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Month – calendar month parsed from its English name
// ---------------------------------------------------------------------------

/// One of the twelve calendar months.
///
/// Variants are declared in calendar order so the derived `Ord` is
/// chronological, not alphabetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Zero-based calendar index (January = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Month::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| format!("unknown month name '{name}'"))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Row / RowSet – the cleaned observations
// ---------------------------------------------------------------------------

/// A single observation, with every field resolved at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Drug / indicator label.
    pub category: String,
    pub year: i32,
    pub month: Month,
    /// Always finite.
    pub value: f64,
}

impl Row {
    pub fn key(&self) -> MonthKey {
        MonthKey {
            year: self.year,
            month: self.month,
        }
    }
}

/// Rows in source order. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    rows: Vec<Row>,
}

impl RowSet {
    pub fn new(rows: Vec<Row>) -> Self {
        RowSet { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the row set is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// MonthKey – aggregation bucket identity
// ---------------------------------------------------------------------------

/// `(year, month)` pair. Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: Month,
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.month)
    }
}

// ---------------------------------------------------------------------------
// Selection / CategoryDomain – the filter domain
// ---------------------------------------------------------------------------

/// A choice from the category drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// Sentinel: no filtering.
    #[default]
    All,
    Category(String),
}

impl Selection {
    pub const ALL_LABEL: &'static str = "All";

    pub fn label(&self) -> &str {
        match self {
            Selection::All => Self::ALL_LABEL,
            Selection::Category(c) => c,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distinct non-empty categories, sorted, behind the implicit "All" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDomain {
    categories: Vec<String>,
}

impl CategoryDomain {
    /// `categories` must already be sorted and deduplicated.
    pub(crate) fn from_sorted(categories: Vec<String>) -> Self {
        CategoryDomain { categories }
    }

    /// The real categories, without the sentinel.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Every selectable entry, sentinel first.
    pub fn selections(&self) -> impl Iterator<Item = Selection> + '_ {
        std::iter::once(Selection::All).chain(
            self.categories
                .iter()
                .map(|c| Selection::Category(c.clone())),
        )
    }

    /// Display labels, `"All"` first.
    pub fn labels(&self) -> Vec<&str> {
        std::iter::once(Selection::ALL_LABEL)
            .chain(self.categories.iter().map(String::as_str))
            .collect()
    }

    /// Entry count including the sentinel.
    pub fn len(&self) -> usize {
        self.categories.len() + 1
    }

    /// Never true: the sentinel is always present.
    pub fn is_empty(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Series – the chart-ready output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// e.g. `"2021 March"`.
    pub label: String,
    pub value: f64,
}

/// Chronologically ordered `(label, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Series { points }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_order_is_calendar_order() {
        assert!(Month::February < Month::March);
        assert!(Month::March < Month::October);
        assert_eq!(Month::January.index(), 0);
        assert_eq!(Month::December.index(), 11);
    }

    #[test]
    fn month_parses_trimmed_full_names_only() {
        assert_eq!(" March ".parse::<Month>(), Ok(Month::March));
        assert!("Mar".parse::<Month>().is_err());
        assert!("march".parse::<Month>().is_err());
        assert!("".parse::<Month>().is_err());
    }

    #[test]
    fn month_key_orders_by_year_then_month() {
        let a = MonthKey { year: 2020, month: Month::December };
        let b = MonthKey { year: 2021, month: Month::January };
        let c = MonthKey { year: 2021, month: Month::October };
        assert!(a < b);
        assert!(b < c);
        assert_eq!(c.to_string(), "2021 October");
    }

    #[test]
    fn domain_labels_start_with_sentinel() {
        let domain = CategoryDomain::from_sorted(vec!["A".into(), "B".into()]);
        assert_eq!(domain.labels(), vec!["All", "A", "B"]);
        assert_eq!(domain.len(), 3);
        let selections: Vec<Selection> = domain.selections().collect();
        assert_eq!(selections[0], Selection::All);
        assert_eq!(selections[2], Selection::Category("B".into()));
    }
}
