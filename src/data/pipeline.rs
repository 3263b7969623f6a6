use super::aggregate::monthly_means;
use super::filter::filter_rows;
use super::model::{RowSet, Selection, Series};
use super::window::{trailing, LONG_WINDOW, SHORT_WINDOW};

/// Number of trailing months shown by each chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Windows {
    pub long: usize,
    pub short: usize,
}

impl Default for Windows {
    fn default() -> Self {
        Self {
            long: LONG_WINDOW,
            short: SHORT_WINDOW,
        }
    }
}

/// The two chart datasets for one category selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendCharts {
    /// Line chart: the long window of monthly means.
    pub long: Series,
    /// Bar chart: the short window of monthly means.
    pub short: Series,
}

impl TrendCharts {
    /// Filter → aggregate → window, recomputed from scratch on every call.
    pub fn compute(rows: &RowSet, selection: &Selection, windows: Windows) -> Self {
        let filtered = filter_rows(rows, selection);
        let monthly = monthly_means(&filtered);
        log::debug!(
            "Selection '{selection}': {} rows in {} months",
            filtered.len(),
            monthly.len()
        );

        TrendCharts {
            long: Series::new(trailing(&monthly, windows.long).to_vec()),
            short: Series::new(trailing(&monthly, windows.short).to_vec()),
        }
    }
}
