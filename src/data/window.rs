use super::model::{Series, SeriesPoint};

/// Default span of the long trend chart, in months.
pub const LONG_WINDOW: usize = 36;
/// Default span of the short trend chart, in months.
pub const SHORT_WINDOW: usize = 12;

/// The last `n` points of `series`, oldest first. Shorter series are
/// returned whole.
pub fn trailing(series: &Series, n: usize) -> &[SeriesPoint] {
    let points = series.points();
    &points[points.len().saturating_sub(n)..]
}
