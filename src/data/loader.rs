use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use super::model::{Month, Row, RowSet};
use crate::error::LoadError;

pub const CATEGORY_COLUMN: &str = "Indicator";
pub const YEAR_COLUMN: &str = "Year";
pub const MONTH_COLUMN: &str = "Month";
pub const VALUE_COLUMN: &str = "Data Value";

const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=9999;

/// Dataset compiled into the binary and used when no file is configured.
pub const BUNDLED_DATASET: &str = include_str!("../../assets/overdose_rates.csv");

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a row set from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<RowSet, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

/// Parse CSV text already held in memory.
pub fn load_str(text: &str) -> Result<RowSet, LoadError> {
    load_reader(text.as_bytes())
}

/// Parse the dataset shipped with the binary.
pub fn load_bundled() -> Result<RowSet, LoadError> {
    load_str(BUNDLED_DATASET)
}

/// CSV layout: header row naming at least `Indicator`, `Year`, `Month` and
/// `Data Value`; other columns are ignored.
///
/// A record is kept only when its year is a four-digit integer, its month is one of
/// the twelve English month names and its value is a finite number. Every
/// other record is dropped without an error.
pub fn load_reader<R: Read>(input: R) -> Result<RowSet, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let columns = Columns::resolve(reader.headers()?)?;

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                log::debug!("CSV row {row_no}: unreadable record ({e})");
                dropped += 1;
                continue;
            }
        };

        match columns.parse_row(&record) {
            Ok(row) => rows.push(row),
            Err(reason) => {
                log::debug!("CSV row {row_no}: dropped, {reason}");
                dropped += 1;
            }
        }
    }

    log::info!("Loaded {} rows ({dropped} dropped)", rows.len());
    Ok(RowSet::new(rows))
}

// ---------------------------------------------------------------------------
// Header resolution
// ---------------------------------------------------------------------------

/// Column positions, looked up once from the header row.
struct Columns {
    category: usize,
    year: usize,
    month: usize,
    value: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };

        Ok(Columns {
            category: find(CATEGORY_COLUMN)?,
            year: find(YEAR_COLUMN)?,
            month: find(MONTH_COLUMN)?,
            value: find(VALUE_COLUMN)?,
        })
    }

    fn parse_row(&self, record: &StringRecord) -> Result<Row, String> {
        let value = parse_measurement(record.get(self.value))?;

        let year_field = record.get(self.year).unwrap_or("");
        let year = year_field
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("year '{year_field}' is not an integer"))?;
        if !YEAR_RANGE.contains(&year) {
            return Err(format!("year {year} is not a four-digit year"));
        }

        let month = record.get(self.month).unwrap_or("").parse::<Month>()?;

        Ok(Row {
            category: record.get(self.category).unwrap_or("").to_string(),
            year,
            month,
            value,
        })
    }
}

fn parse_measurement(field: Option<&str>) -> Result<f64, String> {
    let raw = field.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Err("measurement is blank".to_string());
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("measurement '{raw}' is not a finite number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "State,Year,Month,Indicator,Data Value\n";

    fn load(body: &str) -> RowSet {
        load_str(&format!("{HEADER}{body}")).unwrap()
    }

    #[test]
    fn keeps_valid_rows_in_source_order() {
        let rows = load("US,2020,January,A,10\nUS,2020,February,B,5.5\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.rows()[0].category, "A");
        assert_eq!(rows.rows()[0].month, Month::January);
        assert_eq!(rows.rows()[1].value, 5.5);
    }

    #[test]
    fn drops_blank_and_non_numeric_measurements() {
        let rows = load("US,2020,January,A,\nUS,2020,January,A,   \nUS,2020,January,A,abc\nUS,2020,January,A,7\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.rows()[0].value, 7.0);
    }

    #[test]
    fn drops_non_finite_measurements() {
        let rows = load("US,2020,January,A,NaN\nUS,2020,January,A,inf\nUS,2020,January,A,-infinity\n");
        assert!(rows.is_empty());
    }

    #[test]
    fn drops_unknown_months_and_bad_years() {
        let rows = load("US,2020,Janvier,A,1\nUS,twenty,March,A,1\nUS,2021,March,A,1\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.rows()[0].year, 2021);
    }

    #[test]
    fn drops_years_that_are_not_four_digits() {
        let rows = load("US,-3,March,A,1\nUS,201,March,A,1\nUS,10000,March,A,1\nUS,1999,March,A,1\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.rows()[0].year, 1999);
    }

    #[test]
    fn drops_short_records() {
        let rows = load("US,2020,January\nUS,2020,March,A,3\n");
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn quoted_fields_may_embed_delimiters() {
        let rows = load("US,2020,May,\"Opioids, synthetic\",\" 12.25 \"\n");
        assert_eq!(rows.rows()[0].category, "Opioids, synthetic");
        assert_eq!(rows.rows()[0].value, 12.25);
    }

    #[test]
    fn column_order_comes_from_header() {
        let rows = load_str("Data Value,Month,Indicator,Year\n4,June,X,2019\n").unwrap();
        assert_eq!(
            rows.rows()[0],
            Row {
                category: "X".into(),
                year: 2019,
                month: Month::June,
                value: 4.0,
            }
        );
    }

    #[test]
    fn missing_required_column_is_terminal() {
        let err = load_str("Year,Month,Indicator\n2020,May,A\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(VALUE_COLUMN)));
    }

    #[test]
    fn header_only_input_is_empty() {
        assert!(load("").is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }

    #[test]
    fn bundled_dataset_loads() {
        let rows = load_bundled().unwrap();
        assert!(!rows.is_empty());
        assert!(rows.rows().iter().all(|r| r.value.is_finite()));
    }
}
