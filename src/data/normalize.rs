use super::connectors::{is_numeric, CanonicalColumn};
use crate::error::{PnlScopeError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::collections::BTreeMap;

/// Days between the spreadsheet epoch (1899-12-30) and the Unix epoch
const SERIAL_EPOCH_OFFSET_DAYS: f64 = 25_569.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;
/// Serial day of 9999-12-31, the last date a spreadsheet can hold
const MAX_SERIAL_DAY: f64 = 2_958_465.0;

pub const DATE_UNIT: TimeUnit = TimeUnit::Milliseconds;

/// Declarative source-name -> canonical-name mapping, applied per key only
/// when the source column is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    entries: BTreeMap<String, String>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::new(default_column_mapping())
    }
}

pub fn default_column_mapping() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Heure".to_string(), CanonicalColumn::Date.as_str().to_string()),
        ("Paire de cc".to_string(), CanonicalColumn::Asset.as_str().to_string()),
        ("Montant".to_string(), CanonicalColumn::PnL.as_str().to_string()),
    ])
}

impl ColumnMapping {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Renames that would fire against the given column names
    pub fn applicable<'a>(&'a self, columns: &[String]) -> Vec<(&'a str, &'a str)> {
        self.entries
            .iter()
            .filter(|(source, _)| columns.iter().any(|c| c == *source))
            .map(|(source, target)| (source.as_str(), target.as_str()))
            .collect()
    }

    pub fn apply(&self, mut df: DataFrame) -> Result<DataFrame> {
        let columns: Vec<String> = df.get_column_names().iter().map(|c| c.to_string()).collect();

        for (source, target) in self.applicable(&columns) {
            if source == target {
                continue;
            }
            if columns.iter().any(|c| c == target) {
                return Err(PnlScopeError::Schema(format!(
                    "Cannot rename '{}' to '{}': column already exists",
                    source, target
                )));
            }
            df.rename(source, target.into())?;
            log::debug!("Renamed column '{}' -> '{}'", source, target);
        }

        Ok(df)
    }
}

/// Turns the canonical `Date` column into a millisecond `Datetime` column
#[derive(Debug, Clone)]
pub struct DateParser {
    formats: Vec<String>,
}

impl DateParser {
    pub fn new(formats: Vec<String>) -> Self {
        Self { formats }
    }

    pub fn parse_column(&self, mut df: DataFrame) -> Result<DataFrame> {
        let name = CanonicalColumn::Date.as_str();
        if !df.get_column_names().iter().any(|c| c.as_str() == name) {
            return Ok(df);
        }

        let column = df.column(name)?;
        let parsed = match column.dtype() {
            DataType::Datetime(_, tz) => column.cast(&DataType::Datetime(DATE_UNIT, tz.clone()))?,
            DataType::Date => column.cast(&DataType::Datetime(DATE_UNIT, None))?,
            DataType::String => self.parse_text(column)?,
            dtype if is_numeric(dtype) => parse_serial(column)?,
            other => {
                return Err(PnlScopeError::Schema(format!(
                    "Column '{}' cannot hold dates, found {:?}",
                    name, other
                )))
            }
        };

        df.with_column(parsed)?;
        Ok(df)
    }

    fn parse_text(&self, column: &Column) -> Result<Column> {
        let text = column.str()?;
        let mut millis = Vec::with_capacity(text.len());

        for (idx, value) in text.into_iter().enumerate() {
            let parsed = match value.map(str::trim) {
                None | Some("") => None,
                Some(raw) => {
                    let dt = self.parse_value(raw).ok_or_else(|| PnlScopeError::Parse {
                        row: idx + 1,
                        value: raw.to_string(),
                    })?;
                    Some(dt.and_utc().timestamp_millis())
                }
            };
            millis.push(parsed);
        }

        Ok(Series::new(column.name().clone(), millis)
            .cast(&DataType::Datetime(DATE_UNIT, None))?
            .into_column())
    }

    /// Parse one textual timestamp, RFC 3339 first, then each configured format
    pub fn parse_value(&self, raw: &str) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_local());
        }

        self.formats.iter().find_map(|fmt| {
            NaiveDateTime::parse_from_str(raw, fmt)
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(raw, fmt)
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                })
        })
    }
}

/// Spreadsheet serial day numbers: integer part is the day, fraction the time of day
fn parse_serial(column: &Column) -> Result<Column> {
    let values = column.cast(&DataType::Float64)?;
    let values = values.f64()?;
    let mut millis = Vec::with_capacity(values.len());

    for (idx, value) in values.into_iter().enumerate() {
        let parsed = match value {
            None => None,
            Some(serial) if (0.0..MAX_SERIAL_DAY + 1.0).contains(&serial) => {
                Some(((serial - SERIAL_EPOCH_OFFSET_DAYS) * MILLIS_PER_DAY).round() as i64)
            }
            Some(serial) => {
                return Err(PnlScopeError::Parse {
                    row: idx + 1,
                    value: serial.to_string(),
                })
            }
        };
        millis.push(parsed);
    }

    Ok(Series::new(column.name().clone(), millis)
        .cast(&DataType::Datetime(DATE_UNIT, None))?
        .into_column())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoaderConfig;
    use polars::df;

    fn parser() -> DateParser {
        DateParser::new(LoaderConfig::default().date_formats)
    }

    fn first_date(df: &DataFrame) -> NaiveDateTime {
        let millis = df
            .column("Date")
            .unwrap()
            .cast(&DataType::Int64)
            .unwrap()
            .i64()
            .unwrap()
            .get(0)
            .unwrap();
        DateTime::from_timestamp_millis(millis).unwrap().naive_utc()
    }

    #[test]
    fn test_mapping_renames_present_columns_only() {
        let df = df! {
            "Heure" => &["2024-01-05"],
            "Montant" => &[100.0],
            "Commentaire" => &["note"],
        }
        .unwrap();

        let df = ColumnMapping::default().apply(df).unwrap();
        let cols: Vec<String> = df.get_column_names().iter().map(|c| c.to_string()).collect();

        assert_eq!(cols, vec!["Date", "PnL", "Commentaire"]);
    }

    #[test]
    fn test_mapping_on_canonical_file_is_noop() {
        let df = df! {
            "Date" => &["2024-01-05"],
            "PnL" => &[100.0],
        }
        .unwrap();

        let renamed = ColumnMapping::default().apply(df.clone()).unwrap();
        assert_eq!(renamed.get_column_names(), df.get_column_names());
    }

    #[test]
    fn test_mapping_conflict_is_schema_error() {
        let df = df! {
            "Heure" => &["2024-01-05"],
            "Date" => &["2024-01-06"],
        }
        .unwrap();

        let result = ColumnMapping::default().apply(df);
        assert!(matches!(result, Err(PnlScopeError::Schema(_))));
    }

    #[test]
    fn test_parse_text_dates() {
        let df = df! {
            "Date" => &["2024-01-05 14:30:00", "05/02/2024", ""],
            "PnL" => &[1.0, 2.0, 3.0],
        }
        .unwrap();

        let df = parser().parse_column(df).unwrap();
        let date = df.column("Date").unwrap();

        assert_eq!(date.dtype(), &DataType::Datetime(DATE_UNIT, None));
        assert_eq!(date.null_count(), 1);
        assert_eq!(
            first_date(&df),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(14, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_day_first_slash_dates() {
        let parsed = parser().parse_value("05/02/2024").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 2, 5).unwrap());
    }

    #[test]
    fn test_rfc3339_keeps_wall_clock() {
        let parsed = parser().parse_value("2024-03-01T23:30:00+02:00").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(23, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_non_date_text_is_parse_error() {
        let df = df! {
            "Date" => &["2024-01-05", "yesterday"],
        }
        .unwrap();

        match parser().parse_column(df) {
            Err(PnlScopeError::Parse { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_serial_dates() {
        // 45296.5 is 2024-01-05 12:00
        let df = df! {
            "Date" => &[45_296.5],
        }
        .unwrap();

        let df = parser().parse_column(df).unwrap();
        assert_eq!(
            first_date(&df),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_epoch_seconds_are_not_serial_dates() {
        let df = df! {
            "Date" => &[1_704_448_800i64, 1_704_535_200],
        }
        .unwrap();

        match parser().parse_column(df) {
            Err(PnlScopeError::Parse { row, value }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "1704448800");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_serial_is_parse_error() {
        let df = df! {
            "Date" => &[45_296.0, -1.0],
        }
        .unwrap();

        assert!(matches!(
            parser().parse_column(df),
            Err(PnlScopeError::Parse { row: 2, .. })
        ));
    }

    #[test]
    fn test_table_without_date_passes_through() {
        let df = df! {
            "PnL" => &[1.0],
        }
        .unwrap();

        let parsed = parser().parse_column(df.clone()).unwrap();
        assert!(parsed.equals(&df));
    }
}
