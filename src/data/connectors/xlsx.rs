use crate::error::{PnlScopeError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use polars::prelude::*;
use std::path::Path;

pub struct XlsxConnector;

/// Inferred storage class of a worksheet column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellClass {
    Numeric,
    DateTime,
    Text,
}

impl XlsxConnector {
    /// Load a worksheet into a DataFrame, first row is the header
    pub fn load<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<DataFrame> {
        let mut workbook = open_workbook_auto(path.as_ref())
            .map_err(|e| PnlScopeError::Format(format!("Failed to open workbook: {}", e)))?;

        let sheet_name = match sheet {
            Some(name) => name.to_string(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| PnlScopeError::Format("No sheets found in workbook".to_string()))?,
        };

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            PnlScopeError::Format(format!("Failed to read sheet '{}': {}", sheet_name, e))
        })?;

        log::debug!(
            "Sheet '{}' of {} spans {:?}",
            sheet_name,
            path.as_ref().display(),
            range.get_size()
        );

        Self::range_to_frame(&range)
    }

    /// Convert a cell range into typed columns
    pub fn range_to_frame(range: &Range<Data>) -> Result<DataFrame> {
        let mut rows = range.rows();
        let header = rows
            .next()
            .ok_or_else(|| PnlScopeError::Format("Worksheet is empty".to_string()))?;

        let names: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell_text(cell) {
                Some(name) if !name.is_empty() => name,
                _ => format!("column_{}", i),
            })
            .collect();

        let body: Vec<&[Data]> = rows.collect();
        let mut columns = Vec::with_capacity(names.len());

        for (idx, name) in names.iter().enumerate() {
            let cells: Vec<&Data> = body.iter().map(|row| row.get(idx).unwrap_or(&Data::Empty)).collect();
            columns.push(Self::build_column(name, &cells)?);
        }

        DataFrame::new(columns)
            .map_err(|e| PnlScopeError::Format(format!("Invalid worksheet layout: {}", e)))
    }

    fn build_column(name: &str, cells: &[&Data]) -> Result<Column> {
        let column = match classify(cells) {
            CellClass::Numeric => {
                let values: Vec<Option<f64>> = cells.iter().map(|c| cell_f64(c)).collect();
                Column::new(name.into(), values)
            }
            CellClass::DateTime => {
                let millis: Vec<Option<i64>> = cells
                    .iter()
                    .map(|c| match c {
                        Data::DateTime(dt) => dt.as_datetime().map(|v| v.and_utc().timestamp_millis()),
                        _ => None,
                    })
                    .collect();
                Series::new(name.into(), millis)
                    .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
                    .into_column()
            }
            CellClass::Text => {
                let values: Vec<Option<String>> = cells.iter().map(|c| cell_text(c)).collect();
                Column::new(name.into(), values)
            }
        };
        Ok(column)
    }
}

fn classify(cells: &[&Data]) -> CellClass {
    let mut class = None;
    for cell in cells {
        let current = match cell {
            Data::Empty => continue,
            Data::Float(_) | Data::Int(_) => CellClass::Numeric,
            Data::DateTime(_) => CellClass::DateTime,
            _ => return CellClass::Text,
        };
        match class {
            None => class = Some(current),
            Some(seen) if seen != current => return CellClass::Text,
            _ => {}
        }
    }
    // An all-empty column carries no type information
    class.unwrap_or(CellClass::Text)
}

fn cell_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        _ => None,
    }
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.trim().to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|v| v.format("%Y-%m-%d %H:%M:%S").to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};
    use chrono::NaiveDate;

    fn sample_range() -> Range<Data> {
        let mut range = Range::new((0, 0), (3, 2));
        range.set_value((0, 0), Data::String("Heure".to_string()));
        range.set_value((0, 1), Data::String("Paire de cc".to_string()));
        range.set_value((0, 2), Data::String("Montant".to_string()));

        range.set_value((1, 0), Data::String("2024-01-05".to_string()));
        range.set_value((1, 1), Data::String("EURUSD".to_string()));
        range.set_value((1, 2), Data::Float(100.0));

        range.set_value((2, 0), Data::String("2024-01-20".to_string()));
        range.set_value((2, 1), Data::String("EURUSD".to_string()));
        range.set_value((2, 2), Data::Int(-40));

        range.set_value((3, 0), Data::String("2024-02-10".to_string()));
        range.set_value((3, 1), Data::String("GBPUSD".to_string()));
        range
    }

    #[test]
    fn test_range_to_frame_types() {
        let df = XlsxConnector::range_to_frame(&sample_range()).unwrap();

        assert_eq!(df.height(), 3);
        assert_eq!(df.column("Montant").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("Heure").unwrap().dtype(), &DataType::String);

        let pnl = df.column("Montant").unwrap().f64().unwrap();
        assert_eq!(pnl.get(0), Some(100.0));
        assert_eq!(pnl.get(1), Some(-40.0));
        assert_eq!(pnl.get(2), None);
    }

    #[test]
    fn test_mixed_column_falls_back_to_text() {
        let mut range = Range::new((0, 0), (2, 0));
        range.set_value((0, 0), Data::String("Montant".to_string()));
        range.set_value((1, 0), Data::Float(1.5));
        range.set_value((2, 0), Data::String("n/a".to_string()));

        let df = XlsxConnector::range_to_frame(&range).unwrap();
        let col = df.column("Montant").unwrap().str().unwrap();
        assert_eq!(col.get(0), Some("1.5"));
        assert_eq!(col.get(1), Some("n/a"));
    }

    fn excel_datetime(serial: f64) -> Data {
        Data::DateTime(ExcelDateTime::new(serial, ExcelDateTimeType::DateTime, false))
    }

    #[test]
    fn test_datetime_cells_become_datetime_column() {
        let mut range = Range::new((0, 0), (3, 0));
        range.set_value((0, 0), Data::String("Heure".to_string()));
        // 45296.5 is 2024-01-05 12:00
        range.set_value((1, 0), excel_datetime(45_296.5));
        range.set_value((3, 0), excel_datetime(45_297.0));

        let df = XlsxConnector::range_to_frame(&range).unwrap();
        let heure = df.column("Heure").unwrap();
        assert_eq!(heure.dtype(), &DataType::Datetime(TimeUnit::Milliseconds, None));

        let millis = heure.cast(&DataType::Int64).unwrap();
        let millis = millis.i64().unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis();
        assert_eq!(millis.get(0), Some(expected));
        assert_eq!(millis.get(1), None);
        assert_eq!(millis.get(2), Some(expected + 12 * 3_600_000));
    }

    #[test]
    fn test_mixed_datetime_and_number_falls_back_to_text() {
        let mut range = Range::new((0, 0), (2, 0));
        range.set_value((0, 0), Data::String("Heure".to_string()));
        range.set_value((1, 0), excel_datetime(45_296.5));
        range.set_value((2, 0), Data::Float(7.0));

        let df = XlsxConnector::range_to_frame(&range).unwrap();
        let col = df.column("Heure").unwrap().str().unwrap();
        assert_eq!(col.get(0), Some("2024-01-05 12:00:00"));
        assert_eq!(col.get(1), Some("7"));
    }

    #[test]
    fn test_missing_workbook_is_format_error() {
        let result = XlsxConnector::load("/nonexistent/trades.xlsx", None);
        assert!(matches!(result, Err(PnlScopeError::Format(_))));
    }
}
