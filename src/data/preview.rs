use super::connectors::{is_numeric, CanonicalColumn, ColumnStats, DataPreview, DatasetMetadata, DataValidator};
use crate::error::Result;
use chrono::{DateTime, NaiveDateTime};
use polars::prelude::*;
use std::path::Path;

const PREVIEW_ROWS: usize = 10;

impl DataPreview {
    /// Build the raw data view shown next to the analysis
    pub fn from_frame<P: AsRef<Path>>(path: P, df: &DataFrame) -> Result<Self> {
        let metadata = DatasetMetadata::from_frame(path, df)?;

        let num_preview_rows = PREVIEW_ROWS.min(df.height());
        let mut first_rows = Vec::with_capacity(num_preview_rows);

        for i in 0..num_preview_rows {
            let mut row = Vec::new();
            for col_name in df.get_column_names() {
                let series = df.column(col_name)?;
                let value = match series.dtype() {
                    DataType::Float64 | DataType::Float32 => {
                        let s_f64 = series.cast(&DataType::Float64)?;
                        s_f64.f64()?.get(i).map(|v| format!("{:.2}", v))
                    }
                    DataType::String => series.str()?.get(i).map(|v| v.to_string()),
                    _ => {
                        let text = series.cast(&DataType::String)?;
                        text.str()?.get(i).map(|v| v.to_string())
                    }
                };
                row.push(value.unwrap_or_else(|| "null".to_string()));
            }
            first_rows.push(row);
        }

        let mut column_stats = Vec::new();
        for col_name in df.get_column_names() {
            let series = df.column(col_name)?;

            let (min, max, mean) = if is_numeric(series.dtype()) {
                let s = series.cast(&DataType::Float64)?;
                let f = s.f64()?;
                (f.min(), f.max(), f.mean())
            } else {
                (None, None, None)
            };

            column_stats.push(ColumnStats {
                name: col_name.to_string(),
                dtype: format!("{:?}", series.dtype()),
                null_count: series.null_count(),
                min,
                max,
                mean,
            });
        }

        Ok(DataPreview {
            metadata,
            first_rows,
            column_stats,
        })
    }
}

impl DatasetMetadata {
    pub fn from_frame<P: AsRef<Path>>(path: P, df: &DataFrame) -> Result<Self> {
        let columns: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();

        Ok(DatasetMetadata {
            file_path: path.as_ref().to_string_lossy().to_string(),
            num_rows: df.height(),
            num_columns: df.width(),
            columns,
            has_asset: DataValidator::has_column(df, CanonicalColumn::Asset),
            date_range: date_range(df)?,
        })
    }
}

fn date_range(df: &DataFrame) -> Result<Option<(NaiveDateTime, NaiveDateTime)>> {
    if !DataValidator::has_column(df, CanonicalColumn::Date) {
        return Ok(None);
    }

    let date = df.column(CanonicalColumn::Date.as_str())?;
    if !matches!(date.dtype(), DataType::Datetime(_, _)) {
        return Ok(None);
    }

    let millis = date
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
        .cast(&DataType::Int64)?;
    let millis = millis.i64()?;

    let to_naive = |ms: i64| DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc());
    Ok(match (millis.min().and_then(to_naive), millis.max().and_then(to_naive)) {
        (Some(first), Some(last)) => Some((first, last)),
        _ => None,
    })
}
