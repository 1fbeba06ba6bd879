use super::types::CanonicalColumn;
use crate::error::{PnlScopeError, Result};
use polars::prelude::*;

pub struct DataValidator;

impl DataValidator {
    /// Validate that a DataFrame carries the canonical `Date` and `PnL` columns
    /// with usable types.
    pub fn validate_trades(df: &DataFrame) -> Result<()> {
        for required in CanonicalColumn::required() {
            if !Self::has_column(df, required) {
                return Err(PnlScopeError::Schema(format!(
                    "Missing required column: {} (found: {:?})",
                    required.as_str(),
                    df.get_column_names()
                )));
            }
        }

        let pnl = df.column(CanonicalColumn::PnL.as_str())?;
        if !is_numeric(pnl.dtype()) {
            return Err(PnlScopeError::Schema(format!(
                "Column '{}' must be numeric, found {:?}",
                CanonicalColumn::PnL.as_str(),
                pnl.dtype()
            )));
        }

        let date = df.column(CanonicalColumn::Date.as_str())?;
        if !matches!(date.dtype(), DataType::Datetime(_, _) | DataType::Date) {
            return Err(PnlScopeError::Schema(format!(
                "Column '{}' must hold dates, found {:?}",
                CanonicalColumn::Date.as_str(),
                date.dtype()
            )));
        }

        Ok(())
    }

    pub fn has_column(df: &DataFrame, column: CanonicalColumn) -> bool {
        df.get_column_names()
            .iter()
            .any(|c| c.as_str() == column.as_str())
    }

    /// Check for null values in every column
    pub fn check_nulls(df: &DataFrame) -> Result<Vec<(String, usize)>> {
        let mut null_report = Vec::new();

        for col_name in df.get_column_names() {
            let series = df.column(col_name)?;
            let null_count = series.null_count();
            if null_count > 0 {
                null_report.push((col_name.to_string(), null_count));
            }
        }

        Ok(null_report)
    }
}

pub(crate) fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::Int16
            | DataType::Int8
            | DataType::UInt64
            | DataType::UInt32
            | DataType::UInt16
            | DataType::UInt8
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn dated(df: DataFrame) -> DataFrame {
        df.lazy()
            .with_column(col("Date").cast(DataType::Datetime(TimeUnit::Milliseconds, None)))
            .collect()
            .unwrap()
    }

    #[test]
    fn test_validate_good_data() {
        let df = dated(df! {
            "Date" => &[0i64, 86_400_000],
            "PnL" => &[10.0, -5.0],
        }
        .unwrap());

        assert!(DataValidator::validate_trades(&df).is_ok());
    }

    #[test]
    fn test_validate_missing_pnl() {
        let df = dated(df! {
            "Date" => &[0i64, 86_400_000],
            "Asset" => &["EURUSD", "GBPUSD"],
        }
        .unwrap());

        let result = DataValidator::validate_trades(&df);
        assert!(matches!(result, Err(PnlScopeError::Schema(_))));
    }

    #[test]
    fn test_validate_text_pnl() {
        let df = dated(df! {
            "Date" => &[0i64],
            "PnL" => &["ten"],
        }
        .unwrap());

        let result = DataValidator::validate_trades(&df);
        assert!(matches!(result, Err(PnlScopeError::Schema(_))));
    }

    #[test]
    fn test_validate_unparsed_dates() {
        let df = df! {
            "Date" => &["2024-01-05"],
            "PnL" => &[1.0],
        }
        .unwrap();

        let result = DataValidator::validate_trades(&df);
        assert!(matches!(result, Err(PnlScopeError::Schema(_))));
    }

    #[test]
    fn test_check_nulls() {
        let df = df! {
            "PnL" => &[Some(1.0), None, None],
            "Asset" => &[Some("A"), Some("B"), Some("C")],
        }
        .unwrap();

        let report = DataValidator::check_nulls(&df).unwrap();
        assert_eq!(report, vec![("PnL".to_string(), 2)]);
    }
}
