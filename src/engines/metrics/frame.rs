use crate::data::{CanonicalColumn, DataValidator};
use crate::error::Result;
use polars::prelude::*;

pub(crate) const DATE: &str = CanonicalColumn::Date.as_str();
pub(crate) const ASSET: &str = CanonicalColumn::Asset.as_str();
pub(crate) const PNL: &str = CanonicalColumn::PnL.as_str();
pub(crate) const YEAR: &str = "Year";
pub(crate) const MONTH: &str = "Month";
pub(crate) const MONTH_NAME: &str = "Month_Name";

/// Validated lazy view of a trade table: `Date` as datetime, `PnL` as
/// `Float64` with null and NaN amounts counted as zero.
pub(crate) fn trade_frame(df: &DataFrame) -> Result<LazyFrame> {
    DataValidator::validate_trades(df)?;

    let date = match df.column(DATE)?.dtype() {
        DataType::Date => col(DATE).cast(DataType::Datetime(TimeUnit::Milliseconds, None)),
        _ => col(DATE),
    };
    let pnl = col(PNL)
        .cast(DataType::Float64)
        .fill_nan(lit(0.0))
        .fill_null(lit(0.0));

    Ok(df.clone().lazy().with_columns([date, pnl]))
}

/// PnL amounts in row order
pub(crate) fn pnl_values(df: &DataFrame) -> Result<Vec<f64>> {
    let frame = trade_frame(df)?.select([col(PNL)]).collect()?;
    let pnl = frame.column(PNL)?.f64()?;
    Ok(pnl.into_iter().map(|v| v.unwrap_or(0.0)).collect())
}

/// Years present in the `Date` column, ascending
pub fn available_years(df: &DataFrame) -> Result<Vec<i32>> {
    let frame = trade_frame(df)?
        .select([col(DATE).dt().year().alias(YEAR)])
        .collect()?;
    let years = frame.column(YEAR)?.cast(&DataType::Int32)?;

    let mut unique: Vec<i32> = years.i32()?.into_iter().flatten().collect();
    unique.sort_unstable();
    unique.dedup();
    Ok(unique)
}

/// The year the monthly view starts on: the earliest one present
pub fn default_year(years: &[i32]) -> Option<i32> {
    years.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PnlScopeError;
    use crate::testing::trades;

    #[test]
    fn test_pnl_values_treat_missing_as_zero() {
        let df = trades(
            &["2024-01-05", "2024-01-06", "2024-01-07"],
            None,
            &[Some(1.5), None, Some(f64::NAN)],
        );
        assert_eq!(pnl_values(&df).unwrap(), vec![1.5, 0.0, 0.0]);
    }

    #[test]
    fn test_available_years() {
        let df = trades(
            &["2025-03-01", "2023-07-14", "2025-01-02", "2024-12-31"],
            None,
            &[Some(1.0), Some(1.0), Some(1.0), Some(1.0)],
        );
        let years = available_years(&df).unwrap();
        assert_eq!(years, vec![2023, 2024, 2025]);
        assert_eq!(default_year(&years), Some(2023));
        assert_eq!(default_year(&[]), None);
    }

    #[test]
    fn test_frame_requires_schema() {
        let df = polars::df! { "Date" => &["2024-01-05"] }.unwrap();
        assert!(matches!(trade_frame(&df), Err(PnlScopeError::Schema(_))));
    }
}
