use super::frame::{trade_frame, DATE, MONTH, MONTH_NAME, PNL, YEAR};
use crate::error::{PnlScopeError, Result};
use crate::types::{DailyPnl, MonthlyPnl};
use chrono::{DateTime, Month};
use polars::prelude::*;

pub struct PeriodMetrics;

impl PeriodMetrics {
    /// Summed PnL for each of the 12 months, zero-filled, optionally restricted to one year
    pub fn monthly(df: &DataFrame, year: Option<i32>) -> Result<Vec<MonthlyPnl>> {
        let mut trades = trade_frame(df)?.with_columns([
            col(DATE).dt().year().alias(YEAR),
            col(DATE).dt().month().cast(DataType::Int32).alias(MONTH),
        ]);
        if let Some(year) = year {
            trades = trades.filter(col(YEAR).eq(lit(year)));
        }

        let by_month = trades.group_by([col(MONTH)]).agg([col(PNL).sum()]);

        let monthly = month_skeleton()?
            .lazy()
            .join(
                by_month,
                [col(MONTH)],
                [col(MONTH)],
                JoinArgs::new(JoinType::Left),
            )
            .with_column(col(PNL).fill_null(lit(0.0)))
            .sort([MONTH], SortMultipleOptions::default())
            .collect()?;

        let months = monthly.column(MONTH)?.cast(&DataType::Int32)?;
        let names = monthly.column(MONTH_NAME)?;
        let pnl = monthly.column(PNL)?.cast(&DataType::Float64)?;

        let rows = months
            .i32()?
            .into_iter()
            .zip(names.str()?.into_iter())
            .zip(pnl.f64()?.into_iter())
            .map(|((month, name), pnl)| MonthlyPnl {
                month: month.unwrap_or_default() as u32,
                month_name: name.unwrap_or_default().to_string(),
                pnl: pnl.unwrap_or(0.0),
            })
            .collect();

        Ok(rows)
    }

    /// Summed PnL per distinct `Date` value, ascending; intraday timestamps stay apart
    pub fn daily(df: &DataFrame) -> Result<Vec<DailyPnl>> {
        let daily = trade_frame(df)?
            .filter(col(DATE).is_not_null())
            .group_by([col(DATE)])
            .agg([col(PNL).sum()])
            .sort([DATE], SortMultipleOptions::default())
            .collect()?;

        let stamps = daily.column(DATE)?.cast(&DataType::Int64)?;
        let pnl = daily.column(PNL)?.cast(&DataType::Float64)?;

        stamps
            .i64()?
            .into_iter()
            .zip(pnl.f64()?.into_iter())
            .filter_map(|(ms, pnl)| ms.map(|ms| (ms, pnl.unwrap_or(0.0))))
            .map(|(ms, pnl)| {
                let date = DateTime::from_timestamp_millis(ms)
                    .map(|dt| dt.naive_utc())
                    .ok_or_else(|| PnlScopeError::Schema(format!("Date out of range: {} ms", ms)))?;
                Ok(DailyPnl { date, pnl })
            })
            .collect()
    }
}

/// English month name for 1..=12
pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string())
}

fn month_skeleton() -> PolarsResult<DataFrame> {
    let months: Vec<i32> = (1..=12).collect();
    let names: Vec<String> = (1..=12).map(month_name).collect();
    df! {
        MONTH => months,
        MONTH_NAME => names,
    }
}
