pub mod assets;
pub mod engine;
mod frame;
pub mod periods;
pub mod profitability;

pub use assets::AssetMetrics;
pub use engine::AnalysisEngine;
pub use frame::{available_years, default_year};
pub use periods::{month_name, PeriodMetrics};
pub use profitability::ProfitabilityMetrics;

use crate::error::Result;
use crate::types::{AssetPnl, DailyPnl, MonthlyPnl, SummaryStats, WinLossStats};
use polars::prelude::DataFrame;

/// Summed PnL for months 1..=12, zero-filled; restricted to `year` when given
pub fn calculate_monthly_pnl(df: &DataFrame, year: Option<i32>) -> Result<Vec<MonthlyPnl>> {
    PeriodMetrics::monthly(df, year)
}

pub fn calculate_daily_pnl(df: &DataFrame) -> Result<Vec<DailyPnl>> {
    PeriodMetrics::daily(df)
}

/// `None` when the table has no instrument column
pub fn calculate_asset_pnl(df: &DataFrame) -> Result<Option<Vec<AssetPnl>>> {
    AssetMetrics::by_asset(df)
}

pub fn calculate_win_loss_stats(df: &DataFrame) -> Result<WinLossStats> {
    Ok(ProfitabilityMetrics::win_loss(&frame::pnl_values(df)?))
}

pub fn calculate_summary(df: &DataFrame) -> Result<SummaryStats> {
    Ok(ProfitabilityMetrics::summary(&frame::pnl_values(df)?))
}
