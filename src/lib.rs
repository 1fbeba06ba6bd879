pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod report;
pub mod types;
pub mod ui;

#[cfg(test)]
mod testing;

pub use data::TradeLoader;
pub use engines::metrics::{
    calculate_asset_pnl, calculate_daily_pnl, calculate_monthly_pnl, calculate_summary,
    calculate_win_loss_stats, AnalysisEngine,
};
pub use error::{PnlScopeError, Result};
pub use report::{format_percentage, format_pnl, format_profit_factor, BarChart};
pub use types::{AnalysisReport, AssetPnl, DailyPnl, MonthlyPnl, SummaryStats, WinLossStats};
