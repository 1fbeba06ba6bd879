use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Field name of the summed amount in every summary row
pub const PNL_FIELD: &str = "PnL";

/// One calendar month of summed PnL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPnl {
    pub month: u32,
    pub month_name: String,
    pub pnl: f64,
}

/// Summed PnL for one distinct `Date` value present in the data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPnl {
    pub date: NaiveDateTime,
    pub pnl: f64,
}

/// Summed PnL for one instrument label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPnl {
    pub asset: String,
    pub pnl: f64,
}

/// General statistics over the whole table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_pnl: f64,
    pub mean_pnl: f64,
    pub trade_count: usize,
}

/// Win/loss breakdown.
///
/// `profit_factor` is `f64::INFINITY` whenever the losing sum is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinLossStats {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub neutral_trades: usize,
    pub win_rate: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub max_win: f64,
    pub max_loss: f64,
    pub profit_factor: f64,
}

/// Every data product of one analysis pass
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub summary: SummaryStats,
    pub win_loss: WinLossStats,
    pub years: Vec<i32>,
    pub selected_year: Option<i32>,
    pub monthly: Vec<MonthlyPnl>,
    pub daily: Vec<DailyPnl>,
    /// `None` when the source has no instrument column
    pub assets: Option<Vec<AssetPnl>>,
}
