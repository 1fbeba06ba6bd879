// src/engines/metrics/engine.rs
use super::assets::AssetMetrics;
use super::frame::{available_years, default_year, pnl_values};
use super::periods::PeriodMetrics;
use super::profitability::ProfitabilityMetrics;
use crate::error::Result;
use crate::types::AnalysisReport;
use polars::prelude::*;

/// Runs every aggregation over one loaded table
#[derive(Debug, Default)]
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the full report. Any failing aggregation aborts the whole pass.
    /// Without an explicit `year` the monthly view uses the earliest year present.
    pub fn run(&self, df: &DataFrame, year: Option<i32>) -> Result<AnalysisReport> {
        let pnl = pnl_values(df)?;
        let summary = ProfitabilityMetrics::summary(&pnl);
        let win_loss = ProfitabilityMetrics::win_loss(&pnl);

        let years = available_years(df)?;
        let selected_year = year.or_else(|| default_year(&years));

        let monthly = PeriodMetrics::monthly(df, selected_year)?;
        let daily = PeriodMetrics::daily(df)?;
        let assets = AssetMetrics::by_asset(df)?;

        log::info!(
            "Analysed {} trades: total {:.2}, {} trading days, year {:?}",
            summary.trade_count,
            summary.total_pnl,
            daily.len(),
            selected_year
        );

        Ok(AnalysisReport {
            summary,
            win_loss,
            years,
            selected_year,
            monthly,
            daily,
            assets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PnlScopeError;
    use crate::testing::{sample_trades, trades};

    #[test]
    fn test_run_sample() {
        let report = AnalysisEngine::new().run(&sample_trades(), None).unwrap();

        assert_eq!(report.summary.total_pnl, 110.0);
        assert_eq!(report.years, vec![2024]);
        assert_eq!(report.selected_year, Some(2024));
        assert_eq!(report.monthly.len(), 12);
        assert_eq!(report.daily.len(), 3);
        assert_eq!(report.assets.as_ref().map(Vec::len), Some(2));
        assert_eq!(report.win_loss.profit_factor, 3.75);
    }

    #[test]
    fn test_explicit_year_overrides_default() {
        let df = trades(
            &["2023-05-01", "2024-05-01"],
            None,
            &[Some(1.0), Some(2.0)],
        );

        let report = AnalysisEngine::new().run(&df, Some(2024)).unwrap();
        assert_eq!(report.selected_year, Some(2024));
        assert_eq!(report.monthly[4].pnl, 2.0);

        let report = AnalysisEngine::new().run(&df, None).unwrap();
        assert_eq!(report.selected_year, Some(2023));
        assert_eq!(report.monthly[4].pnl, 1.0);
    }

    #[test]
    fn test_missing_pnl_aborts_pass() {
        let df = polars::df! { "Date" => &["2024-01-05"] }.unwrap();
        let result = AnalysisEngine::new().run(&df, None);
        assert!(matches!(result, Err(PnlScopeError::Schema(_))));
    }
}
