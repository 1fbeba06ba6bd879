//! Table builders shared by unit tests.

use crate::data::TradeLoader;
use polars::prelude::*;

/// Build a normalized trade table from text dates, optional assets and amounts
pub(crate) fn trades(dates: &[&str], assets: Option<&[&str]>, pnl: &[Option<f64>]) -> DataFrame {
    let mut columns = vec![Column::new("Date".into(), dates)];
    if let Some(assets) = assets {
        columns.push(Column::new("Asset".into(), assets));
    }
    columns.push(Column::new("PnL".into(), pnl));

    let df = DataFrame::new(columns).unwrap();
    TradeLoader::default().normalize(df).unwrap()
}

/// The three-trade log used across the scenario tests
pub(crate) fn sample_trades() -> DataFrame {
    trades(
        &["2024-01-05", "2024-01-20", "2024-02-10"],
        Some(&["EURUSD", "EURUSD", "GBPUSD"]),
        &[Some(100.0), Some(-40.0), Some(50.0)],
    )
}
