use super::frame::{trade_frame, ASSET, PNL};
use crate::data::{CanonicalColumn, DataValidator};
use crate::error::Result;
use crate::types::AssetPnl;
use polars::prelude::*;

pub struct AssetMetrics;

impl AssetMetrics {
    /// Summed PnL per instrument label, ascending by label.
    ///
    /// Returns `Ok(None)` when the table has no `Asset` column at all.
    pub fn by_asset(df: &DataFrame) -> Result<Option<Vec<AssetPnl>>> {
        let trades = trade_frame(df)?;
        if !DataValidator::has_column(df, CanonicalColumn::Asset) {
            return Ok(None);
        }

        let grouped = trades
            .filter(col(ASSET).is_not_null())
            .group_by([col(ASSET).cast(DataType::String)])
            .agg([col(PNL).sum()])
            .sort([ASSET], SortMultipleOptions::default())
            .collect()?;

        let assets = grouped.column(ASSET)?;
        let pnl = grouped.column(PNL)?.cast(&DataType::Float64)?;

        let rows = assets
            .str()?
            .into_iter()
            .zip(pnl.f64()?.into_iter())
            .filter_map(|(asset, pnl)| {
                asset.map(|a| AssetPnl {
                    asset: a.to_string(),
                    pnl: pnl.unwrap_or(0.0),
                })
            })
            .collect();

        Ok(Some(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PnlScopeError;
    use crate::testing::{sample_trades, trades};

    #[test]
    fn test_sums_per_asset() {
        let assets = AssetMetrics::by_asset(&sample_trades()).unwrap().unwrap();

        assert_eq!(
            assets,
            vec![
                AssetPnl { asset: "EURUSD".to_string(), pnl: 60.0 },
                AssetPnl { asset: "GBPUSD".to_string(), pnl: 50.0 },
            ]
        );
    }

    #[test]
    fn test_labels_sorted() {
        let df = trades(
            &["2024-01-01", "2024-01-02", "2024-01-03"],
            Some(&["XAUUSD", "BTCUSD", "XAUUSD"]),
            &[Some(1.0), Some(2.0), Some(3.0)],
        );

        let labels: Vec<String> = AssetMetrics::by_asset(&df)
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|a| a.asset)
            .collect();
        assert_eq!(labels, vec!["BTCUSD", "XAUUSD"]);
    }

    #[test]
    fn test_no_asset_column_is_not_applicable() {
        let df = trades(&["2024-01-01"], None, &[Some(1.0)]);
        assert_eq!(AssetMetrics::by_asset(&df).unwrap(), None);
    }

    #[test]
    fn test_missing_pnl_is_schema_error() {
        let df = polars::df! { "Asset" => &["EURUSD"] }.unwrap();
        assert!(matches!(AssetMetrics::by_asset(&df), Err(PnlScopeError::Schema(_))));
    }
}
