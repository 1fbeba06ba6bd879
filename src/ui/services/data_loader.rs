use crate::config::LoaderConfig;
use crate::data::{DataPreview, TradeLoader};
use polars::prelude::*;
use std::path::Path;

pub struct DataLoader;

impl DataLoader {
    /// Load a trade log and return the normalized DataFrame with its preview
    pub fn load_trades(path: &Path, config: &LoaderConfig) -> Result<(DataFrame, DataPreview), String> {
        let df = TradeLoader::new(config.clone())
            .load(path)
            .map_err(|e| e.to_string())?;

        let preview = DataPreview::from_frame(path, &df)
            .map_err(|e| e.to_string())?;

        Ok((df, preview))
    }
}
