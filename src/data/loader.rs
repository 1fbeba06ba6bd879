use super::connectors::{CsvConnector, DataValidator, TradeFileFormat, XlsxConnector};
use super::normalize::{ColumnMapping, DateParser};
use crate::config::LoaderConfig;
use crate::error::Result;
use polars::prelude::*;
use std::path::Path;

/// Reads a trade log and brings it to the canonical schema
pub struct TradeLoader {
    config: LoaderConfig,
    mapping: ColumnMapping,
    dates: DateParser,
}

impl Default for TradeLoader {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

impl TradeLoader {
    pub fn new(config: LoaderConfig) -> Self {
        let mapping = ColumnMapping::new(config.mapping());
        let dates = DateParser::new(config.date_formats.clone());
        Self {
            config,
            mapping,
            dates,
        }
    }

    /// Load, rename and date-parse a trade log. The format follows the file extension.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<DataFrame> {
        let path = path.as_ref();
        let format = TradeFileFormat::from_path(path);

        let raw = match format {
            TradeFileFormat::Csv => CsvConnector::load(path, &self.config)?,
            TradeFileFormat::Xlsx => XlsxConnector::load(path, self.config.sheet.as_deref())?,
        };

        let df = self.normalize(raw)?;

        log::info!(
            "Loaded {} trades ({} columns) from {} as {:?}",
            df.height(),
            df.width(),
            path.display(),
            format
        );

        let null_report = DataValidator::check_nulls(&df)?;
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        Ok(df)
    }

    /// Apply the column mapping, then parse the canonical date column
    pub fn normalize(&self, df: DataFrame) -> Result<DataFrame> {
        let renamed = self.mapping.apply(df)?;
        self.dates.parse_column(renamed)
    }
}
