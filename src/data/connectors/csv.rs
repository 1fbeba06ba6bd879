use crate::config::LoaderConfig;
use crate::error::{PnlScopeError, Result};
use polars::prelude::*;
use std::path::Path;

pub struct CsvConnector;

impl CsvConnector {
    /// Load a delimited trade log into a DataFrame
    pub fn load<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<DataFrame> {
        let separator = config.separator_byte()?;
        let decimal_comma = config.decimal_comma;

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .map_parse_options(|opts| {
                opts.with_separator(separator)
                    .with_decimal_comma(decimal_comma)
            })
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))
            .map_err(|e| PnlScopeError::Format(format!("Failed to open CSV: {}", e)))?
            .finish()
            .map_err(|e| PnlScopeError::Format(format!("Failed to read CSV: {}", e)))?;

        log::debug!(
            "Read {} rows x {} columns from {}",
            df.height(),
            df.width(),
            path.as_ref().display()
        );

        Ok(df)
    }
}
