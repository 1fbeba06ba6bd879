use super::traits::ConfigSection;
use crate::data::normalize::default_column_mapping;
use crate::data::CanonicalColumn;
use crate::error::PnlScopeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub date_formats: Vec<String>,
    pub sheet: Option<String>,
    pub separator: String,
    pub decimal_comma: bool,
    pub column_mapping: Vec<ColumnRename>,
}

/// One source-name -> canonical-name rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRename {
    pub source: String,
    pub target: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            // Slash dates are read day-first
            date_formats: [
                "%Y-%m-%d %H:%M:%S",
                "%Y-%m-%d %H:%M:%S%.f",
                "%Y-%m-%dT%H:%M:%S%.f",
                "%Y-%m-%d %H:%M",
                "%Y-%m-%d",
                "%d/%m/%Y %H:%M:%S",
                "%d/%m/%Y %H:%M",
                "%d/%m/%Y",
                "%Y/%m/%d %H:%M:%S",
                "%Y/%m/%d",
                "%d.%m.%Y %H:%M:%S",
                "%d.%m.%Y",
            ]
            .iter()
            .map(|f| f.to_string())
            .collect(),
            sheet: None,
            separator: ",".to_string(),
            decimal_comma: false,
            column_mapping: default_column_mapping()
                .into_iter()
                .map(|(source, target)| ColumnRename { source, target })
                .collect(),
        }
    }
}

impl LoaderConfig {
    pub fn mapping(&self) -> BTreeMap<String, String> {
        self.column_mapping
            .iter()
            .map(|r| (r.source.clone(), r.target.clone()))
            .collect()
    }

    pub fn separator_byte(&self) -> Result<u8, PnlScopeError> {
        match self.separator.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(PnlScopeError::Configuration(format!(
                "CSV separator must be a single ASCII character, got '{}'",
                self.separator
            ))),
        }
    }
}

impl ConfigSection for LoaderConfig {
    fn section_name() -> &'static str {
        "loader"
    }

    fn validate(&self) -> Result<(), PnlScopeError> {
        if self.date_formats.is_empty() {
            return Err(PnlScopeError::Configuration(
                "At least one date format is required".to_string(),
            ));
        }
        self.separator_byte()?;

        for rename in &self.column_mapping {
            if CanonicalColumn::from_name(&rename.target).is_none() {
                return Err(PnlScopeError::Configuration(format!(
                    "Column '{}' maps to unknown canonical column '{}'",
                    rename.source, rename.target
                )));
            }
        }
        Ok(())
    }
}
