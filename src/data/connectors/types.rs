use chrono::NaiveDateTime;
use std::path::Path;

/// Canonical trade-log columns every aggregation assumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalColumn {
    Date,
    Asset,
    PnL,
}

impl CanonicalColumn {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Asset => "Asset",
            Self::PnL => "PnL",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Date, Self::Asset, Self::PnL]
    }

    /// Columns the aggregator cannot work without
    pub fn required() -> Vec<Self> {
        vec![Self::Date, Self::PnL]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.as_str() == name)
    }
}

/// Supported on-disk table formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeFileFormat {
    Csv,
    Xlsx,
}

impl TradeFileFormat {
    pub const SPREADSHEET_EXTENSIONS: &'static [&'static str] = &["xlsx", "xlsm", "xls"];

    /// Spreadsheet extensions select the workbook reader, everything else is read as CSV
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());

        match ext {
            Some(ext) if Self::SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) => Self::Xlsx,
            _ => Self::Csv,
        }
    }

    /// Extensions offered by the file picker
    pub fn known_extensions() -> Vec<&'static str> {
        let mut exts = vec!["csv"];
        exts.extend_from_slice(Self::SPREADSHEET_EXTENSIONS);
        exts
    }
}

/// Metadata about a loaded trade log
#[derive(Debug, Clone)]
pub struct DatasetMetadata {
    pub file_path: String,
    pub num_rows: usize,
    pub num_columns: usize,
    pub columns: Vec<String>,
    pub has_asset: bool,
    pub date_range: Option<(NaiveDateTime, NaiveDateTime)>,
}

/// Raw data view for the UI
#[derive(Debug, Clone)]
pub struct DataPreview {
    pub metadata: DatasetMetadata,
    pub first_rows: Vec<Vec<String>>,
    pub column_stats: Vec<ColumnStats>,
}

#[derive(Debug, Clone)]
pub struct ColumnStats {
    pub name: String,
    pub dtype: String,
    pub null_count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(TradeFileFormat::from_path("trades.xlsx"), TradeFileFormat::Xlsx);
        assert_eq!(TradeFileFormat::from_path("TRADES.XLSX"), TradeFileFormat::Xlsx);
        assert_eq!(TradeFileFormat::from_path("trades.csv"), TradeFileFormat::Csv);
        assert_eq!(TradeFileFormat::from_path("trades"), TradeFileFormat::Csv);
        assert_eq!(TradeFileFormat::from_path("trades.xlsm"), TradeFileFormat::Xlsx);
        assert_eq!(TradeFileFormat::from_path("trades.xls"), TradeFileFormat::Xlsx);
    }

    #[test]
    fn test_picker_extensions_cover_every_reader() {
        let exts = TradeFileFormat::known_extensions();
        assert_eq!(exts, vec!["csv", "xlsx", "xlsm", "xls"]);

        let readers: Vec<TradeFileFormat> = exts
            .iter()
            .map(|ext| TradeFileFormat::from_path(format!("trades.{}", ext)))
            .collect();
        assert_eq!(readers[0], TradeFileFormat::Csv);
        assert!(readers[1..].iter().all(|f| *f == TradeFileFormat::Xlsx));
    }

    #[test]
    fn test_canonical_lookup() {
        assert_eq!(CanonicalColumn::from_name("PnL"), Some(CanonicalColumn::PnL));
        assert_eq!(CanonicalColumn::from_name("pnl"), None);
    }
}
