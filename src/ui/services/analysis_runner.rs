use super::data_loader::DataLoader;
use crate::config::{AppConfig, DisplayConfig};
use crate::data::DataPreview;
use crate::engines::metrics::AnalysisEngine;
use crate::report::BarChart;
use crate::types::AnalysisReport;
use polars::prelude::*;
use std::path::Path;

/// Everything one successful load produces
pub struct LoadedAnalysis {
    pub data: DataFrame,
    pub preview: DataPreview,
    pub report: AnalysisReport,
    pub charts: Vec<BarChart>,
}

/// Error boundary between the core and the window: every failure becomes one message
pub struct AnalysisRunner;

impl AnalysisRunner {
    pub fn load(path: &Path, config: &AppConfig) -> Result<LoadedAnalysis, String> {
        let (data, preview) = DataLoader::load_trades(path, &config.loader)?;
        let (report, charts) = Self::analyse(&data, None, &config.display)?;

        Ok(LoadedAnalysis {
            data,
            preview,
            report,
            charts,
        })
    }

    pub fn analyse(
        df: &DataFrame,
        year: Option<i32>,
        display: &DisplayConfig,
    ) -> Result<(AnalysisReport, Vec<BarChart>), String> {
        let report = AnalysisEngine::new()
            .run(df, year)
            .map_err(|e| e.to_string())?;
        let charts = report.charts(display).map_err(|e| e.to_string())?;
        Ok((report, charts))
    }
}
