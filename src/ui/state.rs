use crate::config::AppConfig;
use crate::data::DataPreview;
use crate::report::BarChart;
use crate::types::AnalysisReport;
use crate::ui::services::AnalysisRunner;
use polars::prelude::*;
use std::path::PathBuf;

/// Central application state for the UI
pub struct AppState {
    pub config: AppConfig,

    // Data
    pub data_file_path: Option<PathBuf>,
    pub loaded_data: Option<DataFrame>,
    pub data_preview: Option<DataPreview>,

    // Results
    pub report: Option<AnalysisReport>,
    pub charts: Vec<BarChart>,

    // Status
    pub status_message: String,
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            data_file_path: None,
            loaded_data: None,
            data_preview: None,
            report: None,
            charts: Vec::new(),
            status_message: "Ready".to_string(),
            error_message: None,
        }
    }

    /// Replace everything derived from the previous file. On failure the
    /// old results are dropped and only the error is shown.
    pub fn load_file(&mut self, path: PathBuf) {
        match AnalysisRunner::load(&path, &self.config) {
            Ok(loaded) => {
                self.status_message = format!(
                    "Loaded {} trades from {}",
                    loaded.report.summary.trade_count,
                    path.file_name().unwrap_or_default().to_string_lossy()
                );
                self.loaded_data = Some(loaded.data);
                self.data_preview = Some(loaded.preview);
                self.report = Some(loaded.report);
                self.charts = loaded.charts;
                self.error_message = None;
            }
            Err(e) => {
                log::error!("Failed to analyse {}: {}", path.display(), e);
                self.clear_results();
                self.status_message = "Error while processing the file".to_string();
                self.error_message = Some(e);
            }
        }
        self.data_file_path = Some(path);
    }

    /// Recompute the report for another year of the loaded table
    pub fn select_year(&mut self, year: i32) {
        let Some(df) = &self.loaded_data else {
            return;
        };

        match AnalysisRunner::analyse(df, Some(year), &self.config.display) {
            Ok((report, charts)) => {
                self.report = Some(report);
                self.charts = charts;
                self.error_message = None;
            }
            Err(e) => {
                self.report = None;
                self.charts.clear();
                self.error_message = Some(e);
            }
        }
    }

    pub fn selected_year(&self) -> Option<i32> {
        self.report.as_ref().and_then(|r| r.selected_year)
    }

    pub fn available_years(&self) -> &[i32] {
        self.report.as_ref().map(|r| r.years.as_slice()).unwrap_or(&[])
    }

    fn clear_results(&mut self) {
        self.loaded_data = None;
        self.data_preview = None;
        self.report = None;
        self.charts.clear();
    }
}
