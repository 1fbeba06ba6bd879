pub mod analysis_runner;
pub mod data_loader;

pub use analysis_runner::{AnalysisRunner, LoadedAnalysis};
pub use data_loader::DataLoader;
