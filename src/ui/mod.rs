mod app;
mod panels;
mod state;
mod widgets;
mod services;

pub use app::PnlScopeApp;
pub use services::{AnalysisRunner, DataLoader, LoadedAnalysis};
pub use state::AppState;
