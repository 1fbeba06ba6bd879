use thiserror::Error;

#[derive(Error, Debug)]
pub enum PnlScopeError {
    #[error("Unreadable trade file: {0}")]
    Format(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Invalid date at row {row}: '{value}'")]
    Parse { row: usize, value: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, PnlScopeError>;
