mod csv;
mod types;
mod validator;
mod xlsx;

pub use csv::CsvConnector;
pub use types::{
    CanonicalColumn,
    ColumnStats,
    DataPreview,
    DatasetMetadata,
    TradeFileFormat,
};
pub(crate) use validator::is_numeric;
pub use validator::DataValidator;
pub use xlsx::XlsxConnector;
