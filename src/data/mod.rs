pub mod connectors;
pub mod loader;
pub mod normalize;
mod preview;

pub use connectors::{
    CanonicalColumn, CsvConnector, DataPreview, DataValidator, DatasetMetadata, TradeFileFormat,
    XlsxConnector,
};
pub use loader::TradeLoader;
pub use normalize::{ColumnMapping, DateParser};
