pub mod traits;
pub mod loader;
pub mod display;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use loader::{LoaderConfig, ColumnRename};
pub use display::DisplayConfig;
pub use traits::ConfigSection;
