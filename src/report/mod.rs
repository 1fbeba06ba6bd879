pub mod chart;
pub mod format;

pub use chart::{AxisLabels, Bar, BarChart, BarPalette, ChartRow, Rgb};
pub use format::{format_percentage, format_pnl, format_profit_factor, share_of};
