pub mod bar_chart;
pub mod data_selector;
pub mod stats_cards;
pub mod year_selector;

pub use bar_chart::BarChartView;
pub use data_selector::DataSelector;
pub use stats_cards::StatsCards;
pub use year_selector::YearSelector;
