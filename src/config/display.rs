use super::traits::ConfigSection;
use crate::error::PnlScopeError;
use crate::report::chart::{AxisLabels, BarPalette, ChartRow, Rgb};
use crate::types::{AssetPnl, DailyPnl, MonthlyPnl, PNL_FIELD};
use serde::{Deserialize, Serialize};

/// Presentation settings: titles, axis labels and bar colours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub window_title: String,
    pub monthly_title: String,
    pub daily_title: String,
    pub asset_title: String,
    pub pnl_label: String,
    pub month_label: String,
    pub date_label: String,
    pub asset_label: String,
    pub positive_color: String,
    pub negative_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_title: "Trading Analysis".to_string(),
            monthly_title: "Monthly PnL".to_string(),
            daily_title: "Daily PnL".to_string(),
            asset_title: "PnL by Asset".to_string(),
            pnl_label: "Profit/Loss".to_string(),
            month_label: "Month".to_string(),
            date_label: "Date".to_string(),
            asset_label: "Pair".to_string(),
            positive_color: Rgb::GAIN.to_hex(),
            negative_color: Rgb::LOSS.to_hex(),
        }
    }
}

impl DisplayConfig {
    pub fn axis_labels(&self) -> AxisLabels {
        AxisLabels::from([
            (PNL_FIELD.to_string(), self.pnl_label.clone()),
            (MonthlyPnl::FIELD.to_string(), self.month_label.clone()),
            (DailyPnl::FIELD.to_string(), self.date_label.clone()),
            (AssetPnl::FIELD.to_string(), self.asset_label.clone()),
        ])
    }

    pub fn palette(&self) -> Result<BarPalette, PnlScopeError> {
        Ok(BarPalette {
            gain: Rgb::from_hex(&self.positive_color)?,
            loss: Rgb::from_hex(&self.negative_color)?,
        })
    }

    pub fn monthly_chart_title(&self, year: Option<i32>) -> String {
        match year {
            Some(year) => format!("{} {}", self.monthly_title, year),
            None => self.monthly_title.clone(),
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), PnlScopeError> {
        self.palette()?;
        if self.window_title.trim().is_empty() {
            return Err(PnlScopeError::Configuration(
                "Window title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = DisplayConfig::default().palette().unwrap();
        assert_eq!(palette.gain, Rgb::GAIN);
        assert_eq!(palette.loss, Rgb::LOSS);
    }

    #[test]
    fn test_bad_colour_fails_validation() {
        let config = DisplayConfig {
            negative_color: "crimson".to_string(),
            ..DisplayConfig::default()
        };
        assert!(matches!(config.validate(), Err(PnlScopeError::Configuration(_))));
    }

    #[test]
    fn test_monthly_title() {
        let config = DisplayConfig::default();
        assert_eq!(config.monthly_chart_title(Some(2024)), "Monthly PnL 2024");
        assert_eq!(config.monthly_chart_title(None), "Monthly PnL");
    }
}
