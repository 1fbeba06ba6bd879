use super::format::format_pnl;
use crate::config::DisplayConfig;
use crate::error::{PnlScopeError, Result};
use crate::types::{AnalysisReport, AssetPnl, DailyPnl, MonthlyPnl, PNL_FIELD};
use chrono::NaiveTime;
use std::collections::BTreeMap;

/// Field name -> axis title overrides
pub type AxisLabels = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GAIN: Rgb = Rgb(0x2e, 0xcc, 0x71);
    pub const LOSS: Rgb = Rgb(0xe7, 0x4c, 0x3c);

    /// Parse `#rrggbb`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || PnlScopeError::Configuration(format!("Invalid colour '{}', expected #rrggbb", hex));

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarPalette {
    pub gain: Rgb,
    pub loss: Rgb,
}

impl Default for BarPalette {
    fn default() -> Self {
        Self {
            gain: Rgb::GAIN,
            loss: Rgb::LOSS,
        }
    }
}

impl BarPalette {
    /// Non-negative bars take the gain colour
    pub fn color_for(&self, value: f64) -> Rgb {
        if value >= 0.0 {
            self.gain
        } else {
            self.loss
        }
    }
}

/// A summary row that can be drawn as one bar
pub trait ChartRow {
    /// Field name of the category axis
    const FIELD: &'static str;

    fn category(&self) -> String;
    fn value(&self) -> f64;
}

impl ChartRow for MonthlyPnl {
    const FIELD: &'static str = "Month";

    fn category(&self) -> String {
        self.month_name.clone()
    }

    fn value(&self) -> f64 {
        self.pnl
    }
}

impl ChartRow for DailyPnl {
    const FIELD: &'static str = "Date";

    fn category(&self) -> String {
        if self.date.time() == NaiveTime::MIN {
            self.date.format("%Y-%m-%d").to_string()
        } else {
            self.date.format("%Y-%m-%d %H:%M:%S").to_string()
        }
    }

    fn value(&self) -> f64 {
        self.pnl
    }
}

impl ChartRow for AssetPnl {
    const FIELD: &'static str = "Asset";

    fn category(&self) -> String {
        self.asset.clone()
    }

    fn value(&self) -> f64 {
        self.pnl
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub category: String,
    pub value: f64,
    pub text: String,
    pub color: Rgb,
}

/// Renderer-agnostic bar chart description
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn from_rows<R: ChartRow>(
        rows: &[R],
        title: impl Into<String>,
        labels: &AxisLabels,
        palette: &BarPalette,
    ) -> Self {
        let label = |field: &str| labels.get(field).cloned().unwrap_or_else(|| field.to_string());

        let bars = rows
            .iter()
            .map(|row| {
                let value = row.value();
                Bar {
                    category: row.category(),
                    value,
                    text: format_pnl(value),
                    color: palette.color_for(value),
                }
            })
            .collect();

        Self {
            title: title.into(),
            x_label: label(R::FIELD),
            y_label: label(PNL_FIELD),
            bars,
        }
    }

    /// Value span including the zero baseline
    pub fn value_range(&self) -> (f64, f64) {
        self.bars
            .iter()
            .filter(|b| b.value.is_finite())
            .fold((0.0, 0.0), |(lo, hi), b| (lo.min(b.value), hi.max(b.value)))
    }
}

impl AnalysisReport {
    /// Monthly, daily and (when instruments are known) per-asset charts
    pub fn charts(&self, display: &DisplayConfig) -> Result<Vec<BarChart>> {
        let labels = display.axis_labels();
        let palette = display.palette()?;

        let mut charts = vec![
            BarChart::from_rows(
                &self.monthly,
                display.monthly_chart_title(self.selected_year),
                &labels,
                &palette,
            ),
            BarChart::from_rows(&self.daily, display.daily_title.clone(), &labels, &palette),
        ];
        if let Some(assets) = &self.assets {
            charts.push(BarChart::from_rows(assets, display.asset_title.clone(), &labels, &palette));
        }
        Ok(charts)
    }
}
