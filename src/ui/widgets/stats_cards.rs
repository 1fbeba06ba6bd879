use super::bar_chart::to_color32;
use crate::report::{format_percentage, format_pnl, format_profit_factor, share_of, BarPalette};
use crate::types::{SummaryStats, WinLossStats};
use egui::{Color32, RichText};

pub struct StatsCards;

impl StatsCards {
    pub fn show_summary(ui: &mut egui::Ui, summary: &SummaryStats, palette: &BarPalette) {
        ui.columns(3, |cols| {
            Self::card(
                &mut cols[0],
                "Total PnL",
                format_pnl(summary.total_pnl),
                None,
                Some(Self::tone(summary.total_pnl, palette)),
            );
            Self::card(&mut cols[1], "Number of trades", summary.trade_count.to_string(), None, None);
            Self::card(
                &mut cols[2],
                "Average PnL per trade",
                format_pnl(summary.mean_pnl),
                None,
                Some(Self::tone(summary.mean_pnl, palette)),
            );
        });
    }

    pub fn show_win_loss(ui: &mut egui::Ui, stats: &WinLossStats, palette: &BarPalette) {
        ui.columns(4, |cols| {
            Self::card(&mut cols[0], "Win rate", format_percentage(stats.win_rate), None, None);
            Self::card(
                &mut cols[1],
                "Profit factor",
                format_profit_factor(stats.profit_factor),
                None,
                None,
            );
            Self::card(
                &mut cols[2],
                "Winning trades",
                stats.winning_trades.to_string(),
                Some(format!(
                    "({})",
                    format_percentage(share_of(stats.winning_trades, stats.total_trades))
                )),
                None,
            );
            Self::card(
                &mut cols[3],
                "Losing trades",
                stats.losing_trades.to_string(),
                Some(format!(
                    "({})",
                    format_percentage(share_of(stats.losing_trades, stats.total_trades))
                )),
                None,
            );
        });

        ui.add_space(6.0);

        ui.columns(4, |cols| {
            Self::card(&mut cols[0], "Average win", format_pnl(stats.avg_win), None, Some(to_color32(palette.gain)));
            Self::card(&mut cols[1], "Average loss", format_pnl(stats.avg_loss), None, Some(to_color32(palette.loss)));
            Self::card(&mut cols[2], "Largest win", format_pnl(stats.max_win), None, Some(to_color32(palette.gain)));
            Self::card(&mut cols[3], "Largest loss", format_pnl(stats.max_loss), None, Some(to_color32(palette.loss)));
        });

        if stats.neutral_trades > 0 {
            ui.weak(format!("{} break-even trades", stats.neutral_trades));
        }
    }

    fn card(ui: &mut egui::Ui, title: &str, value: String, detail: Option<String>, color: Option<Color32>) {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(title).small());

            let mut text = RichText::new(value).size(22.0).strong();
            if let Some(color) = color {
                text = text.color(color);
            }
            ui.label(text);

            if let Some(detail) = detail {
                ui.weak(detail);
            }
        });
    }

    fn tone(value: f64, palette: &BarPalette) -> Color32 {
        to_color32(palette.color_for(value))
    }
}
