use crate::report::BarPalette;
use crate::ui::state::AppState;
use crate::ui::widgets::{BarChartView, StatsCards};

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        let Some(report) = &state.report else {
            ui.centered_and_justified(|ui| {
                ui.label("Open a CSV or Excel trade log to start.");
            });
            return;
        };

        // Validated at startup; fall back to the stock colours regardless
        let palette = state.config.display.palette().unwrap_or_default();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("General statistics");
            StatsCards::show_summary(ui, &report.summary, &palette);

            ui.add_space(12.0);
            ui.heading("Wins / Losses");
            StatsCards::show_win_loss(ui, &report.win_loss, &palette);

            ui.add_space(12.0);
            ui.heading("Charts");
            for chart in &state.charts {
                ui.separator();
                BarChartView::show(ui, chart);
            }
        });
    }
}
