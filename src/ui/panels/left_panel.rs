use crate::ui::state::AppState;
use crate::ui::widgets::{DataSelector, YearSelector};

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Trade Log");
        ui.separator();

        ui.collapsing("Data", |ui| {
            DataSelector::show(ui, state);
        });

        ui.separator();

        YearSelector::show(ui, state);

        ui.separator();

        ui.label(&state.status_message);
        if let Some(error) = &state.error_message {
            ui.colored_label(egui::Color32::RED, format!("An error occurred while processing the file: {}", error));
        }
    }
}
