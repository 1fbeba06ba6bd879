use crate::ui::state::AppState;

pub struct YearSelector;

impl YearSelector {
    /// Only offered when the log spans more than one year
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        let years = state.available_years().to_vec();
        if years.len() < 2 {
            return;
        }

        let current = state.selected_year();
        let mut selected = current;

        ui.horizontal(|ui| {
            ui.label("Year:");
            egui::ComboBox::from_id_salt("monthly_year")
                .selected_text(selected.map(|y| y.to_string()).unwrap_or_default())
                .show_ui(ui, |ui| {
                    for year in &years {
                        ui.selectable_value(&mut selected, Some(*year), year.to_string());
                    }
                });
        });

        if selected != current {
            if let Some(year) = selected {
                state.select_year(year);
            }
        }
    }
}
