use crate::data::TradeFileFormat;
use crate::ui::state::AppState;

pub struct DataSelector;

impl DataSelector {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            if ui.button("Open trade log...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Trade logs", TradeFileFormat::known_extensions().as_slice())
                    .pick_file()
                {
                    state.load_file(path);
                }
            }
        });

        // Display current file info
        if let Some(path) = &state.data_file_path {
            ui.label(format!("File: {}", path.file_name().unwrap_or_default().to_string_lossy()));

            if let Some(preview) = &state.data_preview {
                ui.label(format!("Rows: {}", preview.metadata.num_rows));
                ui.label(format!("Columns: {}", preview.metadata.num_columns));
                if let Some((first, last)) = preview.metadata.date_range {
                    ui.label(format!("From {} to {}", first.format("%Y-%m-%d"), last.format("%Y-%m-%d")));
                }
                if !preview.metadata.has_asset {
                    ui.weak("No instrument column");
                }

                ui.collapsing("Raw data", |ui| {
                    egui::ScrollArea::both().max_height(200.0).show(ui, |ui| {
                        egui::Grid::new("data_preview_grid")
                            .striped(true)
                            .show(ui, |ui| {
                                for col_name in &preview.metadata.columns {
                                    ui.strong(col_name);
                                }
                                ui.end_row();

                                for row in &preview.first_rows {
                                    for cell in row {
                                        ui.label(cell);
                                    }
                                    ui.end_row();
                                }
                            });
                    });
                });

                ui.collapsing("Column stats", |ui| {
                    egui::Grid::new("column_stats_grid")
                        .striped(true)
                        .show(ui, |ui| {
                            ui.strong("Column");
                            ui.strong("Type");
                            ui.strong("Nulls");
                            ui.strong("Mean");
                            ui.end_row();

                            for stat in &preview.column_stats {
                                ui.label(&stat.name);
                                ui.label(&stat.dtype);
                                ui.label(stat.null_count.to_string());
                                ui.label(stat.mean.map(|m| format!("{:.2}", m)).unwrap_or_default());
                                ui.end_row();
                            }
                        });
                });
            }
        } else {
            ui.label("No data loaded");
        }
    }
}
