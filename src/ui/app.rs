use super::panels::{LeftPanel, MainPanel};
use super::state::AppState;
use crate::config::AppConfig;

pub struct PnlScopeApp {
    state: AppState,
    left_panel: LeftPanel,
    main_panel: MainPanel,
}

impl Default for PnlScopeApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl PnlScopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
        }
    }
}

impl eframe::App for PnlScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.state.config.display.window_title);
            });
        });

        // Left Panel - file and year selection
        egui::SidePanel::left("left_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.left_panel.show(ui, &mut self.state);
                });
            });

        // Central Panel - statistics and charts
        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, &self.state);
        });
    }
}
