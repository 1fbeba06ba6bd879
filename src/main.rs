use eframe::NativeOptions;
use pnlscope::config::{manager::DEFAULT_CONFIG_FILE, AppConfig, ConfigManager};
use pnlscope::ui::PnlScopeApp;
use std::path::PathBuf;

fn load_config() -> AppConfig {
    let path = std::env::var_os("PNLSCOPE_CONFIG")
        .map(PathBuf::from)
        .or_else(|| {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            local.exists().then_some(local)
        });

    match ConfigManager::layered(path.as_deref()) {
        Ok(manager) => manager.get().clone(),
        Err(e) => {
            log::warn!("{}; using default configuration", e);
            AppConfig::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = load_config();
    let title = config.display.window_title.clone();

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| Ok(Box::new(PnlScopeApp::new(cc, config)))),
    )
}
