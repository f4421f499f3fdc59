use unidades_geradoras::api::HttpUnitApi;
use unidades_geradoras::gui::UnidadesApp;
use unidades_geradoras::logging;
use unidades_geradoras::settings::{Settings, SETTINGS_FILE};

use eframe::egui;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    let _log_guard = logging::init(settings.debug_logging, settings.log_file.as_deref());
    tracing::info!("using API at {}", settings.api_base_url);

    let api = HttpUnitApi::new(&settings.api_base_url, settings.request_timeout())?;
    let api = Arc::new(api);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size())
            .with_min_inner_size([480.0, 320.0])
            .with_title("Unidades Geradoras"),
        ..Default::default()
    };

    eframe::run_native(
        "Unidades Geradoras",
        native_options,
        Box::new(move |cc| Box::new(UnidadesApp::new(&cc.egui_ctx, api, settings, SETTINGS_FILE))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the window: {e}"))
}
