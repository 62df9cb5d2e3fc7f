use galaxy::core::Config;
use galaxy::debug::{self, DebugConfig};
use galaxy::GalaxyApp;

const APP_NAME: &str = "Galaxy";

fn main() -> galaxy::Result<()> {
    let debug_config = DebugConfig::from_env();
    let _log_guard = debug::init(&debug_config);

    let config = Config::from_env().inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))?;
    config.validate()?;
    let custom_theme = config.load_custom_theme()?;

    tracing::info!(
        quality = %config.quality,
        theme = %config.theme,
        width = config.window_width,
        height = config.window_height,
        custom_theme = custom_theme.is_some(),
        "Starting galaxy"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([200.0, 200.0]),
        ..Default::default()
    };

    let show_debug = debug_config.show_debug_ui;
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(GalaxyApp::new(cc, &config, custom_theme, show_debug)))),
    )?;

    tracing::info!("Galaxy closed");
    Ok(())
}
