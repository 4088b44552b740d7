//! Telemetry Inspector - Main Entry Point
//!
//! Runs the desktop inspector against the built-in demo scene.

use telemetry_inspector::{
    backend::MockHost,
    config::{config_path, InspectorConfig},
    frontend::InspectorApp,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,telemetry_inspector=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Telemetry Inspector");

    let config = InspectorConfig::load_or_default();

    // Write defaults on first run so they can be edited
    if config_path().is_some_and(|p| !p.exists()) {
        if let Err(e) = config.save_default() {
            tracing::warn!("Failed to write default config: {}", e);
        }
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Telemetry Inspector"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Telemetry Inspector",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(InspectorApp::new(cc, config, MockHost::demo())))
        }),
    );

    tracing::info!("Shutting down...");
    result
}
