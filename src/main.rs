//! VORA - desktop client for the VORA forecasting API
//!
//! Preview a dataset, send it for cleaning, train an LSTM forecast on the
//! server and browse the results.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use tracing_subscriber::EnvFilter;
use vora::app::VoraApp;
use vora::settings::UserSettings;

fn main() -> eframe::Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let user_settings = UserSettings::load();

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1440.0, 900.0])
            .with_min_inner_size([960.0, 640.0])
            .with_title("VORA")
            .with_app_id("VORA")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "VORA",
        native_options,
        Box::new(|cc| Ok(Box::new(VoraApp::new(cc, user_settings)))),
    )
}
