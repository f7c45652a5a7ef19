//! Sales Dashboard - Sales Data Visualization
//!
//! A Rust application showing two years of monthly sales as line, bar, area
//! or pie charts, filtered by year and month, with PNG/CSV export.

mod charts;
mod config;
mod data;
mod export;
mod gui;
mod state;

use config::AppConfig;
use eframe::egui;
use gui::DashboardApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(eframe::Error::AppCreation(e.into()));
        }
    };

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([config.window.min_width, config.window.min_height])
            .with_title(config.window.title.as_str()),
        ..Default::default()
    };

    tracing::info!("Starting {}", config.window.title);

    // Run the application
    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, &config)?))),
    )
}
