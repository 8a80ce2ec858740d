//! Now - desktop event feed built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI and owns the displayed feed
//! - Backend thread: runs a Tokio runtime for file loading and refresh timers
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;
use std::path::PathBuf;
use tracing::info;

use now_feed::app::FeedApp;
use now_feed::config::load_settings;
use now_feed::logging::init_logging;

fn main() -> eframe::Result<()> {
    let settings = load_settings();
    // Held until exit so buffered log lines reach the file.
    let _log_guard = init_logging(&settings.log_filter);

    // now-feed [FEED.json]
    let feed_path = std::env::args_os().nth(1).map(PathBuf::from);
    info!(version = %settings.version(), ?feed_path, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([330.0, 500.0])
            .with_min_inner_size([280.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Now",
        options,
        Box::new(move |cc| Ok(Box::new(FeedApp::new(cc, settings, feed_path)))),
    )
}
