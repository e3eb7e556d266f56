//! Gomoku GUI
//!
//! A graphical interface for playing Gomoku against another player or the
//! computer. An optional TOML config path may be given as the first argument
//! or through `GOMOKU_CONFIG`.

use std::path::PathBuf;

use gomoku::ui::GomokuApp;
use gomoku::GameConfig;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_CONFIG_PATH: &str = "gomoku.toml";

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,gomoku=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn config_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GOMOKU_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
        .into()
}

fn main() -> Result<(), eframe::Error> {
    init_tracing();

    let path = config_path();
    let config = GameConfig::load_or_default(&path).unwrap_or_else(|e| {
        error!(error = %e, path = %path.display(), "invalid config, using defaults");
        GameConfig::default()
    });
    info!(?config, "starting gomoku");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([860.0, 680.0])
            .with_min_inner_size([640.0, 520.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
}
