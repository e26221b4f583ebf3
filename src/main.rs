mod app;
mod input;
mod style;
mod view;

use app::CrumbBar;
use crumbbar::config::Config;
use eframe::egui;
use std::env;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    env_logger::init();

    if let Err(e) = Config::create_default() {
        log::warn!("could not write default config: {}", e);
    }
    let config = Config::load();
    let start_path = start_path(&config);
    log::info!("starting at {}", start_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("crumbbar"),
        ..Default::default()
    };

    eframe::run_native(
        "crumbbar",
        options,
        Box::new(move |cc| Ok(Box::new(CrumbBar::new(cc, config, start_path)))),
    )
}

/// First CLI argument (relative to the working directory), else the config.
fn start_path(config: &Config) -> PathBuf {
    match env::args_os().nth(1).map(PathBuf::from) {
        Some(arg) if arg.is_absolute() => arg,
        Some(arg) => env::current_dir()
            .map(|cwd| cwd.join(&arg))
            .unwrap_or(arg),
        None => config.start_path(),
    }
}
