mod config;
mod engine;
mod error;
mod types;
mod ui;
mod utils;

use config::Config;
use eframe::egui;
use ui::app::App;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Font path from the first argument, bank offers from the environment.
    let config = Config::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Mortgage Calculator")
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };
    eframe::run_native(
        "Mortgage Calculator",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)))),
    )
}
