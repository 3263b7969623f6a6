mod app;
mod color;
mod state;
mod ui;

use app::OverdoseTrendsApp;
use eframe::egui;
use overdose_trends::config::ViewerConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ViewerConfig::load().with_data_arg(std::env::args().nth(1));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "The Chocolate Opioid Initiative (satire)",
        options,
        Box::new(move |_cc| Ok(Box::new(OverdoseTrendsApp::new(&config)))),
    )
}
