//! Main application entry point.

use ocula_app::OculaApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Ocula");

    eframe::run_native(
        "Ocula",
        OculaApp::options(),
        Box::new(|cc| Ok(Box::new(OculaApp::new(cc)))),
    )
}
