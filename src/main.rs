mod app;

use std::path::PathBuf;

fn main() -> eframe::Result {
    env_logger::init();

    let initial_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Image Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Lumaview",
        options,
        Box::new(move |cc| Ok(Box::new(app::ViewerApp::new(cc, initial_path)))),
    )
}
