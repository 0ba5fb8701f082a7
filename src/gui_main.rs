use eframe::{run_native, NativeOptions};
use egui::ViewportBuilder;

use pdfsearch::gui::PdfSearchApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([640.0, 420.0])
            .with_title("PDF Search"),
        ..Default::default()
    };

    run_native(
        "PDF Search",
        options,
        Box::new(|cc| Box::new(PdfSearchApp::new(cc))),
    )
}
