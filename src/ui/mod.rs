pub mod canvas;
pub mod windows;

use crate::app::App;
use crate::config::UiConfig;
use crate::story::Dispatcher;

/// Opens the viewer window and blocks until it is closed.
pub fn run(dispatcher: Dispatcher, cfg: &UiConfig) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Climate Change Narrative")
            .with_inner_size([cfg.window_width, cfg.window_height]),
        ..Default::default()
    };
    let pixels_per_point = cfg.pixels_per_point;

    eframe::run_native(
        "Climate Narrative",
        native_options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, dispatcher, pixels_per_point)))),
    )
}
