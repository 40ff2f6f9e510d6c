use app_gui::like_app::LikeApp;
use eframe::{NativeOptions, egui};
use showcase_core::like_interface::{WINDOW_SIZE, WINDOW_TITLE};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!(version = app_gui::VERSION, "starting like interface");
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| {
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(LikeApp::new()))
        }),
    )
    .map_err(|e| anyhow::anyhow!("window closed with error: {e}"))
}
