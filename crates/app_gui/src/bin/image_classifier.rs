use app_gui::classifier_app::ClassifierApp;
use app_gui::settings::load_classifier_config;
use eframe::{NativeOptions, egui};
use showcase_core::MobileNet;
use showcase_core::pipeline::{WINDOW_SIZE, WINDOW_TITLE};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!(version = app_gui::VERSION, "starting image classifier");
    let cfg = load_classifier_config()?;
    // Load failures end the process; there is no fallback model.
    let classifier = MobileNet::load(&cfg)?;

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| {
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(ClassifierApp::new(
                Box::new(classifier),
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("window closed with error: {e}"))
}
