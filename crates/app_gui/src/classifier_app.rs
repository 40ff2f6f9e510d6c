use eframe::{App, Frame, egui};
use showcase_core::pipeline::PROMPT;
use showcase_core::{Classifier, ClassifierView, confirm_quit};

use crate::native::{NativeChooser, NativeDialogs};

/// Window with the upload button, thumbnail and prediction label.
pub struct ClassifierApp {
    classifier: Box<dyn Classifier>,
    view: ClassifierView,
    chooser: NativeChooser,
    dialogs: NativeDialogs,
    thumb: Option<egui::TextureHandle>,
    thumb_generation: u64,
}

impl ClassifierApp {
    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        Self {
            classifier,
            view: ClassifierView::new(),
            chooser: NativeChooser,
            dialogs: NativeDialogs,
            thumb: None,
            thumb_generation: 0,
        }
    }

    fn refresh_thumb(&mut self, ctx: &egui::Context) {
        if self.view.generation() == self.thumb_generation {
            return;
        }
        self.thumb = self.view.thumbnail().map(|img| {
            let color = to_color_image(img);
            ctx.load_texture("thumbnail", color, egui::TextureOptions::LINEAR)
        });
        self.thumb_generation = self.view.generation();
    }
}

pub fn to_color_image(img: &image::RgbImage) -> egui::ColorImage {
    let (w, h) = img.dimensions();
    egui::ColorImage::from_rgb([w as usize, h as usize], img.as_raw())
}

impl App for ClassifierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && !confirm_quit(&mut self.dialogs) {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(PROMPT);
                ui.add_space(20.0);
                if ui.button("Upload Image").clicked() {
                    // Blocks the UI thread for decode and inference.
                    self.view.upload(
                        &mut self.chooser,
                        self.classifier.as_ref(),
                        &mut self.dialogs,
                    );
                }
                self.refresh_thumb(ctx);
                ui.add_space(20.0);
                if let Some(tex) = &self.thumb {
                    ui.image(egui::load::SizedTexture::from_handle(tex));
                }
                ui.add_space(20.0);
                ui.label(self.view.result());
            });
        });
    }
}
