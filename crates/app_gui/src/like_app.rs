use eframe::{App, Frame, egui};
use showcase_core::{LikeInterface, StdoutConsole};

use crate::native::NativeDialogs;

/// Window with the play/like buttons and the signed-in user label.
pub struct LikeApp {
    model: LikeInterface,
    console: StdoutConsole,
    dialogs: NativeDialogs,
}

impl LikeApp {
    pub fn new() -> Self {
        let mut console = StdoutConsole;
        let model = LikeInterface::new(&mut console);
        Self {
            model,
            console,
            dialogs: NativeDialogs,
        }
    }
}

impl Default for LikeApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for LikeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let mut pressed = None;
                for button in self.model.buttons() {
                    ui.add_space(10.0);
                    if ui.button(button.text).clicked() {
                        pressed = Some(button.action);
                    }
                }
                ui.add_space(10.0);
                ui.label(self.model.user_label());

                if let Some(action) = pressed {
                    self.model
                        .press(action, &mut self.console, &mut self.dialogs);
                }
            });
        });
    }
}
