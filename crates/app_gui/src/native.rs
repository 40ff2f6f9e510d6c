//! Native dialogs and file chooser backed by `rfd`.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use showcase_core::{Dialogs, FileChooser};
use std::path::PathBuf;

/// Blocking OS message boxes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn show_info(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn show_error(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn ask_ok_cancel(&mut self, title: &str, message: &str) -> bool {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::OkCancel)
            .show();
        matches!(answer, MessageDialogResult::Ok | MessageDialogResult::Yes)
    }
}

/// OS file-open dialog; any file type may be picked.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeChooser;

impl FileChooser for NativeChooser {
    fn choose(&mut self) -> Option<PathBuf> {
        FileDialog::new().set_directory(".").pick_file()
    }
}
