//! Upload → classify → display, and the quit confirmation, for the
//! classifier window.

use crate::classifier::{Classifier, Prediction};
use crate::dialogs::Dialogs;
use crate::preprocess::prepare_file;
use anyhow::{Result, anyhow};
use image::RgbImage;
use std::path::PathBuf;

pub const WINDOW_TITLE: &str = "Image Classification App";
pub const WINDOW_SIZE: [f32; 2] = [500.0, 500.0];
pub const PROMPT: &str = "Upload an image to classify";

/// Source of a user-chosen file path. `None` means the chooser was cancelled.
pub trait FileChooser {
    fn choose(&mut self) -> Option<PathBuf>;
}

/// Chooser that returns a fixed answer every time.
#[derive(Debug, Clone, Default)]
pub struct FixedChooser(pub Option<PathBuf>);

impl FileChooser for FixedChooser {
    fn choose(&mut self) -> Option<PathBuf> {
        self.0.clone()
    }
}

/// Result text as shown under the thumbnail.
pub fn format_result(best: &Prediction) -> String {
    format!(
        "Prediction: {}, Confidence: {:.2}",
        best.label, best.confidence
    )
}

/// What the classifier window currently displays.
#[derive(Debug, Clone, Default)]
pub struct ClassifierView {
    thumbnail: Option<RgbImage>,
    result: String,
    /// Bumped on every successful classification so renderers know when
    /// to refresh their copy of the thumbnail.
    generation: u64,
}

/// Outcome of one press of the upload button.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Cancelled,
    Classified(Prediction),
    Failed(String),
}

impl ClassifierView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thumbnail(&self) -> Option<&RgbImage> {
        self.thumbnail.as_ref()
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Runs the whole upload pipeline. Any failure after the chooser is
    /// reported through an error dialog and leaves the view as it was.
    pub fn upload(
        &mut self,
        chooser: &mut dyn FileChooser,
        classifier: &dyn Classifier,
        dialogs: &mut dyn Dialogs,
    ) -> UploadOutcome {
        match self.try_upload(chooser, classifier) {
            Ok(Some(best)) => UploadOutcome::Classified(best),
            Ok(None) => UploadOutcome::Cancelled,
            Err(err) => {
                let message = format!("{err:#}");
                tracing::warn!("classification failed: {message}");
                dialogs.show_error("Error", &message);
                UploadOutcome::Failed(message)
            }
        }
    }

    fn try_upload(
        &mut self,
        chooser: &mut dyn FileChooser,
        classifier: &dyn Classifier,
    ) -> Result<Option<Prediction>> {
        let Some(path) = chooser.choose().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(None);
        };
        tracing::info!("classifying {}", path.display());
        let prepared = prepare_file(&path, classifier.input_size(), classifier.normalization())?;
        let best = classifier
            .predict(&prepared.tensor)?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("classifier returned no predictions"))?;
        if !(0.0..=1.0).contains(&best.confidence) {
            anyhow::bail!("confidence {} outside [0, 1]", best.confidence);
        }
        self.thumbnail = Some(prepared.resized);
        self.result = format_result(&best);
        self.generation += 1;
        Ok(Some(best))
    }
}

/// Asks whether to quit. Returns `true` only if the user confirmed.
pub fn confirm_quit(dialogs: &mut dyn Dialogs) -> bool {
    let quit = dialogs.ask_ok_cancel("Quit", "Do you really wish to quit?");
    tracing::debug!(quit, "close requested");
    quit
}
