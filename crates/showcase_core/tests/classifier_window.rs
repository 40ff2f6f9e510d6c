use anyhow::{Result, anyhow};
use image::{Rgb, RgbImage};
use showcase_core::dialogs::Shown;
use showcase_core::pipeline::format_result;
use showcase_core::{
    Classifier, ClassifierView, FixedChooser, ImageTensor, Normalization, Prediction,
    RecordingDialogs, UploadOutcome, confirm_quit,
};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Returns canned predictions, or fails when `fail` is set.
struct StubClassifier {
    size: u32,
    predictions: Vec<Prediction>,
    fail: bool,
    calls: Cell<usize>,
}

impl StubClassifier {
    fn answering(label: &str, confidence: f32) -> Self {
        Self {
            size: 8,
            predictions: vec![
                Prediction {
                    label: label.to_string(),
                    confidence,
                },
                Prediction {
                    label: "runner-up".to_string(),
                    confidence: 0.01,
                },
            ],
            fail: false,
            calls: Cell::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::answering("unused", 0.5)
        }
    }
}

impl Classifier for StubClassifier {
    fn input_size(&self) -> u32 {
        self.size
    }

    fn normalization(&self) -> Normalization {
        Normalization::Symmetric
    }

    fn predict(&self, input: &ImageTensor) -> Result<Vec<Prediction>> {
        self.calls.set(self.calls.get() + 1);
        assert_eq!(input.data.len(), (3 * self.size * self.size) as usize);
        if self.fail {
            return Err(anyhow!("inference exploded"));
        }
        Ok(self.predictions.clone())
    }
}

fn write_png(dir: &Path, name: &str, colour: [u8; 3]) -> Result<PathBuf> {
    let path = dir.join(name);
    RgbImage::from_pixel(32, 20, Rgb(colour)).save(&path)?;
    Ok(path)
}

fn classified_view(dir: &TempDir) -> Result<(ClassifierView, PathBuf)> {
    let path = write_png(dir.path(), "first.png", [10, 200, 30])?;
    let mut view = ClassifierView::new();
    let mut dialogs = RecordingDialogs::default();
    let outcome = view.upload(
        &mut FixedChooser(Some(path.clone())),
        &StubClassifier::answering("frog", 0.75),
        &mut dialogs,
    );
    assert!(matches!(outcome, UploadOutcome::Classified(_)));
    Ok((view, path))
}

#[test]
fn valid_image_updates_thumbnail_and_result() -> Result<()> {
    let dir = tempdir()?;
    let (view, _) = classified_view(&dir)?;

    assert_eq!(view.result(), "Prediction: frog, Confidence: 0.75");
    let thumb = view.thumbnail().expect("thumbnail shown");
    assert_eq!(thumb.dimensions(), (8, 8));
    assert_eq!(thumb.get_pixel(4, 4).0, [10, 200, 30]);
    assert_eq!(view.generation(), 1);
    Ok(())
}

#[test]
fn valid_image_yields_rank_zero_within_unit_range() -> Result<()> {
    let dir = tempdir()?;
    let path = write_png(dir.path(), "a.png", [1, 2, 3])?;
    let mut view = ClassifierView::new();
    let mut dialogs = RecordingDialogs::default();

    let outcome = view.upload(
        &mut FixedChooser(Some(path)),
        &StubClassifier::answering("tabby", 0.42),
        &mut dialogs,
    );

    let UploadOutcome::Classified(best) = outcome else {
        panic!("expected a classification");
    };
    assert_eq!(best.label, "tabby");
    assert!((0.0..=1.0).contains(&best.confidence));
    assert!(dialogs.shown.is_empty());
    Ok(())
}

#[test]
fn corrupt_file_shows_error_and_keeps_previous_state() -> Result<()> {
    let dir = tempdir()?;
    let (mut view, _) = classified_view(&dir)?;
    let before_result = view.result().to_string();
    let before_thumb = view.thumbnail().cloned();

    let corrupt = dir.path().join("broken.jpg");
    std::fs::write(&corrupt, b"\xff\xd8 not really a jpeg")?;
    let mut dialogs = RecordingDialogs::default();
    let classifier = StubClassifier::answering("never", 0.9);

    let outcome = view.upload(&mut FixedChooser(Some(corrupt)), &classifier, &mut dialogs);

    assert!(matches!(outcome, UploadOutcome::Failed(_)));
    assert_eq!(classifier.calls.get(), 0);
    assert_eq!(dialogs.errors().len(), 1);
    assert!(matches!(&dialogs.shown[0], Shown::Error { title, .. } if title == "Error"));
    assert_eq!(view.result(), before_result);
    assert_eq!(view.thumbnail().cloned(), before_thumb);
    assert_eq!(view.generation(), 1);
    Ok(())
}

#[test]
fn window_keeps_working_after_a_failure() -> Result<()> {
    let dir = tempdir()?;
    let mut view = ClassifierView::new();
    let mut dialogs = RecordingDialogs::default();

    view.upload(
        &mut FixedChooser(Some(dir.path().join("does-not-exist.png"))),
        &StubClassifier::answering("x", 0.5),
        &mut dialogs,
    );
    assert_eq!(dialogs.errors().len(), 1);

    let good = write_png(dir.path(), "good.png", [0, 0, 0])?;
    let outcome = view.upload(
        &mut FixedChooser(Some(good)),
        &StubClassifier::answering("night", 0.5),
        &mut dialogs,
    );
    assert!(matches!(outcome, UploadOutcome::Classified(_)));
    assert_eq!(view.result(), "Prediction: night, Confidence: 0.50");
    Ok(())
}

#[test]
fn inference_failure_message_reaches_the_dialog() -> Result<()> {
    let dir = tempdir()?;
    let path = write_png(dir.path(), "a.png", [5, 5, 5])?;
    let mut view = ClassifierView::new();
    let mut dialogs = RecordingDialogs::default();

    view.upload(
        &mut FixedChooser(Some(path)),
        &StubClassifier::failing(),
        &mut dialogs,
    );

    assert_eq!(dialogs.errors(), vec!["inference exploded"]);
    assert!(view.thumbnail().is_none());
    assert_eq!(view.result(), "");
    Ok(())
}

#[test]
fn out_of_range_confidence_is_reported() -> Result<()> {
    let dir = tempdir()?;
    let path = write_png(dir.path(), "a.png", [5, 5, 5])?;
    let mut view = ClassifierView::new();
    let mut dialogs = RecordingDialogs::default();

    view.upload(
        &mut FixedChooser(Some(path)),
        &StubClassifier::answering("weird", 1.5),
        &mut dialogs,
    );

    assert_eq!(dialogs.errors().len(), 1);
    assert_eq!(view.result(), "");
    Ok(())
}

#[test]
fn cancelled_chooser_changes_nothing() -> Result<()> {
    let dir = tempdir()?;
    let (mut view, _) = classified_view(&dir)?;
    let before = view.result().to_string();
    let classifier = StubClassifier::answering("never", 0.9);

    for mut chooser in [FixedChooser(None), FixedChooser(Some(PathBuf::new()))] {
        let mut dialogs = RecordingDialogs::default();
        let outcome = view.upload(&mut chooser, &classifier, &mut dialogs);
        assert_eq!(outcome, UploadOutcome::Cancelled);
        assert!(dialogs.shown.is_empty());
    }
    assert_eq!(classifier.calls.get(), 0);
    assert_eq!(view.result(), before);
    assert_eq!(view.generation(), 1);
    Ok(())
}

#[test]
fn quitting_requires_confirmation() {
    let mut dialogs = RecordingDialogs::answering([false, true]);

    assert!(!confirm_quit(&mut dialogs));
    assert!(confirm_quit(&mut dialogs));
    assert_eq!(
        dialogs.shown[0],
        Shown::Question {
            title: "Quit".into(),
            message: "Do you really wish to quit?".into(),
        }
    );
}

#[test]
fn result_format_matches_label_text() {
    let best = Prediction {
        label: "goldfish".into(),
        confidence: 0.5,
    };
    assert_eq!(format_result(&best), "Prediction: goldfish, Confidence: 0.50");
}
