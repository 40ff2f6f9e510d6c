//! Core logic for the video-liking and image-classification demo apps.
//!
//! Everything here is toolkit independent; the eframe front ends live in
//! `app_gui` and plug native dialogs into the [`dialogs::Dialogs`] and
//! [`pipeline::FileChooser`] seams.

pub mod classifier;
pub mod config;
pub mod console;
pub mod dialogs;
pub mod like_interface;
pub mod liked;
pub mod pipeline;
pub mod preprocess;
pub mod videos;

pub use classifier::{Classifier, MobileNet, ModelError, Prediction};
pub use config::{ClassifierConfig, MobileNetVariant, ModelSource};
pub use console::{Console, RecordingConsole, StdoutConsole};
pub use dialogs::{Dialogs, RecordingDialogs, Shown};
pub use like_interface::{Action, ButtonSpec, LikeInterface};
pub use liked::{LikedVideos, User};
pub use pipeline::{ClassifierView, FileChooser, FixedChooser, UploadOutcome, confirm_quit};
pub use preprocess::{ImageTensor, Normalization};
pub use videos::{Movie, Tutorial, Video, VideoKind, play_video};
