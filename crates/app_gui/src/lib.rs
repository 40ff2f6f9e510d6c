//! eframe front ends for the like interface and the image classifier.

pub mod classifier_app;
pub mod like_app;
pub mod native;
pub mod settings;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
