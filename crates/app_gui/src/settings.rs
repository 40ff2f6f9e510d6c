//! Locating the classifier configuration file.

use anyhow::Result;
use directories_next::ProjectDirs;
use showcase_core::ClassifierConfig;
use std::ffi::OsString;
use std::path::PathBuf;

pub const CONFIG_ENV: &str = "IMAGE_CLASSIFIER_CONFIG";
const CONFIG_FILE: &str = "classifier.toml";

/// An explicit override wins; otherwise the platform config directory.
pub fn config_path(override_path: Option<OsString>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .or_else(|| config_dir.map(|dir| dir.join(CONFIG_FILE)))
}

/// Loads the classifier config for this user, falling back to defaults.
pub fn load_classifier_config() -> Result<ClassifierConfig> {
    let dir = ProjectDirs::from("", "", "ImageClassifier").map(|d| d.config_dir().to_path_buf());
    match config_path(std::env::var_os(CONFIG_ENV), dir) {
        Some(path) => {
            tracing::info!("classifier config: {}", path.display());
            ClassifierConfig::load_or_default(path)
        }
        None => Ok(ClassifierConfig::default()),
    }
}
