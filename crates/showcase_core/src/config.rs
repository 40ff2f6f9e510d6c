//! Classifier configuration, readable from TOML.

use crate::preprocess::Normalization;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest accepted model input edge.
pub const MAX_INPUT_SIZE: u32 = 4096;

pub const DEFAULT_HUB_REPO: &str = "timm/mobilenetv4_conv_small.e2400_r224_in1k";

/// Where model weights and class labels come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum ModelSource {
    /// Hugging Face hub repo, resolved through the local hub cache and
    /// downloaded on first use. Labels come from the repo's `config.json`
    /// unless `labels` points at a local file.
    Hub {
        repo: String,
        #[serde(default)]
        revision: Option<String>,
        #[serde(default)]
        labels: Option<PathBuf>,
    },
    /// Safetensors weights plus a newline separated labels file on disk.
    Local { weights: PathBuf, labels: PathBuf },
}

impl Default for ModelSource {
    fn default() -> Self {
        ModelSource::Hub {
            repo: DEFAULT_HUB_REPO.to_string(),
            revision: None,
            labels: None,
        }
    }
}

/// MobileNetV4 convolutional variant matching the weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobileNetVariant {
    #[default]
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub model: ModelSource,
    pub variant: MobileNetVariant,
    /// Edge length of the square model input.
    pub input_size: u32,
    pub normalization: Normalization,
    /// Number of ranked predictions kept per image.
    pub top_k: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model: ModelSource::default(),
            variant: MobileNetVariant::default(),
            input_size: 224,
            normalization: Normalization::default(),
            top_k: 1,
        }
    }
}

impl ClassifierConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(raw).context("invalid classifier config")?;
        if cfg.input_size == 0 || cfg.input_size > MAX_INPUT_SIZE {
            anyhow::bail!(
                "input_size must be between 1 and {MAX_INPUT_SIZE}, got {}",
                cfg.input_size
            );
        }
        if cfg.top_k == 0 {
            anyhow::bail!("top_k must be at least 1");
        }
        Ok(cfg)
    }

    /// Reads `path`; a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("in {}", path.display()))
    }
}
