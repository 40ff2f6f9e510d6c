//! Image classification: the `Classifier` seam and a MobileNetV4 backend.

use crate::config::{ClassifierConfig, MobileNetVariant, ModelSource};
use crate::preprocess::{ImageTensor, Normalization};
use anyhow::Result;
use candle_core::{DType, Device, Module, Tensor};
use candle_nn::{Func, VarBuilder};
use candle_transformers::models::mobilenetv4;
use hf_hub::{Repo, RepoType, api::sync::Api};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One ranked label with its probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// Probability in [0,1].
    pub confidence: f32,
}

/// Anything that turns a prepared image into ranked predictions.
pub trait Classifier {
    /// Edge length the input tensor must have.
    fn input_size(&self) -> u32;

    fn normalization(&self) -> Normalization;

    /// Predictions ordered by descending confidence.
    fn predict(&self, input: &ImageTensor) -> Result<Vec<Prediction>>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model weights missing: {0}")]
    MissingWeights(PathBuf),
    #[error("labels file missing: {0}")]
    MissingLabels(PathBuf),
    #[error("no labels found")]
    EmptyLabels,
    #[error("config.json of {0} lists no class labels")]
    NoLabelsInConfig(String),
    #[error("model hub: {0}")]
    Hub(#[from] hf_hub::api::sync::ApiError),
    #[error("candle: {0}")]
    Candle(#[from] candle_core::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Converts logits to probabilities.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum == 0.0 || !sum.is_finite() {
        return vec![0.0; logits.len()];
    }
    exps.into_iter().map(|x| x / sum).collect()
}

/// Keeps the `k` most probable classes, best first. Indices without a
/// label are named `class_{idx}`.
pub fn rank_top_k(probs: &[f32], labels: &[String], k: usize) -> Vec<Prediction> {
    let mut indexed: Vec<(usize, f32)> = probs.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    indexed
        .into_iter()
        .take(k)
        .map(|(idx, confidence)| Prediction {
            label: labels
                .get(idx)
                .cloned()
                .unwrap_or_else(|| format!("class_{idx}")),
            confidence: confidence.clamp(0.0, 1.0),
        })
        .collect()
}

/// Reads a newline separated labels file, skipping blank lines.
pub fn read_labels(path: &Path) -> Result<Vec<String>, ModelError> {
    if !path.exists() {
        return Err(ModelError::MissingLabels(path.to_path_buf()));
    }
    let labels: Vec<String> = fs::read_to_string(path)?
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    if labels.is_empty() {
        return Err(ModelError::EmptyLabels);
    }
    Ok(labels)
}

#[derive(Deserialize)]
struct HubConfig {
    #[serde(default)]
    label_names: Option<Vec<String>>,
    #[serde(default)]
    label_descriptions: Option<BTreeMap<String, String>>,
    #[serde(default)]
    id2label: Option<BTreeMap<String, String>>,
}

/// Short display name from a description such as `"tench, Tinca tinca"`.
fn short_name(description: &str) -> &str {
    description.split(',').next().unwrap_or(description).trim()
}

/// Extracts class labels from a hub `config.json`, accepting either a
/// `label_names` array or an `id2label` map. timm configs list synset ids
/// in `label_names`; those are replaced by the first name from
/// `label_descriptions` when one exists.
pub fn labels_from_hub_config(raw: &str, repo: &str) -> Result<Vec<String>, ModelError> {
    let cfg: HubConfig = serde_json::from_str(raw)?;
    if let Some(names) = cfg.label_names.filter(|n| !n.is_empty()) {
        let descriptions = cfg.label_descriptions.unwrap_or_default();
        return Ok(names
            .into_iter()
            .map(|name| match descriptions.get(&name).map(|d| short_name(d)) {
                Some(short) if !short.is_empty() => short.to_string(),
                _ => name,
            })
            .collect());
    }
    if let Some(map) = cfg.id2label.filter(|m| !m.is_empty()) {
        let mut pairs: Vec<(usize, String)> = map
            .into_iter()
            .filter_map(|(k, v)| k.parse::<usize>().ok().map(|i| (i, v)))
            .collect();
        pairs.sort_by_key(|(i, _)| *i);
        if !pairs.is_empty() {
            return Ok(pairs.into_iter().map(|(_, v)| v).collect());
        }
    }
    Err(ModelError::NoLabelsInConfig(repo.to_string()))
}

fn resolve_files(source: &ModelSource) -> Result<(PathBuf, Vec<String>), ModelError> {
    match source {
        ModelSource::Local { weights, labels } => {
            if !weights.exists() {
                return Err(ModelError::MissingWeights(weights.clone()));
            }
            Ok((weights.clone(), read_labels(labels)?))
        }
        ModelSource::Hub {
            repo,
            revision,
            labels,
        } => {
            let api = Api::new()?;
            let hub_repo = match revision {
                Some(rev) => Repo::with_revision(repo.clone(), RepoType::Model, rev.clone()),
                None => Repo::new(repo.clone(), RepoType::Model),
            };
            let handle = api.repo(hub_repo);
            let weights = handle.get("model.safetensors")?;
            let labels = match labels {
                Some(path) => read_labels(path)?,
                None => {
                    let config_path = handle.get("config.json")?;
                    labels_from_hub_config(&fs::read_to_string(config_path)?, repo)?
                }
            };
            Ok((weights, labels))
        }
    }
}

fn architecture(variant: MobileNetVariant) -> mobilenetv4::Config {
    match variant {
        MobileNetVariant::Small => mobilenetv4::Config::small(),
        MobileNetVariant::Medium => mobilenetv4::Config::medium(),
        MobileNetVariant::Large => mobilenetv4::Config::large(),
    }
}

/// Pretrained MobileNetV4 running on the CPU through candle.
pub struct MobileNet {
    model: Func<'static>,
    device: Device,
    labels: Vec<String>,
    input_size: u32,
    normalization: Normalization,
    top_k: usize,
}

impl MobileNet {
    /// Loads weights and labels. Blocks until the model is in memory,
    /// including any first-use download.
    pub fn load(cfg: &ClassifierConfig) -> Result<Self, ModelError> {
        let device = Device::Cpu;
        tracing::info!(source = ?cfg.model, variant = ?cfg.variant, "loading classifier");
        let (weights, labels) = resolve_files(&cfg.model)?;
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights], DType::F32, &device)? };
        let model = mobilenetv4::mobilenetv4(&architecture(cfg.variant), labels.len(), vb)?;
        tracing::info!(classes = labels.len(), "classifier loaded");
        Ok(Self {
            model,
            device,
            labels,
            input_size: cfg.input_size,
            normalization: cfg.normalization,
            top_k: cfg.top_k,
        })
    }

}

impl Classifier for MobileNet {
    fn input_size(&self) -> u32 {
        self.input_size
    }

    fn normalization(&self) -> Normalization {
        self.normalization
    }

    fn predict(&self, input: &ImageTensor) -> Result<Vec<Prediction>> {
        if input.size != self.input_size {
            anyhow::bail!(
                "input is {0}x{0}, model expects {1}x{1}",
                input.size,
                self.input_size
            );
        }
        let side = input.size as usize;
        let tensor = Tensor::from_vec(input.data.clone(), (1, 3, side, side), &self.device)?;
        let logits: Vec<f32> = self.model.forward(&tensor)?.flatten_all()?.to_vec1()?;
        if logits.is_empty() {
            anyhow::bail!("model produced no output");
        }
        let ranked = rank_top_k(&softmax(&logits), &self.labels, self.top_k);
        if let Some(best) = ranked.first() {
            tracing::info!(label = %best.label, confidence = best.confidence, "prediction");
        }
        Ok(ranked)
    }
}
