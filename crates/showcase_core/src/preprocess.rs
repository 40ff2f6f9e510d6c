//! Image decoding and tensor preparation for the classifier.

use anyhow::{Context, Result};
use image::{DynamicImage, RgbImage, imageops::FilterType};
use serde::{Deserialize, Serialize};
use std::path::Path;

const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Per-channel scaling applied to 8-bit pixel values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// `(v / 255 - mean) / std` with the ImageNet statistics.
    #[default]
    Imagenet,
    /// `v / 127.5 - 1`, i.e. [-1, 1] (MobileNetV2 style).
    Symmetric,
}

impl Normalization {
    pub fn apply(self, channel: usize, value: u8) -> f32 {
        match self {
            Normalization::Imagenet => {
                (value as f32 / 255.0 - IMAGENET_MEAN[channel]) / IMAGENET_STD[channel]
            }
            Normalization::Symmetric => value as f32 / 127.5 - 1.0,
        }
    }
}

/// Normalized planar image, CHW order, square `size` x `size`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    pub size: u32,
    pub data: Vec<f32>,
}

/// An image ready for inference plus the resized pixels shown to the user.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub resized: RgbImage,
    pub tensor: ImageTensor,
}

/// Decodes `path`, resizes it to `size` x `size` and normalizes it.
pub fn prepare_file(path: &Path, size: u32, norm: Normalization) -> Result<Prepared> {
    let img = image::open(path)
        .with_context(|| format!("cannot open image: {}", path.display()))?;
    Ok(prepare(img, size, norm))
}

pub fn prepare(img: DynamicImage, size: u32, norm: Normalization) -> Prepared {
    let resized = resize_to_square(img, size);
    let tensor = to_tensor(&resized, norm);
    tracing::debug!(size, ?norm, "image prepared");
    Prepared { resized, tensor }
}

fn resize_to_square(img: DynamicImage, size: u32) -> RgbImage {
    img.resize_exact(size, size, FilterType::CatmullRom).to_rgb8()
}

fn to_tensor(img: &RgbImage, norm: Normalization) -> ImageTensor {
    let (w, h) = img.dimensions();
    let plane = w as usize * h as usize;
    let mut data = vec![0f32; 3 * plane];
    for (i, pixel) in img.pixels().enumerate() {
        for c in 0..3 {
            data[c * plane + i] = norm.apply(c, pixel.0[c]);
        }
    }
    ImageTensor { size: w, data }
}
