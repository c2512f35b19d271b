// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ViT image classifier on ONNX Runtime
//!
//! Expects a Hugging Face style export directory holding `model.onnx` and the
//! `config.json` whose `id2label` map names the output logits.

use anyhow::{anyhow, Context, Result};
use image::{imageops::FilterType, RgbImage};
use ndarray::Array4;
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use super::types::{ClassificationResult, ImageClassifier};

/// Input size of ViT-base models
pub const VIT_INPUT_SIZE: u32 = 224;

/// ViT feature-extractor normalisation
pub const MEAN: [f32; 3] = [0.5, 0.5, 0.5];
pub const STD: [f32; 3] = [0.5, 0.5, 0.5];

/// Results returned per image
pub const TOP_K: usize = 5;

#[derive(Debug, Deserialize)]
struct ModelConfig {
    id2label: HashMap<String, String>,
}

/// Classifier backed by an ONNX ViT export
#[derive(Clone)]
pub struct OnnxImageClassifier {
    /// ONNX Runtime session (thread-safe)
    session: Arc<Mutex<Session>>,
    input_name: String,
    labels: Vec<String>,
    model_name: String,
}

impl std::fmt::Debug for OnnxImageClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxImageClassifier")
            .field("model_name", &self.model_name)
            .field("input_name", &self.input_name)
            .field("labels", &self.labels.len())
            .finish_non_exhaustive()
    }
}

impl OnnxImageClassifier {
    /// Load `model.onnx` and `config.json` from `model_dir`
    pub fn new<P: AsRef<Path>>(model_dir: P) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let model_path = model_dir.join("model.onnx");
        let config_path = model_dir.join("config.json");

        if !model_path.exists() {
            anyhow::bail!("Classifier model not found: {}", model_path.display());
        }

        let config_json = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let labels = parse_labels(&config_json)?;

        info!("Loading image classifier from {}", model_path.display());

        let session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(4)
            .context("Failed to set intra threads")?
            .commit_from_file(&model_path)
            .with_context(|| format!("Failed to load classifier from {}", model_path.display()))?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .unwrap_or_else(|| "pixel_values".to_string());

        let model_name = model_dir
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("vit-classifier")
            .to_string();

        info!(
            "✅ Image classifier loaded ({} labels, input '{}')",
            labels.len(),
            input_name
        );

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            input_name,
            labels,
            model_name,
        })
    }

    fn run_logits(&self, input: Array4<f32>) -> Result<Vec<f32>> {
        let mut session = self
            .session
            .lock()
            .map_err(|_| anyhow!("classifier session lock poisoned"))?;

        let input_value = Value::from_array(input).context("Failed to create input tensor")?;
        let outputs = session
            .run(ort::inputs![&self.input_name => input_value])
            .context("Classifier inference failed")?;

        let logits = outputs[0]
            .try_extract_array::<f32>()
            .context("Failed to extract logits")?;
        debug!("Classifier output shape: {:?}", logits.shape());

        Ok(logits.iter().copied().collect())
    }
}

impl ImageClassifier for OnnxImageClassifier {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn classify(&self, image: &RgbImage) -> Result<Vec<ClassificationResult>> {
        let logits = self.run_logits(preprocess_for_vit(image))?;
        if logits.len() != self.labels.len() {
            anyhow::bail!(
                "Classifier returned {} logits for {} labels",
                logits.len(),
                self.labels.len()
            );
        }
        Ok(top_k(&softmax(&logits), &self.labels, TOP_K))
    }
}

/// Labels ordered by class id
pub fn parse_labels(config_json: &str) -> Result<Vec<String>> {
    let config: ModelConfig =
        serde_json::from_str(config_json).context("config.json has no id2label map")?;

    let mut indexed = Vec::with_capacity(config.id2label.len());
    for (id, label) in config.id2label {
        let id: usize = id
            .parse()
            .with_context(|| format!("Invalid class id '{}' in id2label", id))?;
        indexed.push((id, label));
    }
    indexed.sort_by_key(|(id, _)| *id);

    for (expected, (id, _)) in indexed.iter().enumerate() {
        if *id != expected {
            anyhow::bail!("id2label is missing class id {}", expected);
        }
    }

    Ok(indexed.into_iter().map(|(_, label)| label).collect())
}

/// Stretch to 224x224 and normalise into an NCHW tensor
pub fn preprocess_for_vit(image: &RgbImage) -> Array4<f32> {
    let resized = image::imageops::resize(image, VIT_INPUT_SIZE, VIT_INPUT_SIZE, FilterType::Triangle);
    let size = VIT_INPUT_SIZE as usize;
    let mut tensor = Array4::zeros((1, 3, size, size));

    for (x, y, pixel) in resized.enumerate_pixels() {
        for c in 0..3 {
            tensor[[0, c, y as usize, x as usize]] = (pixel[c] as f32 / 255.0 - MEAN[c]) / STD[c];
        }
    }

    tensor
}

pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Highest `k` probabilities with their labels, descending
pub fn top_k(probs: &[f32], labels: &[String], k: usize) -> Vec<ClassificationResult> {
    let mut ranked: Vec<(usize, f32)> = probs.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
        .into_iter()
        .take(k)
        .filter_map(|(i, confidence)| {
            labels.get(i).map(|label| ClassificationResult {
                label: label.clone(),
                confidence,
            })
        })
        .collect()
}
