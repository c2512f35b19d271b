// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Collaborator contracts for captioning and classification

use anyhow::Result;
use async_trait::async_trait;
use image::RgbImage;
use serde::Serialize;

use super::image_utils::DecodedImage;

/// One label predicted by an image classifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: String,
    /// Probability in [0, 1]
    pub confidence: f32,
}

/// Produces a one-sentence English caption for an image
#[async_trait]
pub trait Captioner: Send + Sync {
    fn model_name(&self) -> &str;

    /// Caption the image; `Ok(None)` when the model had nothing to say
    async fn caption(&self, image: &DecodedImage) -> Result<Option<String>>;
}

/// Predicts labels for an RGB raster
///
/// Classification is CPU-bound; callers run it on a blocking thread.
pub trait ImageClassifier: Send + Sync {
    fn model_name(&self) -> &str;

    /// Up to five results, sorted by descending confidence
    fn classify(&self, image: &RgbImage) -> Result<Vec<ClassificationResult>>;
}
