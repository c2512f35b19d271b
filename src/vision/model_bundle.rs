// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Immutable set of loaded model collaborators

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use super::classifier::OnnxImageClassifier;
use super::image_utils::DecodedImage;
use super::types::{Captioner, ClassificationResult, ImageClassifier};
use super::vlm_client::VlmCaptioner;
use crate::report::Language;
use crate::translation::{ChatTranslationClient, TranslationResolver};

/// Where to find each collaborator; `None` leaves it unloaded
#[derive(Debug, Clone, Default)]
pub struct ModelBundleConfig {
    pub caption_endpoint: Option<String>,
    pub caption_model: String,
    pub classifier_model_dir: Option<PathBuf>,
    pub translation_endpoint: Option<String>,
    pub translation_model: String,
    pub translation_targets: Vec<Language>,
}

/// Information about a loaded model
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub name: String,
    /// caption, classifier or translation
    pub model_type: String,
    pub available: bool,
}

/// Models shared by every request once loading has finished
///
/// Built once and never mutated; handlers hold an `Arc` snapshot for the
/// duration of a request.
#[derive(Clone, Default)]
pub struct ModelBundle {
    captioner: Option<Arc<dyn Captioner>>,
    classifier: Option<Arc<dyn ImageClassifier>>,
    translator: Option<Arc<dyn TranslationResolver>>,
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("captioner", &self.captioner.as_ref().map(|c| c.model_name().to_string()))
            .field("classifier", &self.classifier.as_ref().map(|c| c.model_name().to_string()))
            .field("translation_pairs", &self.translation_pairs())
            .finish()
    }
}

impl ModelBundle {
    pub fn new(
        captioner: Option<Arc<dyn Captioner>>,
        classifier: Option<Arc<dyn ImageClassifier>>,
        translator: Option<Arc<dyn TranslationResolver>>,
    ) -> Self {
        Self {
            captioner,
            classifier,
            translator,
        }
    }

    /// Load every configured collaborator
    ///
    /// A collaborator that fails to load is logged and left out; the bundle
    /// itself always builds.
    pub async fn load(config: ModelBundleConfig) -> Self {
        let captioner: Option<Arc<dyn Captioner>> = match config.caption_endpoint {
            Some(ref endpoint) => match VlmCaptioner::new(endpoint, &config.caption_model) {
                Ok(captioner) => {
                    info!("✅ Captioner ready ({})", config.caption_model);
                    Some(Arc::new(captioner))
                }
                Err(e) => {
                    warn!("⚠️ Failed to configure captioner at {}: {}", endpoint, e);
                    None
                }
            },
            None => None,
        };

        let classifier: Option<Arc<dyn ImageClassifier>> = match config.classifier_model_dir {
            Some(dir) => {
                let dir_name = dir.display().to_string();
                match tokio::task::spawn_blocking(move || OnnxImageClassifier::new(dir)).await {
                    Ok(Ok(classifier)) => {
                        info!("✅ Classifier loaded from {}", dir_name);
                        Some(Arc::new(classifier))
                    }
                    Ok(Err(e)) => {
                        warn!("⚠️ Failed to load classifier from {}: {}", dir_name, e);
                        None
                    }
                    Err(e) => {
                        warn!("⚠️ Classifier loading task failed: {}", e);
                        None
                    }
                }
            }
            None => None,
        };

        let translator: Option<Arc<dyn TranslationResolver>> = match config.translation_endpoint {
            Some(ref endpoint) => match ChatTranslationClient::new(
                endpoint,
                &config.translation_model,
                &config.translation_targets,
            ) {
                Ok(client) => Some(Arc::new(client)),
                Err(e) => {
                    warn!("⚠️ Failed to configure translation at {}: {}", endpoint, e);
                    None
                }
            },
            None => None,
        };

        let bundle = Self::new(captioner, classifier, translator);
        info!("Model bundle ready: {:?}", bundle);
        bundle
    }

    pub fn captioner(&self) -> Option<&Arc<dyn Captioner>> {
        self.captioner.as_ref()
    }

    pub fn classifier(&self) -> Option<&Arc<dyn ImageClassifier>> {
        self.classifier.as_ref()
    }

    pub fn translator(&self) -> Option<&Arc<dyn TranslationResolver>> {
        self.translator.as_ref()
    }

    pub fn has_captioner(&self) -> bool {
        self.captioner.is_some()
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    /// Whether any machine translation pair is loaded
    pub fn has_translation(&self) -> bool {
        !self.translation_pairs().is_empty()
    }

    pub fn translation_pairs(&self) -> Vec<String> {
        self.translator
            .as_ref()
            .map(|t| t.available_pairs())
            .unwrap_or_default()
    }

    /// Caption the image, logging and swallowing collaborator failures
    pub async fn caption(&self, image: &DecodedImage) -> Option<String> {
        let captioner = self.captioner.as_ref()?;
        match captioner.caption(image).await {
            Ok(caption) => caption,
            Err(e) => {
                warn!("Captioning failed: {}", e);
                None
            }
        }
    }

    /// Classify on a blocking thread, logging and swallowing failures
    pub async fn classify(&self, image: Arc<DecodedImage>) -> Vec<ClassificationResult> {
        let Some(classifier) = self.classifier.clone() else {
            return Vec::new();
        };
        match tokio::task::spawn_blocking(move || classifier.classify(&image.rgb)).await {
            Ok(Ok(results)) => results,
            Ok(Err(e)) => {
                warn!("Classification failed: {}", e);
                Vec::new()
            }
            Err(e) => {
                warn!("Classification task failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Names of the models used for an analysis
    pub fn models_used(&self) -> Vec<String> {
        self.captioner
            .iter()
            .map(|c| c.model_name().to_string())
            .chain(self.classifier.iter().map(|c| c.model_name().to_string()))
            .collect()
    }

    /// List all collaborator slots
    pub fn list_models(&self) -> Vec<ModelInfo> {
        vec![
            ModelInfo {
                name: self
                    .captioner
                    .as_ref()
                    .map(|c| c.model_name().to_string())
                    .unwrap_or_else(|| "captioner".to_string()),
                model_type: "caption".to_string(),
                available: self.has_captioner(),
            },
            ModelInfo {
                name: self
                    .classifier
                    .as_ref()
                    .map(|c| c.model_name().to_string())
                    .unwrap_or_else(|| "classifier".to_string()),
                model_type: "classifier".to_string(),
                available: self.has_classifier(),
            },
            ModelInfo {
                name: "translation".to_string(),
                model_type: "translation".to_string(),
                available: self.has_translation(),
            },
        ]
    }
}
