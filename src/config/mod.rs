// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables, then command-line flags applied by the binary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::report::Language;
use crate::vision::image_utils::MAX_IMAGE_SIZE;
use crate::vision::ModelBundleConfig;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

/// Collaborator endpoints and model locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    /// OpenAI-compatible VLM sidecar used for captions
    pub caption_endpoint: Option<String>,
    pub caption_model: String,
    /// Directory holding the classifier `model.onnx` and `config.json`
    pub classifier_model_dir: Option<PathBuf>,
    /// OpenAI-compatible endpoint used for translation
    pub translation_endpoint: Option<String>,
    pub translation_model: String,
    /// Target languages to translate into from English
    pub translation_pairs: Vec<Language>,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            caption_endpoint: None,
            caption_model: "blip-image-captioning".to_string(),
            classifier_model_dir: Some(PathBuf::from("./models/vit-base-patch16-224")),
            translation_endpoint: None,
            translation_model: "opus-mt".to_string(),
            translation_pairs: vec![Language::Fr, Language::Ar],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub listen_addr: String,
    /// Report language when a request does not name one
    pub default_language: Language,
    pub max_upload_bytes: usize,
    pub models: ModelsConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            default_language: Language::Fr,
            max_upload_bytes: MAX_IMAGE_SIZE,
            models: ModelsConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Defaults overlaid with the optional TOML file and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply overrides from a key lookup (the environment in production)
    ///
    /// Recognised keys: `LISTEN_ADDR`, `API_PORT`, `DEFAULT_LANGUAGE`, `MAX_UPLOAD_BYTES`,
    /// `CAPTION_ENDPOINT`, `CAPTION_MODEL`, `CLASSIFIER_MODEL_DIR`, `TRANSLATION_ENDPOINT`,
    /// `TRANSLATION_MODEL` and `TRANSLATION_PAIRS` (comma-separated target codes).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("LISTEN_ADDR") {
            self.listen_addr = addr;
        } else if let Some(port) = lookup("API_PORT") {
            let port: u16 = port.parse().with_context(|| format!("Invalid API_PORT '{}'", port))?;
            let host = self.listen_addr.rsplit_once(':').map(|(h, _)| h).unwrap_or("0.0.0.0");
            self.listen_addr = format!("{}:{}", host, port);
        }
        if let Some(lang) = lookup("DEFAULT_LANGUAGE") {
            self.default_language = lang.parse()?;
        }
        if let Some(max) = lookup("MAX_UPLOAD_BYTES") {
            self.max_upload_bytes = max
                .parse()
                .with_context(|| format!("Invalid MAX_UPLOAD_BYTES '{}'", max))?;
        }

        let models = &mut self.models;
        if let Some(endpoint) = lookup("CAPTION_ENDPOINT") {
            models.caption_endpoint = non_empty(endpoint);
        }
        if let Some(model) = lookup("CAPTION_MODEL") {
            models.caption_model = model;
        }
        if let Some(dir) = lookup("CLASSIFIER_MODEL_DIR") {
            models.classifier_model_dir = non_empty(dir).map(PathBuf::from);
        }
        if let Some(endpoint) = lookup("TRANSLATION_ENDPOINT") {
            models.translation_endpoint = non_empty(endpoint);
        }
        if let Some(model) = lookup("TRANSLATION_MODEL") {
            models.translation_model = model;
        }
        if let Some(pairs) = lookup("TRANSLATION_PAIRS") {
            models.translation_pairs = parse_languages(&pairs)?;
        }

        debug!("Effective configuration: {:?}", self);
        Ok(())
    }

    pub fn model_bundle_config(&self) -> ModelBundleConfig {
        ModelBundleConfig {
            caption_endpoint: self.models.caption_endpoint.clone(),
            caption_model: self.models.caption_model.clone(),
            classifier_model_dir: self.models.classifier_model_dir.clone(),
            translation_endpoint: self.models.translation_endpoint.clone(),
            translation_model: self.models.translation_model.clone(),
            translation_targets: self.models.translation_pairs.clone(),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse `fr,ar` (or `en-fr,en-ar`) into target languages
pub fn parse_languages(list: &str) -> Result<Vec<Language>> {
    list.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| {
            let code = code.strip_prefix("en-").unwrap_or(code);
            code.parse::<Language>().map_err(anyhow::Error::from)
        })
        .collect()
}
