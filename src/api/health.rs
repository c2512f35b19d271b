// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! GET /api/health

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::http_server::AppState;
use crate::report::Language;
use crate::version;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModelsLoaded {
    pub caption: bool,
    pub classifier: bool,
    pub translation_ia: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` once models are published, `loading` before
    pub status: String,
    pub service: String,
    pub version: String,
    pub supported_languages: Vec<Language>,
    pub models_loaded: ModelsLoaded,
    pub translation_pipelines: Vec<String>,
    /// RFC 3339
    pub timestamp: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let bundle = state.models().await;

    let (status, models_loaded, translation_pipelines) = match bundle {
        Some(bundle) => (
            "healthy",
            ModelsLoaded {
                caption: bundle.has_captioner(),
                classifier: bundle.has_classifier(),
                translation_ia: bundle.has_translation(),
            },
            bundle.translation_pairs(),
        ),
        None => ("loading", ModelsLoaded::default(), Vec::new()),
    };

    Json(HealthResponse {
        status: status.to_string(),
        service: version::SERVICE_NAME.to_string(),
        version: version::VERSION_NUMBER.to_string(),
        supported_languages: vec![Language::Fr, Language::Ar, Language::En],
        models_loaded,
        translation_pipelines,
        timestamp: chrono::Local::now().to_rfc3339(),
    })
}
