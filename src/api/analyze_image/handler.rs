// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze image endpoint handler

use axum::{extract::State, Json};
use axum_extra::extract::Multipart;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::request::AnalyzeImageForm;
use super::response::{AnalysisDetails, AnalyzeImageResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::pipeline::analyze_image;
use crate::vision::{decode_image_bytes_with_limit, DecodedImage, ImageError};

pub const MODELS_LOADING: &str = "Models are still loading. Please wait a moment and try again.";
pub const INVALID_IMAGE: &str = "Invalid or corrupted image file";

/// POST /api/analyze-image - Analyse an uploaded image and render a report
///
/// Multipart fields: `image` (file) and optional `language` (`en`, `fr`, `ar`).
pub async fn analyze_image_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeImageResponse>, ApiError> {
    let bundle = state
        .models()
        .await
        .ok_or_else(|| ApiError::ServiceUnavailable(MODELS_LOADING.to_string()))?;

    let upload = AnalyzeImageForm::from_multipart(multipart)
        .await?
        .validate(state.config.default_language)?;
    info!("🌍 Analysis requested in {} for {}", upload.language, upload.filename);

    let start = Instant::now();
    let image = Arc::new(decode_upload(upload.bytes.to_vec(), state.config.max_upload_bytes).await?);

    let outcome = analyze_image(&bundle, &state.renderer, image.clone(), upload.language).await;

    let details = AnalysisDetails {
        confidence: outcome.top_confidence(),
        dominant_colors: outcome
            .color_analysis
            .as_ref()
            .map(|a| a.dominant_color_strings())
            .unwrap_or_default(),
        image_format: image.info.format_name().to_string(),
        dimensions: image.info.dimensions(),
        analysis_time: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        language: upload.language,
        models_used: bundle.models_used(),
        translation_ia: bundle.has_translation(),
    };

    info!(
        "✅ Image analysed: {} | language: {} | {}ms",
        upload.filename,
        upload.language,
        start.elapsed().as_millis()
    );

    Ok(Json(AnalyzeImageResponse::new(outcome.report, details)))
}

async fn decode_upload(bytes: Vec<u8>, max_bytes: usize) -> Result<DecodedImage, ApiError> {
    let decoded = tokio::task::spawn_blocking(move || decode_image_bytes_with_limit(&bytes, max_bytes))
        .await
        .map_err(|e| ApiError::InternalError(format!("Image decoding task failed: {}", e)))?;

    decoded.map_err(|e| match e {
        ImageError::TooLarge(size, max) => ApiError::PayloadTooLarge(format!(
            "Image is {} bytes, maximum is {} bytes",
            size, max
        )),
        other => {
            debug!("Rejected upload: {}", other);
            ApiError::validation("image", INVALID_IMAGE)
        }
    })
}
