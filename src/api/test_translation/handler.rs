// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Translation check endpoint handler

use axum::{extract::State, Json};
use tracing::info;

use super::request::TestTranslationRequest;
use super::response::{TestTranslationResponse, TranslationMethod};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::translation::TranslationTable;
use crate::vision::ModelBundle;

/// POST /api/test-translation - Translate a caption the way reports do
///
/// Works before the models finish loading; dictionaries are used until a
/// translation pipeline is available.
pub async fn test_translation_handler(
    State(state): State<AppState>,
    Json(request): Json<TestTranslationRequest>,
) -> Result<Json<TestTranslationResponse>, ApiError> {
    let language = request.language()?;
    let text = request.text().to_string();
    info!("Translation check: '{}' -> {}", text, language);

    let bundle = state.models().await;
    let translator = bundle
        .as_deref()
        .and_then(ModelBundle::translator)
        .map(|t| t.as_ref());

    let translated = if language.is_english() {
        text.clone()
    } else {
        let table = TranslationTable::prefetch(translator, language, [text.as_str()]).await;
        state.renderer.translate_caption(Some(&text), language, &table)
    };

    let translation_method = if bundle.as_deref().is_some_and(ModelBundle::has_translation) {
        TranslationMethod::Ia
    } else {
        TranslationMethod::Dictionary
    };

    Ok(Json(TestTranslationResponse {
        success: true,
        original: text,
        translated,
        language,
        translation_method,
    }))
}
