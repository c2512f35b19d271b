// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Router tests for POST /api/test-translation

use axum::http::StatusCode;
use image_insight::{api::AppState, config::ServiceConfig, vision::ModelBundle};
use serde_json::json;

use super::support::*;

const URI: &str = "/api/test-translation";

#[tokio::test]
async fn test_defaults_use_arabic_dictionary_before_models_load() {
    let state = AppState::new(ServiceConfig::default()).unwrap();

    let response = send(state, json_request(URI, json!({}))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["original"], "a man with a stick in his hand in the jungle");
    assert_eq!(body["translated"], "رجل يحمل عصا في يده في الغابة");
    assert_eq!(body["language"], "ar");
    assert_eq!(body["translation_method"], "Dictionary");
}

#[tokio::test]
async fn test_machine_translation_when_pair_loaded() {
    let state = state_with(full_bundle("unused")).await;

    let body = body_json(
        send(
            state,
            json_request(URI, json!({"text": "a red kite", "language": "fr"})),
        )
        .await,
    )
    .await;

    assert_eq!(body["translated"], "[fr] a red kite");
    assert_eq!(body["translation_method"], "IA");
}

#[tokio::test]
async fn test_english_returns_text_unchanged() {
    let state = state_with(ModelBundle::default()).await;

    let body = body_json(
        send(state, json_request(URI, json!({"text": "a red kite", "language": "en"}))).await,
    )
    .await;

    assert_eq!(body["translated"], "a red kite");
    assert_eq!(body["language"], "en");
}

#[tokio::test]
async fn test_unknown_language_rejected() {
    let state = state_with(ModelBundle::default()).await;

    let response = send(state, json_request(URI, json!({"language": "xx"}))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
}
