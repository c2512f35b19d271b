// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Router tests for GET /api/health

use axum::http::StatusCode;
use image_insight::{api::AppState, config::ServiceConfig, version};

use super::support::*;

#[tokio::test]
async fn test_health_reports_loading_then_healthy() {
    let state = AppState::new(ServiceConfig::default()).unwrap();

    let response = send(state.clone(), get_request("/api/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "loading");
    assert_eq!(json["models_loaded"]["caption"], false);
    assert_eq!(json["translation_pipelines"], serde_json::json!([]));

    state.publish_models(full_bundle("a caption")).await;

    let json = body_json(send(state, get_request("/api/health")).await).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], version::SERVICE_NAME);
    assert_eq!(json["version"], version::VERSION_NUMBER);
    assert_eq!(json["supported_languages"], serde_json::json!(["fr", "ar", "en"]));
    assert_eq!(
        json["models_loaded"],
        serde_json::json!({"caption": true, "classifier": true, "translation_ia": true})
    );
    assert_eq!(json["translation_pipelines"], serde_json::json!(["en-fr"]));
    assert!(chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok());
}
