// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Router tests for POST /api/analyze-image

use axum::http::StatusCode;
use image_insight::{
    api::AppState,
    config::ServiceConfig,
    report::Language,
    vision::ModelBundle,
};
use std::sync::Arc;

use super::support::*;

const URI: &str = "/api/analyze-image";

#[tokio::test]
async fn test_returns_503_while_models_load() {
    let state = AppState::new(ServiceConfig::default()).unwrap();
    let png = png_bytes(8, 8, [0, 0, 0]);

    let response = send(state, multipart_request(URI, &[image_part("a.png", &png)])).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["error"],
        "Models are still loading. Please wait a moment and try again."
    );
}

#[tokio::test]
async fn test_missing_image_field() {
    let state = state_with(ModelBundle::default()).await;

    let response = send(state, multipart_request(URI, &[text_part("language", "en")])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No image provided");
}

#[tokio::test]
async fn test_empty_filename() {
    let state = state_with(ModelBundle::default()).await;
    let png = png_bytes(8, 8, [0, 0, 0]);

    let response = send(state, multipart_request(URI, &[image_part("", &png)])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No file selected");
}

#[tokio::test]
async fn test_unsupported_extension() {
    let state = state_with(ModelBundle::default()).await;
    let png = png_bytes(8, 8, [0, 0, 0]);

    let response = send(state, multipart_request(URI, &[image_part("scan.tiff", &png)])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Format not supported. Use: jpg, jpeg, png, webp, bmp, gif"
    );
}

#[tokio::test]
async fn test_corrupted_image() {
    let state = state_with(ModelBundle::default()).await;

    let response = send(
        state,
        multipart_request(URI, &[image_part("photo.jpg", b"definitely not a jpeg")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid or corrupted image file");
}

#[tokio::test]
async fn test_unknown_language() {
    let state = state_with(ModelBundle::default()).await;
    let png = png_bytes(8, 8, [0, 0, 0]);

    let response = send(
        state,
        multipart_request(URI, &[image_part("a.png", &png), text_part("language", "de")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("'de'"), "unexpected error: {}", error);
}

#[tokio::test]
async fn test_upload_over_configured_limit() {
    let config = ServiceConfig {
        max_upload_bytes: 16,
        ..ServiceConfig::default()
    };
    let state = AppState::new(config).unwrap();
    state.publish_models(ModelBundle::default()).await;
    let png = png_bytes(8, 8, [0, 0, 0]);

    let response = send(state, multipart_request(URI, &[image_part("a.png", &png)])).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body_json(response).await["success"], false);
}

#[tokio::test]
async fn test_body_over_router_limit_is_413() {
    let config = ServiceConfig {
        max_upload_bytes: 1024,
        ..ServiceConfig::default()
    };
    let state = AppState::new(config).unwrap();
    state.publish_models(ModelBundle::default()).await;
    // well past max_upload_bytes plus the multipart allowance
    let oversized = vec![0u8; 200 * 1024];

    let response = send(state, multipart_request(URI, &[image_part("big.png", &oversized)])).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error_type"], "payload_too_large");
}

#[tokio::test]
async fn test_french_report_with_all_models() {
    let state = state_with(full_bundle("A mountain landscape at dawn")).await;
    let png = png_bytes(40, 20, [30, 60, 90]);

    let response = send(
        state,
        multipart_request(URI, &[image_part("Peak.PNG", &png), text_part("language", "fr")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let description = json["description"].as_str().unwrap();
    assert!(description.starts_with("🖼️ RAPPORT COMPLET D'ANALYSE D'IMAGE\n\n"));
    assert!(description.contains("Description IA : [fr] A mountain landscape at dawn\n"));
    assert!(description.contains("  • [fr] mountain (confiance: 90.0%)\n"));
    assert!(description.contains("  • [fr] lakeside"));
    assert!(!description.contains("[fr] alp"));
    assert!(description.contains("  • Résolution : 40 × 20 pixels\n"));
    assert!(description.contains("  • Couleurs Dominantes : #1e3c5a\n"));
    assert!(description.ends_with("  • Impression et affichage numérique"));
    assert!(description.contains("  • Présentations environnementales\n"));

    let details = &json["details"];
    assert!((details["confidence"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    assert_eq!(details["dominant_colors"], serde_json::json!(["#1e3c5a"]));
    assert_eq!(details["image_format"], "PNG");
    assert_eq!(details["dimensions"], "40x20");
    assert_eq!(details["language"], "fr");
    assert_eq!(
        details["models_used"],
        serde_json::json!(["fake-captioner", "fake-classifier"])
    );
    assert_eq!(details["translation_ia"], true);
    assert_eq!(details["analysis_time"].as_str().unwrap().len(), 19);
}

#[tokio::test]
async fn test_default_language_from_config() {
    let state = state_with(ModelBundle::default()).await;
    let png = png_bytes(10, 10, [250, 250, 250]);

    let response = send(state, multipart_request(URI, &[image_part("white.png", &png)])).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["details"]["language"], "fr");
    assert_eq!(json["details"]["confidence"], 0.0);
    assert_eq!(json["details"]["translation_ia"], false);

    let description = json["description"].as_str().unwrap();
    assert!(description.contains("Description IA : Image contenant divers éléments visuels\n"));
    assert!(description.contains("  • Aucun résultat de classification disponible\n"));
    assert!(description.contains("  • Niveau de Luminosité : Élevé\n"));
}

#[tokio::test]
async fn test_arabic_falls_back_to_dictionary() {
    // Translation is only configured for French
    let state = state_with(full_bundle("a man with a stick in his hand in the jungle")).await;
    let png = png_bytes(12, 12, [0, 0, 0]);

    let response = send(
        state,
        multipart_request(URI, &[image_part("jungle.png", &png), text_part("language", "ar")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let description = body_json(response).await["description"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(description.contains("رجل يحمل عصا في يده في الغابة"));
    assert!(description.contains("  • جبل (ثقة: 90.0%)\n"));
    assert!(description.contains("  • valley"));
}

#[tokio::test]
async fn test_caption_failure_degrades_to_placeholder() {
    let bundle = ModelBundle::new(Some(Arc::new(FailingCaptioner)), None, None);
    let state = state_with(bundle).await;
    let png = png_bytes(10, 10, [0, 0, 0]);

    let response = send(
        state,
        multipart_request(URI, &[image_part("a.png", &png), text_part("language", "en")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["description"]
        .as_str()
        .unwrap()
        .contains("AI Description: Image containing various visual elements\n"));
    assert_eq!(json["details"]["models_used"], serde_json::json!(["broken-captioner"]));
    assert_eq!(json["details"]["language"], Language::En.code());
}
