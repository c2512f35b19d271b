// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared fixtures for router tests

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
};
use image::{ImageFormat, Rgb, RgbImage};
use image_insight::{
    api::{create_router, AppState},
    config::ServiceConfig,
    report::Language,
    translation::{pair_key, TranslationError, TranslationResolver},
    vision::{Captioner, ClassificationResult, DecodedImage, ImageClassifier, ModelBundle},
};
use std::io::Cursor;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

pub const BOUNDARY: &str = "image-insight-test-boundary";

pub struct FixedCaptioner(pub &'static str);

#[async_trait]
impl Captioner for FixedCaptioner {
    fn model_name(&self) -> &str {
        "fake-captioner"
    }

    async fn caption(&self, _image: &DecodedImage) -> Result<Option<String>> {
        Ok(Some(self.0.to_string()))
    }
}

pub struct FailingCaptioner;

#[async_trait]
impl Captioner for FailingCaptioner {
    fn model_name(&self) -> &str {
        "broken-captioner"
    }

    async fn caption(&self, _image: &DecodedImage) -> Result<Option<String>> {
        Err(anyhow!("sidecar unreachable"))
    }
}

pub struct FixedClassifier(pub Vec<(&'static str, f32)>);

impl ImageClassifier for FixedClassifier {
    fn model_name(&self) -> &str {
        "fake-classifier"
    }

    fn classify(&self, _image: &RgbImage) -> Result<Vec<ClassificationResult>> {
        Ok(self
            .0
            .iter()
            .map(|(label, confidence)| ClassificationResult {
                label: label.to_string(),
                confidence: *confidence,
            })
            .collect())
    }
}

/// Prefixes text with the target code, e.g. `[fr] a dog`
pub struct TaggingTranslator(pub Vec<Language>);

#[async_trait]
impl TranslationResolver for TaggingTranslator {
    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslationError> {
        if self.0.contains(&target) {
            Ok(format!("[{}] {}", target, text))
        } else {
            Err(TranslationError::Unavailable(pair_key(target)))
        }
    }

    fn available_pairs(&self) -> Vec<String> {
        self.0.iter().map(|l| pair_key(*l)).collect()
    }
}

pub fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

/// One multipart part: field name, optional filename and content
pub struct Part<'a> {
    pub name: &'a str,
    pub filename: Option<&'a str>,
    pub data: &'a [u8],
}

pub fn image_part<'a>(filename: &'a str, data: &'a [u8]) -> Part<'a> {
    Part {
        name: "image",
        filename: Some(filename),
        data,
    }
}

pub fn text_part<'a>(name: &'a str, value: &'a str) -> Part<'a> {
    Part {
        name,
        filename: None,
        data: value.as_bytes(),
    }
}

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part.filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                    part.name, filename
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", part.name).as_bytes(),
            ),
        }
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn json_request(uri: &str, json: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// State with the given bundle already published
pub async fn state_with(bundle: ModelBundle) -> AppState {
    let state = AppState::new(ServiceConfig::default()).unwrap();
    state.publish_models(bundle).await;
    state
}

/// Captioner, classifier and French translation
pub fn full_bundle(caption: &'static str) -> ModelBundle {
    ModelBundle::new(
        Some(Arc::new(FixedCaptioner(caption))),
        Some(Arc::new(FixedClassifier(vec![
            ("mountain", 0.9),
            ("valley", 0.05),
            ("lakeside", 0.03),
            ("alp", 0.01),
        ]))),
        Some(Arc::new(TaggingTranslator(vec![Language::Fr]))),
    )
}

pub async fn send(state: AppState, request: Request<Body>) -> Response<Body> {
    create_router(state).oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
