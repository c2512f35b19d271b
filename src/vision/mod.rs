// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision collaborators for image analysis
//!
//! This module provides:
//! - Upload decoding with magic-byte format detection
//! - Image captioning via an OpenAI-compatible VLM sidecar
//! - ViT classification on ONNX Runtime (CPU only)
//! - The `ModelBundle` shared by request handlers

pub mod chat;
pub mod classifier;
pub mod image_utils;
pub mod model_bundle;
pub mod types;
pub mod vlm_client;

pub use classifier::OnnxImageClassifier;
pub use image_utils::{
    decode_image_bytes, decode_image_bytes_with_limit, detect_format, has_supported_extension,
    DecodedImage, ImageError, ImageInfo, SUPPORTED_EXTENSIONS,
};
pub use model_bundle::{ModelBundle, ModelBundleConfig, ModelInfo};
pub use types::{Captioner, ClassificationResult, ImageClassifier};
pub use vlm_client::VlmCaptioner;
