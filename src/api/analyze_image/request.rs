// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multipart form parsing and validation for image analysis

use axum::body::Bytes;
use axum::http::StatusCode;
use axum_extra::extract::multipart::MultipartError;
use axum_extra::extract::Multipart;

use crate::api::errors::ApiError;
use crate::report::Language;
use crate::vision::{has_supported_extension, SUPPORTED_EXTENSIONS};

pub const IMAGE_FIELD: &str = "image";
pub const LANGUAGE_FIELD: &str = "language";

#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied filename, empty when none was sent
    pub filename: String,
    pub bytes: Bytes,
}

/// Raw fields of an analysis upload
#[derive(Debug, Clone, Default)]
pub struct AnalyzeImageForm {
    pub image: Option<UploadedFile>,
    pub language: Option<String>,
}

/// A form that passed validation
#[derive(Debug, Clone)]
pub struct ValidatedUpload {
    pub filename: String,
    pub bytes: Bytes,
    pub language: Language,
}

impl AnalyzeImageForm {
    /// Collect the `image` and `language` fields; other fields are ignored
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error("Invalid multipart body", e))?
        {
            match field.name() {
                Some(IMAGE_FIELD) => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error("Failed to read image upload", e))?;
                    form.image = Some(UploadedFile { filename, bytes });
                }
                Some(LANGUAGE_FIELD) => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| multipart_error("Failed to read language field", e))?;
                    form.language = Some(text);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Check presence, filename and extension, then resolve the language
    pub fn validate(self, default_language: Language) -> Result<ValidatedUpload, ApiError> {
        let image = self
            .image
            .ok_or_else(|| ApiError::validation(IMAGE_FIELD, "No image provided"))?;

        if image.filename.is_empty() {
            return Err(ApiError::validation(IMAGE_FIELD, "No file selected"));
        }

        if !has_supported_extension(&image.filename) {
            return Err(ApiError::validation(
                IMAGE_FIELD,
                format!("Format not supported. Use: {}", SUPPORTED_EXTENSIONS.join(", ")),
            ));
        }

        let language = resolve_language(self.language.as_deref(), default_language)?;

        Ok(ValidatedUpload {
            filename: image.filename,
            bytes: image.bytes,
            language,
        })
    }
}

/// Body-limit aborts surface as multipart errors; keep their 413
fn multipart_error(context: &str, e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(format!("{}: {}", context, e.body_text()))
    } else {
        ApiError::InvalidRequest(format!("{}: {}", context, e))
    }
}

/// Parse a requested language code; absent or blank means the default
pub fn resolve_language(requested: Option<&str>, default_language: Language) -> Result<Language, ApiError> {
    match requested.map(str::trim) {
        Some(code) if !code.is_empty() => code
            .parse::<Language>()
            .map_err(|e| ApiError::validation(LANGUAGE_FIELD, e.to_string())),
        _ => Ok(default_language),
    }
}
