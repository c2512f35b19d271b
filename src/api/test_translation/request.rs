// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Translation check request

use serde::{Deserialize, Serialize};

use crate::api::analyze_image::request::resolve_language;
use crate::api::errors::ApiError;
use crate::report::Language;

pub const SAMPLE_TEXT: &str = "a man with a stick in his hand in the jungle";
pub const SAMPLE_LANGUAGE: Language = Language::Ar;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestTranslationRequest {
    /// English text, defaults to a sample caption
    #[serde(default)]
    pub text: Option<String>,
    /// Target language code, defaults to `ar`
    #[serde(default)]
    pub language: Option<String>,
}

impl TestTranslationRequest {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or(SAMPLE_TEXT)
    }

    pub fn language(&self) -> Result<Language, ApiError> {
        resolve_language(self.language.as_deref(), SAMPLE_LANGUAGE)
    }
}
