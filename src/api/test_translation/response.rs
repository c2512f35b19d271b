// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Translation check response

use serde::{Deserialize, Serialize};

use crate::report::Language;

/// How translations are currently produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationMethod {
    /// Machine translation pairs are loaded
    #[serde(rename = "IA")]
    Ia,
    /// Bundled dictionaries only
    Dictionary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestTranslationResponse {
    pub success: bool,
    pub original: String,
    pub translated: String,
    pub language: Language,
    pub translation_method: TranslationMethod,
}
