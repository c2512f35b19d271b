// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze image response types

use serde::{Deserialize, Serialize};

use crate::report::Language;

/// Metadata reported next to the text report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDetails {
    /// Top classification confidence, 0.0 without classifications
    pub confidence: f32,
    pub dominant_colors: Vec<String>,
    /// Decoded format name, e.g. `PNG`
    pub image_format: String,
    /// `{width}x{height}`
    pub dimensions: String,
    /// Local time, `%Y-%m-%d %H:%M:%S`
    pub analysis_time: String,
    pub language: Language,
    pub models_used: Vec<String>,
    /// Whether machine translation was available
    pub translation_ia: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeImageResponse {
    pub success: bool,
    /// Rendered multi-section report
    pub description: String,
    pub details: AnalysisDetails,
}

impl AnalyzeImageResponse {
    pub fn new(description: String, details: AnalysisDetails) -> Self {
        Self {
            success: true,
            description,
            details,
        }
    }
}
