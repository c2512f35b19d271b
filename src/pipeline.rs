// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! End-to-end analysis of one decoded image

use std::sync::Arc;
use tracing::warn;

use crate::analysis::{analyze_colors_and_composition, ColorAnalysis};
use crate::report::{Language, ReportRenderer};
use crate::translation::TranslationTable;
use crate::vision::{ClassificationResult, DecodedImage, ModelBundle};

/// Everything produced for one image
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub caption: Option<String>,
    pub classifications: Vec<ClassificationResult>,
    pub color_analysis: Option<ColorAnalysis>,
    pub report: String,
}

impl AnalysisOutcome {
    /// Confidence of the top classification, 0.0 without classifications
    pub fn top_confidence(&self) -> f32 {
        self.classifications.first().map(|c| c.confidence).unwrap_or(0.0)
    }
}

/// Caption, classify and measure the image concurrently, then render the report
///
/// Collaborator failures are logged and only remove their part of the report.
pub async fn analyze_image(
    bundle: &ModelBundle,
    renderer: &ReportRenderer,
    image: Arc<DecodedImage>,
    language: Language,
) -> AnalysisOutcome {
    let pixels = image.clone();
    let color_task = tokio::task::spawn_blocking(move || analyze_colors_and_composition(&pixels.rgb));
    let (caption, classifications, color_result) = tokio::join!(
        bundle.caption(&image),
        bundle.classify(image.clone()),
        color_task
    );

    let color_analysis = match color_result {
        Ok(Ok(analysis)) => Some(analysis),
        Ok(Err(e)) => {
            warn!("Colour analysis failed: {}", e);
            None
        }
        Err(e) => {
            warn!("Colour analysis task failed: {}", e);
            None
        }
    };

    let translator = bundle.translator().map(|t| t.as_ref());
    let table = TranslationTable::prefetch(
        translator,
        language,
        ReportRenderer::translation_inputs(caption.as_deref(), &classifications),
    )
    .await;

    let report = renderer.render(
        caption.as_deref(),
        &classifications,
        color_analysis.as_ref(),
        language,
        &table,
    );

    AnalysisOutcome {
        caption,
        classifications,
        color_analysis,
        report,
    }
}
