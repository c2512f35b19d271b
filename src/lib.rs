// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod report;
pub mod translation;
pub mod version;
pub mod vision;

pub use analysis::{
    analyze_colors_and_composition, classify_composition, AnalysisError, ColorAnalysis,
    CompositionTag, HexColor,
};
pub use api::{create_router, start_server, AppState};
pub use config::ServiceConfig;
pub use pipeline::{analyze_image, AnalysisOutcome};
pub use report::{Language, ReportRenderer, TemplateCatalog, TemplateKey};
pub use translation::{TranslationError, TranslationLookup, TranslationResolver, TranslationTable};
pub use vision::{ClassificationResult, ModelBundle};
