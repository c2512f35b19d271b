// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analyze_image;
pub mod errors;
pub mod health;
pub mod http_server;
pub mod test_translation;

pub use analyze_image::{analyze_image_handler, AnalysisDetails, AnalyzeImageResponse};
pub use errors::{ApiError, ErrorResponse};
pub use health::{health_handler, HealthResponse, ModelsLoaded};
pub use http_server::{create_router, start_server, AppState};
pub use test_translation::{
    test_translation_handler, TestTranslationRequest, TestTranslationResponse, TranslationMethod,
};
