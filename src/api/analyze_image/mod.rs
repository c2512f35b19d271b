// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze image API endpoint module
//!
//! Provides POST /api/analyze-image for multipart image uploads.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::analyze_image_handler;
pub use request::{AnalyzeImageForm, UploadedFile, ValidatedUpload};
pub use response::{AnalysisDetails, AnalyzeImageResponse};
