// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Translation check endpoint module
//!
//! Provides POST /api/test-translation to exercise the caption translation chain.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::test_translation_handler;
pub use request::TestTranslationRequest;
pub use response::{TestTranslationResponse, TranslationMethod};
