// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Report generation
//!
//! Turns a caption, classifications and colour analysis into a deterministic text
//! report in English, French or Arabic. Fixed text lives in typed template tables
//! validated at startup; labels and captions fall back to bundled dictionaries
//! when machine translation is unavailable.

pub mod dictionary;
pub mod language;
pub mod renderer;
pub mod templates;

pub use language::{Language, LanguageError};
pub use renderer::{ReportRenderer, MAX_LISTED_CATEGORIES, MAX_RECOMMENDATIONS};
pub use templates::{TemplateCatalog, TemplateError, TemplateKey, TemplateTable};
