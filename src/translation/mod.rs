// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! English-source translation
//!
//! Translation is best-effort: failures are typed internally and collapse to the
//! original text (or a dictionary fallback) before they reach a report.

pub mod chat_client;
pub mod resolver;
pub mod table;

pub use chat_client::ChatTranslationClient;
pub use resolver::{
    effective_translation, pair_key, translate_or_original, NoTranslation, TranslationError,
    TranslationLookup, TranslationResolver,
};
pub use table::TranslationTable;
