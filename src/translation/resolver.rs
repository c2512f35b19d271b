// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Translation contracts

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::report::Language;

/// Why a translation could not be produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("translation pipeline {0} not loaded")]
    Unavailable(String),

    #[error("translation failed: {0}")]
    Failed(String),
}

/// Pipeline key for an English-source translation, e.g. `en-fr`
pub fn pair_key(target: Language) -> String {
    format!("en-{}", target.code())
}

/// Best-effort English-source text translation
#[async_trait]
pub trait TranslationResolver: Send + Sync {
    /// Translate `text` from English into `target`
    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslationError>;

    /// Loaded pipelines as pair keys (`en-fr`, `en-ar`)
    fn available_pairs(&self) -> Vec<String>;
}

/// Synchronous translation lookup used while rendering
pub trait TranslationLookup {
    fn lookup(&self, text: &str, target: Language) -> Result<String, TranslationError>;
}

/// Lookup that never has a translation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl TranslationLookup for NoTranslation {
    fn lookup(&self, _text: &str, target: Language) -> Result<String, TranslationError> {
        Err(TranslationError::Unavailable(pair_key(target)))
    }
}

/// Translate through the resolver, returning the input on any failure
///
/// Never fails; English targets and blank text are returned unchanged.
pub async fn translate_or_original(
    resolver: &dyn TranslationResolver,
    text: &str,
    target: Language,
) -> String {
    if target.is_english() || text.trim().is_empty() {
        return text.to_string();
    }
    match resolver.translate(text, target).await {
        Ok(translated) => translated,
        Err(e) => {
            debug!("Translation to {} fell back to original: {}", target, e);
            text.to_string()
        }
    }
}

/// A translation result that actually changed the text
pub fn effective_translation(
    result: Result<String, TranslationError>,
    original: &str,
) -> Option<String> {
    match result {
        Ok(translated) if !translated.trim().is_empty() && translated != original => Some(translated),
        _ => None,
    }
}
