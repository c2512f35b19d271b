// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pre-resolved translations for a single report

use std::collections::HashMap;
use tracing::{debug, warn};

use super::resolver::{pair_key, TranslationError, TranslationLookup, TranslationResolver};
use crate::report::Language;

/// Translation outcomes gathered before rendering
///
/// The renderer is synchronous, so every text it may need translated is resolved
/// up front and kept here together with the failure, if any.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    target: Language,
    entries: HashMap<String, Result<String, TranslationError>>,
}

impl TranslationTable {
    /// Table with no resolved entries
    pub fn empty(target: Language) -> Self {
        Self {
            target,
            entries: HashMap::new(),
        }
    }

    /// Resolve each distinct non-blank text through `resolver`
    ///
    /// Without a resolver, or for English, the table stays empty.
    pub async fn prefetch<'a, I>(
        resolver: Option<&dyn TranslationResolver>,
        target: Language,
        texts: I,
    ) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::empty(target);
        let resolver = match resolver {
            Some(resolver) if !target.is_english() => resolver,
            _ => return table,
        };

        for text in texts {
            if text.trim().is_empty() || table.entries.contains_key(text) {
                continue;
            }
            let result = resolver.translate(text, target).await;
            match &result {
                Ok(translated) => debug!("Translation {}: '{}' -> '{}'", pair_key(target), text, translated),
                Err(TranslationError::Unavailable(pair)) => debug!("Pipeline {} not loaded", pair),
                Err(e) => warn!("Translation error for '{}': {}", text, e),
            }
            table.entries.insert(text.to_string(), result);
        }

        table
    }

    pub fn target(&self) -> Language {
        self.target
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TranslationLookup for TranslationTable {
    fn lookup(&self, text: &str, target: Language) -> Result<String, TranslationError> {
        if target != self.target {
            return Err(TranslationError::Unavailable(pair_key(target)));
        }
        self.entries
            .get(text)
            .cloned()
            .unwrap_or_else(|| Err(TranslationError::Unavailable(pair_key(target))))
    }
}
