// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Machine translation through an OpenAI-compatible chat completion endpoint

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use super::resolver::{pair_key, TranslationError, TranslationResolver};
use crate::report::Language;
use crate::vision::chat::{ChatEndpoint, ChatMessage, ChatRequest};

const TRANSLATION_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_TRANSLATION_TOKENS: u32 = 100;

/// Translator for English text into the configured target languages
#[derive(Debug, Clone)]
pub struct ChatTranslationClient {
    endpoint: ChatEndpoint,
    model_name: String,
    targets: Vec<Language>,
}

impl ChatTranslationClient {
    pub fn new(endpoint: &str, model_name: &str, targets: &[Language]) -> Result<Self> {
        let endpoint = ChatEndpoint::new(endpoint, TRANSLATION_TIMEOUT)?;
        let targets: Vec<Language> = targets.iter().copied().filter(|l| !l.is_english()).collect();
        info!(
            "Translation client configured: endpoint={}, model={}, pairs={:?}",
            endpoint.base_url(),
            model_name,
            targets.iter().map(|l| pair_key(*l)).collect::<Vec<_>>()
        );

        Ok(Self {
            endpoint,
            model_name: model_name.to_string(),
            targets,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn supports(&self, target: Language) -> bool {
        self.targets.contains(&target)
    }
}

fn target_name(target: Language) -> &'static str {
    match target {
        Language::En => "English",
        Language::Fr => "French",
        Language::Ar => "Arabic",
    }
}

fn translation_prompt(text: &str, target: Language) -> String {
    format!(
        "Translate the following English text into {}. Reply with the translation only.\n\n{}",
        target_name(target),
        text
    )
}

#[async_trait]
impl TranslationResolver for ChatTranslationClient {
    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslationError> {
        if target.is_english() || text.trim().is_empty() {
            return Ok(text.to_string());
        }
        if !self.supports(target) {
            return Err(TranslationError::Unavailable(pair_key(target)));
        }

        let request = ChatRequest {
            model: self.model_name.clone(),
            messages: vec![ChatMessage::user(serde_json::Value::String(
                translation_prompt(text, target),
            ))],
            max_tokens: MAX_TRANSLATION_TOKENS,
            temperature: 0.1,
        };

        let response = self
            .endpoint
            .complete(&request)
            .await
            .map_err(|e| TranslationError::Failed(e.to_string()))?;

        let translated = response
            .first_content()
            .ok_or_else(|| TranslationError::Failed("empty completion".to_string()))?;
        debug!("Translated to {}: {} chars", target, translated.chars().count());

        Ok(translated.to_string())
    }

    fn available_pairs(&self) -> Vec<String> {
        self.targets.iter().map(|l| pair_key(*l)).collect()
    }
}
