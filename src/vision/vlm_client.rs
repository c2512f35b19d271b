// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! VLM sidecar captioner via OpenAI-compatible API

use anyhow::Result;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::chat::{ChatEndpoint, ChatMessage, ChatRequest};
use super::image_utils::DecodedImage;
use super::types::Captioner;

const CAPTION_PROMPT: &str = "Describe this image in one sentence.";
const CAPTION_MAX_TOKENS: u32 = 100;
const CAPTION_TIMEOUT: Duration = Duration::from_secs(120);

/// Captioner calling a VLM sidecar service via OpenAI-compatible API
#[derive(Debug, Clone)]
pub struct VlmCaptioner {
    endpoint: ChatEndpoint,
    model_name: String,
}

impl VlmCaptioner {
    pub fn new(endpoint: &str, model_name: &str) -> Result<Self> {
        let endpoint = ChatEndpoint::new(endpoint, CAPTION_TIMEOUT)?;
        info!(
            "VLM captioner configured: endpoint={}, model={}",
            endpoint.base_url(),
            model_name
        );

        Ok(Self {
            endpoint,
            model_name: model_name.to_string(),
        })
    }

    fn request_for(&self, data_url: String) -> ChatRequest {
        ChatRequest {
            model: self.model_name.clone(),
            messages: vec![ChatMessage::user(serde_json::json!([
                {"type": "text", "text": CAPTION_PROMPT},
                {"type": "image_url", "image_url": {"url": data_url}}
            ]))],
            max_tokens: CAPTION_MAX_TOKENS,
            temperature: 0.3,
        }
    }
}

#[async_trait]
impl Captioner for VlmCaptioner {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn caption(&self, image: &DecodedImage) -> Result<Option<String>> {
        let start = Instant::now();
        let request = self.request_for(image.data_url());
        let response = self.endpoint.complete(&request).await?;

        let tokens_used = response.usage.as_ref().map(|u| u.total_tokens).unwrap_or(0);
        let caption = response.first_content().map(str::to_string);
        debug!(
            "Caption generated in {}ms ({} tokens)",
            start.elapsed().as_millis(),
            tokens_used
        );

        Ok(caption)
    }
}
