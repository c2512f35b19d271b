// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OpenAI-compatible chat completion plumbing shared by the captioner and translator

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;

#[derive(Debug, serde::Serialize)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: serde_json::Value,
}

impl ChatMessage {
    pub fn user(content: serde_json::Value) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct ChatUsage {
    pub total_tokens: u32,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct ChatResponse {
    pub choices: Vec<ChatChoice>,
    pub usage: Option<ChatUsage>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct ChatResponseMessage {
    pub content: String,
}

impl ChatResponse {
    /// Content of the first choice, trimmed
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|c| c.message.content.trim())
            .filter(|content| !content.is_empty())
    }
}

/// Endpoint and HTTP client of one chat-completion sidecar
#[derive(Debug, Clone)]
pub(crate) struct ChatEndpoint {
    client: Client,
    endpoint: String,
}

impl ChatEndpoint {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.endpoint
    }

    pub async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.endpoint))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("chat completion returned HTTP {}", status));
        }

        Ok(response.json().await?)
    }
}

/// URL of a local port that nothing listens on
#[cfg(test)]
pub(crate) fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
