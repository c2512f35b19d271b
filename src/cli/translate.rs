// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::warn;

use crate::config::ServiceConfig;
use crate::report::Language;
use crate::translation::{translate_or_original, ChatTranslationClient, TranslationResolver};

/// Arguments for the translate command
#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// English text to translate
    pub text: String,

    /// Target language (en, fr, ar)
    #[arg(long, default_value = "ar")]
    pub language: Language,

    /// Optional TOML configuration file
    #[arg(long, env = "IMAGE_INSIGHT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Machine-translate text with the configured pipeline, printing the input unchanged
/// when no pipeline answers
pub async fn translate_text(args: TranslateArgs) -> Result<()> {
    dotenv::dotenv().ok();

    let config = ServiceConfig::load(args.config.as_deref())?;
    let client = match config.models.translation_endpoint.as_deref() {
        Some(endpoint) => Some(ChatTranslationClient::new(
            endpoint,
            &config.models.translation_model,
            &config.models.translation_pairs,
        )?),
        None => {
            warn!("No translation endpoint configured");
            None
        }
    };

    let translated = translate_with(
        client.as_ref().map(|c| c as &dyn TranslationResolver),
        &args.text,
        args.language,
    )
    .await;
    println!("{}", translated);
    Ok(())
}

async fn translate_with(
    resolver: Option<&dyn TranslationResolver>,
    text: &str,
    target: Language,
) -> String {
    match resolver {
        Some(resolver) => translate_or_original(resolver, text, target).await,
        None => text.to_string(),
    }
}
