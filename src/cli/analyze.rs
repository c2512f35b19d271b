// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use crate::analysis::ColorAnalysis;
use crate::config::ServiceConfig;
use crate::pipeline::{analyze_image, AnalysisOutcome};
use crate::report::{Language, ReportRenderer};
use crate::vision::{
    decode_image_bytes_with_limit, has_supported_extension, ClassificationResult, ModelBundle,
};

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Image file to analyse
    pub path: PathBuf,

    /// Report language (en, fr, ar)
    #[arg(long, default_value = "en")]
    pub language: Language,

    /// Optional TOML configuration file
    #[arg(long, env = "IMAGE_INSIGHT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip captioning, classification and translation models
    #[arg(long)]
    pub no_models: bool,

    /// Print the full analysis as JSON instead of the report text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct AnalysisJson<'a> {
    file: String,
    language: Language,
    caption: Option<&'a str>,
    classifications: &'a [ClassificationResult],
    color_analysis: Option<&'a ColorAnalysis>,
    report: &'a str,
}

/// Analyse one local image
pub async fn analyze_file(args: AnalyzeArgs) -> Result<()> {
    dotenv::dotenv().ok();

    let config = ServiceConfig::load(args.config.as_deref())?;
    let bytes = read_image(&args.path, config.max_upload_bytes)?;
    let image = Arc::new(decode_image_bytes_with_limit(&bytes, config.max_upload_bytes)?);
    info!(
        "Decoded {} ({} {})",
        args.path.display(),
        image.info.format_name(),
        image.info.dimensions()
    );

    let bundle = if args.no_models {
        ModelBundle::default()
    } else {
        ModelBundle::load(config.model_bundle_config()).await
    };
    let renderer = ReportRenderer::builtin()?;

    let outcome = analyze_image(&bundle, &renderer, image, args.language).await;

    if args.json {
        println!("{}", render_json(&args.path, args.language, &outcome)?);
    } else {
        println!("{}", outcome.report);
    }
    Ok(())
}

fn read_image(path: &Path, max_bytes: usize) -> Result<Vec<u8>> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("Not a file path: {}", path.display()))?;
    if !has_supported_extension(name) {
        return Err(anyhow!(
            "Format not supported. Use: jpg, jpeg, png, webp, bmp, gif"
        ));
    }

    let size = std::fs::metadata(path)
        .with_context(|| format!("Cannot read {}", path.display()))?
        .len();
    if size > max_bytes as u64 {
        return Err(anyhow!(
            "{} is {} bytes, maximum is {} bytes",
            path.display(),
            size,
            max_bytes
        ));
    }

    std::fs::read(path).with_context(|| format!("Cannot read {}", path.display()))
}

fn render_json(path: &Path, language: Language, outcome: &AnalysisOutcome) -> Result<String> {
    let json = AnalysisJson {
        file: path.display().to_string(),
        language,
        caption: outcome.caption.as_deref(),
        classifications: &outcome.classifications,
        color_analysis: outcome.color_analysis.as_ref(),
        report: &outcome.report,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
