// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analyze;
pub mod translate;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ServiceConfig;
use crate::report::TemplateCatalog;
use crate::version;
use crate::vision::ModelBundle;

/// Image Insight CLI
#[derive(Parser, Debug)]
#[command(name = "image-insight-cli")]
#[command(version = version::VERSION_NUMBER)]
#[command(about = "Offline tools for the multi-language image analysis service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyse a local image file and print the report
    Analyze(analyze::AnalyzeArgs),

    /// Machine-translate English text with the configured pipeline
    Translate(translate::TranslateArgs),

    /// Load the configured models and report which are available
    Models(ModelsArgs),

    /// Validate the built-in report templates
    CheckTemplates,

    /// Print version information
    Version,
}

/// Arguments for the models command
#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Optional TOML configuration file
    #[arg(long, env = "IMAGE_INSIGHT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze(args) => analyze::analyze_file(args).await,
        Commands::Translate(args) => translate::translate_text(args).await,
        Commands::Models(args) => list_models(args).await,
        Commands::CheckTemplates => check_templates(),
        Commands::Version => {
            println!("{}", serde_json::to_string_pretty(&version::get_version_info())?);
            Ok(())
        }
    }
}

fn check_templates() -> Result<()> {
    TemplateCatalog::builtin()?;
    println!("✅ Report templates complete for en, fr, ar");
    Ok(())
}

async fn list_models(args: ModelsArgs) -> Result<()> {
    dotenv::dotenv().ok();

    let config = ServiceConfig::load(args.config.as_deref())?;
    let bundle = ModelBundle::load(config.model_bundle_config()).await;

    println!("\n📋 Models:");
    for model in bundle.list_models() {
        let marker = if model.available { "✅" } else { "❌" };
        println!("  {} {:<12} {}", marker, model.model_type, model.name);
    }
    let pairs = bundle.translation_pairs();
    if !pairs.is_empty() {
        println!("  Translation pairs: {}", pairs.join(", "));
    }
    Ok(())
}
