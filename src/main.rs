// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use image_insight::{
    api::{start_server, AppState},
    config::ServiceConfig,
    version,
    vision::ModelBundle,
};
use std::{env, path::PathBuf};
use tracing::info;

/// Multi-language image analysis server
#[derive(Parser, Debug)]
#[command(name = "image-insight", version = version::VERSION_NUMBER)]
struct Args {
    /// Optional TOML configuration file
    #[arg(long, env = "IMAGE_INSIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, overrides configuration and environment
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    info!("{}", version::get_version_string());

    println!("🚀 Starting {}...\n", version::SERVICE_NAME);
    println!("📦 BUILD VERSION: {}", version::VERSION);
    println!("📅 Build Date: {}", version::BUILD_DATE);
    println!();

    let mut config = ServiceConfig::load(args.config.as_deref())?;
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }

    println!("🌍 Default report language: {}", config.default_language);
    println!("📡 Endpoints:");
    println!("   POST http://{}/api/analyze-image", config.listen_addr);
    println!("   GET  http://{}/api/health", config.listen_addr);
    println!("   POST http://{}/api/test-translation", config.listen_addr);
    println!();

    let bundle_config = config.model_bundle_config();
    let state = AppState::new(config)?;

    // Models load in the background; requests get 503 until they are published
    let loader_state = state.clone();
    tokio::spawn(async move {
        println!("🧠 Loading models...");
        let bundle = ModelBundle::load(bundle_config).await;
        println!(
            "✅ Models ready: caption={} classifier={} translation={}",
            bundle.has_captioner(),
            bundle.has_classifier(),
            bundle.has_translation()
        );
        loader_state.publish_models(bundle).await;
    });

    start_server(state).await
}
