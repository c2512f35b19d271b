// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::analyze_image::analyze_image_handler;
use super::health::health_handler;
use super::test_translation::test_translation_handler;
use crate::config::ServiceConfig;
use crate::report::{ReportRenderer, TemplateError};
use crate::vision::ModelBundle;

/// Room for multipart boundaries and the language field on top of the image
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Published once by the background loader
    pub models: Arc<RwLock<Option<Arc<ModelBundle>>>>,
    pub renderer: ReportRenderer,
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// State with no models yet; fails if the bundled templates are incomplete
    pub fn new(config: ServiceConfig) -> Result<Self, TemplateError> {
        Ok(Self {
            models: Arc::new(RwLock::new(None)),
            renderer: ReportRenderer::builtin()?,
            config: Arc::new(config),
        })
    }

    pub async fn publish_models(&self, bundle: ModelBundle) {
        *self.models.write().await = Some(Arc::new(bundle));
        info!("✅ Models published, analysis endpoints ready");
    }

    /// Snapshot of the loaded bundle, `None` while loading
    pub async fn models(&self) -> Option<Arc<ModelBundle>> {
        self.models.read().await.clone()
    }
}

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/api/analyze-image", post(analyze_image_handler))
        .route("/api/health", get(health_handler))
        .route("/api/test-translation", post(test_translation_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Serve until Ctrl+C
pub async fn start_server(state: AppState) -> Result<()> {
    let addr: SocketAddr = state.config.listen_addr.parse()?;
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("⏹️  Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
