//! HTTP file server.
//!
//! The server has two states. [`bind`] takes it from stopped to listening and
//! fails if the port cannot be bound; [`Listening::serve`] then answers
//! requests until the process is killed. Each connection is handled in its
//! own task and shares only the immutable [`AppContext`].

use crate::config::Config;
use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod files;
pub mod resolve;

/// Shared application context
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    /// Canonical path of the served root
    pub root: Arc<PathBuf>,
}

impl AppContext {
    /// Build the context, canonicalizing the configured root.
    pub fn new(config: Config) -> Result<Self> {
        let root = std::fs::canonicalize(&config.scan.root)
            .with_context(|| format!("Failed to resolve served root {:?}", config.scan.root))?;

        Ok(Self {
            config: Arc::new(config),
            root: Arc::new(root),
        })
    }
}

/// Create the Axum router. Every path and method falls through to the file
/// handler.
pub fn create_router(ctx: AppContext) -> Router {
    Router::new()
        .fallback(files::serve_file)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// A bound server that has not started accepting yet.
pub struct Listening {
    listener: TcpListener,
    local_addr: SocketAddr,
    root: Arc<PathBuf>,
    app: Router,
}

impl Listening {
    /// The address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve requests until the process exits.
    pub async fn serve(self) -> Result<()> {
        tracing::info!("Serving {:?} on {}", self.root, self.local_addr);
        axum::serve(self.listener, self.app)
            .await
            .context("HTTP server error")
    }
}

/// Bind the configured host and port.
pub async fn bind(ctx: AppContext) -> Result<Listening> {
    let addr = format!("{}:{}", ctx.config.server.host, ctx.config.server.port);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    let local_addr = listener
        .local_addr()
        .context("Failed to read bound address")?;

    tracing::info!("Listening on {}", local_addr);

    Ok(Listening {
        listener,
        local_addr,
        root: ctx.root.clone(),
        app: create_router(ctx),
    })
}
