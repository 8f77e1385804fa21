//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which lays out a served root inside a temporary
//! directory and builds the [`AppContext`] for it. The served root is a
//! subdirectory so tests can place files just outside it. The
//! [`TestHarness::with_server`] constructor binds a random port and serves in
//! the background for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::Router;
use tempfile::TempDir;

use vidserve::config::Config;
use vidserve::server::{self, create_router, AppContext};

/// Test harness wrapping a temporary served root and its [`AppContext`].
pub struct TestHarness {
    pub dir: TempDir,
    pub root: PathBuf,
}

impl TestHarness {
    /// Create an empty served root.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = dir.path().join("served");
        std::fs::create_dir(&root).expect("failed to create served root");
        Self { dir, root }
    }

    /// Configuration pointing at the served root, bound to a random local port.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.scan.root = self.root.clone();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;
        config
    }

    pub fn ctx(&self) -> AppContext {
        AppContext::new(self.config()).expect("failed to build context")
    }

    pub fn router(&self) -> Router {
        create_router(self.ctx())
    }

    /// Write a file below the served root, creating parent directories.
    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        write_file(&self.root, relative, contents)
    }

    /// Write a file next to (outside of) the served root.
    pub fn write_outside(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        write_file(self.dir.path(), name, contents)
    }

    /// Bind a random port and serve in the background.
    pub async fn with_server(self) -> (Self, SocketAddr) {
        let listening = server::bind(self.ctx())
            .await
            .expect("failed to bind random port");
        let addr = listening.local_addr();

        tokio::spawn(async move {
            listening.serve().await.ok();
        });

        (self, addr)
    }
}

pub fn write_file(base: &Path, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create parent dirs");
    }
    std::fs::write(&path, contents).expect("failed to write file");
    path
}
