//! Vidserve - scan a directory for videos, write an M3U playlist and serve it
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod playlist;
pub mod scanner;
pub mod server;
