//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3001;

/// Listen port. Defaults to 3001.
pub fn listen_port() -> anyhow::Result<u16> {
    match std::env::var("PORT") {
        Ok(v) => v
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{}'", v)),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

/// Listen address (without port). Defaults to all interfaces.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string())
}

/// Root directory holding the JSON documents.
pub fn data_dir() -> PathBuf {
    std::env::var("DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

/// Optional user directory fixture. When unset the built-in records are served.
pub fn users_fixture() -> Option<PathBuf> {
    std::env::var("USERS_FIXTURE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}
