use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::storage::StorageConfig;

/// Default port of the upload/check API.
pub const DEFAULT_PORT: u16 = 5000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// has a default, so a bare `plagcheck serve` works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for uploads (PLAGCHECK_UPLOAD_DIR, default ./uploads)
    pub upload_dir: PathBuf,
    /// Reference slot directory (PLAGCHECK_REFERENCE_DIR, default <upload_dir>/reference)
    pub reference_dir: PathBuf,
    /// Test slot directory (PLAGCHECK_TEST_DIR, default <upload_dir>/test)
    pub test_dir: PathBuf,
    /// Accepted upload extensions (PLAGCHECK_ALLOWED_EXTENSIONS, default "pdf")
    pub allowed_extensions: Vec<String>,
    /// HTTP port (PLAGCHECK_PORT)
    pub port: u16,
    /// HTTP bind address (PLAGCHECK_BIND)
    pub bind: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let upload_dir = env::var("PLAGCHECK_UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./uploads"));

        let reference_dir = env::var("PLAGCHECK_REFERENCE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| upload_dir.join("reference"));
        let test_dir = env::var("PLAGCHECK_TEST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| upload_dir.join("test"));

        let allowed_extensions = parse_extensions(
            &env::var("PLAGCHECK_ALLOWED_EXTENSIONS").unwrap_or_else(|_| "pdf".to_string()),
        );
        if allowed_extensions.is_empty() {
            anyhow::bail!(
                "PLAGCHECK_ALLOWED_EXTENSIONS is empty. Set it to a comma-separated list, e.g. \"pdf,txt\"."
            );
        }

        let port = match env::var("PLAGCHECK_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PLAGCHECK_PORT is not a valid port: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            upload_dir,
            reference_dir,
            test_dir,
            allowed_extensions,
            port,
            bind: env::var("PLAGCHECK_BIND").unwrap_or_else(|_| "127.0.0.1".to_string()),
        })
    }

    /// The storage layout handed to the document store.
    pub fn storage(&self) -> StorageConfig {
        StorageConfig {
            reference_dir: self.reference_dir.clone(),
            test_dir: self.test_dir.clone(),
            allowed_extensions: self.allowed_extensions.clone(),
        }
    }
}

fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}
