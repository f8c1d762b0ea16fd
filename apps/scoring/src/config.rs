use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::tracker::{DIGEST_SIZE, HISTORY_LIMIT};

/// Batch driver configuration, read from environment variables (and `.env`).
/// Every setting has a default; only malformed numbers are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub jobs_path: PathBuf,
    pub history_limit: usize,
    pub digest_size: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = PathBuf::from(lookup("DATA_DIR").unwrap_or_else(|| "./data".to_string()));
        let jobs_path = lookup("JOBS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("jobs.json"));

        Ok(Config {
            jobs_path,
            data_dir,
            history_limit: parse_or(&lookup, "HISTORY_LIMIT", HISTORY_LIMIT)?,
            digest_size: parse_or(&lookup, "DIGEST_SIZE", DIGEST_SIZE)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> Result<usize> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'")),
        None => Ok(default),
    }
}
