use anyhow::{Context, Result};

use crate::matching::ranking::{DEFAULT_MATCH_LIMIT, MAX_MATCH_LIMIT};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. Unset → in-memory repositories.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Ranking limit used when a request does not pass one.
    pub default_match_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            port: 8080,
            rust_log: "info".to_string(),
            default_match_limit: DEFAULT_MATCH_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_match_limit = match optional_env("DEFAULT_MATCH_LIMIT") {
            Some(raw) => raw
                .parse::<usize>()
                .context("DEFAULT_MATCH_LIMIT must be a positive integer")?,
            None => DEFAULT_MATCH_LIMIT,
        };
        anyhow::ensure!(
            (1..=MAX_MATCH_LIMIT).contains(&default_match_limit),
            "DEFAULT_MATCH_LIMIT must be between 1 and {MAX_MATCH_LIMIT}"
        );

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_match_limit,
        })
    }
}

/// Treats unset and blank variables the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
