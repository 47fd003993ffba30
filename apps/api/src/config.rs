use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only the port and log level are required to have usable defaults; the
/// advisor credential is optional and its absence never blocks analysis.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional Gemini credential for the Q&A advisor.
    pub gemini_api_key: Option<String>,
    /// When set, rewrites always pick the first synonym candidate, making
    /// analysis output fully deterministic.
    pub deterministic_synonyms: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            deterministic_synonyms: std::env::var("DETERMINISTIC_SYNONYMS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}
