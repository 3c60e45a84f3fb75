use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The LLM credential is deliberately optional: its absence switches feedback
/// composition to the local strategy rather than failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub feedback_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            feedback_timeout_secs: std::env::var("FEEDBACK_TIMEOUT_SECS")
                .unwrap_or_else(|_| "20".to_string())
                .parse::<u64>()
                .context("FEEDBACK_TIMEOUT_SECS must be a positive integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
