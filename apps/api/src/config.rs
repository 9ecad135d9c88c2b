use anyhow::{Context, Result};

/// Default upstream call ceiling: 28s leaves headroom under a 30s gateway cutoff.
const DEFAULT_TIMEOUT_MS: u64 = 28_000;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub replicate_api_token: String,
    pub replicate_timeout_ms: u64,
    /// Extra allowed origins beyond the local-development defaults.
    pub allowed_origins: Vec<String>,
    /// Public site URL; normalized into an allowed origin.
    pub site_url: Option<String>,
    /// Deployment host (no scheme); prefixed with https:// into an allowed origin.
    pub vercel_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            replicate_api_token: require_env("REPLICATE_API_TOKEN")?,
            replicate_timeout_ms: std::env::var("REPLICATE_TIMEOUT_MS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
                .parse::<u64>()
                .context("REPLICATE_TIMEOUT_MS must be a number of milliseconds")?,
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            site_url: std::env::var("SITE_URL").ok().filter(|v| !v.is_empty()),
            vercel_url: std::env::var("VERCEL_URL").ok().filter(|v| !v.is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
