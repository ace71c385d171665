//! Configuration loader for the `citysense-advisory` backend service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.

use std::env;

use anyhow::{anyhow, Result};

/// Parse an optional environment variable with a default value.
macro_rules! parse_env {
    ($var_name:expr, $ty:ty, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse a required string environment variable.
macro_rules! require_env {
    ($var_name:expr) => {
        env::var($var_name)
            .map_err(|_| anyhow!("{} must be set in .env or environment", $var_name))?
    };
}

/// Read an optional string environment variable with a default.
macro_rules! env_or {
    ($var_name:expr, $default:expr) => {
        env::var($var_name).unwrap_or_else(|_| $default.to_string())
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Chat-completions endpoint of the generation service.
    pub ai_api_url: String,

    /// Bearer key for the generation service.
    pub ai_api_key: String,

    /// Model identifier sent with every generation request.
    pub ai_model: String,

    /// Response budget (tokens) for free-form operator prompts.
    pub prompt_max_tokens: u32,

    /// Response budget (tokens) for structured neighborhood analyses.
    pub review_max_tokens: u32,

    /// Radius, in kilometers, for matching sensors to a neighborhood.
    pub nearby_radius_km: f64,

    /// HTTP listen port.
    pub port: u16,
}

/// Load configuration from environment variables with defaults.
///
/// Required:
/// - `OPENAI_API_KEY` – bearer key for the generation service
///
/// Optional:
/// - `OPENAI_API_URL` – chat-completions endpoint (default: OpenAI's)
/// - `OPENAI_MODEL` – model identifier (default: `gpt-3.5-turbo`)
/// - `PROMPT_MAX_TOKENS` – short response budget (default: 100)
/// - `REVIEW_MAX_TOKENS` – analysis response budget (default: 300)
/// - `NEARBY_RADIUS_KM` – proximity radius (default: 2.0)
/// - `PORT` – HTTP listen port (default: 3002)
///
/// Returns an error if any required variable is missing or invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let ai_api_key = require_env!("OPENAI_API_KEY");
    let ai_api_url = env_or!("OPENAI_API_URL", "https://api.openai.com/v1/chat/completions");
    let ai_model = env_or!("OPENAI_MODEL", "gpt-3.5-turbo");
    let prompt_max_tokens = parse_env!("PROMPT_MAX_TOKENS", u32, 100);
    let review_max_tokens = parse_env!("REVIEW_MAX_TOKENS", u32, 300);
    let nearby_radius_km = parse_env!("NEARBY_RADIUS_KM", f64, 2.0);
    let port = parse_env!("PORT", u16, 3002);

    Ok(Config {
        ai_api_url,
        ai_api_key,
        ai_model,
        prompt_max_tokens,
        review_max_tokens,
        nearby_radius_km,
        port,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    ///
    /// Masks the API key while showing all other values that were loaded.
    pub fn log_config(&self) {
        // ---
        let masked_key: String = if self.ai_api_key.chars().count() > 8 {
            self.ai_api_key.chars().take(4).chain("****".chars()).collect()
        } else {
            "****".to_string()
        };

        tracing::info!("Configuration loaded:");
        tracing::info!("  OPENAI_API_URL    : {}", self.ai_api_url);
        tracing::info!("  OPENAI_API_KEY    : {}", masked_key);
        tracing::info!("  OPENAI_MODEL      : {}", self.ai_model);
        tracing::info!("  PROMPT_MAX_TOKENS : {}", self.prompt_max_tokens);
        tracing::info!("  REVIEW_MAX_TOKENS : {}", self.review_max_tokens);
        tracing::info!("  NEARBY_RADIUS_KM  : {}", self.nearby_radius_km);
        tracing::info!("  PORT              : {}", self.port);
    }
}
