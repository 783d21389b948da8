//! Environment-driven configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Runtime configuration for the feedlift client.
#[derive(Debug, Clone)]
pub struct FeedliftConfig {
    /// API root of the optimization service, e.g. `http://localhost:8000/api`.
    pub api_url: String,
    /// Request timeout applied at HTTP client construction.
    pub timeout_secs: u64,
    /// Directory exported feed files are saved into.
    pub export_dir: PathBuf,
}

/// Load configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if `FEEDLIFT_API_URL` is missing or a value is invalid.
pub fn load_config() -> Result<FeedliftConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var` needed.
fn build_config<F>(lookup: F) -> Result<FeedliftConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_url = require("FEEDLIFT_API_URL")?;
    let timeout_secs = parse_u64("FEEDLIFT_TIMEOUT_SECS", "30")?;
    let export_dir = PathBuf::from(or_default("FEEDLIFT_EXPORT_DIR", "."));

    Ok(FeedliftConfig {
        api_url,
        timeout_secs,
        export_dir,
    })
}
