use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Runtime configuration loaded from environment variables (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// Pretty-print the JSON record on stdout.
    pub pretty_output: bool,
    /// Inputs longer than this are cut at a char boundary before extraction.
    pub max_input_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rust_log: "info".to_string(),
            pretty_output: true,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            pretty_output: parse_var(
                "SKILL_MATRIX_PRETTY",
                std::env::var("SKILL_MATRIX_PRETTY").ok(),
                defaults.pretty_output,
            )?,
            max_input_bytes: parse_var(
                "SKILL_MATRIX_MAX_INPUT_BYTES",
                std::env::var("SKILL_MATRIX_MAX_INPUT_BYTES").ok(),
                defaults.max_input_bytes,
            )?,
        })
    }
}

fn parse_var<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{value}'")),
        _ => Ok(default),
    }
}
