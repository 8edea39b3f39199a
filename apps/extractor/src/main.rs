use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skill_matrix::config::Config;
use skill_matrix::errors::AppError;
use skill_matrix::SkillMatrixExtractor;

/// Extract a structured skill matrix from a job description and print it as JSON
#[derive(Parser)]
#[command(name = "skill-matrix", version)]
struct Cli {
    /// Job description file; stdin when omitted or "-"
    path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so stdout carries only the JSON record
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting skill-matrix v{}", env!("CARGO_PKG_VERSION"));

    let mut jd_text = read_input(cli.path.as_deref()).await?;
    if truncate_to_char_boundary(&mut jd_text, config.max_input_bytes) {
        warn!(
            "Input truncated to {} bytes (SKILL_MATRIX_MAX_INPUT_BYTES)",
            jd_text.len()
        );
    }

    let extractor = SkillMatrixExtractor::deterministic();
    let extraction = extractor.extract(&jd_text).await;
    info!(
        "Extracted '{}' via {:?}",
        extraction.matrix.title, extraction.source
    );

    let json = if config.pretty_output {
        serde_json::to_string_pretty(&extraction.matrix)
    } else {
        serde_json::to_string(&extraction.matrix)
    }
    .map_err(AppError::Serialization)?;
    writeln!(std::io::stdout().lock(), "{json}").map_err(AppError::Output)?;

    Ok(())
}

async fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    let bytes = match path.filter(|p| *p != Path::new("-")) {
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .map_err(|e| AppError::input("stdin", e))?;
            buf
        }
        Some(path) => tokio::fs::read(path)
            .await
            .map_err(|e| AppError::input(path.display().to_string(), e))?,
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Cuts `text` to at most `max_bytes` without splitting a character.
/// Returns whether anything was removed.
fn truncate_to_char_boundary(text: &mut String, max_bytes: usize) -> bool {
    if text.len() <= max_bytes {
        return false;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    true
}
