use thiserror::Error;

/// Errors surfaced by the command-line front end. Extraction itself never
/// fails; only reading input and writing output can.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read job description from {origin}: {source}")]
    Input {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn input(origin: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Input {
            origin: origin.into(),
            source,
        }
    }
}
