use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProteinError {
    #[error("Invalid item '{name}': protein must be positive (got {protein})")]
    InvalidItem { name: String, protein: f64 },

    #[error("Invalid protein target: {0}")]
    InvalidTarget(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, ProteinError>;
