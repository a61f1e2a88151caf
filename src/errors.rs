use thiserror::Error;

/// Main error type for the tailwind-content-paths crate
#[derive(Debug, Error)]
pub enum ContentPathsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to resolve project references of {project}: {message}")]
    Resolution { project: String, message: String },

    #[error("Failed to read content paths manifest {path}: {message}")]
    ManifestRead { path: String, message: String },

    #[error("Cannot make {path} relative to {base}: {message}")]
    PathComputation {
        path: String,
        base: String,
        message: String,
    },

    #[error("Failed to write output to {path}: {message}")]
    OutputWrite { path: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ContentPathsError>;
