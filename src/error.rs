//! Top-level error for the `folio` binary.

use crate::config::ConfigError;
use crate::content::ContentError;

/// Anything that ends a command with a non-zero exit.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FolioResult<T> = Result<T, FolioError>;
