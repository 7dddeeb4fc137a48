//! Error types for loading problem sets.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the problems file. Always fatal for the application.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataLoadError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed problems file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("problem set \"{title}\" has no questions to ask")]
    EmptySet { title: String },
}
