use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while fetching, persisting, or materializing the corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("dataset '{dataset}' is unavailable: {reason}")]
    SourceUnavailable { dataset: String, reason: String },
    #[error("{} not found. Run fetch_dataset first.", .0.display())]
    MissingInputArtifact(PathBuf),
    #[error("{} is not valid JSON: {source}", .path.display())]
    MalformedArtifact {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{} contains a malformed record: {source}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("record '{id}' could not be normalized: {reason}")]
    InvalidRecord { id: String, reason: String },
    #[error("filesystem failure at {}: {source}", .path.display())]
    Filesystem { path: PathBuf, source: io::Error },
    #[error("failed encoding JSON: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl CorpusError {
    pub(crate) fn fs(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| CorpusError::Filesystem { path, source }
    }
}
