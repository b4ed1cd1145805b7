use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The shared secret is absent or empty.
    #[error("{0} is not configured")]
    SecretMissing(&'static str),

    #[error("Incorrect password or not entered.")]
    AccessDenied,

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no {kind} matches `{query}`")]
    NoMatch { kind: &'static str, query: String },

    #[error("`{query}` is ambiguous, did you mean one of: {}", .candidates.join(", "))]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },

    #[error("{0}")]
    Config(String),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}
