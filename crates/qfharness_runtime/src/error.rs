//! Error taxonomy for loading, evaluating and persisting result documents.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`crate::ResultStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("result file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON object, found {found}", path.display())]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("failed to serialize result document: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while computing a single assertion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// The subject rejected its arguments (e.g. a negative base with a fractional exponent).
    #[error("subject failed for ({lhs}, {rhs}): {reason}")]
    Domain { lhs: f64, rhs: f64, reason: String },

    /// The subject or the check itself panicked.
    #[error("panicked: {0}")]
    Panicked(String),
}

/// Errors that abort a harness run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("assertion `{assertion}` could not be evaluated: {source}")]
    Evaluation {
        assertion: String,
        #[source]
        source: EvaluationError,
    },
}
