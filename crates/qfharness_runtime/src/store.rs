//! Result store: load `qf.json` into a [`ResultDocument`] and write it back.
//!
//! ## Policy
//!
//! A missing file is fatal unless the store is built with [`MissingStorePolicy::Empty`], in which case it loads
//! as `{}`. Malformed JSON and non-object roots are always fatal.
//!
//! Saving writes to a temporary file next to the target and renames it into place, so a failed save never
//! truncates the previous contents. An existing file keeps its permissions.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::document::ResultDocument;
use crate::error::StoreError;

/// What `load()` does when the result file does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingStorePolicy {
    /// Fail with [`StoreError::NotFound`].
    #[default]
    Fatal,
    /// Continue with an empty document.
    Empty,
}

/// File-backed store for a single result document.
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
    policy: MissingStorePolicy,
}

impl ResultStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            policy: MissingStorePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MissingStorePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> MissingStorePolicy {
        self.policy
    }

    /// Read and parse the result document.
    pub fn load(&self) -> Result<ResultDocument, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return match self.policy {
                    MissingStorePolicy::Fatal => Err(StoreError::NotFound {
                        path: self.path.clone(),
                    }),
                    MissingStorePolicy::Empty => {
                        warn!(path = %self.path.display(), "result file missing, starting from an empty document");
                        Ok(ResultDocument::new())
                    }
                };
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let value: serde_json::Value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            if source.is_io() {
                StoreError::io(&self.path, source.into())
            } else {
                StoreError::Parse {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let document = ResultDocument::try_from(value).map_err(|e| StoreError::NotAnObject {
            path: self.path.clone(),
            found: e.found,
        })?;
        debug!(path = %self.path.display(), keys = document.len(), "loaded result document");
        Ok(document)
    }

    /// Serialize `document` and atomically replace the result file.
    pub fn save(&self, document: &ResultDocument) -> Result<(), StoreError> {
        let text = document.to_json_string().map_err(StoreError::Serialize)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        if let Err(e) = tmp.write_all(text.as_bytes()).and_then(|()| tmp.flush()) {
            return Err(StoreError::io(tmp.path(), e));
        }
        // The temp file is created owner-only; keep the mode of the file being replaced.
        match fs::metadata(&self.path) {
            Ok(meta) => tmp
                .as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| StoreError::io(tmp.path(), e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(StoreError::io(&self.path, e)),
        }
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        debug!(path = %self.path.display(), bytes = text.len(), "saved result document");
        Ok(())
    }
}
