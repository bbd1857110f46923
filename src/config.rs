//! Harness configuration
//!
//! Values are layered: built-in defaults, then the `QF_RESULT_PATH` environment variable, then CLI flags.

use std::path::{Path, PathBuf};

use qfharness_core::keys::DEFAULT_RESULT_FILE;
use qfharness_runtime::{MissingStorePolicy, ResultStore};

/// Environment variable overriding the result document location.
pub const RESULT_PATH_ENV: &str = "QF_RESULT_PATH";

/// Harness configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Location of the result document
    pub result_path: PathBuf,
    /// What to do when the result document does not exist
    pub missing_policy: MissingStorePolicy,
    /// Print one line per assertion
    pub verbose: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            result_path: PathBuf::from(DEFAULT_RESULT_FILE),
            missing_policy: MissingStorePolicy::Fatal,
            verbose: false,
        }
    }
}

impl HarnessConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(RESULT_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            config.result_path = PathBuf::from(path);
        }
        config
    }

    /// Set the result document location
    pub fn with_result_path(mut self, path: impl AsRef<Path>) -> Self {
        self.result_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the missing-document policy
    pub fn with_missing_policy(mut self, policy: MissingStorePolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    /// Set verbose reporting
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the store described by this config.
    pub fn store(&self) -> ResultStore {
        ResultStore::new(&self.result_path).with_policy(self.missing_policy)
    }
}
