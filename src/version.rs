//! qfharness version information.
//!
//! Exposed as a single constant so the CLI and generated-file headers agree on the same value.

/// The qfharness version string (for example, `0.1.0`).
pub const QFHARNESS_VERSION: &str = env!("CARGO_PKG_VERSION");
