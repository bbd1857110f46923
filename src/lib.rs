#![forbid(unsafe_code)]
//! qfharness: fill unit-test harness templates, run harnesses against a result document, render feedback.
//!
//! The heavy lifting lives in two workspace crates:
//!
//! - `qfharness_core`: marker, key, language and status vocabulary (no IO).
//! - `qfharness_runtime`: the result store and the load → evaluate → persist pipeline.
//!
//! This crate adds the generation step ([`generate`]), feedback rendering ([`feedback`]), configuration
//! ([`config`]) and the command-line interface ([`cli`]).
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod feedback;
pub mod generate;
pub mod version;

pub use config::HarnessConfig;
pub use feedback::{FeedbackMessages, render_feedback};
pub use generate::{HarnessGenerator, Template, TemplateError, TestCase};
