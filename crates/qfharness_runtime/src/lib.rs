//! Runtime for qfharness: load a result document, evaluate assertions against a subject, persist the outcome.
//!
//! The pipeline is deliberately linear (`NotStarted → Loaded → Evaluated → Persisted → Done`). The result
//! document is threaded through it by value; nothing is written until every assertion has been evaluated, so an
//! evaluation failure leaves the previous `qf.json` untouched.
//!
//! ## Example
//!
//! ```no_run
//! use qfharness_runtime::{Harness, Power, ResultStore};
//! use qfharness_runtime::runner::NoopObserver;
//!
//! let store = ResultStore::new("qf.json");
//! let summary = Harness::fixed(&Power).run(&store, &mut NoopObserver)?;
//! assert_eq!(summary.tally.total(), 3);
//! # Ok::<(), qfharness_runtime::HarnessError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod assertion;
pub mod document;
pub mod error;
pub mod runner;
pub mod store;
pub mod subject;

pub use assertion::{Assertion, PowerCase};
pub use document::ResultDocument;
pub use error::{EvaluationError, HarnessError, StoreError};
pub use runner::{Harness, HarnessObserver, ReportMode, RunSummary, Stage, Tally};
pub use store::{MissingStorePolicy, ResultStore};
pub use subject::{Power, Subject};
