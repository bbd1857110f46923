//! Provide the shared, pure vocabulary of the qfharness workspace.
//!
//! Both the runtime (which loads, evaluates and persists result documents) and the CLI (which fills harness
//! templates and renders feedback) spell markers, result keys and language names through this crate, so the
//! strings written to `qf.json` and into generated source never drift apart.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, no dependencies.
//! - Callers work with stable ids (`MarkerId`, `LanguageId`, `RunStatus`) and look up spellings through the
//!   registry tables.
//!
//! ## Examples
//! ```rust
//! use qfharness_core::markers::{self, MarkerId};
//!
//! assert_eq!(markers::token(MarkerId::Tests), "{{TESTS}}");
//! assert_eq!(markers::from_str("FUNC"), Some(MarkerId::Func));
//! ```

pub mod keys;
pub mod languages;
pub mod markers;
pub mod registry;
pub mod status;

pub use languages::LanguageId;
pub use markers::MarkerId;
pub use status::RunStatus;
