//! Outcome of running a generated harness, as reported back to the feedback step.

use crate::registry::{self, ItemInfo};

/// How the harness run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunStatus {
    #[default]
    NoError,
    InternalError,
    Timeout,
}

/// Registry of run statuses.
pub const STATUSES: &[ItemInfo<RunStatus>] = &[
    ItemInfo {
        id: RunStatus::NoError,
        canonical: "no-error",
        aliases: &["ok", "success"],
        description: "The harness ran to completion.",
    },
    ItemInfo {
        id: RunStatus::InternalError,
        canonical: "internal-error",
        aliases: &["error"],
        description: "The harness crashed or produced an unreadable result document.",
    },
    ItemInfo {
        id: RunStatus::Timeout,
        canonical: "timeout",
        aliases: &[],
        description: "The harness did not finish in time.",
    },
];

/// Resolve a status name to its id.
pub fn from_str(name: &str) -> Option<RunStatus> {
    registry::resolve(STATUSES, name)
}

/// Return the canonical status name.
pub fn as_str(status: RunStatus) -> &'static str {
    registry::lookup(STATUSES, status).canonical
}

impl RunStatus {
    /// True when per-test results in the document can be trusted.
    pub fn is_success(self) -> bool {
        self == RunStatus::NoError
    }
}
