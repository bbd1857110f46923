//! Template marker vocabulary.
//!
//! A harness template contains three insertion points, written as `{{NAME}}` behind a language-specific
//! comment prefix (see [`crate::languages::marker_prefix`]).

use crate::registry::{self, ItemInfo};

/// Opening delimiter of a marker token.
pub const MARKER_OPEN: &str = "{{";

/// Closing delimiter of a marker token.
pub const MARKER_CLOSE: &str = "}}";

/// Stable identifier for template markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerId {
    Imports,
    Func,
    Tests,
}

/// Metadata entry for a marker.
pub type MarkerInfo = ItemInfo<MarkerId>;

/// Registry of template markers, in the order they appear in every template.
pub const MARKERS: &[MarkerInfo] = &[
    MarkerInfo {
        id: MarkerId::Imports,
        canonical: "IMPORTS",
        aliases: &[],
        description: "Import/dependency declarations needed by the subject and the tests.",
    },
    MarkerInfo {
        id: MarkerId::Func,
        canonical: "FUNC",
        aliases: &[],
        description: "The candidate solution (the subject under test).",
    },
    MarkerInfo {
        id: MarkerId::Tests,
        canonical: "TESTS",
        aliases: &[],
        description: "The sequence of boolean checks and count updates.",
    },
];

/// Resolve a marker name (without braces) to its id.
pub fn from_str(name: &str) -> Option<MarkerId> {
    registry::resolve(MARKERS, name)
}

/// Return the marker name without braces.
pub fn as_str(id: MarkerId) -> &'static str {
    info_for(id).canonical
}

/// Return the metadata entry for a marker.
pub fn info_for(id: MarkerId) -> &'static MarkerInfo {
    registry::lookup(MARKERS, id)
}

/// Return the braced token, e.g. `{{IMPORTS}}`.
pub fn token(id: MarkerId) -> String {
    format!("{MARKER_OPEN}{}{MARKER_CLOSE}", as_str(id))
}
