//! Shareable metadata for the vocabulary registries.
//!
//! Every registry in this crate is a `const` table of [`ItemInfo`] rows keyed by a small `Copy` id enum.
//! Lookups are linear; the tables have a handful of rows each.

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// ## Notes
/// - `canonical` is the spelling written to disk or into generated source.
/// - `aliases` are accepted on input (CLI flags, JSON) but never emitted.
#[derive(Debug, Clone, Copy)]
pub struct ItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

impl<Id: Copy + PartialEq> ItemInfo<Id> {
    /// Return true when `name` is the canonical spelling or one of the aliases.
    pub fn matches(&self, name: &str) -> bool {
        self.canonical == name || self.aliases.contains(&name)
    }
}

/// Resolve a spelling against a registry table (canonical spellings win over aliases).
pub fn resolve<Id: Copy + PartialEq>(table: &[ItemInfo<Id>], name: &str) -> Option<Id> {
    if let Some(info) = table.iter().find(|i| i.canonical == name) {
        return Some(info.id);
    }
    table.iter().find(|i| i.matches(name)).map(|i| i.id)
}

/// Look up the row for `id`.
///
/// # Panics
///
/// Panics if the table has no row for `id`. Every registry lists all of its enum variants, which the
/// guardrail tests check.
pub fn lookup<Id: Copy + PartialEq + std::fmt::Debug>(table: &'static [ItemInfo<Id>], id: Id) -> &'static ItemInfo<Id> {
    table
        .iter()
        .find(|i| i.id == id)
        .unwrap_or_else(|| panic!("INVARIANT: registry row missing for {id:?}"))
}
