//! Import merging for generated harnesses.

use serde_json::Value;

use qfharness_core::keys;
use qfharness_runtime::ResultDocument;

/// Strip whitespace and semicolons so `import a.B;` and `import  a.B` compare equal.
pub fn normalize(import: &str) -> String {
    import.chars().filter(|c| !c.is_whitespace() && *c != ';').collect()
}

/// Defaults not already supplied by `custom`, followed by `custom` in its given order.
pub fn merge_imports(defaults: &[&str], custom: &[String]) -> Vec<String> {
    let supplied: Vec<String> = custom.iter().map(|i| normalize(i)).collect();
    defaults
        .iter()
        .filter(|d| !supplied.contains(&normalize(d)))
        .map(|d| (*d).to_string())
        .chain(custom.iter().cloned())
        .collect()
}

/// Custom imports from the document: an array of strings, or one newline-separated string.
///
/// Blank lines and non-string array entries are skipped.
pub fn custom_imports(document: &ResultDocument) -> Vec<String> {
    let lines: Vec<String> = match document.get(keys::IMPORTS) {
        Some(Value::String(text)) => text.lines().map(str::to_string).collect(),
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).map(str::to_string).collect(),
        _ => Vec::new(),
    };
    lines.into_iter().filter(|line| !line.trim().is_empty()).collect()
}
