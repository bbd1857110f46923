//! Feedback rendering: turn per-test outcomes in the result document into markdown lines.
//!
//! Lines are appended to the document's `feedback` array:
//!
//! ```text
//! ## Test result:
//! :white_check_mark: `power(2, 4) == 16` **(successful)**
//! :x: negative exponent **(failed)**
//! ```
//!
//! When the harness itself crashed or timed out, the per-test values cannot be trusted, so a single error
//! line replaces the list.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use qfharness_core::RunStatus;
use qfharness_core::keys;
use qfharness_runtime::ResultDocument;

use crate::generate::TestCase;

/// User-facing texts, typically loaded from a per-locale JSON file. Missing entries use English defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackMessages {
    pub test_result_title: Option<String>,
    pub test_result_success: Option<String>,
    pub test_result_fail: Option<String>,
    pub test_internal_error_message: Option<String>,
    pub test_timeout_error_message: Option<String>,
}

impl FeedbackMessages {
    pub fn title(&self) -> &str {
        self.test_result_title.as_deref().unwrap_or("Test result:")
    }

    pub fn success(&self) -> &str {
        self.test_result_success.as_deref().unwrap_or("successful")
    }

    pub fn fail(&self) -> &str {
        self.test_result_fail.as_deref().unwrap_or("failed")
    }

    pub fn internal_error(&self) -> &str {
        self.test_internal_error_message
            .as_deref()
            .unwrap_or("There was an error while running the tests")
    }

    pub fn timeout(&self) -> &str {
        self.test_timeout_error_message
            .as_deref()
            .unwrap_or("Timed out running the tests")
    }
}

/// JavaScript-style truthiness of a stored outcome.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Build the feedback lines for `tests` without touching the document.
pub fn feedback_lines(
    document: &ResultDocument,
    tests: &[TestCase],
    status: RunStatus,
    messages: &FeedbackMessages,
) -> Vec<String> {
    let mut lines = vec![format!("## {}", messages.title())];

    // One error line stands in for the whole list, and only when there is a list to replace.
    if !tests.is_empty() {
        match status {
            RunStatus::InternalError => {
                lines.push(format!(":x: {}", messages.internal_error()));
                return lines;
            }
            RunStatus::Timeout => {
                lines.push(format!(":x: {}", messages.timeout()));
                return lines;
            }
            RunStatus::NoError => {}
        }
    }

    for test in tests {
        let line = if is_truthy(document.get(&test.name)) {
            format!(":white_check_mark: {} **({})**", test.label(), messages.success())
        } else {
            format!(":x: {} **({})**", test.label(), messages.fail())
        };
        lines.push(line);
    }
    lines
}

/// Append feedback lines to the document's `feedback` array and return them.
///
/// A non-array `feedback` value is kept as the first element of the new array.
pub fn render_feedback(
    document: &mut ResultDocument,
    tests: &[TestCase],
    status: RunStatus,
    messages: &FeedbackMessages,
) -> Vec<String> {
    let lines = feedback_lines(document, tests, status, messages);

    let slot = document.entry_or_insert(keys::FEEDBACK, Value::Array(Vec::new()));
    match slot {
        Value::Array(items) => items.extend(lines.iter().cloned().map(Value::String)),
        Value::Null => *slot = Value::Array(lines.iter().cloned().map(Value::String).collect()),
        other => {
            warn!("`feedback` is not an array; wrapping the existing value");
            let previous = other.take();
            let mut items = vec![previous];
            items.extend(lines.iter().cloned().map(Value::String));
            *other = Value::Array(items);
        }
    }
    lines
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tests() -> Vec<TestCase> {
        vec![
            TestCase::expression("powerCorrect", "power(2, 4) == 16"),
            TestCase::block("negative", "return power(2, -1) == 0.5;").with_description("negative exponent"),
        ]
    }

    #[test]
    fn test_lines_follow_outcomes() {
        let doc = ResultDocument::try_from(json!({"powerCorrect": true, "negative": false})).unwrap();
        let lines = feedback_lines(&doc, &tests(), RunStatus::NoError, &FeedbackMessages::default());
        assert_eq!(
            lines,
            vec![
                "## Test result:",
                ":white_check_mark: `power(2, 4) == 16` **(successful)**",
                ":x: negative exponent **(failed)**",
            ]
        );
    }

    #[test]
    fn test_missing_outcome_counts_as_failed() {
        let lines = feedback_lines(&ResultDocument::new(), &tests()[..1], RunStatus::NoError, &FeedbackMessages::default());
        assert_eq!(lines[1], ":x: `power(2, 4) == 16` **(failed)**");
    }

    #[test]
    fn test_internal_error_replaces_list() {
        let lines = feedback_lines(&ResultDocument::new(), &tests(), RunStatus::InternalError, &FeedbackMessages::default());
        assert_eq!(lines, vec!["## Test result:", ":x: There was an error while running the tests"]);
    }

    #[test]
    fn test_custom_messages() {
        let messages: FeedbackMessages = serde_json::from_value(json!({
            "testResultTitle": "Testresultaat:",
            "testResultSuccess": "geslaagd",
            "testTimeoutErrorMessage": "Tijdslimiet overschreden"
        }))
        .unwrap();
        let doc = ResultDocument::try_from(json!({"powerCorrect": 1})).unwrap();
        let lines = feedback_lines(&doc, &tests()[..1], RunStatus::NoError, &messages);
        assert_eq!(lines[0], "## Testresultaat:");
        assert_eq!(lines[1], ":white_check_mark: `power(2, 4) == 16` **(geslaagd)**");

        let lines = feedback_lines(&doc, &tests(), RunStatus::Timeout, &messages);
        assert_eq!(lines[1], ":x: Tijdslimiet overschreden");
    }

    #[test]
    fn test_render_appends_to_existing_feedback() {
        let mut doc = ResultDocument::try_from(json!({"feedback": ["earlier"], "powerCorrect": true})).unwrap();
        render_feedback(&mut doc, &tests()[..1], RunStatus::NoError, &FeedbackMessages::default());
        assert_eq!(
            doc.get(keys::FEEDBACK).unwrap(),
            &json!(["earlier", "## Test result:", ":white_check_mark: `power(2, 4) == 16` **(successful)**"])
        );
    }

    #[test]
    fn test_render_wraps_non_array_feedback() {
        let mut doc = ResultDocument::try_from(json!({"feedback": "old"})).unwrap();
        render_feedback(&mut doc, &[], RunStatus::NoError, &FeedbackMessages::default());
        assert_eq!(doc.get(keys::FEEDBACK).unwrap(), &json!(["old", "## Test result:"]));
    }
}
