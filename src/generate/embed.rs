//! Answer embedding: render `{{key}}` placeholders against the result document.
//!
//! Keys may be dotted paths into nested objects (`{{question.title}}`). Strings are inserted verbatim, other
//! JSON values as JSON text, and absent or null values as nothing. `{{{key}}}` is accepted too. An
//! unterminated `{{` is copied as-is.

use serde_json::Value;

use qfharness_core::keys;
use qfharness_core::markers::{MARKER_CLOSE, MARKER_OPEN};
use qfharness_runtime::ResultDocument;

/// Render `embedding` with values from `document`.
pub fn render_embedding(embedding: &str, document: &ResultDocument) -> String {
    let mut out = String::with_capacity(embedding.len());
    let mut rest = embedding;

    while let Some(open) = rest.find(MARKER_OPEN) {
        let after_open = &rest[open + MARKER_OPEN.len()..];
        // `{{{key}}}` is the unescaped form; there is no escaping here, so both render the same.
        let (body, close_token) = match after_open.strip_prefix('{') {
            Some(body) => (body, "}}}"),
            None => (after_open, MARKER_CLOSE),
        };
        let Some(close) = body.find(close_token) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str(&lookup_text(document, body[..close].trim()));
        rest = &body[close + close_token.len()..];
    }
    out.push_str(rest);
    out
}

/// The candidate solution to insert at `{{FUNC}}`.
///
/// A non-empty `embeddedAnswer` wins; otherwise `answerEmbedding` (default `{{answer}}`) is rendered.
pub fn embedded_answer(document: &ResultDocument) -> String {
    if let Some(embedded) = document.get_str(keys::EMBEDDED_ANSWER).filter(|s| !s.is_empty()) {
        return embedded.to_string();
    }
    let embedding = document
        .get_str(keys::ANSWER_EMBEDDING)
        .unwrap_or(keys::DEFAULT_ANSWER_EMBEDDING);
    render_embedding(embedding, document)
}

fn lookup_text(document: &ResultDocument, path: &str) -> String {
    let mut segments = path.split('.');
    let Some(first) = segments.next() else {
        return String::new();
    };
    let mut current = document.get(first);
    for segment in segments {
        current = current.and_then(|v| v.get(segment));
    }
    match current {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> ResultDocument {
        ResultDocument::try_from(value).unwrap()
    }

    #[test]
    fn test_default_embedding_is_the_answer() {
        let d = doc(json!({"answer": "def power(b, e):\n    return b ** e"}));
        assert_eq!(embedded_answer(&d), "def power(b, e):\n    return b ** e");
    }

    #[test]
    fn test_embedding_wraps_answer() {
        let d = doc(json!({
            "answer": "return b ** e",
            "answerEmbedding": "def power(b, e):\n    {{ answer }}"
        }));
        assert_eq!(embedded_answer(&d), "def power(b, e):\n    return b ** e");
    }

    #[test]
    fn test_precomputed_embedded_answer_wins() {
        let d = doc(json!({"answer": "x", "embeddedAnswer": "y"}));
        assert_eq!(embedded_answer(&d), "y");
    }

    #[test]
    fn test_missing_answer_renders_empty() {
        assert_eq!(embedded_answer(&ResultDocument::new()), "");
    }

    #[test]
    fn test_triple_braces_insert_the_value() {
        let d = doc(json!({"answer": "a < b && c"}));
        assert_eq!(render_embedding("f = {{{answer}}};", &d), "f = a < b && c;");
        assert_eq!(render_embedding("{{{ answer }}}{{answer}}", &d), "a < b && ca < b && c");
    }

    #[test]
    fn test_nested_paths_and_non_strings() {
        let d = doc(json!({"question": {"title": "Power", "points": 3}}));
        assert_eq!(render_embedding("{{question.title}}/{{question.points}}", &d), "Power/3");
    }

    #[test]
    fn test_unterminated_placeholder_is_copied() {
        assert_eq!(render_embedding("a {{b", &ResultDocument::new()), "a {{b");
    }
}
