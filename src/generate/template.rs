//! Harness templates: source text with one `{{IMPORTS}}`, `{{FUNC}}` and `{{TESTS}}` marker each.
//!
//! A marker is the braced token, optionally preceded on the same line by the language's comment prefix
//! (`/// ` or `# `). The prefix is part of the replaced span, so a filled template carries no trace of it.

use std::ops::Range;

use miette::{NamedSource, SourceSpan};
use qfharness_core::languages::{self, LanguageId};
use qfharness_core::markers::{self, MarkerId};

use super::TemplateError;

/// Text inserted at each marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fills {
    pub imports: String,
    pub func: String,
    pub tests: String,
}

impl Fills {
    fn get(&self, id: MarkerId) -> &str {
        match id {
            MarkerId::Imports => &self.imports,
            MarkerId::Func => &self.func,
            MarkerId::Tests => &self.tests,
        }
    }
}

/// A parsed template with the location of each marker.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    source: String,
    language: LanguageId,
    /// Marker spans, sorted by start offset.
    slots: Vec<(MarkerId, Range<usize>)>,
}

impl Template {
    /// Parse `source`, requiring every marker exactly once.
    pub fn parse(name: impl Into<String>, source: impl Into<String>, language: LanguageId) -> Result<Self, TemplateError> {
        let name = name.into();
        let source = source.into();
        let prefix = languages::marker_prefix(language);

        let mut slots = Vec::with_capacity(markers::MARKERS.len());
        for info in markers::MARKERS {
            let token = markers::token(info.id);
            let found: Vec<Range<usize>> = source
                .match_indices(token.as_str())
                .map(|(start, _)| widen_to_prefix(&source, start, prefix)..start + token.len())
                .collect();

            match found.as_slice() {
                [] => {
                    return Err(TemplateError::MissingMarker {
                        name,
                        token: format!("{prefix}{token}"),
                    });
                }
                [span] => slots.push((info.id, span.clone())),
                [first, second, ..] => {
                    return Err(TemplateError::DuplicateMarker {
                        first: to_source_span(first),
                        duplicate: to_source_span(second),
                        token,
                        src: NamedSource::new(name.clone(), source.clone()),
                        name,
                    });
                }
            }
        }
        slots.sort_by_key(|(_, span)| span.start);

        Ok(Self {
            name,
            source,
            language,
            slots,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Byte range of a marker (including its comment prefix).
    pub fn span_of(&self, id: MarkerId) -> Option<Range<usize>> {
        self.slots.iter().find(|(m, _)| *m == id).map(|(_, span)| span.clone())
    }

    /// Replace each marker with its fill in a single pass.
    ///
    /// Inserted text is never rescanned, so a fill that itself contains a marker token is copied verbatim.
    pub fn render(&self, fills: &Fills) -> String {
        let extra: usize = self.slots.iter().map(|(id, _)| fills.get(*id).len()).sum();
        let mut out = String::with_capacity(self.source.len() + extra);
        let mut cursor = 0;
        for (id, span) in &self.slots {
            out.push_str(&self.source[cursor..span.start]);
            out.push_str(fills.get(*id));
            cursor = span.end;
        }
        out.push_str(&self.source[cursor..]);
        out
    }
}

/// Move `start` back over `prefix` when the token is written as `<prefix>{{NAME}}`.
fn widen_to_prefix(source: &str, start: usize, prefix: &str) -> usize {
    if source[..start].ends_with(prefix) {
        start - prefix.len()
    } else {
        let trimmed = prefix.trim_end();
        if source[..start].ends_with(trimmed) {
            start - trimmed.len()
        } else {
            start
        }
    }
}

fn to_source_span(range: &Range<usize>) -> SourceSpan {
    (range.start, range.end - range.start).into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const JAVA: &str = "/// {{IMPORTS}}\nclass Test {\n/// {{FUNC}}\nvoid run() {\n/// {{TESTS}}\n}\n}\n";

    fn fills() -> Fills {
        Fills {
            imports: "import a;".to_string(),
            func: "int f() { return 1; }".to_string(),
            tests: "check();".to_string(),
        }
    }

    #[test]
    fn test_render_replaces_prefix_and_token() {
        let template = Template::parse("Test.template.java", JAVA, LanguageId::Java).unwrap();
        let out = template.render(&fills());
        assert_eq!(
            out,
            "import a;\nclass Test {\nint f() { return 1; }\nvoid run() {\ncheck();\n}\n}\n"
        );
    }

    #[test]
    fn test_bare_tokens_are_markers_too() {
        let template = Template::parse("t", "{{IMPORTS}} {{FUNC}} {{TESTS}}", LanguageId::Python).unwrap();
        assert_eq!(template.render(&fills()), "import a; int f() { return 1; } check();");
    }

    #[test]
    fn test_missing_marker_is_reported() {
        let err = Template::parse("t", "# {{IMPORTS}}\n# {{FUNC}}\n", LanguageId::Python).unwrap_err();
        match err {
            TemplateError::MissingMarker { token, .. } => assert_eq!(token, "# {{TESTS}}"),
            other => panic!("expected MissingMarker, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_marker_is_reported() {
        let source = "/// {{IMPORTS}}\n/// {{FUNC}}\n/// {{TESTS}}\n/// {{FUNC}}\n";
        let err = Template::parse("t", source, LanguageId::Java).unwrap_err();
        assert!(matches!(err, TemplateError::DuplicateMarker { ref token, .. } if token == "{{FUNC}}"));
    }

    #[test]
    fn test_fill_containing_marker_is_not_rescanned() {
        let template = Template::parse("t", JAVA, LanguageId::Java).unwrap();
        let mut f = fills();
        f.imports = "/// {{TESTS}}".to_string();
        let out = template.render(&f);
        assert!(out.starts_with("/// {{TESTS}}\n"));
        assert!(out.contains("check();"));
    }

    #[test]
    fn test_span_of_includes_prefix() {
        let template = Template::parse("t", JAVA, LanguageId::Java).unwrap();
        assert_eq!(template.span_of(MarkerId::Imports), Some(0.."/// {{IMPORTS}}".len()));
    }
}
