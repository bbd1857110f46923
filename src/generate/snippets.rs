//! Per-language test snippets inserted at `{{TESTS}}`.
//!
//! Every snippet stores the boolean outcome of one test under the test's name in the harness's result
//! object, then bumps `successfulTestCount` or `failedTestCount`. Code tests (`isCode`) are wrapped in a
//! closure, lambda or inner function so they can use statements and `return`.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use qfharness_core::LanguageId;
use qfharness_core::keys;
use qfharness_runtime::ResultDocument;

use super::TemplateError;

/// A test descriptor from the document's `tests` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub is_code: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TestCase {
    /// Boolean expression test.
    pub fn expression(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            is_code: false,
            description: None,
        }
    }

    /// Statement-block test that returns a boolean.
    pub fn block(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            is_code: true,
            ..Self::expression(name, code)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Text shown for this test in feedback.
    pub fn label(&self) -> String {
        match &self.description {
            Some(d) if !d.is_empty() => d.clone(),
            _ if self.is_code => self.name.clone(),
            _ => format!("`{}`", self.code),
        }
    }
}

/// Read the `tests` array of the document (absent or null means no tests).
pub fn test_cases(document: &ResultDocument) -> Result<Vec<TestCase>, TemplateError> {
    match document.get(keys::TESTS) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone()).map_err(TemplateError::InvalidTests),
    }
}

/// Test names become identifiers in generated code.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Render the snippet for every test, in order.
pub fn render_tests(language: LanguageId, tests: &[TestCase]) -> Result<String, TemplateError> {
    let mut out = String::new();
    for test in tests {
        if !is_identifier(&test.name) {
            return Err(TemplateError::InvalidTestName {
                name: test.name.clone(),
            });
        }
        match language {
            LanguageId::Java => java(&mut out, test),
            LanguageId::CSharp => csharp(&mut out, test),
            LanguageId::JavaScript => javascript(&mut out, test),
            LanguageId::Python => python(&mut out, test),
            LanguageId::Cpp => cpp(&mut out, test),
        }
    }
    Ok(out)
}

// Writing to String cannot fail.

fn java(out: &mut String, t: &TestCase) {
    let n = &t.name;
    if t.is_code {
        let _ = write!(
            out,
            "\n            TestFunc {n} = () -> {{\n                {code}\n            }};\n            this.data.put(\"{n}\", {n}.run());\n        ",
            code = t.code
        );
    } else {
        let _ = write!(out, "this.data.put(\"{n}\", {});", t.code);
    }
    let _ = write!(
        out,
        "\n        if ((boolean)this.data.get(\"{n}\")) {{\n            successfulTestCount += 1;\n        }} else {{\n            failedTestCount += 1;\n        }}\n    "
    );
}

fn csharp(out: &mut String, t: &TestCase) {
    let n = &t.name;
    if t.is_code {
        let _ = write!(
            out,
            "\n            Func<bool> {n} = () => {{\n                {code}\n            }};\n            qf[\"{n}\"] = {n}.Invoke();\n        ",
            code = t.code
        );
    } else {
        let _ = write!(out, "qf[\"{n}\"] = {};", t.code);
    }
    let _ = write!(
        out,
        "\n        if ((bool)qf[\"{n}\"]) {{\n            successfulTestCount += 1;\n        }} else {{\n            failedTestCount += 1;\n        }}\n    "
    );
}

fn javascript(out: &mut String, t: &TestCase) {
    let n = &t.name;
    if t.is_code {
        let _ = write!(
            out,
            "\n            qf[\"{n}\"] = (() => {{\n                {code}\n            }})();\n\n        ",
            code = t.code
        );
    } else {
        let _ = write!(out, "\n            qf[\"{n}\"] = {};\n        ", t.code);
    }
    let _ = write!(
        out,
        "\n        if (qf[\"{n}\"]) {{\n            qf.successfulTestCount += 1;\n        }} else {{\n            qf.failedTestCount += 1;\n        }}\n    "
    );
}

/// Python snippets are tab-indented; the generator expands tabs afterwards.
fn python(out: &mut String, t: &TestCase) {
    let n = &t.name;
    if t.is_code {
        let body: Vec<String> = t.code.lines().map(|line| format!("\t\t{line}")).collect();
        let _ = write!(out, "\tdef {n}_fun():\n{}\n\tqf['{n}'] = {n}_fun()\n", body.join("\n"));
    } else {
        let _ = writeln!(out, "\tqf['{n}'] = {}", t.code);
    }
    let _ = write!(
        out,
        "\tif qf['{n}']:\n\t\tqf['successfulTestCount'] += 1\n\telse:\n\t\tqf['failedTestCount'] += 1\n"
    );
}

fn cpp(out: &mut String, t: &TestCase) {
    let n = &t.name;
    if t.is_code {
        let _ = write!(
            out,
            "\n    auto {n} = [&]() -> bool {{\n        {code}\n    }};\n    qf[\"{n}\"] = {n}();\n",
            code = t.code
        );
    } else {
        let _ = write!(out, "\n    qf[\"{n}\"] = static_cast<bool>({});\n", t.code);
    }
    let _ = write!(
        out,
        "    if (qf[\"{n}\"].get<bool>()) {{\n        successfulTestCount += 1;\n    }} else {{\n        failedTestCount += 1;\n    }}\n"
    );
}
