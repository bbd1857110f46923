//! Generation step: fill a harness template from the result document.
//!
//! ## Pipeline
//!
//! 1. Parse the template and locate its three markers ([`Template::parse`]).
//! 2. Merge the language's default imports with the document's `imports` ([`imports`]).
//! 3. Render the candidate solution from `answer` / `answerEmbedding` / `embeddedAnswer` ([`embed`]).
//! 4. Render one snippet per entry of the document's `tests` ([`snippets`]).
//! 5. Splice the three texts into the template in a single pass.
//!
//! Compiling and executing the filled harness is left to the caller's toolchain.

pub mod embed;
pub mod imports;
pub mod snippets;
pub mod template;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use tracing::debug;

use qfharness_core::LanguageId;
use qfharness_core::languages;
use qfharness_runtime::ResultDocument;

pub use snippets::TestCase;
pub use template::{Fills, Template};

/// Errors raised while parsing or filling a template.
#[derive(Debug, Error, Diagnostic)]
pub enum TemplateError {
    #[error("template `{name}` has no `{token}` marker")]
    #[diagnostic(
        code(qfharness::template::missing_marker),
        help("add a line containing `{token}` where the generated text belongs")
    )]
    MissingMarker { name: String, token: String },

    #[error("template `{name}` contains `{token}` more than once")]
    #[diagnostic(
        code(qfharness::template::duplicate_marker),
        help("each marker must appear exactly once")
    )]
    DuplicateMarker {
        name: String,
        token: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("first occurrence")]
        first: SourceSpan,
        #[label("duplicate")]
        duplicate: SourceSpan,
    },

    #[error("test name `{name}` is not a valid identifier")]
    #[diagnostic(
        code(qfharness::template::invalid_test_name),
        help("test names may contain ASCII letters, digits and `_`, and must not start with a digit")
    )]
    InvalidTestName { name: String },

    #[error("`tests` must be an array of test descriptors: {0}")]
    #[diagnostic(code(qfharness::template::invalid_tests))]
    InvalidTests(#[source] serde_json::Error),

    #[error("failed to access {}: {source}", path.display())]
    #[diagnostic(code(qfharness::template::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Fills templates of one language.
#[derive(Debug, Clone, Copy)]
pub struct HarnessGenerator {
    language: LanguageId,
}

impl HarnessGenerator {
    pub fn new(language: LanguageId) -> Self {
        Self { language }
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    /// Compute the three fills for `document`.
    pub fn fills(&self, document: &ResultDocument) -> Result<Fills, TemplateError> {
        let info = languages::info_for(self.language);
        let custom = imports::custom_imports(document);
        let tests = snippets::test_cases(document)?;
        debug!(
            language = info.item.canonical,
            custom_imports = custom.len(),
            tests = tests.len(),
            "computing template fills"
        );

        Ok(Fills {
            imports: imports::merge_imports(info.default_imports, &custom).join("\n"),
            func: embed::embedded_answer(document),
            tests: snippets::render_tests(self.language, &tests)?,
        })
    }

    /// Fill `template` from `document`.
    pub fn generate(&self, template: &Template, document: &ResultDocument) -> Result<String, TemplateError> {
        let filled = template.render(&self.fills(document)?);
        Ok(match self.language {
            LanguageId::Python => filled.replace('\t', "    "),
            _ => filled,
        })
    }

    /// Read a template file, fill it, and write the result to `output` (creating parent directories).
    pub fn generate_file(
        &self,
        template_path: &Path,
        document: &ResultDocument,
        output: &Path,
    ) -> Result<String, TemplateError> {
        let source = fs::read_to_string(template_path).map_err(|source| TemplateError::Io {
            path: template_path.to_path_buf(),
            source,
        })?;
        let template = Template::parse(template_path.display().to_string(), source, self.language)?;
        let filled = self.generate(&template, document)?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| TemplateError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(output, &filled).map_err(|source| TemplateError::Io {
            path: output.to_path_buf(),
            source,
        })?;
        debug!(output = %output.display(), bytes = filled.len(), "wrote generated harness");
        Ok(filled)
    }
}
