//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use tracing::info;

use qfharness_core::{LanguageId, RunStatus, languages};
use qfharness_runtime::assertion::parse_cases;
use qfharness_runtime::{Harness, HarnessError, Power, ReportMode, ResultDocument, StoreError};

use super::reporter::ConsoleReporter;
use super::{CliError, CliResult, ExitCode};
use crate::config::HarnessConfig;
use crate::feedback::{FeedbackMessages, render_feedback};
use crate::generate::{HarnessGenerator, TemplateError, snippets};

// ============================================================================
// Error conversion
// ============================================================================

fn harness_failure(err: HarnessError) -> CliError {
    CliError::failure(format!("Error: {err}"))
}

fn store_failure(err: StoreError) -> CliError {
    CliError::failure(format!("Error: {err}"))
}

/// Render a template error with its source snippet and labels.
fn template_failure(err: TemplateError) -> CliError {
    CliError::failure(format!("{:?}", miette::Report::new(err)))
}

fn load_document(config: &HarnessConfig) -> CliResult<ResultDocument> {
    config.store().load().map_err(store_failure)
}

// ============================================================================
// Runners
// ============================================================================

/// Run the fixed harness against the reference `Power` subject.
pub fn run_fixed(config: &HarnessConfig) -> CliResult<ExitCode> {
    let store = config.store();
    let mut reporter = ConsoleReporter::new(config.verbose);
    Harness::fixed(&Power)
        .run(&store, &mut reporter)
        .map_err(harness_failure)?;
    Ok(ExitCode::SUCCESS)
}

/// Run a suite of power cases as a template harness.
pub fn run_check(config: &HarnessConfig, suite: &Path, detailed: bool) -> CliResult<ExitCode> {
    let text = fs::read_to_string(suite)
        .map_err(|e| CliError::failure(format!("Error reading {}: {}", suite.display(), e)))?;
    let cases = parse_cases(&text)
        .map_err(|e| CliError::failure(format!("Error parsing suite {}: {}", suite.display(), e)))?;
    info!(suite = %suite.display(), cases = cases.len(), "loaded power cases");

    let subject = Power;
    let assertions = cases.iter().map(|case| case.to_assertion(&subject)).collect();
    let mode = if detailed {
        ReportMode::Detailed
    } else {
        ReportMode::Aggregate
    };

    let store = config.store();
    let mut reporter = ConsoleReporter::new(config.verbose);
    Harness::template(assertions)
        .with_mode(mode)
        .run(&store, &mut reporter)
        .map_err(harness_failure)?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Generation and feedback
// ============================================================================

/// Fill `template` from the result document and write the harness source.
///
/// Without explicit paths, the language's conventional template and output files are used, relative to the
/// working directory.
pub fn run_generate(
    config: &HarnessConfig,
    template: Option<&Path>,
    language: LanguageId,
    output: Option<&Path>,
) -> CliResult<ExitCode> {
    let document = load_document(config)?;
    let info = languages::info_for(language);
    let template = template.unwrap_or_else(|| Path::new(info.template_file));
    let output = output.unwrap_or_else(|| Path::new(info.output_file));

    HarnessGenerator::new(language)
        .generate_file(template, &document, output)
        .map_err(template_failure)?;
    info!(
        template = %template.display(),
        output = %output.display(),
        language = languages::as_str(language),
        "generated harness"
    );
    Ok(ExitCode::SUCCESS)
}

/// Append feedback for the document's tests and save it.
pub fn run_feedback(config: &HarnessConfig, status: RunStatus, messages: Option<&Path>) -> CliResult<ExitCode> {
    let messages = match messages {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| CliError::failure(format!("Error reading {}: {}", path.display(), e)))?;
            serde_json::from_str::<FeedbackMessages>(&text)
                .map_err(|e| CliError::failure(format!("Error parsing messages {}: {}", path.display(), e)))?
        }
        None => FeedbackMessages::default(),
    };

    let store = config.store();
    let mut document = store.load().map_err(store_failure)?;
    let tests = snippets::test_cases(&document).map_err(template_failure)?;
    let lines = render_feedback(&mut document, &tests, status, &messages);
    store.save(&document).map_err(store_failure)?;

    for line in &lines {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}
