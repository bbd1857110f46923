//! CLI module for qfharness
//!
//! ## Commands
//!
//! - `fixed` - Run the three fixed exponentiation checks against the reference subject
//! - `check --suite <file>` - Run a suite of power cases and record aggregate counts
//! - `generate --language <lang> [--template <file>]` - Fill a harness template from the result document
//! - `feedback` - Append markdown feedback for the document's tests
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `reporter` - Console output for harness runs
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod reporter;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use qfharness_core::{LanguageId, RunStatus, languages, status};

use crate::config::HarnessConfig;
use crate::version::QFHARNESS_VERSION;
use qfharness_runtime::MissingStorePolicy;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Unit-test harness for graded programming exercises
#[derive(Parser, Debug)]
#[command(name = "qfharness")]
#[command(version = QFHARNESS_VERSION)]
#[command(about = "Unit-test harness for graded programming exercises", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command that touches the result document.
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Result document (default: $QF_RESULT_PATH, then qf.json)
    #[arg(long = "result", value_name = "PATH")]
    pub result: Option<PathBuf>,
    /// Start from an empty document when the result file does not exist
    #[arg(long = "allow-missing")]
    pub allow_missing: bool,
}

impl StoreArgs {
    /// Layer these flags over an environment-derived config.
    pub fn apply(&self, mut config: HarnessConfig) -> HarnessConfig {
        if let Some(path) = &self.result {
            config = config.with_result_path(path);
        }
        if self.allow_missing {
            config = config.with_missing_policy(MissingStorePolicy::Empty);
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the fixed exponentiation checks and record one boolean per check
    Fixed {
        #[command(flatten)]
        store: StoreArgs,
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run a suite of power cases and record pass/fail counts
    Check {
        /// JSON array of {name, base, exponent, expected}
        #[arg(long, value_name = "FILE")]
        suite: PathBuf,
        /// Also record one boolean per case
        #[arg(long)]
        detailed: bool,
        #[command(flatten)]
        store: StoreArgs,
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Fill a harness template from the result document
    Generate {
        /// Template containing the IMPORTS, FUNC and TESTS markers (default: the language's template file)
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,
        /// Target language (java, csharp, javascript, python, cpp)
        #[arg(long, value_name = "LANG", value_parser = parse_language)]
        language: LanguageId,
        /// Output file (default: the language's conventional harness path)
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Append markdown feedback for the document's tests
    Feedback {
        #[command(flatten)]
        store: StoreArgs,
        /// Outcome of the harness process: no-error (default), internal-error or timeout
        #[arg(long, value_name = "STATUS", value_parser = parse_status)]
        status: Option<RunStatus>,
        /// JSON file overriding the feedback texts
        #[arg(long, value_name = "FILE")]
        messages: Option<PathBuf>,
    },
}

fn parse_language(name: &str) -> Result<LanguageId, String> {
    languages::from_str(name).ok_or_else(|| format!("unknown language `{name}`"))
}

fn parse_status(name: &str) -> Result<RunStatus, String> {
    status::from_str(name).ok_or_else(|| format!("unknown run status `{name}`"))
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let env_config = HarnessConfig::from_env();

    match cli.command {
        Command::Fixed { store, verbose } => commands::run_fixed(&store.apply(env_config).with_verbose(verbose)),
        Command::Check {
            suite,
            detailed,
            store,
            verbose,
        } => commands::run_check(&store.apply(env_config).with_verbose(verbose), &suite, detailed),
        Command::Generate {
            template,
            language,
            output,
            store,
        } => commands::run_generate(
            &store.apply(env_config),
            template.as_deref(),
            language,
            output.as_deref(),
        ),
        Command::Feedback {
            store,
            status,
            messages,
        } => commands::run_feedback(
            &store.apply(env_config),
            status.unwrap_or_default(),
            messages.as_deref(),
        ),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_fixed() {
        let cli = Cli::try_parse_from(["qfharness", "fixed", "--result", "out/qf.json", "-v"]).unwrap();
        if let Command::Fixed { store, verbose } = cli.command {
            assert_eq!(store.result, Some(PathBuf::from("out/qf.json")));
            assert!(!store.allow_missing);
            assert!(verbose);
        } else {
            panic!("Expected Fixed command");
        }
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["qfharness", "check", "--suite", "cases.json", "--detailed", "--allow-missing"])
            .unwrap();
        if let Command::Check {
            suite, detailed, store, ..
        } = cli.command
        {
            assert_eq!(suite, PathBuf::from("cases.json"));
            assert!(detailed);
            assert!(store.allow_missing);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_check_requires_suite() {
        assert!(Cli::try_parse_from(["qfharness", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_generate_language_aliases() {
        let cli = Cli::try_parse_from(["qfharness", "generate", "--template", "t.py", "--language", "py"]).unwrap();
        if let Command::Generate {
            language,
            template,
            output,
            ..
        } = cli.command
        {
            assert_eq!(language, LanguageId::Python);
            assert_eq!(template, Some(PathBuf::from("t.py")));
            assert!(output.is_none());
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_generate_template_is_optional() {
        let cli = Cli::try_parse_from(["qfharness", "generate", "--language", "java"]).unwrap();
        assert!(matches!(cli.command, Command::Generate { template: None, .. }));
    }

    #[test]
    fn test_cli_rejects_c_as_cpp() {
        assert!(Cli::try_parse_from(["qfharness", "generate", "--language", "c"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_language() {
        let err = Cli::try_parse_from(["qfharness", "generate", "--template", "t", "--language", "cobol"]).unwrap_err();
        assert!(err.to_string().contains("unknown language `cobol`"));
    }

    #[test]
    fn test_cli_parse_feedback_status() {
        let cli = Cli::try_parse_from(["qfharness", "feedback"]).unwrap();
        assert!(matches!(cli.command, Command::Feedback { status: None, .. }));

        let cli = Cli::try_parse_from(["qfharness", "feedback", "--status", "timeout"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Feedback {
                status: Some(RunStatus::Timeout),
                ..
            }
        ));
    }

    #[test]
    fn test_store_args_override_config() {
        let args = StoreArgs {
            result: Some(PathBuf::from("x.json")),
            allow_missing: true,
        };
        let config = args.apply(HarnessConfig::new());
        assert_eq!(config.result_path, PathBuf::from("x.json"));
        assert_eq!(config.missing_policy, MissingStorePolicy::Empty);

        let config = StoreArgs::default().apply(HarnessConfig::new().with_result_path("env.json"));
        assert_eq!(config.result_path, PathBuf::from("env.json"));
    }
}
