//! Console output for harness runs (pytest-style)

use std::time::Instant;

use qfharness_runtime::{HarnessObserver, RunSummary, Stage};

/// Prints one mark per assertion and a summary line to stderr.
pub struct ConsoleReporter {
    pub verbose: bool,
    started: Instant,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            started: Instant::now(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl HarnessObserver for ConsoleReporter {
    fn on_stage(&mut self, stage: Stage) {
        if stage == Stage::Loaded {
            self.started = Instant::now();
        }
    }

    fn on_assertion(&mut self, name: &str, passed: bool) {
        let status = match (passed, self.verbose) {
            (true, true) => "\x1b[32mPASSED\x1b[0m",
            (true, false) => "\x1b[32m.\x1b[0m",
            (false, true) => "\x1b[31mFAILED\x1b[0m",
            (false, false) => "\x1b[31mF\x1b[0m",
        };

        if self.verbose {
            eprintln!("{name} ... {status}");
        } else {
            eprint!("{status}");
        }
    }

    fn on_complete(&mut self, summary: &RunSummary) {
        if !self.verbose {
            eprintln!();
        }

        eprintln!("====== {} in {:.2}s ======", summary_parts(summary), self.started.elapsed().as_secs_f64());
    }
}

fn summary_parts(summary: &RunSummary) -> String {
    let mut parts = Vec::new();
    if summary.tally.passed > 0 {
        parts.push(format!("\x1b[32m{} passed\x1b[0m", summary.tally.passed));
    }
    if summary.tally.failed > 0 {
        parts.push(format!("\x1b[31m{} failed\x1b[0m", summary.tally.failed));
    }
    if parts.is_empty() {
        parts.push("no assertions".to_string());
    }
    parts.join(", ")
}
