//! The shared harness pipeline and the two runner flavours built on it.
//!
//! ## Observer Trait
//!
//! Progress is reported through [`HarnessObserver`] so the CLI can print a console report while library
//! callers (and tests) stay silent with [`NoopObserver`].
//!
//! ## Report modes
//!
//! - [`ReportMode::Itemized`]: one boolean per assertion, keyed by its name (fixed harness).
//! - [`ReportMode::Aggregate`]: only `successfulTestCount` / `failedTestCount` (template harness).
//! - [`ReportMode::Detailed`]: both, as written by generated harnesses so feedback can name each test.

use tracing::{debug, info};

use qfharness_core::keys;

use crate::assertion::Assertion;
use crate::document::ResultDocument;
use crate::error::HarnessError;
use crate::store::ResultStore;
use crate::subject::Subject;

/// How assertion outcomes are written into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    Itemized,
    #[default]
    Aggregate,
    Detailed,
}

impl ReportMode {
    fn itemizes(self) -> bool {
        matches!(self, ReportMode::Itemized | ReportMode::Detailed)
    }

    fn counts(self) -> bool {
        matches!(self, ReportMode::Aggregate | ReportMode::Detailed)
    }
}

/// Pipeline stage. Runs only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    NotStarted,
    Loaded,
    Evaluated,
    Persisted,
    Done,
}

/// Pass/fail counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: u64,
    pub failed: u64,
}

impl Tally {
    pub fn record(&mut self, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.passed + self.failed
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Outcomes in evaluation order.
    pub outcomes: Vec<(String, bool)>,
    pub tally: Tally,
    /// The document as persisted.
    pub document: ResultDocument,
    pub stage: Stage,
}

/// Hooks called while a harness runs.
pub trait HarnessObserver {
    /// Called after each stage transition
    fn on_stage(&mut self, _stage: Stage) {}

    /// Called once per assertion, in order
    fn on_assertion(&mut self, name: &str, passed: bool);

    /// Called after the document has been persisted
    fn on_complete(&mut self, _summary: &RunSummary) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl HarnessObserver for NoopObserver {
    fn on_assertion(&mut self, _name: &str, _passed: bool) {}
}

/// A list of assertions plus the mode used to record their outcomes.
#[derive(Debug)]
pub struct Harness<'s> {
    assertions: Vec<Assertion<'s>>,
    mode: ReportMode,
}

impl<'s> Harness<'s> {
    pub fn new(assertions: Vec<Assertion<'s>>, mode: ReportMode) -> Self {
        Self { assertions, mode }
    }

    /// The fixed harness: three exponentiation checks, each stored under its own key.
    pub fn fixed<S: Subject + ?Sized>(subject: &'s S) -> Self {
        Self::new(fixed_suite(subject), ReportMode::Itemized)
    }

    /// The template harness: any number of checks, recorded as aggregate counts.
    pub fn template(assertions: Vec<Assertion<'s>>) -> Self {
        Self::new(assertions, ReportMode::Aggregate)
    }

    pub fn with_mode(mut self, mode: ReportMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ReportMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.assertions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assertions.is_empty()
    }

    /// Evaluate every assertion and fold the outcomes into `document`.
    ///
    /// The document is consumed and returned; on error it is dropped, so nothing half-written can escape.
    pub fn evaluate(
        &self,
        mut document: ResultDocument,
        observer: &mut dyn HarnessObserver,
    ) -> Result<(ResultDocument, Vec<(String, bool)>, Tally), HarnessError> {
        let mut outcomes = Vec::with_capacity(self.assertions.len());
        let mut tally = Tally::default();

        for assertion in &self.assertions {
            let passed = assertion.evaluate().map_err(|source| HarnessError::Evaluation {
                assertion: assertion.name().to_string(),
                source,
            })?;
            debug!(assertion = assertion.name(), passed, "evaluated assertion");
            observer.on_assertion(assertion.name(), passed);
            tally.record(passed);
            outcomes.push((assertion.name().to_string(), passed));
        }

        if self.mode.itemizes() {
            for (name, passed) in &outcomes {
                document.record_outcome(name, *passed);
            }
        }
        if self.mode.counts() {
            document.record_counts(tally.passed, tally.failed);
        }

        Ok((document, outcomes, tally))
    }

    /// Load, evaluate and persist. The store is written exactly once, after evaluation succeeded.
    pub fn run(&self, store: &ResultStore, observer: &mut dyn HarnessObserver) -> Result<RunSummary, HarnessError> {
        let mut stage = Stage::NotStarted;

        let document = store.load()?;
        advance(&mut stage, Stage::Loaded, observer);

        let (document, outcomes, tally) = self.evaluate(document, observer)?;
        advance(&mut stage, Stage::Evaluated, observer);

        store.save(&document)?;
        advance(&mut stage, Stage::Persisted, observer);

        info!(
            path = %store.path().display(),
            passed = tally.passed,
            failed = tally.failed,
            "harness run complete"
        );
        advance(&mut stage, Stage::Done, observer);

        let summary = RunSummary {
            outcomes,
            tally,
            document,
            stage,
        };
        observer.on_complete(&summary);
        Ok(summary)
    }
}

fn advance(stage: &mut Stage, next: Stage, observer: &mut dyn HarnessObserver) {
    debug_assert!(next > *stage, "harness stages only move forward");
    *stage = next;
    debug!(stage = ?next, "harness stage");
    observer.on_stage(next);
}

/// The three literal checks of the fixed harness.
pub fn fixed_suite<'s, S: Subject + ?Sized>(subject: &'s S) -> Vec<Assertion<'s>> {
    vec![
        Assertion::equals(keys::POWER_CORRECT, subject, 2.0, 4.0, 16.0),
        Assertion::equals(keys::POWER_NON_INTEGER_CORRECT, subject, 1.5, 3.0, 3.375),
        Assertion::equals(keys::POWER_ZERO, subject, 50.0, 0.0, 1.0),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::subject::Power;

    struct Recorder {
        stages: Vec<Stage>,
        seen: Vec<(String, bool)>,
    }

    impl HarnessObserver for Recorder {
        fn on_stage(&mut self, stage: Stage) {
            self.stages.push(stage);
        }

        fn on_assertion(&mut self, name: &str, passed: bool) {
            self.seen.push((name.to_string(), passed));
        }
    }

    #[test]
    fn test_fixed_suite_names_follow_result_keys() {
        let suite = fixed_suite(&Power);
        let names: Vec<&str> = suite.iter().map(Assertion::name).collect();
        assert_eq!(names, keys::FIXED_KEYS);
    }

    #[test]
    fn test_itemized_mode_writes_no_counts() {
        let (doc, _, tally) = Harness::fixed(&Power)
            .evaluate(ResultDocument::new(), &mut NoopObserver)
            .unwrap();
        assert_eq!(tally, Tally { passed: 3, failed: 0 });
        assert_eq!(doc.len(), 3);
        assert!(!doc.contains_key(keys::SUCCESSFUL_TEST_COUNT));
    }

    #[test]
    fn test_detailed_mode_writes_both() {
        let harness = Harness::new(
            vec![
                Assertion::predicate("yes", || true),
                Assertion::predicate("no", || false),
            ],
            ReportMode::Detailed,
        );
        let (doc, _, _) = harness.evaluate(ResultDocument::new(), &mut NoopObserver).unwrap();
        assert_eq!(doc.get_bool("yes"), Some(true));
        assert_eq!(doc.get_bool("no"), Some(false));
        assert_eq!(doc.get_u64(keys::SUCCESSFUL_TEST_COUNT), Some(1));
        assert_eq!(doc.get_u64(keys::FAILED_TEST_COUNT), Some(1));
    }

    #[test]
    fn test_empty_template_still_writes_zero_counts() {
        let (doc, _, _) = Harness::template(Vec::new())
            .evaluate(ResultDocument::new(), &mut NoopObserver)
            .unwrap();
        assert_eq!(doc.get_u64(keys::SUCCESSFUL_TEST_COUNT), Some(0));
        assert_eq!(doc.get_u64(keys::FAILED_TEST_COUNT), Some(0));
    }

    #[test]
    fn test_observer_sees_assertions_in_order() {
        let mut recorder = Recorder {
            stages: Vec::new(),
            seen: Vec::new(),
        };
        let faulty = |a: f64, b: f64| if a == 2.0 { 15.0 } else { a.powf(b) };
        Harness::fixed(&faulty)
            .evaluate(ResultDocument::new(), &mut recorder)
            .unwrap();
        assert_eq!(
            recorder.seen,
            vec![
                (keys::POWER_CORRECT.to_string(), false),
                (keys::POWER_NON_INTEGER_CORRECT.to_string(), true),
                (keys::POWER_ZERO.to_string(), true),
            ]
        );
        assert!(recorder.stages.is_empty());
    }
}
