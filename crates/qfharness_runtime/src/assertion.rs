//! Assertions: labelled boolean checks evaluated by the harness.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::subject::Subject;

type Check<'s> = Box<dyn Fn() -> Result<bool, EvaluationError> + 's>;

/// A named check producing a boolean.
pub struct Assertion<'s> {
    name: String,
    check: Check<'s>,
}

impl<'s> Assertion<'s> {
    /// Build an assertion from a fallible check.
    pub fn new(name: impl Into<String>, check: impl Fn() -> Result<bool, EvaluationError> + 's) -> Self {
        Self {
            name: name.into(),
            check: Box::new(check),
        }
    }

    /// Build an assertion from a plain predicate.
    pub fn predicate(name: impl Into<String>, check: impl Fn() -> bool + 's) -> Self {
        Self::new(name, move || Ok(check()))
    }

    /// `subject(lhs, rhs) == expected`, compared exactly.
    pub fn equals<S: Subject + ?Sized>(name: impl Into<String>, subject: &'s S, lhs: f64, rhs: f64, expected: f64) -> Self {
        Self::new(name, move || Ok(subject.apply(lhs, rhs)? == expected))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the check. A panic inside the subject or the check becomes [`EvaluationError::Panicked`].
    pub fn evaluate(&self) -> Result<bool, EvaluationError> {
        panic::catch_unwind(AssertUnwindSafe(|| (self.check)()))
            .unwrap_or_else(|payload| Err(EvaluationError::Panicked(panic_message(payload.as_ref()))))
    }
}

impl fmt::Debug for Assertion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assertion").field("name", &self.name).finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Data form of an exponentiation check, loadable from a JSON suite file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerCase {
    pub name: String,
    pub base: f64,
    pub exponent: f64,
    pub expected: f64,
}

impl PowerCase {
    pub fn new(name: impl Into<String>, base: f64, exponent: f64, expected: f64) -> Self {
        Self {
            name: name.into(),
            base,
            exponent,
            expected,
        }
    }

    /// Bind this case to a subject.
    pub fn to_assertion<'s, S: Subject + ?Sized>(&self, subject: &'s S) -> Assertion<'s> {
        Assertion::equals(self.name.clone(), subject, self.base, self.exponent, self.expected)
    }
}

/// Parse a JSON array of [`PowerCase`] objects.
pub fn parse_cases(json: &str) -> Result<Vec<PowerCase>, serde_json::Error> {
    serde_json::from_str(json)
}
