//! The subject under test: a binary numeric operation.

use crate::error::EvaluationError;

/// A candidate solution exposing one operation over two numbers.
///
/// Plain closures `Fn(f64, f64) -> f64` are subjects; implement the trait directly when the operation can
/// fail.
pub trait Subject {
    fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, EvaluationError>;
}

impl<F> Subject for F
where
    F: Fn(f64, f64) -> f64,
{
    fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, EvaluationError> {
        Ok(self(lhs, rhs))
    }
}

/// Reference exponentiation subject: `base` raised to `exponent`.
///
/// Fails with [`EvaluationError::Domain`] when finite inputs have no real result (e.g. `(-8)^(1/3)`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Power;

impl Subject for Power {
    fn apply(&self, base: f64, exponent: f64) -> Result<f64, EvaluationError> {
        let result = base.powf(exponent);
        if result.is_nan() && !base.is_nan() && !exponent.is_nan() {
            return Err(EvaluationError::Domain {
                lhs: base,
                rhs: exponent,
                reason: "no real-valued power".to_string(),
            });
        }
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_power_reference_values() {
        assert_eq!(Power.apply(2.0, 4.0).unwrap(), 16.0);
        assert_eq!(Power.apply(1.5, 3.0).unwrap(), 3.375);
        assert_eq!(Power.apply(50.0, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_power_rejects_complex_results() {
        let err = Power.apply(-8.0, 1.0 / 3.0).unwrap_err();
        assert!(matches!(err, EvaluationError::Domain { .. }));
    }

    #[test]
    fn test_closures_are_subjects() {
        let add = |a: f64, b: f64| a + b;
        assert_eq!(add.apply(1.0, 2.0).unwrap(), 3.0);
    }
}
