//! Minimum and maximum bounds.

use std::cmp::Ordering;

use crate::error::{Error, Failure, RuleError};
use crate::value::Value;

/// The comparison a threshold performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    GreaterEqual,
    Greater,
    LessEqual,
    Less,
}

impl Operator {
    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Operator::GreaterEqual => ordering != Ordering::Less,
            Operator::Greater => ordering == Ordering::Greater,
            Operator::LessEqual => ordering != Ordering::Greater,
            Operator::Less => ordering == Ordering::Less,
        }
    }

    fn default_error(self) -> Error {
        match self {
            Operator::GreaterEqual => Error::new(
                "validation_min_greater_equal_than_required",
                "must be no less than {threshold}",
            ),
            Operator::Greater => Error::new(
                "validation_min_greater_than_required",
                "must be greater than {threshold}",
            ),
            Operator::LessEqual => Error::new(
                "validation_max_less_equal_than_required",
                "must be no greater than {threshold}",
            ),
            Operator::Less => Error::new(
                "validation_max_less_than_required",
                "must be less than {threshold}",
            ),
        }
    }
}

/// Checks a value against an inclusive or exclusive bound.
///
/// Integers, floats and datetimes are supported; the value and the bound must
/// be of the same kind. An empty value is valid.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{rule, Value};
///
/// let adult = rule::min(18);
/// assert!(adult.evaluate(&Value::from(21)).unwrap().is_none());
/// assert!(adult.evaluate(&Value::from(15)).unwrap().is_some());
///
/// // zero is empty and therefore valid
/// assert!(adult.evaluate(&Value::from(0)).unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ThresholdRule {
    threshold: Value,
    operator: Operator,
    err: Error,
}

impl ThresholdRule {
    pub(crate) fn min(threshold: Value) -> Self {
        Self::with_operator(threshold, Operator::GreaterEqual)
    }

    pub(crate) fn max(threshold: Value) -> Self {
        Self::with_operator(threshold, Operator::LessEqual)
    }

    fn with_operator(threshold: Value, operator: Operator) -> Self {
        Self {
            threshold,
            operator,
            err: operator.default_error(),
        }
    }

    /// Makes the bound exclusive.
    ///
    /// This resets the error to the exclusive default, so call it before
    /// [`error`](Self::error).
    pub fn exclusive(self) -> Self {
        let operator = match self.operator {
            Operator::GreaterEqual | Operator::Greater => Operator::Greater,
            Operator::LessEqual | Operator::Less => Operator::Less,
        };
        Self::with_operator(self.threshold, operator)
    }

    /// Sets a custom message template. `{threshold}` is available.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.err.message = message.into();
        self
    }

    /// Replaces the reported error.
    pub fn error_object(mut self, err: Error) -> Self {
        self.err = err;
        self
    }

    pub fn evaluate(&self, value: &Value) -> Result<Option<Failure>, RuleError> {
        if value.is_empty() {
            return Ok(None);
        }
        let Some(ordering) = value.compare(&self.threshold) else {
            // NaN is unordered and satisfies no bound
            if matches!((value, &self.threshold), (Value::Float(_), Value::Float(_))) {
                return Ok(Some(self.failure()));
            }
            return Err(RuleError::IncomparableTypes {
                value: value.type_name(),
                bound: self.threshold.type_name(),
            });
        };

        if self.operator.accepts(ordering) {
            Ok(None)
        } else {
            Ok(Some(self.failure()))
        }
    }

    fn failure(&self) -> Failure {
        self.err
            .clone()
            .with_param("threshold", self.threshold.clone())
            .into()
    }
}
