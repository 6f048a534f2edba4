//! String and collection length bounds.

use crate::error::{Error, Failure, RuleError};
use crate::value::Value;

/// Checks that a string's character count, or a list or map's element count,
/// lies within `[min, max]`.
///
/// A `max` of zero means there is no upper bound. An empty value is valid.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{rule, Value};
///
/// let username = rule::length(3, 20);
/// assert!(username.evaluate(&Value::from("alice")).unwrap().is_none());
///
/// let failure = username.evaluate(&Value::from("al")).unwrap().unwrap();
/// assert_eq!(failure.error(), "the length must be between 3 and 20");
/// ```
#[derive(Debug, Clone)]
pub struct LengthRule {
    min: usize,
    max: usize,
    err: Error,
}

impl LengthRule {
    pub(crate) fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            err: default_error(min, max),
        }
    }

    /// Sets a custom message template. `{min}` and `{max}` are available.
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
        let len = value.len().ok_or(RuleError::UnsupportedType {
            rule: "length",
            got: value.type_name(),
        })?;

        let too_short = self.min > 0 && len < self.min;
        let too_long = self.max > 0 && len > self.max;
        // a non-empty value can never satisfy length(0, 0)
        let must_be_empty = self.min == 0 && self.max == 0;

        if too_short || too_long || must_be_empty {
            Ok(Some(
                self.err
                    .clone()
                    .with_param("min", self.min)
                    .with_param("max", self.max)
                    .into(),
            ))
        } else {
            Ok(None)
        }
    }
}

fn default_error(min: usize, max: usize) -> Error {
    match (min, max) {
        (0, 0) => Error::new("validation_length_empty_required", "the value must be empty"),
        (0, _) => Error::new(
            "validation_length_too_long",
            "the length must be no more than {max}",
        ),
        (_, 0) => Error::new(
            "validation_length_too_short",
            "the length must be no less than {min}",
        ),
        (min, max) if min == max => {
            Error::new("validation_length_invalid", "the length must be exactly {min}")
        }
        _ => Error::new(
            "validation_length_out_of_range",
            "the length must be between {min} and {max}",
        ),
    }
}
