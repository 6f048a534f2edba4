//! Rules that target absence and emptiness.
//!
//! [`AbsentRule`] requires a value to be missing (or empty), [`RequiredRule`]
//! requires it to be present and non-empty. These are the only rules for which
//! an empty value is not automatically valid.

use crate::error::{Error, Failure, RuleError};
use crate::value::Value;

/// Requires a value to be absent.
///
/// The `nil` form accepts only `Null`; the `empty` form also accepts a present
/// but empty value.
#[derive(Debug, Clone)]
pub struct AbsentRule {
    condition: bool,
    skip_nil: bool,
    err: Error,
}

impl AbsentRule {
    pub(crate) fn nil() -> Self {
        Self {
            condition: true,
            skip_nil: false,
            err: Error::new("validation_nil", "must be blank"),
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            condition: true,
            skip_nil: true,
            err: Error::new("validation_empty", "must be blank"),
        }
    }

    /// Only applies the rule when `condition` is true.
    pub fn when(mut self, condition: bool) -> Self {
        self.condition = condition;
        self
    }

    /// Sets a custom message template.
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
        if !self.condition || value.is_null() {
            return Ok(None);
        }
        if self.skip_nil && value.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.err.clone().into()))
    }
}

/// Requires a value to be non-empty.
///
/// With `skip_nil` set (the `nil_or_not_empty` form) a `Null` value is
/// accepted, but a present empty value still fails.
#[derive(Debug, Clone)]
pub struct RequiredRule {
    condition: bool,
    skip_nil: bool,
    err: Error,
}

impl RequiredRule {
    pub(crate) fn new() -> Self {
        Self {
            condition: true,
            skip_nil: false,
            err: Error::new("validation_required", "cannot be blank"),
        }
    }

    pub(crate) fn nil_or_not_empty() -> Self {
        Self {
            condition: true,
            skip_nil: true,
            err: Error::new("validation_nil_or_not_empty_required", "cannot be blank"),
        }
    }

    /// Only applies the rule when `condition` is true.
    pub fn when(mut self, condition: bool) -> Self {
        self.condition = condition;
        self
    }

    /// Sets a custom message template.
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
        if !self.condition {
            return Ok(None);
        }
        if self.skip_nil && value.is_null() {
            return Ok(None);
        }
        if value.is_empty() {
            return Ok(Some(self.err.clone().into()));
        }
        Ok(None)
    }
}
