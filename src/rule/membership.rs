//! Membership in a fixed candidate list.

use std::sync::Arc;

use crate::error::{Error, Failure, RuleError};
use crate::value::Value;

/// Checks whether a value is (or is not) one of a list of candidates.
///
/// Built by [`in_`](crate::rule::in_) and [`not_in`](crate::rule::not_in).
/// An empty value is valid in both forms.
#[derive(Debug, Clone)]
pub struct InRule {
    elements: Arc<[Value]>,
    negate: bool,
    err: Error,
}

impl InRule {
    pub(crate) fn new(elements: Vec<Value>) -> Self {
        Self {
            elements: elements.into(),
            negate: false,
            err: Error::new("validation_in_invalid", "must be a valid value"),
        }
    }

    pub(crate) fn not(elements: Vec<Value>) -> Self {
        Self {
            elements: elements.into(),
            negate: true,
            err: Error::new("validation_not_in_invalid", "must not be in list"),
        }
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
        if value.is_empty() {
            return Ok(None);
        }
        let found = self.elements.iter().any(|e| e.same_as(value));
        if found == self.negate {
            Ok(Some(self.err.clone().into()))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<Value> {
        items.iter().map(|s| Value::from(*s)).collect()
    }

    #[test]
    fn test_in() {
        let rule = InRule::new(values(&["admin", "user"]));
        assert!(rule.evaluate(&Value::from("admin")).unwrap().is_none());

        let failure = rule.evaluate(&Value::from("root")).unwrap().unwrap();
        assert_eq!(failure.code(), Some("validation_in_invalid"));
        assert_eq!(failure.error(), "must be a valid value");
    }

    #[test]
    fn test_not_in() {
        let rule = InRule::not(values(&["root"]));
        assert!(rule.evaluate(&Value::from("admin")).unwrap().is_none());

        let failure = rule.evaluate(&Value::from("root")).unwrap().unwrap();
        assert_eq!(failure.code(), Some("validation_not_in_invalid"));
    }

    #[test]
    fn test_empty_is_valid() {
        let rule = InRule::new(values(&["a"]));
        assert!(rule.evaluate(&Value::from("")).unwrap().is_none());
        let rule = InRule::not(vec![Value::from(0)]);
        assert!(rule.evaluate(&Value::from(0)).unwrap().is_none());
    }

    #[test]
    fn test_integers_match_across_signedness() {
        let rule = InRule::new(vec![Value::UInt(3)]);
        assert!(rule.evaluate(&Value::from(3)).unwrap().is_none());
    }

    #[test]
    fn test_type_must_match() {
        let rule = InRule::new(vec![Value::from(1)]);
        assert!(rule.evaluate(&Value::from("1")).unwrap().is_some());
    }
}
