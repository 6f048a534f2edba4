//! String format rules.
//!
//! [`MatchRule`] checks a string against a regular expression and
//! [`StringRule`] against an arbitrary string predicate.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::{Error, Failure, RuleError};
use crate::value::Value;

/// Checks that a string matches a regular expression.
///
/// By default the pattern may match anywhere in the string; after
/// [`full`](Self::full) it must match the whole string. An empty value is
/// valid.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{rule, Value};
/// use regex::Regex;
///
/// let digits = rule::match_(Regex::new(r"\d+").unwrap());
/// assert!(digits.evaluate(&Value::from("abc123")).unwrap().is_none());
///
/// let digits = digits.full().unwrap();
/// assert!(digits.evaluate(&Value::from("abc123")).unwrap().is_some());
/// assert!(digits.evaluate(&Value::from("123")).unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MatchRule {
    regex: Regex,
    err: Error,
}

impl MatchRule {
    pub(crate) fn new(regex: Regex) -> Self {
        Self {
            regex,
            err: Error::new("validation_match_invalid", "must be in a valid format"),
        }
    }

    /// Requires the pattern to span the entire string.
    ///
    /// Returns an error if the anchored pattern cannot be compiled.
    pub fn full(mut self) -> Result<Self, regex::Error> {
        self.regex = Regex::new(&format!(r"\A(?:{})\z", self.regex.as_str()))?;
        Ok(self)
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
        let s = value.as_str().ok_or(RuleError::UnsupportedType {
            rule: "match",
            got: value.type_name(),
        })?;

        if self.regex.is_match(s) {
            Ok(None)
        } else {
            Ok(Some(self.err.clone().into()))
        }
    }
}

/// Type alias for the predicate stored in a string rule.
pub(crate) type StringPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Checks a string with a caller-supplied predicate.
///
/// An empty value is valid; non-string values are a configuration error.
#[derive(Clone)]
pub struct StringRule {
    validate: StringPredicate,
    err: Error,
}

impl StringRule {
    pub(crate) fn new(validate: StringPredicate, err: Error) -> Self {
        Self { validate, err }
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
        let s = value.as_str().ok_or(RuleError::UnsupportedType {
            rule: "string",
            got: value.type_name(),
        })?;

        if (self.validate)(s) {
            Ok(None)
        } else {
            Ok(Some(self.err.clone().into()))
        }
    }
}

impl fmt::Debug for StringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringRule")
            .field("err", &self.err)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

    #[test]
    fn test_match() {
        let rule = MatchRule::new(Regex::new(EMAIL).unwrap());
        assert!(rule.evaluate(&Value::from("a@b.com")).unwrap().is_none());

        let failure = rule.evaluate(&Value::from("not-an-email")).unwrap().unwrap();
        assert_eq!(failure.code(), Some("validation_match_invalid"));
        assert_eq!(failure.error(), "must be in a valid format");
    }

    #[test]
    fn test_full_match_with_alternation() {
        let rule = MatchRule::new(Regex::new("a|ab").unwrap()).full().unwrap();
        assert!(rule.evaluate(&Value::from("ab")).unwrap().is_none());
        assert!(rule.evaluate(&Value::from("abc")).unwrap().is_some());
    }

    #[test]
    fn test_match_empty_is_valid() {
        let rule = MatchRule::new(Regex::new(EMAIL).unwrap());
        assert!(rule.evaluate(&Value::from("")).unwrap().is_none());
        assert!(rule.evaluate(&Value::Null).unwrap().is_none());
    }

    #[test]
    fn test_match_non_string_is_configuration_error() {
        let rule = MatchRule::new(Regex::new(EMAIL).unwrap());
        assert!(matches!(
            rule.evaluate(&Value::from(vec!["a@b.com"])),
            Err(RuleError::UnsupportedType { rule: "match", .. })
        ));
    }

    #[test]
    fn test_string_rule() {
        let rule = StringRule::new(
            Arc::new(|s: &str| s.chars().all(|c| c.is_ascii_uppercase())),
            Error::new("validation_string_invalid", "must be upper case"),
        );
        assert!(rule.evaluate(&Value::from("ABC")).unwrap().is_none());
        assert_eq!(
            rule.evaluate(&Value::from("AbC")).unwrap().unwrap().error(),
            "must be upper case"
        );
        assert!(rule.evaluate(&Value::from("")).unwrap().is_none());
        assert!(rule.evaluate(&Value::from(1)).is_err());
    }
}
