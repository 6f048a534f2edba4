//! Validation rules.
//!
//! This module provides [`Rule`], the sum of every rule the engine knows, and
//! the constructor functions used to build chains. A chain is a `Vec<Rule>`,
//! usually written with the [`rules!`](crate::rules) macro, and is evaluated
//! left to right until the first failure.
//!
//! Every rule except the absence rules ([`nil`], [`empty`], [`required`],
//! [`nil_or_not_empty`]) and [`by`] treats an empty value as valid.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{rule, rules, validate, Value};
//!
//! let chain = rules![rule::required(), rule::length(3, 20)];
//!
//! assert!(validate(&Value::from("alice"), &chain).unwrap().is_none());
//!
//! let failure = validate(&Value::from(""), &chain).unwrap().unwrap();
//! assert_eq!(failure.error(), "cannot be blank");
//! ```

mod absent;
mod date;
mod each;
mod inline;
mod length;
mod membership;
mod pattern;
mod threshold;
mod when;

use std::sync::Arc;

use regex::Regex;

use crate::error::{Error, Failure, RuleError};
use crate::value::Value;

pub use absent::{AbsentRule, RequiredRule};
pub use date::DateRule;
pub use each::EachRule;
pub use inline::InlineRule;
pub use length::LengthRule;
pub use membership::InRule;
pub use pattern::{MatchRule, StringRule};
pub use threshold::ThresholdRule;
pub use when::WhenRule;

/// A single validation rule.
///
/// Rules are immutable once built and cheap to clone, so a chain can be
/// shared between threads and reused across any number of validation calls.
#[derive(Debug, Clone)]
pub enum Rule {
    Absent(AbsentRule),
    Required(RequiredRule),
    Threshold(ThresholdRule),
    Date(DateRule),
    In(InRule),
    Length(LengthRule),
    Match(MatchRule),
    String(StringRule),
    Each(EachRule),
    When(WhenRule),
    Inline(InlineRule),
    /// Stops the chain and reports the value valid when the flag is set.
    Skip(bool),
}

impl Rule {
    /// Evaluates this rule against a value.
    ///
    /// Returns `Ok(None)` when the value is valid, `Ok(Some(failure))` when it
    /// is not, and `Err` when the rule cannot be applied to the value at all.
    pub fn evaluate(&self, value: &Value) -> Result<Option<Failure>, RuleError> {
        match self {
            Rule::Absent(r) => r.evaluate(value),
            Rule::Required(r) => r.evaluate(value),
            Rule::Threshold(r) => r.evaluate(value),
            Rule::Date(r) => r.evaluate(value),
            Rule::In(r) => r.evaluate(value),
            Rule::Length(r) => r.evaluate(value),
            Rule::Match(r) => r.evaluate(value),
            Rule::String(r) => r.evaluate(value),
            Rule::Each(r) => r.evaluate(value),
            Rule::When(r) => r.evaluate(value),
            Rule::Inline(r) => r.evaluate(value),
            Rule::Skip(_) => Ok(None),
        }
    }

    /// Returns true for a `skip` marker whose flag is set.
    pub fn is_active_skip(&self) -> bool {
        matches!(self, Rule::Skip(true))
    }
}

macro_rules! impl_from_rule {
    ($($variant:ident($t:ty)),* $(,)?) => {
        $(impl From<$t> for Rule {
            fn from(rule: $t) -> Self {
                Rule::$variant(rule)
            }
        })*
    };
}

impl_from_rule!(
    Absent(AbsentRule),
    Required(RequiredRule),
    Threshold(ThresholdRule),
    Date(DateRule),
    In(InRule),
    Length(LengthRule),
    Match(MatchRule),
    String(StringRule),
    Each(EachRule),
    When(WhenRule),
    Inline(InlineRule),
);

/// Builds a rule chain, converting each element into a [`Rule`].
///
/// # Example
///
/// ```rust
/// use fieldcheck::{rule, rules, Rule};
///
/// let chain: Vec<Rule> = rules![rule::required(), rule::min(18).exclusive()];
/// assert_eq!(chain.len(), 2);
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        ::std::vec::Vec::<$crate::Rule>::new()
    };
    ($($rule:expr),+ $(,)?) => {
        ::std::vec![$($crate::Rule::from($rule)),+]
    };
}

/// Valid only when the value is absent (`Null`).
pub fn nil() -> AbsentRule {
    AbsentRule::nil()
}

/// Valid when the value is absent or empty.
pub fn empty() -> AbsentRule {
    AbsentRule::empty()
}

/// Valid only when the value is not empty.
///
/// A value is empty when it is absent, numeric zero, `false`, or a
/// zero-length string, list or map.
pub fn required() -> RequiredRule {
    RequiredRule::new()
}

/// Like [`required`], but an absent value is valid.
///
/// A present value that is empty still fails.
pub fn nil_or_not_empty() -> RequiredRule {
    RequiredRule::nil_or_not_empty()
}

/// Value must be greater than or equal to `threshold`.
///
/// Call `.exclusive()` for a strict comparison.
pub fn min(threshold: impl Into<Value>) -> ThresholdRule {
    ThresholdRule::min(threshold.into())
}

/// Value must be less than or equal to `threshold`.
///
/// Call `.exclusive()` for a strict comparison.
pub fn max(threshold: impl Into<Value>) -> ThresholdRule {
    ThresholdRule::max(threshold.into())
}

/// Value must be a string that parses under the chrono `layout`.
pub fn date(layout: impl Into<String>) -> DateRule {
    DateRule::new(layout)
}

/// Value must be one of `values`.
pub fn in_<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> InRule {
    InRule::new(values.into_iter().map(Into::into).collect())
}

/// Value must not be one of `values`.
pub fn not_in<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> InRule {
    InRule::not(values.into_iter().map(Into::into).collect())
}

/// Length of a string, list or map must be within `[min, max]`.
///
/// A `max` of zero removes the upper bound.
pub fn length(min: usize, max: usize) -> LengthRule {
    LengthRule::new(min, max)
}

/// String must match `regex`.
pub fn match_(regex: Regex) -> MatchRule {
    MatchRule::new(regex)
}

/// String must satisfy `validate`; failures report `message`.
pub fn string_rule<F>(validate: F, message: impl Into<String>) -> StringRule
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    StringRule::new(
        Arc::new(validate),
        Error::new("validation_string_invalid", message),
    )
}

/// String must satisfy `validate`; failures report `err`.
pub fn string_rule_with_error<F>(validate: F, err: Error) -> StringRule
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    StringRule::new(Arc::new(validate), err)
}

/// Runs `rules` against every element of a list or map.
pub fn each(rules: impl IntoIterator<Item = Rule>) -> EachRule {
    EachRule::new(rules.into_iter().collect())
}

/// Runs `rules` only when `condition` is true.
///
/// Use [`WhenRule::otherwise`] to supply rules for the false case.
pub fn when(condition: bool, rules: impl IntoIterator<Item = Rule>) -> WhenRule {
    WhenRule::new(condition, rules.into_iter().collect())
}

/// Wraps a closure as a rule.
///
/// The closure returns `None` for a valid value or anything convertible into
/// a [`Failure`] (an [`Error`] or a nested [`Errors`](crate::Errors)).
///
/// # Example
///
/// ```rust
/// use fieldcheck::{rule, validate, rules, Error, Value};
///
/// let even = rule::by(|v: &Value| match v {
///     Value::Int(i) if i % 2 != 0 => Some(Error::new("not_even", "must be even")),
///     _ => None,
/// });
///
/// assert!(validate(&Value::from(3), &rules![even]).unwrap().is_some());
/// ```
pub fn by<F, E>(func: F) -> InlineRule
where
    F: Fn(&Value) -> Option<E> + Send + Sync + 'static,
    E: Into<Failure>,
{
    InlineRule::new(Arc::new(move |value: &Value| -> Option<Failure> {
        func(value).map(Into::into)
    }))
}

/// Stops the rest of the chain and reports the value valid.
///
/// Place it first in a chain to bypass every check.
pub fn skip() -> Rule {
    Rule::Skip(true)
}

/// Like [`skip`], but only when `condition` is true.
pub fn skip_when(condition: bool) -> Rule {
    Rule::Skip(condition)
}

// Rules are shared across validation calls and threads.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Rule>();
    assert_sync::<Rule>();
};
