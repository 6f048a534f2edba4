//! The validation facade.
//!
//! This module provides [`validate`], which runs one rule chain against one
//! value, and [`validate_object`], which runs a chain per field of a target
//! object and aggregates every failing field into an [`Errors`] report.
//!
//! Within a chain evaluation is fail-fast: the first failing rule wins and the
//! rest are skipped. Across fields it is exhaustive: every field is evaluated
//! so the caller gets the complete report in one call.

use rayon::prelude::*;

use crate::error::{Errors, Failure, RuleError};
use crate::field::{FieldRules, MaybeField};
use crate::rule::Rule;
use crate::value::Value;

/// Runs a rule chain against a value.
///
/// Rules run left to right. An active `skip` ends the chain with success; the
/// first failure is returned immediately. A nested report with no entries
/// counts as success. An empty chain always succeeds.
///
/// # Errors
///
/// Returns a [`RuleError`] if a rule in the chain cannot be applied to the
/// value, for example a `min(18)` bound checked against a string.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{rule, rules, validate, Value};
///
/// let chain = rules![rule::skip_when(true), rule::required()];
/// assert!(validate(&Value::Null, &chain).unwrap().is_none());
///
/// let chain = rules![rule::required()];
/// assert!(validate(&Value::Null, &chain).unwrap().is_some());
/// ```
pub fn validate(value: &Value, rules: &[Rule]) -> Result<Option<Failure>, RuleError> {
    for rule in rules {
        if rule.is_active_skip() {
            return Ok(None);
        }
        match rule.evaluate(value)? {
            Some(failure) if !failure.is_empty() => return Ok(Some(failure)),
            _ => {}
        }
    }
    Ok(None)
}

/// Validates the fields of `target`.
///
/// Each entry names a field, how to obtain its value, and its rule chain.
/// Absent (`None`) entries are ignored. Every field is evaluated; each
/// failing field is recorded under its name, a later field with the same
/// name replacing the earlier one.
///
/// Returns `Ok(None)` when no field failed.
///
/// # Errors
///
/// Returns the first [`RuleError`] raised by any field's chain; a
/// misconfigured chain aborts the whole call.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{field, rule, rules, validate_object};
///
/// struct Signup {
///     age: u32,
/// }
///
/// let signup = Signup { age: 15 };
/// let errors = validate_object(&signup, [
///     field("age", signup.age, rules![rule::min(18)]),
/// ])
/// .unwrap()
/// .unwrap();
///
/// assert_eq!(errors.get("age").unwrap().error(), "must be no less than 18");
/// ```
pub fn validate_object<T, I>(target: &T, fields: I) -> Result<Option<Errors>, RuleError>
where
    I: IntoIterator,
    I::Item: MaybeField<T>,
{
    let mut errors = Errors::new();
    let mut evaluated = 0usize;

    for entry in fields {
        let Some(field) = entry.field() else {
            continue;
        };
        evaluated += 1;

        let value = field.resolve(target);
        let outcome = validate(&value, field.rules()).inspect_err(|err| {
            tracing::warn!(field = field.name(), error = %err, "rule chain misconfigured");
        })?;

        tracing::trace!(field = field.name(), valid = outcome.is_none(), "field evaluated");
        if let Some(failure) = outcome {
            errors.insert(field.name(), failure);
        }
    }

    tracing::debug!(fields = evaluated, failed = errors.len(), "object validated");
    Ok(errors.into_option())
}

/// Validates many targets against the same field rules in parallel.
///
/// Each target is validated by its own [`validate_object`] call on a rayon
/// worker; results come back in the order of `targets`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{field_of, rule, rules, validate_objects, Accessor};
///
/// struct Item {
///     qty: i64,
/// }
///
/// let fields = vec![field_of(Accessor::new("qty", |i: &Item| i.qty), rules![rule::min(1)])];
/// let items = vec![Item { qty: 2 }, Item { qty: -1 }];
///
/// let results = validate_objects(&items, &fields);
/// assert!(results[0].as_ref().unwrap().is_none());
/// assert!(results[1].as_ref().unwrap().is_some());
/// ```
pub fn validate_objects<T: Sync>(
    targets: &[T],
    fields: &[FieldRules<T>],
) -> Vec<Result<Option<Errors>, RuleError>> {
    targets
        .par_iter()
        .map(|target| validate_object(target, fields))
        .collect()
}
