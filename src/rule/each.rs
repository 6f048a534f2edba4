//! Per-element validation of lists and maps.

use crate::error::{Errors, Failure, RuleError};
use crate::validation::validate;
use crate::value::Value;

use super::Rule;

/// Runs a rule chain against every element of a list or every value of a map.
///
/// Failing elements are collected into a nested [`Errors`] keyed by index
/// (`"0"`, `"1"`, ...) for lists or by key for maps. An empty collection is
/// valid; pair with `required` to forbid it.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{rule, rules, Value};
///
/// let ages = rule::each(rules![rule::min(18)]);
/// let failure = ages.evaluate(&Value::from(vec![17, 21, 15])).unwrap().unwrap();
///
/// let nested = failure.as_errors().unwrap();
/// let keys: Vec<_> = nested.keys().collect();
/// assert_eq!(keys, vec!["0", "2"]);
/// ```
#[derive(Debug, Clone)]
pub struct EachRule {
    rules: Vec<Rule>,
}

impl EachRule {
    pub(crate) fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn evaluate(&self, value: &Value) -> Result<Option<Failure>, RuleError> {
        if value.is_empty() {
            return Ok(None);
        }

        let mut errors = Errors::new();
        match value {
            Value::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if let Some(failure) = validate(item, &self.rules)? {
                        errors.insert(index.to_string(), failure);
                    }
                }
            }
            Value::Map(entries) => {
                for (key, item) in entries {
                    if let Some(failure) = validate(item, &self.rules)? {
                        errors.insert(key.clone(), failure);
                    }
                }
            }
            other => {
                return Err(RuleError::NotIterable {
                    got: other.type_name(),
                })
            }
        }

        Ok(errors.into_option().map(Failure::Nested))
    }
}
