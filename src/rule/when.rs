//! Conditional rule dispatch.

use crate::error::{Failure, RuleError};
use crate::validation::validate;
use crate::value::Value;

use super::Rule;

/// Runs one of two rule chains depending on a condition fixed at
/// construction.
///
/// The `otherwise` chain is empty unless set with
/// [`otherwise`](Self::otherwise). Both chains follow the usual chain
/// semantics, including `skip`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{rule, rules, Value};
///
/// let is_company = true;
/// let vat_id = rule::when(is_company, rules![rule::required()])
///     .otherwise(rules![rule::nil()]);
///
/// assert!(vat_id.evaluate(&Value::Null).unwrap().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct WhenRule {
    condition: bool,
    rules: Vec<Rule>,
    otherwise: Vec<Rule>,
}

impl WhenRule {
    pub(crate) fn new(condition: bool, rules: Vec<Rule>) -> Self {
        Self {
            condition,
            rules,
            otherwise: Vec::new(),
        }
    }

    /// Returns a rule that runs `rules` when the condition is false.
    pub fn otherwise(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.otherwise = rules.into_iter().collect();
        self
    }

    pub fn evaluate(&self, value: &Value) -> Result<Option<Failure>, RuleError> {
        if self.condition {
            validate(value, &self.rules)
        } else {
            validate(value, &self.otherwise)
        }
    }
}
