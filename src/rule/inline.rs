//! Ad hoc rules built from closures.

use std::fmt;
use std::sync::Arc;

use crate::error::{Failure, RuleError};
use crate::value::Value;

/// Type alias for the function stored in an inline rule.
pub(crate) type InlineFn = Arc<dyn Fn(&Value) -> Option<Failure> + Send + Sync>;

/// Wraps a caller-supplied check.
///
/// The closure receives every value, empty or not, and returns the failure to
/// report or `None`. It must not block for long; the engine puts no timeout
/// around it.
#[derive(Clone)]
pub struct InlineRule {
    func: InlineFn,
}

impl InlineRule {
    pub(crate) fn new(func: InlineFn) -> Self {
        Self { func }
    }

    pub fn evaluate(&self, value: &Value) -> Result<Option<Failure>, RuleError> {
        Ok((self.func)(value))
    }
}

impl fmt::Debug for InlineRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InlineRule")
    }
}
