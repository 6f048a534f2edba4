//! Message template rendering.
//!
//! Error messages are templates with named `{placeholder}` slots filled from
//! an error's params.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};

use crate::value::Value;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid"));

/// Substitutes `{name}` placeholders in `template` with values from `params`.
///
/// Placeholders without a matching param are left untouched.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{format::render, Value};
/// use indexmap::IndexMap;
///
/// let mut params = IndexMap::new();
/// params.insert("threshold".to_string(), Value::from(18));
///
/// assert_eq!(render("must be at least {threshold}", &params), "must be at least 18");
/// assert_eq!(render("{missing} stays", &params), "{missing} stays");
/// ```
pub fn render(template: &str, params: &IndexMap<String, Value>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match params.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
