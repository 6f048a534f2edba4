//! Validation failure types.
//!
//! This module provides [`Error`] for a single rule failure, [`Errors`] for
//! field-keyed collections of failures, and [`Failure`], the renderable
//! failure either of them can be.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use stillwater::prelude::*;
use stillwater::Validation;

use crate::format;
use crate::value::Value;

/// A single validation failure.
///
/// `Error` holds a stable machine-readable `code`, a message template, and the
/// named params substituted into the template when it is rendered.
///
/// # Example
///
/// ```rust
/// use fieldcheck::Error;
///
/// let error = Error::new("validation_min", "must be at least {threshold}")
///     .with_param("threshold", 18);
///
/// assert_eq!(error.code, "validation_min");
/// assert_eq!(error.error(), "must be at least 18");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// Machine-readable error code (e.g., `validation_required`).
    pub code: String,
    /// Message template with optional `{name}` placeholders.
    pub message: String,
    /// Values substituted into the template.
    pub params: IndexMap<String, Value>,
}

impl Error {
    /// Creates an error with the given code and message template.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: IndexMap::new(),
        }
    }

    /// Replaces the message template and returns self for chaining.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Adds a single param and returns self for chaining.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Replaces all params and returns self for chaining.
    pub fn with_params(mut self, params: IndexMap<String, Value>) -> Self {
        self.params = params;
        self
    }

    /// Renders the message.
    ///
    /// The template is returned verbatim when there are no params.
    pub fn error(&self) -> String {
        if self.params.is_empty() {
            self.message.clone()
        } else {
            format::render(&self.message, &self.params)
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error())
    }
}

impl std::error::Error for Error {}

/// Field-keyed collection of failures.
///
/// Keys are unique and keep the order in which they were first inserted.
/// Inserting an existing key replaces its failure. An empty `Errors` means
/// "no failure"; the validation facade never returns one.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{Error, Errors};
///
/// let mut errors = Errors::new();
/// errors.insert("name", Error::new("validation_required", "cannot be blank"));
/// errors.insert("age", Error::new("validation_min", "must be no less than 18"));
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.error(), "name: cannot be blank; age: must be no less than 18.");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Errors(IndexMap<String, Failure>);

impl Errors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure under `field`, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, failure: impl Into<Failure>) {
        self.0.insert(field.into(), failure.into());
    }

    /// Returns the failure recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&Failure> {
        self.0.get(field)
    }

    /// Returns the number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no field has failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the failing field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over field names and their failures.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Failure)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `None` when empty, otherwise `Some(self)`.
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Converts into a `Validation`, failing when any field has failed.
    pub fn into_validation(self) -> Validation<(), Errors> {
        if self.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(self)
        }
    }

    /// Renders every failure as `field: message`, joined with `"; "`.
    ///
    /// Nested collections are wrapped in parentheses.
    pub fn error(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, failure)| match failure {
                Failure::Single(e) => format!("{}: {}", field, e.error()),
                Failure::Nested(nested) => format!("{}: ({})", field, nested.error()),
            })
            .collect();
        format!("{}.", parts.join("; "))
    }

    /// Renders the collection as a JSON object of field to message.
    ///
    /// Nested collections become nested objects.
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .0
            .iter()
            .map(|(field, failure)| {
                let rendered = match failure {
                    Failure::Single(e) => serde_json::Value::String(e.error()),
                    Failure::Nested(nested) => nested.to_json(),
                };
                (field.clone(), rendered)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

impl Semigroup for Errors {
    /// Merges two collections; failures from `other` win on duplicate fields.
    fn combine(mut self, other: Self) -> Self {
        for (field, failure) in other.0 {
            self.0.insert(field, failure);
        }
        self
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error())
    }
}

impl std::error::Error for Errors {}

impl<K: Into<String>, F: Into<Failure>> FromIterator<(K, F)> for Errors {
    fn from_iter<I: IntoIterator<Item = (K, F)>>(iter: I) -> Self {
        let mut errors = Errors::new();
        for (field, failure) in iter {
            errors.insert(field, failure);
        }
        errors
    }
}

impl IntoIterator for Errors {
    type Item = (String, Failure);
    type IntoIter = indexmap::map::IntoIter<String, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = (&'a String, &'a Failure);
    type IntoIter = indexmap::map::Iter<'a, String, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A renderable failure: one [`Error`] or a nested [`Errors`].
///
/// Nesting lets a rule like `each` report per-element failures under the
/// field that holds the collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    Single(Error),
    Nested(Errors),
}

impl Failure {
    /// Renders the failure message.
    pub fn error(&self) -> String {
        match self {
            Failure::Single(e) => e.error(),
            Failure::Nested(errors) => errors.error(),
        }
    }

    /// Returns the error code of a single failure.
    pub fn code(&self) -> Option<&str> {
        self.as_error().map(|e| e.code.as_str())
    }

    pub fn as_error(&self) -> Option<&Error> {
        match self {
            Failure::Single(e) => Some(e),
            Failure::Nested(_) => None,
        }
    }

    pub fn as_errors(&self) -> Option<&Errors> {
        match self {
            Failure::Single(_) => None,
            Failure::Nested(errors) => Some(errors),
        }
    }

    /// Returns true for a nested collection with no entries.
    pub fn is_empty(&self) -> bool {
        matches!(self, Failure::Nested(errors) if errors.is_empty())
    }
}

impl From<Error> for Failure {
    fn from(e: Error) -> Self {
        Failure::Single(e)
    }
}

impl From<Errors> for Failure {
    fn from(errors: Errors) -> Self {
        Failure::Nested(errors)
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error())
    }
}

impl std::error::Error for Failure {}

// Failures cross thread boundaries in batch validation.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Errors>();
    assert_sync::<Errors>();
    assert_send::<Failure>();
    assert_sync::<Failure>();
};
