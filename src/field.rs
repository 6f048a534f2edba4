//! Field bindings for object validation.
//!
//! A [`FieldRules`] ties a field name to the value being checked and the rule
//! chain to check it with. The value is either a literal captured when the
//! binding is built, or an [`Accessor`] that reads it from the target object
//! when [`validate_object`](crate::validate_object) runs.
//!
//! The target is passed to the accessor at resolution time and never stored,
//! so a `FieldRules` is immutable and can be reused, including concurrently,
//! across any number of validation calls.

use std::fmt;
use std::sync::Arc;

use crate::error::{Failure, RuleError};
use crate::rule::Rule;
use crate::validation::validate;
use crate::value::Value;

/// Type alias for the getter stored in an accessor.
type Getter<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// A named getter that reads one field of a target object.
///
/// The getter must be pure: it is called once per validation and its result
/// is what the field's rules see.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{Accessor, Value};
///
/// struct User {
///     email: String,
/// }
///
/// let email = Accessor::new("email", |u: &User| u.email.clone());
/// let user = User { email: "a@b.com".into() };
///
/// assert_eq!(email.name(), "email");
/// assert_eq!(email.get(&user), Value::from("a@b.com"));
/// ```
pub struct Accessor<T> {
    name: String,
    get: Getter<T>,
}

impl<T> Accessor<T> {
    /// Creates an accessor reporting under `name`.
    pub fn new<F, V>(name: impl Into<String>, get: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self {
            name: name.into(),
            get: Arc::new(move |target: &T| -> Value { get(target).into() }),
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the field's current value from `target`.
    pub fn get(&self, target: &T) -> Value {
        (self.get)(target)
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            get: Arc::clone(&self.get),
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Builds an [`Accessor`] for a named struct field.
///
/// The field's value is cloned and converted into a [`Value`], and the field
/// identifier becomes the accessor's name.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{accessor, field_of, rule, rules, validate_object};
///
/// struct User {
///     name: String,
///     nickname: Option<String>,
/// }
///
/// let user = User { name: String::new(), nickname: None };
/// let errors = validate_object(&user, [
///     field_of(accessor!(User, name), rules![rule::required()]),
///     field_of(accessor!(User, nickname), rules![rule::nil_or_not_empty()]),
/// ])
/// .unwrap()
/// .unwrap();
///
/// let keys: Vec<_> = errors.keys().collect();
/// assert_eq!(keys, vec!["name"]);
/// ```
#[macro_export]
macro_rules! accessor {
    ($ty:ty, $field:ident) => {
        $crate::Accessor::new(::std::stringify!($field), |target: &$ty| {
            $crate::Value::from(::std::clone::Clone::clone(&target.$field))
        })
    };
}

/// Where a field's value comes from.
enum Source<T> {
    Literal(Value),
    Accessor(Getter<T>),
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        match self {
            Source::Literal(v) => Source::Literal(v.clone()),
            Source::Accessor(get) => Source::Accessor(Arc::clone(get)),
        }
    }
}

/// One field's name, value source and rule chain.
pub struct FieldRules<T> {
    name: String,
    source: Source<T>,
    rules: Vec<Rule>,
}

impl<T> FieldRules<T> {
    /// Returns the name failures are reported under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rule chain.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Produces the value to validate for `target`.
    pub fn resolve(&self, target: &T) -> Value {
        match &self.source {
            Source::Literal(v) => v.clone(),
            Source::Accessor(get) => get(target),
        }
    }

    /// Runs this field's chain against its value in `target`.
    pub fn validate(&self, target: &T) -> Result<Option<Failure>, RuleError> {
        validate(&self.resolve(target), &self.rules)
    }
}

impl<T> Clone for FieldRules<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            source: self.source.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<T> fmt::Debug for FieldRules<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            Source::Literal(_) => "literal",
            Source::Accessor(_) => "accessor",
        };
        f.debug_struct("FieldRules")
            .field("name", &self.name)
            .field("source", &source)
            .field("rules", &self.rules)
            .finish()
    }
}

/// Binds a literal value to a field name and rule chain.
pub fn field<T>(
    name: impl Into<String>,
    value: impl Into<Value>,
    rules: impl IntoIterator<Item = Rule>,
) -> FieldRules<T> {
    FieldRules {
        name: name.into(),
        source: Source::Literal(value.into()),
        rules: rules.into_iter().collect(),
    }
}

/// Binds an accessor to a rule chain; the accessor's name is the field name.
pub fn field_of<T>(accessor: Accessor<T>, rules: impl IntoIterator<Item = Rule>) -> FieldRules<T> {
    FieldRules {
        name: accessor.name,
        source: Source::Accessor(accessor.get),
        rules: rules.into_iter().collect(),
    }
}

/// An entry of a field list that may be absent.
///
/// Implemented for owned and borrowed [`FieldRules`] and for `Option`s of
/// either, so [`validate_object`](crate::validate_object) accepts arrays of
/// fields, slices of stored fields, or lists with conditionally omitted
/// entries.
pub trait MaybeField<T> {
    fn field(&self) -> Option<&FieldRules<T>>;
}

impl<T> MaybeField<T> for FieldRules<T> {
    fn field(&self) -> Option<&FieldRules<T>> {
        Some(self)
    }
}

impl<T> MaybeField<T> for &FieldRules<T> {
    fn field(&self) -> Option<&FieldRules<T>> {
        Some(*self)
    }
}

impl<T> MaybeField<T> for Option<FieldRules<T>> {
    fn field(&self) -> Option<&FieldRules<T>> {
        self.as_ref()
    }
}

impl<T> MaybeField<T> for Option<&FieldRules<T>> {
    fn field(&self) -> Option<&FieldRules<T>> {
        *self
    }
}
