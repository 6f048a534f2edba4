//! # fieldcheck
//!
//! A composable validation rule engine that produces field-addressable error
//! reports.
//!
//! ## Overview
//!
//! Rules are small immutable values combined into chains. A chain is checked
//! against one value fail-fast: the first failing rule is reported and the
//! rest are skipped. Objects are validated field by field, exhaustively: every
//! field's chain runs, and every failing field appears in the report.
//!
//! Most rules treat an empty value (absent, zero, `false`, or zero-length) as
//! valid; pair them with [`rule::required`] to insist on a value.
//!
//! ## Core Types
//!
//! - [`Value`]: The dynamic value every rule inspects
//! - [`Rule`]: A single rule; chains are `Vec<Rule>` built with [`rules!`]
//! - [`Error`]: One failure with a code, message template and params
//! - [`Errors`]: Field-keyed failures, nestable for per-element reports
//! - [`FieldRules`] / [`Accessor`]: A field's name, value source and chain
//! - [`RuleError`]: A misconfigured chain, distinct from validation failures
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck::{accessor, field_of, rule, rules, validate_object};
//! use regex::Regex;
//!
//! struct Signup {
//!     email: String,
//!     age: u32,
//!     tags: Vec<String>,
//! }
//!
//! let signup = Signup {
//!     email: "not-an-email".into(),
//!     age: 15,
//!     tags: vec!["ok".into(), "x".into()],
//! };
//!
//! let email = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
//! let errors = validate_object(&signup, [
//!     field_of(accessor!(Signup, email), rules![rule::required(), rule::match_(email)]),
//!     field_of(accessor!(Signup, age), rules![rule::min(18)]),
//!     field_of(accessor!(Signup, tags), rules![rule::each(rules![rule::length(2, 10)])]),
//! ])
//! .unwrap()
//! .unwrap();
//!
//! assert_eq!(
//!     errors.to_string(),
//!     "email: must be in a valid format; age: must be no less than 18; \
//!      tags: (1: the length must be between 2 and 10.)."
//! );
//! ```

pub mod error;
pub mod field;
pub mod format;
pub mod registry;
pub mod rule;
pub mod validation;
pub mod value;

pub use error::{Error, Errors, Failure, RuleError};
pub use field::{field, field_of, Accessor, FieldRules, MaybeField};
pub use registry::{RegistryError, RuleRegistry};
pub use rule::Rule;
pub use validation::{validate, validate_object, validate_objects};
pub use value::Value;

/// Type alias for an object validation result viewed as a `stillwater` validation.
///
/// See [`Errors::into_validation`].
pub type ValidationResult = stillwater::Validation<(), Errors>;
