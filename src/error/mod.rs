//! Error types for validation failures.
//!
//! This module provides the failure report types returned by validation
//! ([`Error`], [`Errors`], [`Failure`]) and the [`RuleError`] raised when a
//! rule chain is misconfigured.

mod failure;
mod rule_error;

pub use failure::{Error, Errors, Failure};
pub use rule_error::RuleError;
