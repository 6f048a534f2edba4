//! Configuration errors raised by malformed rule chains.

/// A rule chain that cannot be evaluated against the value it was given.
///
/// These are programmer errors, not validation failures: they say the chain
/// itself is wrong (a `min` bound of the wrong type, a `length` rule on a
/// number) and are returned through the `Err` arm instead of being reported
/// as field failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    /// A threshold bound cannot be ordered against the checked value.
    #[error("cannot compare a {value} value against a {bound} bound")]
    IncomparableTypes {
        value: &'static str,
        bound: &'static str,
    },

    /// The rule does not apply to values of this type.
    #[error("{rule} rule cannot be applied to a {got} value")]
    UnsupportedType {
        rule: &'static str,
        got: &'static str,
    },

    /// `each` was applied to something that is not a list or map.
    #[error("each rule requires a list or map, got a {got} value")]
    NotIterable { got: &'static str },
}
