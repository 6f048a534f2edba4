//! Integration tests for the individual rules.

use chrono::{TimeZone, Utc};
use fieldcheck::{rule, rules, validate, Error, RuleError, Value};
use regex::Regex;

fn code_of(value: impl Into<Value>, chain: &[fieldcheck::Rule]) -> Option<String> {
    validate(&value.into(), chain)
        .unwrap()
        .and_then(|f| f.code().map(str::to_string))
}

// ============================================================================
// Absence rules
// ============================================================================

#[test]
fn test_required_rejects_empty_values() {
    let chain = rules![rule::required()];
    for value in [
        Value::Null,
        Value::from(""),
        Value::from(0),
        Value::from(0.0),
        Value::from(false),
        Value::from(Vec::<String>::new()),
    ] {
        let failure = validate(&value, &chain).unwrap().unwrap();
        assert_eq!(failure.error(), "cannot be blank", "{:?}", value);
    }
    assert!(validate(&Value::from("x"), &chain).unwrap().is_none());
    assert!(validate(&Value::from(-1), &chain).unwrap().is_none());
}

#[test]
fn test_required_when_false_is_inactive() {
    let chain = rules![rule::required().when(false)];
    assert!(validate(&Value::Null, &chain).unwrap().is_none());
}

#[test]
fn test_nil_or_not_empty() {
    let chain = rules![rule::nil_or_not_empty()];
    assert_eq!(code_of(Value::Null, &chain), None);
    assert_eq!(code_of("value", &chain), None);
    assert_eq!(
        code_of("", &chain).as_deref(),
        Some("validation_nil_or_not_empty_required")
    );
}

#[test]
fn test_nil_and_empty() {
    let nil = rules![rule::nil()];
    assert_eq!(code_of(Value::Null, &nil), None);
    assert_eq!(code_of("", &nil).as_deref(), Some("validation_nil"));

    let empty = rules![rule::empty()];
    assert_eq!(code_of(Value::Null, &empty), None);
    assert_eq!(code_of("", &empty), None);
    assert_eq!(code_of("x", &empty).as_deref(), Some("validation_empty"));
}

#[test]
fn test_option_values_follow_absence() {
    let none: Option<String> = None;
    let chain = rules![rule::nil()];
    assert!(validate(&Value::from(none), &chain).unwrap().is_none());
    assert!(validate(&Value::from(Some("x")), &chain).unwrap().is_some());
}

// ============================================================================
// Thresholds
// ============================================================================

#[test]
fn test_min_inclusive_and_exclusive() {
    let inclusive = rules![rule::min(18)];
    assert_eq!(code_of(18, &inclusive), None);
    assert_eq!(
        code_of(17, &inclusive).as_deref(),
        Some("validation_min_greater_equal_than_required")
    );

    let exclusive = rules![rule::min(18).exclusive()];
    let failure = validate(&Value::from(18), &exclusive).unwrap().unwrap();
    assert_eq!(failure.code(), Some("validation_min_greater_than_required"));
    assert_eq!(failure.error(), "must be greater than 18");
}

#[test]
fn test_max_inclusive_and_exclusive() {
    let inclusive = rules![rule::max(10)];
    assert_eq!(code_of(10, &inclusive), None);
    let failure = validate(&Value::from(11), &inclusive).unwrap().unwrap();
    assert_eq!(failure.error(), "must be no greater than 10");

    let exclusive = rules![rule::max(10).exclusive()];
    let failure = validate(&Value::from(10), &exclusive).unwrap().unwrap();
    assert_eq!(failure.error(), "must be less than 10");
}

#[test]
fn test_threshold_mixed_integer_widths() {
    let chain = rules![rule::max(100u8)];
    assert_eq!(code_of(99i64, &chain), None);
    assert!(code_of(u64::MAX, &chain).is_some());
    assert!(code_of(-5i32, &chain).is_none());
}

#[test]
fn test_threshold_floats() {
    let chain = rules![rule::min(0.5)];
    assert_eq!(code_of(0.75, &chain), None);
    assert!(code_of(0.25, &chain).is_some());
}

#[test]
fn test_threshold_nan_fails() {
    let nan = Value::from(f64::NAN);
    assert!(validate(&nan, &rules![rule::min(1.0)]).unwrap().is_some());
    assert!(validate(&nan, &rules![rule::max(1.0)]).unwrap().is_some());
}

#[test]
fn test_threshold_datetimes() {
    let cutoff = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let chain = rules![rule::min(cutoff)];

    let before = Utc.with_ymd_and_hms(2019, 6, 1, 0, 0, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();
    assert!(code_of(before, &chain).is_some());
    assert_eq!(code_of(after, &chain), None);
}

#[test]
fn test_threshold_incomparable_is_configuration_error() {
    let err = validate(&Value::from("eighteen"), &rules![rule::min(18)]).unwrap_err();
    assert_eq!(
        err,
        RuleError::IncomparableTypes {
            value: "string",
            bound: "int"
        }
    );

    let err = validate(&Value::from(3), &rules![rule::min(1.5)]).unwrap_err();
    assert!(matches!(err, RuleError::IncomparableTypes { .. }));
}

#[test]
fn test_threshold_custom_message() {
    let chain = rules![rule::min(21).error("you must be {threshold} or older")];
    let failure = validate(&Value::from(20), &chain).unwrap().unwrap();
    assert_eq!(failure.error(), "you must be 21 or older");
    assert_eq!(failure.code(), Some("validation_min_greater_equal_than_required"));
}

// ============================================================================
// Dates
// ============================================================================

#[test]
fn test_date_layouts() {
    let chain = rules![rule::date("%Y-%m-%d")];
    assert_eq!(code_of("2024-02-29", &chain), None);
    assert_eq!(
        code_of("2023-02-29", &chain).as_deref(),
        Some("validation_date_invalid")
    );

    let with_time = rules![rule::date("%Y-%m-%d %H:%M")];
    assert_eq!(code_of("2024-01-01 13:45", &with_time), None);
    assert!(code_of("2024-01-01", &with_time).is_some());

    let with_offset = rules![rule::date("%Y-%m-%dT%H:%M:%S%:z")];
    assert_eq!(code_of("2024-01-01T10:00:00+02:00", &with_offset), None);
}

#[test]
fn test_date_partial_layouts() {
    let time = rules![rule::date("%H:%M")];
    assert_eq!(code_of("15:04", &time), None);
    assert_eq!(code_of("25:04", &time).as_deref(), Some("validation_date_invalid"));

    let month = rules![rule::date("%Y-%m")];
    assert_eq!(code_of("2024-05", &month), None);
    assert!(code_of("2024-05-01", &month).is_some());

    let year = rules![rule::date("%Y")
        .min(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap())
        .max(Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap())];
    assert_eq!(code_of("2000", &year), None);
    assert_eq!(code_of("2009", &year), None);
    assert_eq!(code_of("2010", &year).as_deref(), Some("validation_date_out_of_range"));
}

#[test]
fn test_date_range() {
    let chain = rules![rule::date("%Y-%m-%d")
        .min(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap())
        .max(Utc.with_ymd_and_hms(2009, 12, 31, 0, 0, 0).unwrap())];

    assert_eq!(code_of("2000-01-01", &chain), None);
    assert_eq!(code_of("2009-12-31", &chain), None);

    let failure = validate(&Value::from("1999-12-31"), &chain).unwrap().unwrap();
    assert_eq!(failure.code(), Some("validation_date_out_of_range"));
    assert_eq!(failure.error(), "the date is out of range");
}

#[test]
fn test_date_custom_errors() {
    let chain = rules![rule::date("%Y-%m-%d")
        .max(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap())
        .error("not a date")
        .range_error("too late")];

    assert_eq!(
        validate(&Value::from("nope"), &chain).unwrap().unwrap().error(),
        "not a date"
    );
    assert_eq!(
        validate(&Value::from("2001-01-01"), &chain).unwrap().unwrap().error(),
        "too late"
    );
}

#[test]
fn test_date_rejects_non_strings() {
    let err = validate(&Value::from(20240101), &rules![rule::date("%Y%m%d")]).unwrap_err();
    assert!(matches!(err, RuleError::UnsupportedType { rule: "date", .. }));
}

// ============================================================================
// Membership
// ============================================================================

#[test]
fn test_in_and_not_in() {
    let colors = rules![rule::in_(["red", "green"])];
    assert_eq!(code_of("red", &colors), None);
    let failure = validate(&Value::from("blue"), &colors).unwrap().unwrap();
    assert_eq!(failure.code(), Some("validation_in_invalid"));
    assert_eq!(failure.error(), "must be a valid value");

    let reserved = rules![rule::not_in(["admin", "root"])];
    assert_eq!(code_of("alice", &reserved), None);
    let failure = validate(&Value::from("root"), &reserved).unwrap().unwrap();
    assert_eq!(failure.error(), "must not be in list");
}

#[test]
fn test_in_compares_integers_across_widths() {
    let chain = rules![rule::in_([1u8, 2, 3])];
    assert_eq!(code_of(2i64, &chain), None);
    assert!(code_of(4u32, &chain).is_some());
}

// ============================================================================
// Length
// ============================================================================

#[test]
fn test_length_messages() {
    let cases: Vec<(usize, usize, &str, &str)> = vec![
        (2, 4, "a", "the length must be between 2 and 4"),
        (3, 3, "ab", "the length must be exactly 3"),
        (3, 0, "ab", "the length must be no less than 3"),
        (0, 2, "abc", "the length must be no more than 2"),
        (0, 0, "abc", "the value must be empty"),
    ];

    for (min, max, input, expected) in cases {
        let failure = validate(&Value::from(input), &rules![rule::length(min, max)])
            .unwrap()
            .unwrap();
        assert_eq!(failure.error(), expected);
    }
}

#[test]
fn test_length_counts_characters() {
    let chain = rules![rule::length(1, 3)];
    assert_eq!(code_of("日本語", &chain), None);
    assert!(code_of("日本語!", &chain).is_some());
}

#[test]
fn test_length_collections() {
    let chain = rules![rule::length(1, 2)];
    assert_eq!(code_of(vec![1, 2], &chain), None);
    assert!(code_of(vec![1, 2, 3], &chain).is_some());
}

#[test]
fn test_length_rejects_numbers() {
    let err = validate(&Value::from(12345), &rules![rule::length(1, 3)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "length rule cannot be applied to a int value"
    );
}

// ============================================================================
// Patterns and string predicates
// ============================================================================

#[test]
fn test_match_searches_by_default() {
    let chain = rules![rule::match_(Regex::new("[0-9]+").unwrap())];
    assert_eq!(code_of("abc123", &chain), None);
    assert_eq!(code_of("abc", &chain).as_deref(), Some("validation_match_invalid"));
}

#[test]
fn test_match_full_requires_whole_string() {
    let chain = rules![rule::match_(Regex::new("[0-9]+").unwrap()).full().unwrap()];
    assert_eq!(code_of("123", &chain), None);
    assert!(code_of("abc123", &chain).is_some());
}

#[test]
fn test_string_rule() {
    let upper = rule::string_rule(|s| s.chars().all(|c| c.is_ascii_uppercase()), "must be upper case");
    let chain = rules![upper];

    assert_eq!(code_of("ABC", &chain), None);
    let failure = validate(&Value::from("AbC"), &chain).unwrap().unwrap();
    assert_eq!(failure.code(), Some("validation_string_invalid"));
    assert_eq!(failure.error(), "must be upper case");
}

#[test]
fn test_string_rule_with_error() {
    let chain = rules![rule::string_rule_with_error(
        |s| s.starts_with("sk_"),
        Error::new("bad_key", "keys start with {prefix}").with_param("prefix", "sk_"),
    )];
    let failure = validate(&Value::from("pk_123"), &chain).unwrap().unwrap();
    assert_eq!(failure.error(), "keys start with sk_");
}
