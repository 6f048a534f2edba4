//! Date string parsing with optional range bounds.

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::error::{Error, Failure, RuleError};
use crate::value::Value;

/// Checks that a string parses as a date under a chrono `strftime` layout.
///
/// Layouts carrying an offset (`%z`, `%:z`) are honored; layouts without one
/// are read as UTC. Fields missing from the layout take their earliest
/// value, so `%Y-%m` reads as the first of the month at midnight. With
/// [`min`](Self::min) and/or [`max`](Self::max) the parsed date must also
/// fall inside the inclusive range. An empty value is valid.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{rule, Value};
///
/// let birthday = rule::date("%Y-%m-%d");
/// assert!(birthday.evaluate(&Value::from("1990-04-12")).unwrap().is_none());
/// assert!(birthday.evaluate(&Value::from("12/04/1990")).unwrap().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct DateRule {
    layout: String,
    min: Option<DateTime<Utc>>,
    max: Option<DateTime<Utc>>,
    err: Error,
    range_err: Error,
}

impl DateRule {
    pub(crate) fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            min: None,
            max: None,
            err: Error::new("validation_date_invalid", "must be a valid date"),
            range_err: Error::new("validation_date_out_of_range", "the date is out of range"),
        }
    }

    /// Sets the earliest accepted date (inclusive).
    pub fn min(mut self, min: DateTime<Utc>) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the latest accepted date (inclusive).
    pub fn max(mut self, max: DateTime<Utc>) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets the message used when the value cannot be parsed.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.err.message = message.into();
        self
    }

    /// Replaces the error used when the value cannot be parsed.
    pub fn error_object(mut self, err: Error) -> Self {
        self.err = err;
        self
    }

    /// Sets the message used when the date is outside the range.
    pub fn range_error(mut self, message: impl Into<String>) -> Self {
        self.range_err.message = message.into();
        self
    }

    /// Replaces the error used when the date is outside the range.
    pub fn range_error_object(mut self, err: Error) -> Self {
        self.range_err = err;
        self
    }

    pub fn evaluate(&self, value: &Value) -> Result<Option<Failure>, RuleError> {
        if value.is_empty() {
            return Ok(None);
        }
        let s = value.as_str().ok_or(RuleError::UnsupportedType {
            rule: "date",
            got: value.type_name(),
        })?;

        let Some(date) = parse_date(s, &self.layout) else {
            return Ok(Some(self.err.clone().into()));
        };

        let too_early = self.min.is_some_and(|min| date < min);
        let too_late = self.max.is_some_and(|max| date > max);
        if too_early || too_late {
            return Ok(Some(self.range_err.clone().into()));
        }
        Ok(None)
    }
}

/// Parses `s` under `layout`.
///
/// Fields the layout leaves out start at the beginning of their range: the
/// time of day at midnight, month and day at 1, and the year at 0. Without
/// an offset in the layout the value is read as UTC.
pub(crate) fn parse_date(s: &str, layout: &str) -> Option<DateTime<Utc>> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, s, StrftimeItems::new(layout)).ok()?;

    let date = resolve_date(&parsed)?;

    // setters refuse to overwrite a parsed field, so failures are ignored
    let _ = parsed.set_hour(0);
    let _ = parsed.set_minute(0);
    let _ = parsed.set_second(0);
    let time = parsed.to_naive_time().ok()?;

    let naive = date.and_time(time);
    match parsed.to_fixed_offset() {
        Ok(offset) => offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc)),
        Err(_) => Some(naive.and_utc()),
    }
}

fn resolve_date(parsed: &Parsed) -> Option<NaiveDate> {
    if let Ok(date) = parsed.to_naive_date() {
        return Some(date);
    }

    let mut filled = parsed.clone();
    let _ = filled.set_month(1);
    let _ = filled.set_day(1);
    if let Ok(date) = filled.to_naive_date() {
        return Some(date);
    }

    let _ = filled.set_year(0);
    filled.to_naive_date().ok()
}
