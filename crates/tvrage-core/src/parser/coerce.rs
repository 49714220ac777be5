//! Scalar coercion for extracted field text
//!
//! Every coercion is total: unparsable input maps to a fixed default
//! (numbers) or to `None` (dates). Nothing here logs except the date
//! parser, and nothing here can fail.

use chrono::{Datelike, NaiveDate};

use crate::types::UNKNOWN;

/// Date layouts accepted by [`to_date`], tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%b/%d/%Y",
    "%d/%b/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Check whether the feed actually supplied a value.
///
/// # Returns
/// `false` for empty or whitespace-only text and for the `UNKNOWN`
/// sentinel in any letter case, `true` otherwise.
///
/// # Examples
/// ```
/// use tvrage_core::parser::is_valid_string;
///
/// assert!(is_valid_string("Chuck"));
/// assert!(!is_valid_string("   "));
/// assert!(!is_valid_string("unknown"));
/// ```
pub fn is_valid_string(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case(UNKNOWN)
}

/// Like [`is_valid_string`] but for optional input.
pub fn is_valid_opt(text: Option<&str>) -> bool {
    text.is_some_and(is_valid_string)
}

/// Parse an integer, returning `default` on failure.
///
/// # Examples
/// ```
/// use tvrage_core::parser::to_int;
///
/// assert_eq!(to_int("42", 0), 42);
/// assert_eq!(to_int("abc", 7), 7);
/// ```
pub fn to_int(text: &str, default: i32) -> i32 {
    parse_int(text).unwrap_or(default)
}

/// Parse an integer, `None` on failure.
pub fn parse_int(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// Parse a float, returning `default` on failure.
pub fn to_float(text: &str, default: f32) -> f32 {
    parse_float(text).unwrap_or(default)
}

/// Parse a float, `None` on failure.
pub fn parse_float(text: &str) -> Option<f32> {
    text.trim().parse().ok()
}

/// Parse a calendar date leniently.
///
/// Accepts ISO dates, the `Sep/24/2007` style used by the feed for start
/// dates, a few written-out forms, and bare `YYYY-MM` / `YYYY` values which
/// resolve to the first day of the month or year. Anything else, including
/// placeholder dates such as `0000-00-00`, gives `None`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use tvrage_core::parser::to_date;
///
/// assert_eq!(to_date("2007-09-24"), NaiveDate::from_ymd_opt(2007, 9, 24));
/// assert_eq!(to_date("Sep/24/2007"), NaiveDate::from_ymd_opt(2007, 9, 24));
/// assert_eq!(to_date("0000-00-00"), None);
/// ```
pub fn to_date(text: &str) -> Option<NaiveDate> {
    if !is_valid_string(text) {
        return None;
    }
    let text = text.trim();

    let parsed = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| parse_partial_date(text));

    match parsed {
        Some(date) if date.year() > 0 => Some(date),
        _ => {
            tracing::trace!("Failed to convert date: {}", text);
            None
        }
    }
}

/// Handle `YYYY-MM` and `YYYY`, which chrono will not parse on their own.
fn parse_partial_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.splitn(2, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    if !(1..=9999).contains(&year) {
        return None;
    }
    match parts.next() {
        None => NaiveDate::from_ymd_opt(year, 1, 1),
        Some(month) if month.len() <= 2 => NaiveDate::from_ymd_opt(year, month.parse().ok()?, 1),
        Some(_) => None,
    }
}
