//! Data type inference for raw cell text.
//!
//! Classification runs a fixed priority ladder over the whitespace-trimmed
//! value: empty, numeric, boolean, date/time, then string. The ordering is a
//! compatibility contract: because the numeric check precedes the boolean
//! one, bare `"1"`/`"0"` always classify as `Number` and the boolean arm's
//! digit literals never match them.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::sheet::types::DataType;

/// Date-only patterns accepted by the inference ladder.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Space-separated date-time variants of [`DATE_FORMATS`], plus the bare
/// `T`-separated ISO form that carries no offset.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Infer the data type of a raw cell value.
pub fn infer_data_type(raw: &str) -> DataType {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return DataType::String;
    }
    if parses_as_number(trimmed) {
        return DataType::Number;
    }
    if is_boolean_literal(trimmed) {
        return DataType::Boolean;
    }
    if parses_as_date_time(trimmed) {
        return DataType::DateTime;
    }

    DataType::String
}

/// True when the trimmed text parses as a floating-point number, either with
/// a standard decimal point or a locale decimal comma.
pub(crate) fn parses_as_number(text: &str) -> bool {
    let direct: Result<f64, _> = fast_float2::parse(text);
    if direct.is_ok() {
        return true;
    }

    // Locale-decimal retry: "3,14" parses once the comma becomes a point.
    if text.contains(',') {
        let normalized = text.replace(',', ".");
        let retried: Result<f64, _> = fast_float2::parse(&normalized);
        return retried.is_ok();
    }

    false
}

fn is_boolean_literal(text: &str) -> bool {
    // "1" and "0" are listed for parity with the boolean vocabulary, but the
    // numeric tier has already claimed them by the time this runs.
    text.eq_ignore_ascii_case("true")
        || text.eq_ignore_ascii_case("false")
        || text == "1"
        || text == "0"
}

fn parses_as_date_time(text: &str) -> bool {
    if DateTime::parse_from_rfc3339(text).is_ok() {
        return true;
    }
    if DATE_TIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(text, fmt).is_ok())
    {
        return true;
    }
    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(text, fmt).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_string() {
        assert_eq!(infer_data_type(""), DataType::String);
        assert_eq!(infer_data_type("   "), DataType::String);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(infer_data_type("42"), DataType::Number);
        assert_eq!(infer_data_type("-3.25"), DataType::Number);
        assert_eq!(infer_data_type("1e6"), DataType::Number);
        assert_eq!(infer_data_type(" 7 "), DataType::Number);
    }

    #[test]
    fn test_locale_decimal_comma() {
        assert_eq!(infer_data_type("3,14"), DataType::Number);
    }

    #[test]
    fn test_digit_literals_are_numbers_not_booleans() {
        // The numeric tier runs first and claims these.
        assert_eq!(infer_data_type("0"), DataType::Number);
        assert_eq!(infer_data_type("1"), DataType::Number);
    }

    #[test]
    fn test_booleans() {
        assert_eq!(infer_data_type("true"), DataType::Boolean);
        assert_eq!(infer_data_type("TRUE"), DataType::Boolean);
        assert_eq!(infer_data_type("False"), DataType::Boolean);
    }

    #[test]
    fn test_dates() {
        assert_eq!(infer_data_type("2024-01-15"), DataType::DateTime);
        assert_eq!(infer_data_type("01/15/2024"), DataType::DateTime);
        assert_eq!(infer_data_type("15/01/2024"), DataType::DateTime);
        assert_eq!(infer_data_type("2024-01-15 10:30:00"), DataType::DateTime);
        assert_eq!(infer_data_type("2024-01-15T10:30:00"), DataType::DateTime);
        assert_eq!(
            infer_data_type("2024-01-15T10:30:00+02:00"),
            DataType::DateTime
        );
    }

    #[test]
    fn test_fallback_to_string() {
        assert_eq!(infer_data_type("hello"), DataType::String);
        assert_eq!(infer_data_type("2024-13-45"), DataType::String);
        assert_eq!(infer_data_type("yes"), DataType::String);
    }
}
