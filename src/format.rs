//! Primitive format predicates.
//!
//! Stateless checks consumed by the validation engine: email and UUID
//! syntax, time patterns, and strict date parsing for the closed set of
//! supported formats.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::{DateFormat, TimeFormat, UuidVersion};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

static TIME_HH_MM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap());

static TIME_HH_MM_SS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d:[0-5]\d$").unwrap());

/// Checks email syntax. Requires a dotted domain, so `user@host` fails.
pub(crate) fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Checks UUID syntax, optionally pinning the version nibble and variant.
pub(crate) fn is_uuid(value: &str, version: Option<UuidVersion>) -> bool {
    if !UUID_REGEX.is_match(value) {
        return false;
    }
    match version {
        None => true,
        Some(v) => {
            let bytes = value.as_bytes();
            // Version nibble opens the third group, variant the fourth.
            let version_ok = bytes[14] as char == v.digit();
            let variant_ok = matches!(bytes[19] as char, '8' | '9' | 'a' | 'b' | 'A' | 'B');
            version_ok && variant_ok
        }
    }
}

/// Checks a time string against the given pattern.
pub(crate) fn is_time(value: &str, format: TimeFormat) -> bool {
    match format {
        TimeFormat::HhMm => TIME_HH_MM_REGEX.is_match(value),
        TimeFormat::HhMmSs => TIME_HH_MM_SS_REGEX.is_match(value),
    }
}

/// Parses a date string according to the declared format.
///
/// Parsing is strict: component order and separators must match, and
/// out-of-range components (day 32, month 13) are invalid rather than
/// rolling over into the next unit. Date-only formats resolve to midnight so
/// they compare cleanly against date-time values.
pub(crate) fn parse_date(value: &str, format: DateFormat) -> Option<NaiveDateTime> {
    let pattern = match format {
        DateFormat::Iso8601 => return parse_iso8601(value),
        DateFormat::DdMmYyyy => "%d/%m/%Y",
        DateFormat::MmDdYyyy => "%m/%d/%Y",
        DateFormat::DdMmYyyyDash => "%d-%m-%Y",
        DateFormat::MmDdYyyyDash => "%m-%d-%Y",
        DateFormat::YyyyMmDd => "%Y/%m/%d",
        DateFormat::YyyyDdMm => "%Y/%d/%m",
        DateFormat::YyyyMmDdDash => "%Y-%m-%d",
        DateFormat::YyyyDdMmDash => "%Y-%d-%m",
    };
    NaiveDate::parse_from_str(value, pattern)
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// ISO 8601 accepts RFC 3339 strings and naive date-times; bare dates fail.
fn parse_iso8601(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_dotted_domains() {
        assert!(is_email("any_email@mail.com"));
        assert!(is_email("first.last+tag@sub.domain.org"));
    }

    #[test]
    fn test_email_rejects_undotted_domain() {
        assert!(!is_email("invalid_email@mail"));
        assert!(!is_email("no-at-sign.com"));
        assert!(!is_email("two@@mail.com"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_uuid_any_version() {
        assert!(is_uuid("550e8400-e29b-41d4-a716-446655440000", None));
        assert!(is_uuid("550E8400-E29B-41D4-A716-446655440000", None));
        assert!(!is_uuid("not-a-uuid", None));
        assert!(!is_uuid("550e8400e29b41d4a716446655440000", None));
    }

    #[test]
    fn test_uuid_pinned_version() {
        let v4 = "550e8400-e29b-41d4-a716-446655440000";
        assert!(is_uuid(v4, Some(UuidVersion::V4)));
        assert!(!is_uuid(v4, Some(UuidVersion::V1)));

        let v1 = "c232ab00-9414-11ec-b3c8-9f68deced846";
        assert!(is_uuid(v1, Some(UuidVersion::V1)));
        assert!(!is_uuid(v1, Some(UuidVersion::V4)));
    }

    #[test]
    fn test_time_hh_mm() {
        assert!(is_time("00:00", TimeFormat::HhMm));
        assert!(is_time("23:59", TimeFormat::HhMm));
        assert!(!is_time("24:00", TimeFormat::HhMm));
        assert!(!is_time("12:60", TimeFormat::HhMm));
        assert!(!is_time("12:30:00", TimeFormat::HhMm));
    }

    #[test]
    fn test_time_hh_mm_ss() {
        assert!(is_time("13:45:30", TimeFormat::HhMmSs));
        assert!(!is_time("13:45", TimeFormat::HhMmSs));
        assert!(!is_time("13:45:60", TimeFormat::HhMmSs));
    }

    #[test]
    fn test_parse_slash_formats() {
        assert!(parse_date("30/12/2000", DateFormat::DdMmYyyy).is_some());
        assert!(parse_date("12/30/2000", DateFormat::MmDdYyyy).is_some());
        assert!(parse_date("2000/12/30", DateFormat::YyyyMmDd).is_some());
        assert!(parse_date("2000/30/12", DateFormat::YyyyDdMm).is_some());

        // Wrong component order for the declared format
        assert!(parse_date("12/30/2000", DateFormat::DdMmYyyy).is_none());
        assert!(parse_date("2000/12/30", DateFormat::YyyyDdMm).is_none());
    }

    #[test]
    fn test_parse_dash_formats() {
        assert!(parse_date("30-12-2000", DateFormat::DdMmYyyyDash).is_some());
        assert!(parse_date("2000-12-30", DateFormat::YyyyMmDdDash).is_some());
        assert!(parse_date("2000-30-12", DateFormat::YyyyDdMmDash).is_some());

        // Separator mismatch
        assert!(parse_date("30/12/2000", DateFormat::DdMmYyyyDash).is_none());
    }

    #[test]
    fn test_no_rollover_for_out_of_range_components() {
        assert!(parse_date("32/01/2000", DateFormat::DdMmYyyy).is_none());
        assert!(parse_date("29/02/2001", DateFormat::DdMmYyyy).is_none());
        assert!(parse_date("2000-13-01", DateFormat::YyyyMmDdDash).is_none());
    }

    #[test]
    fn test_leap_day() {
        assert!(parse_date("29/02/2000", DateFormat::DdMmYyyy).is_some());
    }

    #[test]
    fn test_iso8601_requires_time_component() {
        assert!(parse_date("2000-02-03T02:00:00.000Z", DateFormat::Iso8601).is_some());
        assert!(parse_date("2000-02-03T02:00:00", DateFormat::Iso8601).is_some());
        assert!(parse_date("2000-02-03T02:00:00+02:00", DateFormat::Iso8601).is_some());
        assert!(parse_date("2000-02-03", DateFormat::Iso8601).is_none());
        assert!(parse_date("03/02/2000", DateFormat::Iso8601).is_none());
    }

    #[test]
    fn test_date_only_formats_resolve_to_midnight() {
        let parsed = parse_date("2000-01-01", DateFormat::YyyyMmDdDash).unwrap();
        assert_eq!(parsed.time(), NaiveTime::MIN);
    }
}
