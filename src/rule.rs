//! Rule descriptors recorded by the schema builder.
//!
//! Every builder call is captured as one [`Rule`] in a field's ordered rule
//! sequence. The sequence is the only source of truth for resolving
//! context-sensitive rules: `min`/`max` mean a date bound after a `date` rule
//! and a numeric bound after a numeric rule.

use std::fmt::{self, Display};

use chrono::NaiveDate;
use serde_json::Value;

/// One recorded constraint in a field's rule sequence.
///
/// Rules are data, not behavior: nothing is evaluated while a schema is being
/// built. The validation engine resolves each variant to a concrete checker
/// at execution time.
///
/// Presence rules (`Required`, `Nullable`, `NotRequired`) and `Alias` are
/// absorbed into node metadata when a leaf is finalized; see
/// [`LeafNode::from_rules`](crate::schema::LeafNode::from_rules).
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// The value must not be undefined. This is the default presence mode.
    Required,
    /// A null value passes and stops the rule loop.
    Nullable,
    /// An undefined value passes and stops the rule loop.
    NotRequired,
    /// Overrides the display name used in diagnostics.
    Alias(String),
    /// The value must be a string.
    String,
    /// The value must be a number.
    Number,
    /// The value must be a number with a fractional representation.
    Float,
    /// The value must be an integer.
    Integer,
    /// The value must be a number greater than zero.
    Positive,
    /// The value must be a number less than zero.
    Negative,
    /// The value must be a boolean.
    Boolean,
    /// The value must be a date string in the given format.
    Date(DateFormat),
    /// The value must be a time string in the given format.
    Time(TimeFormat),
    /// Lower bound; meaning depends on the earlier date/numeric rule.
    Min(Bound),
    /// Upper bound; meaning depends on the earlier date/numeric rule.
    Max(Bound),
    /// The string must have at least this many characters.
    MinLength(usize),
    /// The string must have at most this many characters.
    MaxLength(usize),
    /// The string must have at least this many whitespace-separated words.
    MinWord(usize),
    /// The string must be a well-formed email address.
    Email,
    /// The string must be a UUID, optionally of a specific version.
    Uuid(Option<UuidVersion>),
    /// The value must equal the comparison value.
    Equal(Value),
    /// The value must not equal the comparison value.
    NotEqual(Value),
    /// The value must equal one of the comparison items.
    OneOf(Vec<Value>),
    /// The value must equal none of the comparison items.
    NotOneOf(Vec<Value>),
}

impl Rule {
    /// The method name recorded in every test record produced for this rule.
    pub fn method_name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Nullable => "nullable",
            Rule::NotRequired => "notRequired",
            Rule::Alias(_) => "alias",
            Rule::String => "string",
            Rule::Number => "number",
            Rule::Float => "float",
            Rule::Integer => "integer",
            Rule::Positive => "positive",
            Rule::Negative => "negative",
            Rule::Boolean => "boolean",
            Rule::Date(_) => "date",
            Rule::Time(_) => "time",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::MinLength(_) => "minLength",
            Rule::MaxLength(_) => "maxLength",
            Rule::MinWord(_) => "minWord",
            Rule::Email => "email",
            Rule::Uuid(_) => "UUID",
            Rule::Equal(_) => "equal",
            Rule::NotEqual(_) => "notEqual",
            Rule::OneOf(_) => "oneOf",
            Rule::NotOneOf(_) => "notOneOf",
        }
    }

    /// True for `Required`, `Nullable` and `NotRequired`.
    pub fn is_presence(&self) -> bool {
        matches!(self, Rule::Required | Rule::Nullable | Rule::NotRequired)
    }

    /// True for the rules that anchor a later `min`/`max` to numbers.
    pub(crate) fn is_numeric_anchor(&self) -> bool {
        matches!(
            self,
            Rule::Number | Rule::Float | Rule::Integer | Rule::Positive | Rule::Negative
        )
    }
}

/// The parameter of a `min`/`max` rule.
///
/// Which variant is meaningful is decided by the dispatch resolver from the
/// rules recorded earlier in the sequence, not by the variant itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Numeric comparison point.
    Number(f64),
    /// Reference date, compared at midnight.
    Date(NaiveDate),
}

impl Bound {
    /// The numeric comparison point, if this is a numeric bound.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Bound::Number(n) => Some(*n),
            Bound::Date(_) => None,
        }
    }

    /// The reference date, if this is a date bound.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Bound::Date(d) => Some(*d),
            Bound::Number(_) => None,
        }
    }
}

/// The closed set of supported date formats.
///
/// `Display` renders the format token that appears in diagnostics, e.g.
/// `date type YYYY-MM-DD` in an `expect` description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// RFC 3339 / ISO 8601 date-time strings. Bare dates are rejected.
    #[default]
    Iso8601,
    /// `DD/MM/YYYY`
    DdMmYyyy,
    /// `MM/DD/YYYY`
    MmDdYyyy,
    /// `DD-MM-YYYY`
    DdMmYyyyDash,
    /// `MM-DD-YYYY`
    MmDdYyyyDash,
    /// `YYYY/MM/DD`
    YyyyMmDd,
    /// `YYYY/DD/MM`
    YyyyDdMm,
    /// `YYYY-MM-DD`
    YyyyMmDdDash,
    /// `YYYY-DD-MM`
    YyyyDdMmDash,
}

impl Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            DateFormat::Iso8601 => "ISO8601",
            DateFormat::DdMmYyyy => "DD/MM/YYYY",
            DateFormat::MmDdYyyy => "MM/DD/YYYY",
            DateFormat::DdMmYyyyDash => "DD-MM-YYYY",
            DateFormat::MmDdYyyyDash => "MM-DD-YYYY",
            DateFormat::YyyyMmDd => "YYYY/MM/DD",
            DateFormat::YyyyDdMm => "YYYY/DD/MM",
            DateFormat::YyyyMmDdDash => "YYYY-MM-DD",
            DateFormat::YyyyDdMmDash => "YYYY-DD-MM",
        };
        f.write_str(token)
    }
}

/// The closed set of supported time formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// `HH:MM`, 24-hour clock.
    HhMm,
    /// `HH:MM:SS`, 24-hour clock.
    HhMmSs,
}

impl Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            TimeFormat::HhMm => "HH:MM",
            TimeFormat::HhMmSs => "HH:MM:SS",
        };
        f.write_str(token)
    }
}

/// UUID versions accepted by the `uuid` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidVersion {
    V1,
    V2,
    V3,
    V4,
    V5,
    V7,
}

impl UuidVersion {
    /// The version nibble expected at the start of the third UUID group.
    pub(crate) fn digit(&self) -> char {
        match self {
            UuidVersion::V1 => '1',
            UuidVersion::V2 => '2',
            UuidVersion::V3 => '3',
            UuidVersion::V4 => '4',
            UuidVersion::V5 => '5',
            UuidVersion::V7 => '7',
        }
    }
}

impl Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_names_match_record_vocabulary() {
        assert_eq!(Rule::Required.method_name(), "required");
        assert_eq!(Rule::NotRequired.method_name(), "notRequired");
        assert_eq!(Rule::MinWord(2).method_name(), "minWord");
        assert_eq!(Rule::Uuid(None).method_name(), "UUID");
        assert_eq!(Rule::Min(Bound::Number(1.0)).method_name(), "min");
        assert_eq!(Rule::NotOneOf(vec![json!(1)]).method_name(), "notOneOf");
    }

    #[test]
    fn test_presence_classification() {
        assert!(Rule::Required.is_presence());
        assert!(Rule::Nullable.is_presence());
        assert!(Rule::NotRequired.is_presence());
        assert!(!Rule::String.is_presence());
        assert!(!Rule::Alias("x".into()).is_presence());
    }

    #[test]
    fn test_numeric_anchors() {
        assert!(Rule::Number.is_numeric_anchor());
        assert!(Rule::Float.is_numeric_anchor());
        assert!(Rule::Integer.is_numeric_anchor());
        assert!(Rule::Positive.is_numeric_anchor());
        assert!(Rule::Negative.is_numeric_anchor());
        assert!(!Rule::Date(DateFormat::Iso8601).is_numeric_anchor());
        assert!(!Rule::Boolean.is_numeric_anchor());
    }

    #[test]
    fn test_date_format_tokens() {
        assert_eq!(DateFormat::Iso8601.to_string(), "ISO8601");
        assert_eq!(DateFormat::DdMmYyyy.to_string(), "DD/MM/YYYY");
        assert_eq!(DateFormat::YyyyMmDdDash.to_string(), "YYYY-MM-DD");
        assert_eq!(DateFormat::YyyyDdMmDash.to_string(), "YYYY-DD-MM");
    }

    #[test]
    fn test_time_format_tokens() {
        assert_eq!(TimeFormat::HhMm.to_string(), "HH:MM");
        assert_eq!(TimeFormat::HhMmSs.to_string(), "HH:MM:SS");
    }

    #[test]
    fn test_uuid_version_digit() {
        assert_eq!(UuidVersion::V4.digit(), '4');
        assert_eq!(UuidVersion::V7.digit(), '7');
        assert_eq!(UuidVersion::V4.to_string(), "v4");
    }

    #[test]
    fn test_bound_accessors() {
        let n = Bound::Number(5.0);
        assert_eq!(n.as_number(), Some(5.0));
        assert_eq!(n.as_date(), None);

        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let d = Bound::Date(date);
        assert_eq!(d.as_date(), Some(date));
        assert_eq!(d.as_number(), None);
    }
}
