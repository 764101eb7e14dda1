//! Resolution of rules to concrete checks.
//!
//! Most rule variants map 1:1 to a checker. `min` and `max` are polymorphic:
//! their meaning depends on the rules declared before them, so the resolver
//! scans the predecessors for the anchoring category. The resolver is a pure
//! function of (rule, predecessors) and holds no state.

use chrono::NaiveDate;
use serde_json::Value;

use crate::rule::{DateFormat, Rule, TimeFormat, UuidVersion};

/// The category that anchors a `min`/`max` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoundContext {
    Date(DateFormat),
    Number,
}

/// Scans the rules declared before a bound rule for its anchoring category.
///
/// The first category-determining rule in declaration order wins; later
/// entries cannot override it.
pub(crate) fn bound_context(earlier: &[Rule]) -> Option<BoundContext> {
    for rule in earlier {
        match rule {
            Rule::Date(format) => return Some(BoundContext::Date(*format)),
            r if r.is_numeric_anchor() => return Some(BoundContext::Number),
            _ => {}
        }
    }
    None
}

/// A rule resolved against its predecessors, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResolvedCheck<'a> {
    String,
    Number,
    Float,
    Integer,
    Positive,
    Negative,
    Boolean,
    Date(DateFormat),
    Time(TimeFormat),
    MinLength(usize),
    MaxLength(usize),
    MinWord(usize),
    Email,
    Uuid(Option<UuidVersion>),
    Equal(&'a Value),
    NotEqual(&'a Value),
    OneOf(&'a [Value]),
    NotOneOf(&'a [Value]),
    NumberMin(f64),
    NumberMax(f64),
    DateMin { format: DateFormat, reference: NaiveDate },
    DateMax { format: DateFormat, reference: NaiveDate },
    /// A bound whose parameters do not line up with the sequence: no
    /// anchoring rule before it, or (through dynamic assembly) a parameter
    /// of the wrong category. Reported as an `invalid param` failure.
    InvalidBound { method: &'static str },
    /// Presence and alias rules are consumed before the rule loop.
    Skip,
}

/// Resolves one rule given the rules declared before it.
pub(crate) fn resolve<'a>(rule: &'a Rule, earlier: &[Rule]) -> ResolvedCheck<'a> {
    match rule {
        Rule::Required | Rule::Nullable | Rule::NotRequired | Rule::Alias(_) => {
            ResolvedCheck::Skip
        }
        Rule::String => ResolvedCheck::String,
        Rule::Number => ResolvedCheck::Number,
        Rule::Float => ResolvedCheck::Float,
        Rule::Integer => ResolvedCheck::Integer,
        Rule::Positive => ResolvedCheck::Positive,
        Rule::Negative => ResolvedCheck::Negative,
        Rule::Boolean => ResolvedCheck::Boolean,
        Rule::Date(format) => ResolvedCheck::Date(*format),
        Rule::Time(format) => ResolvedCheck::Time(*format),
        Rule::MinLength(length) => ResolvedCheck::MinLength(*length),
        Rule::MaxLength(length) => ResolvedCheck::MaxLength(*length),
        Rule::MinWord(count) => ResolvedCheck::MinWord(*count),
        Rule::Email => ResolvedCheck::Email,
        Rule::Uuid(version) => ResolvedCheck::Uuid(*version),
        Rule::Equal(value) => ResolvedCheck::Equal(value),
        Rule::NotEqual(value) => ResolvedCheck::NotEqual(value),
        Rule::OneOf(items) => ResolvedCheck::OneOf(items),
        Rule::NotOneOf(items) => ResolvedCheck::NotOneOf(items),
        Rule::Min(bound) => match bound_context(earlier) {
            Some(BoundContext::Date(format)) => match bound.as_date() {
                Some(reference) => ResolvedCheck::DateMin { format, reference },
                None => ResolvedCheck::InvalidBound { method: "min" },
            },
            Some(BoundContext::Number) => match bound.as_number() {
                Some(limit) => ResolvedCheck::NumberMin(limit),
                None => ResolvedCheck::InvalidBound { method: "min" },
            },
            None => ResolvedCheck::InvalidBound { method: "min" },
        },
        Rule::Max(bound) => match bound_context(earlier) {
            Some(BoundContext::Date(format)) => match bound.as_date() {
                Some(reference) => ResolvedCheck::DateMax { format, reference },
                None => ResolvedCheck::InvalidBound { method: "max" },
            },
            Some(BoundContext::Number) => match bound.as_number() {
                Some(limit) => ResolvedCheck::NumberMax(limit),
                None => ResolvedCheck::InvalidBound { method: "max" },
            },
            None => ResolvedCheck::InvalidBound { method: "max" },
        },
    }
}
