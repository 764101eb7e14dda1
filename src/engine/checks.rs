//! Per-rule checkers.
//!
//! Each checker is a pure predicate over the runtime value that appends
//! exactly one [`Passed`] or one [`Failed`] record and returns. Messages come
//! from the fixed catalog in [`messages`](crate::messages); `expect` strings
//! are fixed per checker.

use chrono::NaiveTime;
use serde_json::Value;

use super::dispatch::ResolvedCheck;
use crate::format;
use crate::messages;
use crate::report::{Failed, FailureKind, Passed, Report};
use crate::rule::{DateFormat, Rule, TimeFormat, UuidVersion};
use crate::schema::Presence;

/// Record destination for one field: display name, enclosing array index,
/// and the report being filled.
pub(crate) struct Recorder<'a> {
    pub(crate) name: &'a str,
    pub(crate) index: Option<usize>,
    pub(crate) report: &'a mut Report,
}

impl Recorder<'_> {
    pub(crate) fn pass(
        &mut self,
        method: &'static str,
        expect: impl Into<String>,
        received: Value,
    ) {
        self.report.push_passed(Passed {
            method,
            name: self.name.to_string(),
            expect: expect.into(),
            received,
            index: self.index,
        });
    }

    pub(crate) fn fail(
        &mut self,
        method: &'static str,
        kind: FailureKind,
        expect: impl Into<String>,
        received: Value,
        message: String,
    ) {
        self.report.push_failed(Failed {
            method,
            kind,
            name: self.name.to_string(),
            expect: expect.into(),
            received,
            message,
            index: self.index,
        });
    }

    /// Records the single outcome of one value check.
    fn outcome(
        &mut self,
        ok: bool,
        method: &'static str,
        expect: impl Into<String>,
        received: &Value,
        message: String,
    ) {
        if ok {
            self.pass(method, expect, received.clone());
        } else {
            self.fail(
                method,
                FailureKind::InvalidValue,
                expect,
                received.clone(),
                message,
            );
        }
    }
}

/// Runs the presence check for a node.
///
/// Returns `true` when the remaining rules should run. The two terminal
/// passes (`nullable` with null, `notRequired` with undefined) and the
/// missing-value failure all stop the field.
pub(crate) fn presence_gate(
    value: Option<&Value>,
    presence: Presence,
    recorder: &mut Recorder<'_>,
) -> bool {
    match (presence, value) {
        (Presence::Nullable, Some(Value::Null)) => {
            recorder.pass("nullable", "value can be null", Value::Null);
            false
        }
        (Presence::NotRequired, None) => {
            recorder.pass(
                "notRequired",
                "value is not required and of any type",
                messages::received(None),
            );
            false
        }
        (_, None) => {
            recorder.fail(
                "required",
                FailureKind::MissingValue,
                "value other than undefined",
                messages::received(None),
                messages::render(messages::REQUIRED, recorder.name),
            );
            false
        }
        (mode, Some(present)) => {
            let (method, expect) = match mode {
                Presence::Required => ("required", "value other than undefined"),
                Presence::Nullable => ("nullable", "value can be null"),
                Presence::NotRequired => ("notRequired", "value is not required and of any type"),
            };
            recorder.pass(method, expect, present.clone());
            true
        }
    }
}

/// Records the object type check. Returns `true` when recursion into the
/// children should proceed.
pub(crate) fn check_object_kind(value: &Value, recorder: &mut Recorder<'_>) -> bool {
    let ok = value.is_object();
    recorder.outcome(
        ok,
        "object",
        "object type",
        value,
        messages::render(messages::OBJECT, recorder.name),
    );
    ok
}

/// Records the array type check. Returns `true` when the elements should be
/// visited.
pub(crate) fn check_array_kind(value: &Value, recorder: &mut Recorder<'_>) -> bool {
    let ok = value.is_array();
    recorder.outcome(
        ok,
        "array",
        "array type",
        value,
        messages::render(messages::ARRAY, recorder.name),
    );
    ok
}

/// Runs one of the array's own rules against the whole element sequence.
pub(crate) fn check_array_rule(rule: &Rule, items: &[Value], recorder: &mut Recorder<'_>) {
    let received = Value::Array(items.to_vec());
    match rule {
        Rule::MinLength(limit) => recorder.outcome(
            items.len() >= *limit,
            "minLength",
            "array length greater than or equal to the limit",
            &received,
            messages::render_with(
                messages::MIN_ITEMS,
                recorder.name,
                "[minLength]",
                &limit.to_string(),
            ),
        ),
        Rule::MaxLength(limit) => recorder.outcome(
            items.len() <= *limit,
            "maxLength",
            "array length less than or equal to the limit",
            &received,
            messages::render_with(
                messages::MAX_ITEMS,
                recorder.name,
                "[maxLength]",
                &limit.to_string(),
            ),
        ),
        // Other rules cannot be recorded on an array node
        _ => {}
    }
}

/// Runs one resolved check against the value.
pub(crate) fn apply(check: &ResolvedCheck<'_>, value: &Value, recorder: &mut Recorder<'_>) {
    match check {
        ResolvedCheck::Skip => {}
        ResolvedCheck::String => check_string(value, recorder),
        ResolvedCheck::Number => check_number(value, recorder),
        ResolvedCheck::Float => check_float(value, recorder),
        ResolvedCheck::Integer => check_integer(value, recorder),
        ResolvedCheck::Positive => check_positive(value, recorder),
        ResolvedCheck::Negative => check_negative(value, recorder),
        ResolvedCheck::Boolean => check_boolean(value, recorder),
        ResolvedCheck::Date(format) => check_date(value, *format, recorder),
        ResolvedCheck::Time(format) => check_time(value, *format, recorder),
        ResolvedCheck::MinLength(limit) => check_min_length(value, *limit, recorder),
        ResolvedCheck::MaxLength(limit) => check_max_length(value, *limit, recorder),
        ResolvedCheck::MinWord(count) => check_min_word(value, *count, recorder),
        ResolvedCheck::Email => check_email(value, recorder),
        ResolvedCheck::Uuid(version) => check_uuid(value, *version, recorder),
        ResolvedCheck::Equal(target) => check_equal(value, target, recorder),
        ResolvedCheck::NotEqual(target) => check_not_equal(value, target, recorder),
        ResolvedCheck::OneOf(items) => check_one_of(value, items, recorder),
        ResolvedCheck::NotOneOf(items) => check_not_one_of(value, items, recorder),
        ResolvedCheck::NumberMin(limit) => check_number_min(value, *limit, recorder),
        ResolvedCheck::NumberMax(limit) => check_number_max(value, *limit, recorder),
        ResolvedCheck::DateMin { format, reference } => {
            check_date_bound(value, *format, *reference, true, recorder)
        }
        ResolvedCheck::DateMax { format, reference } => {
            check_date_bound(value, *format, *reference, false, recorder)
        }
        ResolvedCheck::InvalidBound { method } => check_invalid_bound(value, method, recorder),
    }
}

fn check_string(value: &Value, recorder: &mut Recorder<'_>) {
    recorder.outcome(
        value.is_string(),
        "string",
        "string type",
        value,
        messages::render(messages::STRING, recorder.name),
    );
}

fn check_number(value: &Value, recorder: &mut Recorder<'_>) {
    recorder.outcome(
        value.is_number(),
        "number",
        "number type",
        value,
        messages::render(messages::NUMBER, recorder.name),
    );
}

fn check_float(value: &Value, recorder: &mut Recorder<'_>) {
    recorder.outcome(
        value.is_f64(),
        "float",
        "number float type",
        value,
        messages::render(messages::FLOAT, recorder.name),
    );
}

fn check_integer(value: &Value, recorder: &mut Recorder<'_>) {
    recorder.outcome(
        value.is_i64() || value.is_u64(),
        "integer",
        "number integer type",
        value,
        messages::render(messages::INTEGER, recorder.name),
    );
}

fn check_positive(value: &Value, recorder: &mut Recorder<'_>) {
    let ok = value.as_f64().map(|n| n > 0.0).unwrap_or(false);
    recorder.outcome(
        ok,
        "positive",
        "positive number",
        value,
        messages::render(messages::POSITIVE, recorder.name),
    );
}

fn check_negative(value: &Value, recorder: &mut Recorder<'_>) {
    let ok = value.as_f64().map(|n| n < 0.0).unwrap_or(false);
    recorder.outcome(
        ok,
        "negative",
        "negative number",
        value,
        messages::render(messages::NEGATIVE, recorder.name),
    );
}

fn check_boolean(value: &Value, recorder: &mut Recorder<'_>) {
    recorder.outcome(
        value.is_boolean(),
        "boolean",
        "boolean type",
        value,
        messages::render(messages::BOOLEAN, recorder.name),
    );
}

fn check_date(value: &Value, format: DateFormat, recorder: &mut Recorder<'_>) {
    let ok = value
        .as_str()
        .and_then(|s| format::parse_date(s, format))
        .is_some();
    recorder.outcome(
        ok,
        "date",
        format!("date type {format}"),
        value,
        messages::render_with(
            messages::DATE,
            recorder.name,
            "[type]",
            &format.to_string(),
        ),
    );
}

fn check_time(value: &Value, format: TimeFormat, recorder: &mut Recorder<'_>) {
    let ok = value
        .as_str()
        .map(|s| format::is_time(s, format))
        .unwrap_or(false);
    let message = messages::TIME
        .replace("[value]", &messages::render_value(value))
        .replace("[type]", &format.to_string());
    recorder.outcome(ok, "time", format!("format {format}"), value, message);
}

/// Non-string values fail string-parameterized rules under the rule's own
/// method, but with the string-type message.
fn check_min_length(value: &Value, limit: usize, recorder: &mut Recorder<'_>) {
    let expect = "string with characters greater than or equal to the limit";
    match value.as_str() {
        Some(s) => recorder.outcome(
            s.chars().count() >= limit,
            "minLength",
            expect,
            value,
            messages::render_with(
                messages::MIN_LENGTH,
                recorder.name,
                "[minLength]",
                &limit.to_string(),
            ),
        ),
        None => recorder.fail(
            "minLength",
            FailureKind::InvalidValue,
            expect,
            value.clone(),
            messages::render(messages::STRING, recorder.name),
        ),
    }
}

fn check_max_length(value: &Value, limit: usize, recorder: &mut Recorder<'_>) {
    let expect = "string with characters less than or equal to the limit";
    match value.as_str() {
        Some(s) => recorder.outcome(
            s.chars().count() <= limit,
            "maxLength",
            expect,
            value,
            messages::render_with(
                messages::MAX_LENGTH,
                recorder.name,
                "[maxLength]",
                &limit.to_string(),
            ),
        ),
        None => recorder.fail(
            "maxLength",
            FailureKind::InvalidValue,
            expect,
            value.clone(),
            messages::render(messages::STRING, recorder.name),
        ),
    }
}

fn check_min_word(value: &Value, count: usize, recorder: &mut Recorder<'_>) {
    let expect = "must have a minimum of words";
    match value.as_str() {
        Some(s) => recorder.outcome(
            s.split_whitespace().count() >= count,
            "minWord",
            expect,
            value,
            messages::render_with(
                messages::MIN_WORD,
                recorder.name,
                "[minWord]",
                &count.to_string(),
            ),
        ),
        None => recorder.fail(
            "minWord",
            FailureKind::InvalidValue,
            expect,
            value.clone(),
            messages::render(messages::STRING, recorder.name),
        ),
    }
}

fn check_email(value: &Value, recorder: &mut Recorder<'_>) {
    let ok = value.as_str().map(format::is_email).unwrap_or(false);
    let message = messages::EMAIL.replace("[value]", &messages::render_value(value));
    recorder.outcome(ok, "email", "valid email", value, message);
}

fn check_uuid(value: &Value, version: Option<UuidVersion>, recorder: &mut Recorder<'_>) {
    let ok = value
        .as_str()
        .map(|s| format::is_uuid(s, version))
        .unwrap_or(false);
    let expect = match version {
        Some(v) => format!("uuid type {v}"),
        None => "uuid type".to_string(),
    };
    recorder.outcome(
        ok,
        "UUID",
        expect,
        value,
        messages::render(messages::UUID, recorder.name),
    );
}

fn check_equal(value: &Value, target: &Value, recorder: &mut Recorder<'_>) {
    recorder.outcome(
        value == target,
        "equal",
        "value matches",
        value,
        messages::render(messages::EQUAL, recorder.name),
    );
}

fn check_not_equal(value: &Value, target: &Value, recorder: &mut Recorder<'_>) {
    recorder.outcome(
        value != target,
        "notEqual",
        "value does not match",
        value,
        messages::render(messages::NOT_EQUAL, recorder.name),
    );
}

fn check_one_of(value: &Value, items: &[Value], recorder: &mut Recorder<'_>) {
    recorder.outcome(
        items.contains(value),
        "oneOf",
        "value matches",
        value,
        messages::render(messages::ONE_OF, recorder.name),
    );
}

fn check_not_one_of(value: &Value, items: &[Value], recorder: &mut Recorder<'_>) {
    recorder.outcome(
        !items.contains(value),
        "notOneOf",
        "value does not have a match",
        value,
        messages::render(messages::NOT_ONE_OF, recorder.name),
    );
}

/// Numeric bounds use an index-aware expect inside arrays.
fn check_number_min(value: &Value, limit: f64, recorder: &mut Recorder<'_>) {
    let ok = value.as_f64().map(|n| n >= limit).unwrap_or(false);
    let expect = if recorder.index.is_some() {
        "array index must contain a number greater than or equal to the reference"
    } else {
        "value greater than or equal to the reference"
    };
    recorder.outcome(
        ok,
        "min",
        expect,
        value,
        messages::render_with(
            messages::MIN_NUMBER,
            recorder.name,
            "[min]",
            &messages::render_number(limit),
        ),
    );
}

fn check_number_max(value: &Value, limit: f64, recorder: &mut Recorder<'_>) {
    let ok = value.as_f64().map(|n| n <= limit).unwrap_or(false);
    let expect = if recorder.index.is_some() {
        "array index must contain a number less than or equal to the reference"
    } else {
        "value less than or equal to the reference"
    };
    recorder.outcome(
        ok,
        "max",
        expect,
        value,
        messages::render_with(
            messages::MAX_NUMBER,
            recorder.name,
            "[max]",
            &messages::render_number(limit),
        ),
    );
}

/// Date bounds parse the value with the format declared by the earlier
/// `date` rule. An unparseable value fails with the invalid-date message
/// instead of a comparison message.
fn check_date_bound(
    value: &Value,
    format: DateFormat,
    reference: chrono::NaiveDate,
    is_min: bool,
    recorder: &mut Recorder<'_>,
) {
    let (method, expect, template) = if is_min {
        (
            "min",
            format!("date {} greater than or equal to reference date", recorder.name),
            messages::MIN_DATE,
        )
    } else {
        (
            "max",
            format!("date {} less than or equal to reference date", recorder.name),
            messages::MAX_DATE,
        )
    };

    let parsed = value.as_str().and_then(|s| format::parse_date(s, format));
    match parsed {
        None => recorder.fail(
            method,
            FailureKind::InvalidValue,
            expect,
            value.clone(),
            messages::INVALID_REFERENCE_DATE.to_string(),
        ),
        Some(date) => {
            let reference = reference.and_time(NaiveTime::MIN);
            let ok = if is_min { date >= reference } else { date <= reference };
            recorder.outcome(
                ok,
                method,
                expect,
                value,
                messages::render(template, recorder.name),
            );
        }
    }
}

fn check_invalid_bound(value: &Value, method: &'static str, recorder: &mut Recorder<'_>) {
    let message = match method {
        "min" => messages::UNANCHORED_MIN,
        _ => messages::UNANCHORED_MAX,
    };
    recorder.fail(
        method,
        FailureKind::InvalidParam,
        "preceding date or numeric method",
        value.clone(),
        message.to_string(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn run(check: ResolvedCheck<'_>, value: Value) -> Report {
        run_at(check, value, None)
    }

    fn run_at(check: ResolvedCheck<'_>, value: Value, index: Option<usize>) -> Report {
        let mut report = Report::new();
        let mut recorder = Recorder {
            name: "value_name",
            index,
            report: &mut report,
        };
        apply(&check, &value, &mut recorder);
        report
    }

    #[test]
    fn test_string_check_messages() {
        let report = run(ResolvedCheck::String, json!("hello"));
        assert!(report.is_valid());
        assert_eq!(report.passed()[0].expect, "string type");

        let report = run(ResolvedCheck::String, json!(42));
        assert_eq!(
            report.failed()[0].message,
            "value_name must be a string type!"
        );
    }

    #[test]
    fn test_whole_float_is_not_integer() {
        // 1.0 carries a fractional representation, so it is float, not integer
        assert!(run(ResolvedCheck::Float, json!(1.0)).is_valid());
        assert!(!run(ResolvedCheck::Integer, json!(1.0)).is_valid());
        assert!(run(ResolvedCheck::Integer, json!(1)).is_valid());
        assert!(!run(ResolvedCheck::Float, json!(1)).is_valid());
    }

    #[test]
    fn test_zero_is_neither_positive_nor_negative() {
        assert!(!run(ResolvedCheck::Positive, json!(0)).is_valid());
        assert!(!run(ResolvedCheck::Negative, json!(0)).is_valid());
        assert!(run(ResolvedCheck::Positive, json!(0.5)).is_valid());
        assert!(run(ResolvedCheck::Negative, json!(-2)).is_valid());
    }

    #[test]
    fn test_sign_checks_require_numbers() {
        let report = run(ResolvedCheck::Positive, json!("3"));
        assert_eq!(
            report.failed()[0].message,
            "value_name must be a number and positive!"
        );
    }

    #[test]
    fn test_min_length_on_non_string_uses_string_message() {
        let report = run(ResolvedCheck::MinLength(3), json!(123));
        assert_eq!(report.failed()[0].method, "minLength");
        assert_eq!(
            report.failed()[0].message,
            "value_name must be a string type!"
        );
    }

    #[test]
    fn test_min_length_boundary() {
        assert!(run(ResolvedCheck::MinLength(5), json!("hello")).is_valid());
        let report = run(ResolvedCheck::MinLength(5), json!("hi"));
        assert_eq!(
            report.failed()[0].message,
            "value_name must have a minimum of 5 characters!"
        );
    }

    #[test]
    fn test_min_word_counts_whitespace_separated_words() {
        assert!(run(ResolvedCheck::MinWord(2), json!("primary secondary")).is_valid());
        assert!(run(ResolvedCheck::MinWord(2), json!("  spaced   out  ")).is_valid());

        let report = run(ResolvedCheck::MinWord(2), json!("primary"));
        assert_eq!(
            report.failed()[0].message,
            "value_name must have at least 2 words!"
        );
    }

    #[test]
    fn test_email_message_embeds_value() {
        let report = run(ResolvedCheck::Email, json!("bad@mail"));
        assert_eq!(report.failed()[0].message, "email bad@mail is invalid!");
        assert!(run(ResolvedCheck::Email, json!("ok@mail.com")).is_valid());
    }

    #[test]
    fn test_uuid_check_with_version() {
        let id = json!("550e8400-e29b-41d4-a716-446655440000");
        assert!(run(ResolvedCheck::Uuid(None), id.clone()).is_valid());
        assert!(run(ResolvedCheck::Uuid(Some(UuidVersion::V4)), id.clone()).is_valid());

        let report = run(ResolvedCheck::Uuid(Some(UuidVersion::V1)), id);
        assert_eq!(report.failed()[0].expect, "uuid type v1");
        assert_eq!(
            report.failed()[0].message,
            "value_name must be a uuid type!"
        );
    }

    #[test]
    fn test_time_message_embeds_value_and_format() {
        let report = run(ResolvedCheck::Time(TimeFormat::HhMm), json!("24:10"));
        assert_eq!(
            report.failed()[0].message,
            "the time 24:10 is not in the format HH:MM!"
        );
        assert_eq!(report.failed()[0].expect, "format HH:MM");
    }

    #[test]
    fn test_equality_family() {
        assert!(run(ResolvedCheck::Equal(&json!("a")), json!("a")).is_valid());
        assert!(!run(ResolvedCheck::Equal(&json!("a")), json!("b")).is_valid());
        assert!(run(ResolvedCheck::NotEqual(&json!("a")), json!("b")).is_valid());

        let items = [json!(1), json!(2)];
        assert!(run(ResolvedCheck::OneOf(&items), json!(2)).is_valid());
        assert!(!run(ResolvedCheck::OneOf(&items), json!(3)).is_valid());
        assert!(run(ResolvedCheck::NotOneOf(&items), json!(3)).is_valid());
        assert!(!run(ResolvedCheck::NotOneOf(&items), json!(1)).is_valid());
    }

    #[test]
    fn test_number_bound_messages_trim_whole_limits() {
        let report = run(ResolvedCheck::NumberMin(5.0), json!(3));
        assert_eq!(
            report.failed()[0].message,
            "value_name must be greater than or equal to 5!"
        );
        assert!(run(ResolvedCheck::NumberMin(5.0), json!(5)).is_valid());
        assert!(run(ResolvedCheck::NumberMax(10.0), json!(10)).is_valid());
        assert!(!run(ResolvedCheck::NumberMax(10.0), json!(10.5)).is_valid());
    }

    #[test]
    fn test_number_bound_expect_is_index_aware() {
        let report = run(ResolvedCheck::NumberMin(5.0), json!(7));
        assert_eq!(
            report.passed()[0].expect,
            "value greater than or equal to the reference"
        );

        let report = run_at(ResolvedCheck::NumberMin(5.0), json!(7), Some(2));
        assert_eq!(
            report.passed()[0].expect,
            "array index must contain a number greater than or equal to the reference"
        );
        assert_eq!(report.passed()[0].index, Some(2));
    }

    #[test]
    fn test_date_bound_compares_with_declared_format() {
        let reference = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let check = ResolvedCheck::DateMin {
            format: DateFormat::YyyyMmDdDash,
            reference,
        };

        assert!(run(check.clone(), json!("2000-01-01")).is_valid());

        let report = run(check, json!("1999-12-31"));
        assert_eq!(
            report.failed()[0].message,
            "the date value_name must be greater than or equal to the reference date!"
        );
    }

    #[test]
    fn test_date_bound_unparseable_value() {
        let reference = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let check = ResolvedCheck::DateMax {
            format: DateFormat::DdMmYyyy,
            reference,
        };

        let report = run(check, json!("not a date"));
        assert_eq!(report.failed()[0].method, "max");
        assert_eq!(report.failed()[0].message, "the provided date is invalid!");
    }

    #[test]
    fn test_invalid_bound_is_an_invalid_param() {
        let report = run(ResolvedCheck::InvalidBound { method: "min" }, json!(3));
        let failure = &report.failed()[0];
        assert_eq!(failure.kind, FailureKind::InvalidParam);
        assert_eq!(
            failure.message,
            "min method must be preceded by a date or a numeric method!"
        );
    }

    #[test]
    fn test_presence_gate_stops_on_undefined() {
        let mut report = Report::new();
        let mut recorder = Recorder {
            name: "field",
            index: None,
            report: &mut report,
        };
        let proceed = presence_gate(None, Presence::Required, &mut recorder);

        assert!(!proceed);
        assert_eq!(report.failed()[0].message, "field is required!");
        assert_eq!(report.failed()[0].kind, FailureKind::MissingValue);
        assert_eq!(report.failed()[0].received, json!("undefined"));
    }

    #[test]
    fn test_presence_gate_nullable_short_circuit() {
        let mut report = Report::new();
        let mut recorder = Recorder {
            name: "field",
            index: None,
            report: &mut report,
        };
        let proceed = presence_gate(Some(&Value::Null), Presence::Nullable, &mut recorder);

        assert!(!proceed);
        assert!(report.is_valid());
        assert_eq!(report.passed()[0].method, "nullable");
    }

    #[test]
    fn test_presence_gate_nullable_undefined_fails_required() {
        let mut report = Report::new();
        let mut recorder = Recorder {
            name: "field",
            index: None,
            report: &mut report,
        };
        let proceed = presence_gate(None, Presence::Nullable, &mut recorder);

        assert!(!proceed);
        assert_eq!(report.failed()[0].method, "required");
    }

    #[test]
    fn test_presence_gate_not_required_null_continues() {
        let mut report = Report::new();
        let mut recorder = Recorder {
            name: "field",
            index: None,
            report: &mut report,
        };
        let proceed = presence_gate(Some(&Value::Null), Presence::NotRequired, &mut recorder);

        // Null is a defined value; the rules still run for notRequired
        assert!(proceed);
        assert_eq!(report.passed()[0].method, "notRequired");
    }

    #[test]
    fn test_array_length_rules() {
        let items = vec![json!(1), json!(2)];
        let mut report = Report::new();
        let mut recorder = Recorder {
            name: "list",
            index: None,
            report: &mut report,
        };
        check_array_rule(&Rule::MinLength(3), &items, &mut recorder);
        check_array_rule(&Rule::MaxLength(2), &items, &mut recorder);

        assert_eq!(report.failed().len(), 1);
        assert_eq!(
            report.failed()[0].message,
            "list must have a minimum of 3 items!"
        );
        assert_eq!(report.passed()[0].method, "maxLength");
    }

    #[test]
    fn test_object_and_array_kind_checks() {
        let mut report = Report::new();
        let mut recorder = Recorder {
            name: "payload",
            index: None,
            report: &mut report,
        };
        assert!(check_object_kind(&json!({}), &mut recorder));
        assert!(!check_object_kind(&json!([]), &mut recorder));
        assert!(check_array_kind(&json!([]), &mut recorder));
        assert!(!check_array_kind(&json!(null), &mut recorder));

        assert_eq!(
            report.failed()[0].message,
            "payload value must be an object!"
        );
        assert_eq!(
            report.failed()[1].message,
            "payload value must be an array!"
        );
    }
}
