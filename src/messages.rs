//! Fixed error message templates.
//!
//! Templates are parameterized with square-bracket placeholders
//! (`[valueName]`, `[min]`, `[type]`, ...) and rendered by straight string
//! substitution. Rendered messages are ASCII and single-line.

use serde_json::Value;

pub(crate) const REQUIRED: &str = "[valueName] is required!";
pub(crate) const STRING: &str = "[valueName] must be a string type!";
pub(crate) const NUMBER: &str = "[valueName] must be a number type!";
pub(crate) const BOOLEAN: &str = "[valueName] must be a boolean type!";
pub(crate) const FLOAT: &str = "[valueName] must be a number and float!";
pub(crate) const INTEGER: &str = "[valueName] must be a number and integer!";
pub(crate) const POSITIVE: &str = "[valueName] must be a number and positive!";
pub(crate) const NEGATIVE: &str = "[valueName] must be a number and negative!";
pub(crate) const MIN_WORD: &str = "[valueName] must have at least [minWord] words!";
pub(crate) const EMAIL: &str = "email [value] is invalid!";
pub(crate) const UUID: &str = "[valueName] must be a uuid type!";
pub(crate) const MIN_LENGTH: &str = "[valueName] must have a minimum of [minLength] characters!";
pub(crate) const MAX_LENGTH: &str = "[valueName] must have a maximum of [maxLength] characters!";
pub(crate) const DATE: &str = "the date [valueName] is not in the format [type]!";
pub(crate) const MIN_DATE: &str =
    "the date [valueName] must be greater than or equal to the reference date!";
pub(crate) const MAX_DATE: &str =
    "the date [valueName] must be less than or equal to the reference date!";
pub(crate) const INVALID_REFERENCE_DATE: &str = "the provided date is invalid!";
pub(crate) const MIN_NUMBER: &str = "[valueName] must be greater than or equal to [min]!";
pub(crate) const MAX_NUMBER: &str = "[valueName] must be less than or equal to [max]!";
pub(crate) const TIME: &str = "the time [value] is not in the format [type]!";
pub(crate) const EQUAL: &str = "[valueName] does not match!";
pub(crate) const NOT_EQUAL: &str = "[valueName] may not match!";
pub(crate) const ONE_OF: &str = "[valueName] does not have a match!";
pub(crate) const NOT_ONE_OF: &str = "[valueName] can not have a match!";
pub(crate) const OBJECT: &str = "[valueName] value must be an object!";
pub(crate) const ARRAY: &str = "[valueName] value must be an array!";
pub(crate) const MIN_ITEMS: &str = "[valueName] must have a minimum of [minLength] items!";
pub(crate) const MAX_ITEMS: &str = "[valueName] must have a maximum of [maxLength] items!";
pub(crate) const UNANCHORED_MIN: &str =
    "min method must be preceded by a date or a numeric method!";
pub(crate) const UNANCHORED_MAX: &str =
    "max method must be preceded by a date or a numeric method!";

/// Substitutes `[valueName]` in a template.
pub(crate) fn render(template: &str, value_name: &str) -> String {
    template.replace("[valueName]", value_name)
}

/// Substitutes `[valueName]` plus one extra placeholder.
pub(crate) fn render_with(
    template: &str,
    value_name: &str,
    placeholder: &str,
    substitution: &str,
) -> String {
    template
        .replace("[valueName]", value_name)
        .replace(placeholder, substitution)
}

/// The `received` field for a possibly absent value.
///
/// An undefined value is recorded as the string `"undefined"`; present values
/// are recorded as-is.
pub(crate) fn received(value: Option<&Value>) -> Value {
    match value {
        Some(v) => v.clone(),
        None => Value::String("undefined".to_string()),
    }
}

/// Renders a value for `[value]` substitution: strings bare, everything else
/// as compact JSON.
pub(crate) fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Renders a numeric bound without a trailing `.0` for whole numbers, so
/// `min(5.0)` reads as `5` in messages.
pub(crate) fn render_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
