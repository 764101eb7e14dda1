//! Validation executor.
//!
//! This module walks a [`SchemaNode`](crate::schema::SchemaNode) tree against
//! a runtime JSON value and fills a [`Report`] with one record per executed
//! check. Execution never stops at a failed rule: every rule attached to a
//! reachable field produces its own record. Only the presence gate and a
//! failed container type check cut a branch short.

mod checks;
mod dispatch;

use serde_json::Value;

use crate::report::Report;
use crate::schema::{ArrayNode, LeafNode, ObjectNode, SchemaNode};

use checks::Recorder;

/// Validates a value against a schema and returns the full test report.
///
/// The report holds every check that ran, passed and failed alike, in
/// schema declaration order. Use [`Report::is_valid`] for the overall
/// verdict and [`Report::failed`] for the diagnostics.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use verdict::{validate, Schema};
///
/// let schema = Schema::object()
///     .field("email", Schema::string().email())
///     .field("age", Schema::number().integer())
///     .build();
///
/// let report = validate(&json!({"email": "dev@mail.com", "age": 30}), &schema);
/// assert!(report.is_valid());
///
/// let report = validate(&json!({"email": "nope", "age": 30}), &schema);
/// assert_eq!(report.failed().len(), 1);
/// assert_eq!(report.failed()[0].name, "email");
/// ```
pub fn validate(value: &Value, schema: &SchemaNode) -> Report {
    let mut report = Report::new();
    walk(Some(value), schema, None, &mut report);
    report
}

/// Visits one node. `value` is `None` when the key was absent from the
/// enclosing object; `index` is the position inside the nearest enclosing
/// array, if any.
fn walk(value: Option<&Value>, node: &SchemaNode, index: Option<usize>, report: &mut Report) {
    match node {
        SchemaNode::Leaf(leaf) => walk_leaf(value, leaf, index, report),
        SchemaNode::Object(object) => walk_object(value, object, index, report),
        SchemaNode::Array(array) => walk_array(value, array, index, report),
    }
}

fn walk_leaf(value: Option<&Value>, leaf: &LeafNode, index: Option<usize>, report: &mut Report) {
    let mut recorder = Recorder {
        name: leaf.display_name(),
        index,
        report,
    };
    if !checks::presence_gate(value, leaf.presence(), &mut recorder) {
        return;
    }
    // The gate only lets defined values through
    let value = match value {
        Some(value) => value,
        None => return,
    };
    let rules = leaf.rules();
    for (position, rule) in rules.iter().enumerate() {
        let resolved = dispatch::resolve(rule, &rules[..position]);
        checks::apply(&resolved, value, &mut recorder);
    }
}

fn walk_object(
    value: Option<&Value>,
    object: &ObjectNode,
    index: Option<usize>,
    report: &mut Report,
) {
    let mut recorder = Recorder {
        name: object.display_name(),
        index,
        report: &mut *report,
    };
    if !checks::presence_gate(value, object.presence(), &mut recorder) {
        return;
    }
    let value = match value {
        Some(value) => value,
        None => return,
    };
    if !checks::check_object_kind(value, &mut recorder) {
        return;
    }
    let map = match value.as_object() {
        Some(map) => map,
        None => return,
    };
    // Declared fields only; unknown keys in the value are ignored
    for (field, child) in object.fields() {
        walk(map.get(field), child, index, report);
    }
}

fn walk_array(
    value: Option<&Value>,
    array: &ArrayNode,
    index: Option<usize>,
    report: &mut Report,
) {
    let mut recorder = Recorder {
        name: array.display_name(),
        index,
        report: &mut *report,
    };
    if !checks::presence_gate(value, array.presence(), &mut recorder) {
        return;
    }
    let value = match value {
        Some(value) => value,
        None => return,
    };
    if !checks::check_array_kind(value, &mut recorder) {
        return;
    }
    let items = match value.as_array() {
        Some(items) => items,
        None => return,
    };
    for rule in array.rules() {
        checks::check_array_rule(rule, items, &mut recorder);
    }
    // Elements take their own position as index, shadowing any outer array
    for (position, item) in items.iter().enumerate() {
        walk(Some(item), array.item(), Some(position), report);
    }
}
