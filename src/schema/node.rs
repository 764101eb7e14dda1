//! Finished schema artifacts.
//!
//! A [`SchemaNode`] is the immutable output of the builder: a leaf with an
//! ordered rule sequence, an object with named children, or an array with a
//! single element schema. Nodes are built once, then shared and revalidated
//! against many values without ever being mutated.

use indexmap::IndexMap;
use thiserror::Error;

use crate::rule::Rule;

/// Presence mode of a field, decided before any other rule runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// The value must not be undefined. The default.
    #[default]
    Required,
    /// Null passes and stops the rule loop; undefined still fails.
    Nullable,
    /// Undefined passes and stops the rule loop; null still runs the rules.
    NotRequired,
}

/// Error returned when a rule sequence cannot form a valid leaf.
///
/// The fluent builder cannot produce these by construction; they guard the
/// dynamic assembly path ([`LeafNode::from_rules`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaBuildError {
    /// Two of `required`/`nullable`/`notRequired` in one sequence.
    #[error("presence mode is already set for this field")]
    DuplicatePresence,
    /// The same bound rule registered twice.
    #[error("{method} is already registered for this field")]
    DuplicateBound {
        /// `min` or `max`.
        method: &'static str,
    },
    /// A bound parameter that contradicts the anchoring rule's category.
    #[error("{method} value does not match the preceding {anchor} rule")]
    BoundCategoryMismatch {
        /// `min` or `max`.
        method: &'static str,
        /// `date` or `number`.
        anchor: &'static str,
    },
}

/// A finished, immutable schema for one field or value.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Flat rule sequence.
    Leaf(LeafNode),
    /// Named children, validated field by field.
    Object(ObjectNode),
    /// One element schema applied to every item.
    Array(ArrayNode),
}

impl SchemaNode {
    /// Validates a value against this schema, producing a fresh report.
    ///
    /// Equivalent to [`validate`](crate::validate)`(value, self)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Schema;
    /// use serde_json::json;
    ///
    /// let schema = Schema::boolean().build();
    /// assert!(schema.validate(&json!(true)).is_valid());
    /// assert!(!schema.validate(&json!("yes")).is_valid());
    /// ```
    pub fn validate(&self, value: &serde_json::Value) -> crate::report::Report {
        crate::engine::validate(value, self)
    }

    /// The name diagnostics use for this node: the alias when set, otherwise
    /// the value name.
    pub fn display_name(&self) -> &str {
        match self {
            SchemaNode::Leaf(leaf) => leaf.display_name(),
            SchemaNode::Object(object) => object.display_name(),
            SchemaNode::Array(array) => array.display_name(),
        }
    }

    pub(crate) fn presence(&self) -> Presence {
        match self {
            SchemaNode::Leaf(leaf) => leaf.presence,
            SchemaNode::Object(object) => object.presence,
            SchemaNode::Array(array) => array.presence,
        }
    }

    pub(crate) fn set_value_name(&mut self, name: &str) {
        match self {
            SchemaNode::Leaf(leaf) => leaf.value_name = name.to_string(),
            SchemaNode::Object(object) => object.value_name = name.to_string(),
            SchemaNode::Array(array) => array.value_name = name.to_string(),
        }
    }

    pub(crate) fn set_alias(&mut self, alias: &str) {
        match self {
            SchemaNode::Leaf(leaf) => leaf.alias = Some(alias.to_string()),
            SchemaNode::Object(object) => object.alias = Some(alias.to_string()),
            SchemaNode::Array(array) => array.alias = Some(alias.to_string()),
        }
    }
}

/// A leaf schema: an ordered rule sequence plus naming and presence metadata.
///
/// Presence and alias rules are hoisted into metadata when the leaf is
/// finalized, so the stored sequence contains only value checks and keeps the
/// relative order that drives `min`/`max` dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    value_name: String,
    alias: Option<String>,
    presence: Presence,
    rules: Vec<Rule>,
}

impl LeafNode {
    pub(crate) fn new() -> Self {
        Self {
            value_name: "value".to_string(),
            alias: None,
            presence: Presence::Required,
            rules: Vec::new(),
        }
    }

    /// Assembles a leaf from a raw rule sequence.
    ///
    /// Presence rules and `alias` are absorbed into metadata; every other
    /// rule keeps its position. Returns an error for sequences the fluent
    /// builder makes unrepresentable: a second presence rule, a repeated
    /// bound, or a bound parameter whose category contradicts the anchoring
    /// rule found earlier in the sequence. A bound with no anchor at all is
    /// accepted here and surfaces at validation time as an `invalid param`
    /// failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{LeafNode, Rule};
    ///
    /// let leaf = LeafNode::from_rules(vec![Rule::String, Rule::MinLength(3)]).unwrap();
    /// assert_eq!(leaf.rules().len(), 2);
    ///
    /// let err = LeafNode::from_rules(vec![Rule::Required, Rule::Nullable]);
    /// assert!(err.is_err());
    /// ```
    pub fn from_rules(rules: Vec<Rule>) -> Result<Self, SchemaBuildError> {
        let mut leaf = Self::new();
        let mut presence_set = false;

        for rule in rules {
            match rule {
                Rule::Required | Rule::Nullable | Rule::NotRequired => {
                    if presence_set {
                        return Err(SchemaBuildError::DuplicatePresence);
                    }
                    presence_set = true;
                    leaf.presence = match rule {
                        Rule::Nullable => Presence::Nullable,
                        Rule::NotRequired => Presence::NotRequired,
                        _ => Presence::Required,
                    };
                }
                Rule::Alias(name) => leaf.alias = Some(name),
                Rule::Min(bound) => {
                    check_bound(&leaf.rules, "min", &bound)?;
                    if leaf.rules.iter().any(|r| matches!(r, Rule::Min(_))) {
                        return Err(SchemaBuildError::DuplicateBound { method: "min" });
                    }
                    leaf.rules.push(Rule::Min(bound));
                }
                Rule::Max(bound) => {
                    check_bound(&leaf.rules, "max", &bound)?;
                    if leaf.rules.iter().any(|r| matches!(r, Rule::Max(_))) {
                        return Err(SchemaBuildError::DuplicateBound { method: "max" });
                    }
                    leaf.rules.push(Rule::Max(bound));
                }
                other => leaf.rules.push(other),
            }
        }
        Ok(leaf)
    }

    /// The value checks, in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The presence mode.
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// The declared field name.
    pub fn value_name(&self) -> &str {
        &self.value_name
    }

    /// The alias, when one was set.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The name diagnostics use: the alias when set.
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.value_name)
    }

    pub(crate) fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub(crate) fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    pub(crate) fn set_alias(&mut self, alias: String) {
        self.alias = Some(alias);
    }
}

/// Rejects a bound whose parameter contradicts the anchor already recorded.
fn check_bound(
    earlier: &[Rule],
    method: &'static str,
    bound: &crate::rule::Bound,
) -> Result<(), SchemaBuildError> {
    for rule in earlier {
        if let Rule::Date(_) = rule {
            if bound.as_date().is_none() {
                return Err(SchemaBuildError::BoundCategoryMismatch {
                    method,
                    anchor: "date",
                });
            }
            return Ok(());
        }
        if rule.is_numeric_anchor() {
            if bound.as_number().is_none() {
                return Err(SchemaBuildError::BoundCategoryMismatch {
                    method,
                    anchor: "number",
                });
            }
            return Ok(());
        }
    }
    // No anchor: allowed at build time, reported by the executor.
    Ok(())
}

/// An object schema: named children in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectNode {
    value_name: String,
    alias: Option<String>,
    presence: Presence,
    fields: IndexMap<String, SchemaNode>,
}

impl ObjectNode {
    pub(crate) fn new() -> Self {
        Self {
            value_name: "value".to_string(),
            alias: None,
            presence: Presence::Required,
            fields: IndexMap::new(),
        }
    }

    pub(crate) fn insert_field(&mut self, name: String, mut child: SchemaNode) {
        child.set_value_name(&name);
        self.fields.insert(name, child);
    }

    pub(crate) fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    pub(crate) fn set_alias(&mut self, alias: String) {
        self.alias = Some(alias);
    }

    /// The declared children, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, SchemaNode> {
        &self.fields
    }

    /// The presence mode of the object itself.
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// The name diagnostics use: the alias when set.
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.value_name)
    }
}

/// An array schema: one element schema plus the array's own rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayNode {
    value_name: String,
    alias: Option<String>,
    presence: Presence,
    rules: Vec<Rule>,
    item: Box<SchemaNode>,
}

impl ArrayNode {
    pub(crate) fn new(item: SchemaNode) -> Self {
        Self {
            value_name: "value".to_string(),
            alias: None,
            presence: Presence::Required,
            rules: Vec::new(),
            item: Box::new(item),
        }
    }

    pub(crate) fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub(crate) fn set_presence(&mut self, presence: Presence) {
        self.presence = presence;
    }

    pub(crate) fn set_alias(&mut self, alias: String) {
        self.alias = Some(alias);
    }

    /// The element schema applied to every item.
    pub fn item(&self) -> &SchemaNode {
        &self.item
    }

    /// The array's own rules, run once against the whole sequence.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The presence mode of the array itself.
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// The name diagnostics use: the alias when set.
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.value_name)
    }
}

// Schemas are shared across request-handling threads, one instance per
// route, so they must stay Send + Sync.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaNode>();
    assert_sync::<SchemaNode>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Bound, DateFormat};
    use chrono::NaiveDate;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
    }

    #[test]
    fn test_from_rules_hoists_presence_and_alias() {
        let leaf = LeafNode::from_rules(vec![
            Rule::String,
            Rule::Alias("display".to_string()),
            Rule::NotRequired,
        ])
        .unwrap();

        assert_eq!(leaf.presence(), Presence::NotRequired);
        assert_eq!(leaf.alias(), Some("display"));
        assert_eq!(leaf.display_name(), "display");
        // Only the string check remains in the sequence
        assert_eq!(leaf.rules(), &[Rule::String]);
    }

    #[test]
    fn test_from_rules_rejects_double_presence() {
        let result = LeafNode::from_rules(vec![Rule::Nullable, Rule::Required]);
        assert_eq!(result.unwrap_err(), SchemaBuildError::DuplicatePresence);
    }

    #[test]
    fn test_from_rules_rejects_duplicate_bound() {
        let result = LeafNode::from_rules(vec![
            Rule::Number,
            Rule::Min(Bound::Number(1.0)),
            Rule::Min(Bound::Number(2.0)),
        ]);
        assert_eq!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateBound { method: "min" }
        );
    }

    #[test]
    fn test_from_rules_rejects_category_mismatch() {
        let result = LeafNode::from_rules(vec![
            Rule::Date(DateFormat::YyyyMmDdDash),
            Rule::Min(Bound::Number(5.0)),
        ]);
        assert_eq!(
            result.unwrap_err(),
            SchemaBuildError::BoundCategoryMismatch {
                method: "min",
                anchor: "date",
            }
        );

        let result = LeafNode::from_rules(vec![
            Rule::Number,
            Rule::Max(Bound::Date(reference_date())),
        ]);
        assert_eq!(
            result.unwrap_err(),
            SchemaBuildError::BoundCategoryMismatch {
                method: "max",
                anchor: "number",
            }
        );
    }

    #[test]
    fn test_from_rules_allows_unanchored_bound() {
        // Surfaces at validation time as an invalid param failure instead
        let leaf = LeafNode::from_rules(vec![Rule::Min(Bound::Number(5.0))]).unwrap();
        assert_eq!(leaf.rules().len(), 1);
    }

    #[test]
    fn test_from_rules_keeps_check_order() {
        let leaf = LeafNode::from_rules(vec![
            Rule::Number,
            Rule::Positive,
            Rule::Min(Bound::Number(5.0)),
            Rule::Max(Bound::Number(10.0)),
        ])
        .unwrap();

        let methods: Vec<_> = leaf.rules().iter().map(Rule::method_name).collect();
        assert_eq!(methods, vec!["number", "positive", "min", "max"]);
    }

    #[test]
    fn test_last_alias_wins() {
        let leaf = LeafNode::from_rules(vec![
            Rule::Alias("first".to_string()),
            Rule::String,
            Rule::Alias("second".to_string()),
        ])
        .unwrap();
        assert_eq!(leaf.alias(), Some("second"));
    }

    #[test]
    fn test_object_fields_keep_declaration_order() {
        let mut object = ObjectNode::new();
        object.insert_field("b".to_string(), SchemaNode::Leaf(LeafNode::new()));
        object.insert_field("a".to_string(), SchemaNode::Leaf(LeafNode::new()));

        let keys: Vec<_> = object.fields().keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_insert_field_stamps_value_name() {
        let mut object = ObjectNode::new();
        object.insert_field("email".to_string(), SchemaNode::Leaf(LeafNode::new()));

        let child = &object.fields()["email"];
        assert_eq!(child.display_name(), "email");
    }

    #[test]
    fn test_alias_overrides_display_name() {
        let mut node = SchemaNode::Leaf(LeafNode::new());
        node.set_value_name("internal_name");
        node.set_alias("Public Name");
        assert_eq!(node.display_name(), "Public Name");
    }
}
