//! Comparison rule chain and the sealed terminal state.

use serde_json::Value;

use super::node::{LeafNode, Presence, SchemaNode};
use crate::rule::Rule;

/// Builder for the comparison family: `equal`, `not_equal`, `one_of`,
/// `not_one_of`.
///
/// Reachable from any leaf chain or directly from the
/// [`Schema`](super::Schema) factory, and it stays open for further
/// comparison calls.
///
/// # Example
///
/// ```rust
/// use verdict::{validate, Schema};
/// use serde_json::json;
///
/// let schema = Schema::string().one_of(vec![json!("asc"), json!("desc")]).build();
///
/// assert!(validate(&json!("asc"), &schema).is_valid());
/// assert!(!validate(&json!("sideways"), &schema).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct ValueRules {
    leaf: LeafNode,
}

impl ValueRules {
    pub(crate) fn start() -> Self {
        Self {
            leaf: LeafNode::new(),
        }
    }

    pub(crate) fn from_leaf(leaf: LeafNode) -> Self {
        Self { leaf }
    }

    /// Requires the value to equal the comparison value.
    pub fn equal(mut self, value: impl Into<Value>) -> Self {
        self.leaf.push_rule(Rule::Equal(value.into()));
        self
    }

    /// Requires the value to differ from the comparison value.
    pub fn not_equal(mut self, value: impl Into<Value>) -> Self {
        self.leaf.push_rule(Rule::NotEqual(value.into()));
        self
    }

    /// Requires the value to equal one of the comparison items.
    pub fn one_of(mut self, items: Vec<Value>) -> Self {
        self.leaf.push_rule(Rule::OneOf(items));
        self
    }

    /// Requires the value to equal none of the comparison items.
    pub fn not_one_of(mut self, items: Vec<Value>) -> Self {
        self.leaf.push_rule(Rule::NotOneOf(items));
        self
    }

    /// Overrides the display name used in diagnostics.
    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.leaf.set_alias(name.into());
        self
    }

    /// Marks the field as required and seals the chain.
    pub fn required(mut self) -> SealedRules {
        self.leaf.set_presence(Presence::Required);
        SealedRules::new(SchemaNode::Leaf(self.leaf))
    }

    /// Lets null pass without running the remaining rules, and seals the
    /// chain.
    pub fn nullable(mut self) -> SealedRules {
        self.leaf.set_presence(Presence::Nullable);
        SealedRules::new(SchemaNode::Leaf(self.leaf))
    }

    /// Lets undefined pass without running the remaining rules, and seals
    /// the chain.
    pub fn not_required(mut self) -> SealedRules {
        self.leaf.set_presence(Presence::NotRequired);
        SealedRules::new(SchemaNode::Leaf(self.leaf))
    }

    /// Finishes the chain.
    pub fn build(self) -> SchemaNode {
        SchemaNode::Leaf(self.leaf)
    }
}

impl From<ValueRules> for SchemaNode {
    fn from(builder: ValueRules) -> Self {
        builder.build()
    }
}

/// Terminal builder state after a presence call.
///
/// Presence decides how the whole chain short-circuits, so nothing may be
/// appended after it; only the display name can still change.
///
/// # Example
///
/// ```rust
/// use verdict::{validate, Schema};
/// use serde_json::json;
///
/// let schema = Schema::string().email().not_required().alias("contact").build();
///
/// // Undefined passes a notRequired field; the record carries the alias
/// let report = validate(&json!({}), &Schema::object().field("contact", schema).build());
/// assert!(report.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct SealedRules {
    node: SchemaNode,
}

impl SealedRules {
    pub(crate) fn new(node: SchemaNode) -> Self {
        Self { node }
    }

    /// Overrides the display name used in diagnostics.
    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.node.set_alias(&name.into());
        self
    }

    /// Finishes the chain.
    pub fn build(self) -> SchemaNode {
        self.node
    }
}

impl From<SealedRules> for SchemaNode {
    fn from(builder: SealedRules) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use serde_json::json;

    #[test]
    fn test_comparison_chain_stays_open() {
        let node = Schema::equal("a").not_equal("b").one_of(vec![json!("a")]).build();
        match &node {
            SchemaNode::Leaf(leaf) => {
                let methods: Vec<_> = leaf.rules().iter().map(Rule::method_name).collect();
                assert_eq!(methods, vec!["equal", "notEqual", "oneOf"]);
            }
            _ => panic!("expected a leaf node"),
        }
    }

    #[test]
    fn test_comparison_values_are_recorded() {
        let node = Schema::not_one_of(vec![json!(1), json!(2)]).build();
        match &node {
            SchemaNode::Leaf(leaf) => {
                assert_eq!(leaf.rules()[0], Rule::NotOneOf(vec![json!(1), json!(2)]));
            }
            _ => panic!("expected a leaf node"),
        }
    }

    #[test]
    fn test_sealed_alias_still_applies() {
        let node = Schema::equal(1).required().alias("version").build();
        assert_eq!(node.display_name(), "version");
    }

    #[test]
    fn test_sealed_presence_is_kept() {
        let node = Schema::equal(1).nullable().build();
        match &node {
            SchemaNode::Leaf(leaf) => assert_eq!(leaf.presence(), Presence::Nullable),
            _ => panic!("expected a leaf node"),
        }
    }
}
