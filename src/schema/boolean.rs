//! Boolean rule chain.

use serde_json::Value;

use super::node::{LeafNode, Presence, SchemaNode};
use super::value::{SealedRules, ValueRules};
use crate::rule::Rule;

/// Builder for boolean fields.
///
/// Booleans carry no extra constraints; the chain goes straight to the
/// comparison family, presence, or `build()`.
///
/// # Example
///
/// ```rust
/// use verdict::{validate, Schema};
/// use serde_json::json;
///
/// let schema = Schema::boolean().build();
///
/// assert!(validate(&json!(true), &schema).is_valid());
/// assert!(!validate(&json!(1), &schema).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct BooleanRules {
    leaf: LeafNode,
}

impl BooleanRules {
    pub(crate) fn new() -> Self {
        let mut leaf = LeafNode::new();
        leaf.push_rule(Rule::Boolean);
        Self { leaf }
    }

    /// Requires the value to equal the comparison value.
    pub fn equal(self, value: impl Into<Value>) -> ValueRules {
        ValueRules::from_leaf(self.leaf).equal(value)
    }

    /// Requires the value to differ from the comparison value.
    pub fn not_equal(self, value: impl Into<Value>) -> ValueRules {
        ValueRules::from_leaf(self.leaf).not_equal(value)
    }

    /// Requires the value to equal one of the comparison items.
    pub fn one_of(self, items: Vec<Value>) -> ValueRules {
        ValueRules::from_leaf(self.leaf).one_of(items)
    }

    /// Requires the value to equal none of the comparison items.
    pub fn not_one_of(self, items: Vec<Value>) -> ValueRules {
        ValueRules::from_leaf(self.leaf).not_one_of(items)
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

impl From<BooleanRules> for SchemaNode {
    fn from(builder: BooleanRules) -> Self {
        builder.build()
    }
}
