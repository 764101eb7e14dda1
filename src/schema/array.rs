//! Array rule chain.

use super::node::{ArrayNode, Presence, SchemaNode};
use super::value::SealedRules;
use crate::rule::Rule;

/// Builder for arrays with a single element schema.
///
/// The element schema runs against every item, and each resulting record is
/// tagged with the item's zero-based index. `min_length`/`max_length` here
/// bound the element count and run once against the whole sequence.
///
/// # Example
///
/// ```rust
/// use verdict::{validate, Schema};
/// use serde_json::json;
///
/// let schema = Schema::array(Schema::number().integer()).min_length(1).build();
///
/// assert!(validate(&json!([1, 2, 3]), &schema).is_valid());
/// assert!(!validate(&json!([]), &schema).is_valid());
///
/// let report = validate(&json!([1, 1.5]), &schema);
/// assert_eq!(report.failed().len(), 1);
/// assert_eq!(report.failed()[0].index, Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct ArrayRules {
    node: ArrayNode,
}

impl ArrayRules {
    pub(crate) fn new(item: SchemaNode) -> Self {
        Self {
            node: ArrayNode::new(item),
        }
    }

    /// Requires at least `length` elements.
    pub fn min_length(mut self, length: usize) -> Self {
        self.node.push_rule(Rule::MinLength(length));
        self
    }

    /// Requires at most `length` elements.
    pub fn max_length(mut self, length: usize) -> Self {
        self.node.push_rule(Rule::MaxLength(length));
        self
    }

    /// Overrides the display name used in diagnostics.
    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.node.set_alias(name.into());
        self
    }

    /// Marks the array as required and seals the chain.
    pub fn required(mut self) -> SealedRules {
        self.node.set_presence(Presence::Required);
        SealedRules::new(SchemaNode::Array(self.node))
    }

    /// Lets null pass without validating the elements, and seals the chain.
    pub fn nullable(mut self) -> SealedRules {
        self.node.set_presence(Presence::Nullable);
        SealedRules::new(SchemaNode::Array(self.node))
    }

    /// Lets undefined pass without validating the elements, and seals the
    /// chain.
    pub fn not_required(mut self) -> SealedRules {
        self.node.set_presence(Presence::NotRequired);
        SealedRules::new(SchemaNode::Array(self.node))
    }

    /// Finishes the chain.
    pub fn build(self) -> SchemaNode {
        SchemaNode::Array(self.node)
    }
}

impl From<ArrayRules> for SchemaNode {
    fn from(builder: ArrayRules) -> Self {
        builder.build()
    }
}
