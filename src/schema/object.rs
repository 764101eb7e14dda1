//! Object rule chain.

use super::node::{ObjectNode, Presence, SchemaNode};
use super::value::SealedRules;

/// Builder for objects with named child fields.
///
/// Each `field` call stores a fully built child schema under its name; the
/// child's own chain decides its presence mode, so there is no separate
/// "optional field" call here. Children are validated in declaration order
/// and a missing property is handed to the child as undefined.
///
/// # Example
///
/// ```rust
/// use verdict::{validate, Schema};
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("name", Schema::string().min_word(2))
///     .field("nickname", Schema::string().not_required())
///     .build();
///
/// // nickname may be absent; name may not
/// assert!(validate(&json!({"name": "Grace Hopper"}), &schema).is_valid());
/// assert!(!validate(&json!({"nickname": "ace"}), &schema).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct ObjectRules {
    node: ObjectNode,
}

impl ObjectRules {
    pub(crate) fn new() -> Self {
        Self {
            node: ObjectNode::new(),
        }
    }

    /// Declares a child field.
    ///
    /// The child's diagnostics use the field name unless the child set an
    /// alias.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::object()
    ///     .field("profile", Schema::object()
    ///         .field("email", Schema::string().email()))
    ///     .build();
    ///
    /// let report = validate(&json!({"profile": {"email": "a@b.co"}}), &schema);
    /// assert!(report.is_valid());
    /// ```
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<SchemaNode>) -> Self {
        self.node.insert_field(name.into(), schema.into());
        self
    }

    /// Overrides the display name used in diagnostics.
    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.node.set_alias(name.into());
        self
    }

    /// Marks the object as required and seals the chain.
    pub fn required(mut self) -> SealedRules {
        self.node.set_presence(Presence::Required);
        SealedRules::new(SchemaNode::Object(self.node))
    }

    /// Lets null pass without validating the children, and seals the chain.
    pub fn nullable(mut self) -> SealedRules {
        self.node.set_presence(Presence::Nullable);
        SealedRules::new(SchemaNode::Object(self.node))
    }

    /// Lets undefined pass without validating the children, and seals the
    /// chain.
    pub fn not_required(mut self) -> SealedRules {
        self.node.set_presence(Presence::NotRequired);
        SealedRules::new(SchemaNode::Object(self.node))
    }

    /// Finishes the chain.
    pub fn build(self) -> SchemaNode {
        SchemaNode::Object(self.node)
    }
}

impl From<ObjectRules> for SchemaNode {
    fn from(builder: ObjectRules) -> Self {
        builder.build()
    }
}
