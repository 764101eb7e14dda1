//! String rule chain.
//!
//! [`StringRules`] is the continuation returned by [`Schema::string`] and
//! exposes the string-flavored constraints. Every call appends one rule to
//! the field's sequence; nothing is evaluated until validation.
//!
//! [`Schema::string`]: super::Schema::string

use serde_json::Value;

use super::node::{LeafNode, Presence, SchemaNode};
use super::value::{SealedRules, ValueRules};
use crate::rule::{Rule, TimeFormat, UuidVersion};

/// Builder for string fields.
///
/// # Example
///
/// ```rust
/// use verdict::{validate, Schema};
/// use serde_json::json;
///
/// let schema = Schema::string().min_length(3).max_length(20).build();
///
/// // Both limits are checked; a short value fails only the minimum
/// let report = validate(&json!("ab"), &schema);
/// assert_eq!(report.failed().len(), 1);
/// assert_eq!(report.failed()[0].method, "minLength");
/// ```
#[derive(Debug, Clone)]
pub struct StringRules {
    leaf: LeafNode,
}

impl StringRules {
    pub(crate) fn new() -> Self {
        let mut leaf = LeafNode::new();
        leaf.push_rule(Rule::String);
        Self { leaf }
    }

    /// Requires at least `length` characters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().min_length(5).build();
    ///
    /// assert!(validate(&json!("hello"), &schema).is_valid());
    /// assert!(!validate(&json!("hi"), &schema).is_valid());
    /// ```
    pub fn min_length(mut self, length: usize) -> Self {
        self.leaf.push_rule(Rule::MinLength(length));
        self
    }

    /// Requires at most `length` characters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().max_length(10).build();
    ///
    /// assert!(validate(&json!("hello"), &schema).is_valid());
    /// assert!(!validate(&json!("this is too long"), &schema).is_valid());
    /// ```
    pub fn max_length(mut self, length: usize) -> Self {
        self.leaf.push_rule(Rule::MaxLength(length));
        self
    }

    /// Requires at least `count` whitespace-separated words.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().min_word(2).build();
    ///
    /// assert!(validate(&json!("full name"), &schema).is_valid());
    /// assert!(!validate(&json!("mononym"), &schema).is_valid());
    /// ```
    pub fn min_word(mut self, count: usize) -> Self {
        self.leaf.push_rule(Rule::MinWord(count));
        self
    }

    /// Requires a well-formed email address.
    ///
    /// The domain must be dotted, so `user@host` fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().email().build();
    ///
    /// assert!(validate(&json!("any_email@mail.com"), &schema).is_valid());
    /// assert!(!validate(&json!("bad@mail"), &schema).is_valid());
    /// ```
    pub fn email(mut self) -> Self {
        self.leaf.push_rule(Rule::Email);
        self
    }

    /// Requires a UUID, optionally pinned to a version.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema, UuidVersion};
    /// use serde_json::json;
    ///
    /// let any = Schema::string().uuid(None).build();
    /// let v4 = Schema::string().uuid(UuidVersion::V4).build();
    ///
    /// let id = json!("550e8400-e29b-41d4-a716-446655440000");
    /// assert!(validate(&id, &any).is_valid());
    /// assert!(validate(&id, &v4).is_valid());
    /// ```
    pub fn uuid(mut self, version: impl Into<Option<UuidVersion>>) -> Self {
        self.leaf.push_rule(Rule::Uuid(version.into()));
        self
    }

    /// Requires a time string in the given format.
    pub fn time(mut self, format: TimeFormat) -> Self {
        self.leaf.push_rule(Rule::Time(format));
        self
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
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().min_length(8).alias("password").build();
    ///
    /// let report = validate(&json!("short"), &schema);
    /// assert_eq!(report.failed()[0].name, "password");
    /// ```
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

impl From<StringRules> for SchemaNode {
    fn from(builder: StringRules) -> Self {
        builder.build()
    }
}
