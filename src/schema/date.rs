//! Date and time rule chains.

use chrono::NaiveDate;
use serde_json::Value;

use super::node::{LeafNode, Presence, SchemaNode};
use super::value::{SealedRules, ValueRules};
use super::{Set, Unset};
use crate::rule::{Bound, DateFormat, Rule, TimeFormat};

/// Builder for date fields.
///
/// The markers track whether `min` and `max` have been recorded, so each can
/// appear at most once, in either order. Bounds recorded here compare dates:
/// the runtime value is parsed with the format declared up front, and an
/// unparseable value fails the bound with an invalid-date message.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use verdict::{validate, DateFormat, Schema};
/// use serde_json::json;
///
/// let schema = Schema::date(DateFormat::YyyyMmDdDash)
///     .min(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
///     .build();
///
/// assert!(validate(&json!("2000-06-15"), &schema).is_valid());
///
/// let report = validate(&json!("1999-12-31"), &schema);
/// assert_eq!(report.failed().len(), 1);
/// assert_eq!(report.failed()[0].method, "min");
/// ```
#[derive(Debug, Clone)]
pub struct DateRules<L = Unset, H = Unset> {
    leaf: LeafNode,
    _state: std::marker::PhantomData<(L, H)>,
}

impl DateRules {
    pub(crate) fn new(format: DateFormat) -> Self {
        let mut leaf = LeafNode::new();
        leaf.push_rule(Rule::Date(format));
        Self {
            leaf,
            _state: std::marker::PhantomData,
        }
    }
}

impl<H> DateRules<Unset, H> {
    /// Requires the date to be on or after `date`.
    pub fn min(mut self, date: NaiveDate) -> DateRules<Set, H> {
        self.leaf.push_rule(Rule::Min(Bound::Date(date)));
        self.transition()
    }
}

impl<L> DateRules<L, Unset> {
    /// Requires the date to be on or before `date`.
    pub fn max(mut self, date: NaiveDate) -> DateRules<L, Set> {
        self.leaf.push_rule(Rule::Max(Bound::Date(date)));
        self.transition()
    }
}

impl<L, H> DateRules<L, H> {
    fn transition<L2, H2>(self) -> DateRules<L2, H2> {
        DateRules {
            leaf: self.leaf,
            _state: std::marker::PhantomData,
        }
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

impl<L, H> From<DateRules<L, H>> for SchemaNode {
    fn from(builder: DateRules<L, H>) -> Self {
        builder.build()
    }
}

/// Builder for time fields.
///
/// # Example
///
/// ```rust
/// use verdict::{validate, Schema, TimeFormat};
/// use serde_json::json;
///
/// let schema = Schema::time(TimeFormat::HhMmSs).build();
///
/// assert!(validate(&json!("13:45:30"), &schema).is_valid());
/// assert!(!validate(&json!("13:45"), &schema).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct TimeRules {
    leaf: LeafNode,
}

impl TimeRules {
    pub(crate) fn new(format: TimeFormat) -> Self {
        let mut leaf = LeafNode::new();
        leaf.push_rule(Rule::Time(format));
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

impl From<TimeRules> for SchemaNode {
    fn from(builder: TimeRules) -> Self {
        builder.build()
    }
}
