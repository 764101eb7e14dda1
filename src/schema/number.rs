//! Numeric rule chain with compile-time narrowing.
//!
//! [`NumberRules`] carries four marker parameters tracking which of sign,
//! precision, lower bound and upper bound have been recorded. Each method is
//! implemented only for the states whose slot is still open, so a chain like
//! `Schema::number().positive().negative()` or a second `min` does not
//! compile, while every valid interleaving (`min` before `float`, `max`
//! before `min`, ...) does.

use std::marker::PhantomData;

use serde_json::Value;

use super::node::{LeafNode, Presence, SchemaNode};
use super::value::{SealedRules, ValueRules};
use super::{Set, Unset};
use crate::rule::{Bound, Rule};

/// Builder for numeric fields.
///
/// The marker parameters are, in order: sign (`positive`/`negative`),
/// precision (`float`/`integer`), lower bound (`min`), upper bound (`max`).
/// All start [`Unset`]; recording a rule flips its marker to [`Set`] and
/// removes the method from the surface.
///
/// # Example
///
/// ```rust
/// use verdict::{validate, Schema};
/// use serde_json::json;
///
/// let schema = Schema::number().positive().integer().min(5.0).max(10.0).build();
///
/// assert!(validate(&json!(7), &schema).is_valid());
///
/// // The rule loop never short-circuits: -3 fails positive and min alike
/// let report = validate(&json!(-3), &schema);
/// let failed: Vec<_> = report.failed().iter().map(|f| f.method).collect();
/// assert_eq!(failed, vec!["positive", "min"]);
/// ```
#[derive(Debug, Clone)]
pub struct NumberRules<S = Unset, P = Unset, L = Unset, H = Unset> {
    leaf: LeafNode,
    _state: PhantomData<(S, P, L, H)>,
}

impl NumberRules {
    pub(crate) fn new() -> Self {
        let mut leaf = LeafNode::new();
        leaf.push_rule(Rule::Number);
        Self {
            leaf,
            _state: PhantomData,
        }
    }
}

impl<P, L, H> NumberRules<Unset, P, L, H> {
    /// Requires the number to be greater than zero. Zero fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::number().positive().build();
    ///
    /// assert!(validate(&json!(1), &schema).is_valid());
    /// assert!(!validate(&json!(0), &schema).is_valid());
    /// ```
    pub fn positive(mut self) -> NumberRules<Set, P, L, H> {
        self.leaf.push_rule(Rule::Positive);
        self.transition()
    }

    /// Requires the number to be less than zero. Zero fails.
    pub fn negative(mut self) -> NumberRules<Set, P, L, H> {
        self.leaf.push_rule(Rule::Negative);
        self.transition()
    }
}

impl<S, L, H> NumberRules<S, Unset, L, H> {
    /// Requires a fractional representation; `1.5` passes, `1` fails.
    pub fn float(mut self) -> NumberRules<S, Set, L, H> {
        self.leaf.push_rule(Rule::Float);
        self.transition()
    }

    /// Requires an integer representation; `1` passes, `1.5` fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::number().integer().build();
    ///
    /// assert!(validate(&json!(42), &schema).is_valid());
    /// assert!(!validate(&json!(1.5), &schema).is_valid());
    /// ```
    pub fn integer(mut self) -> NumberRules<S, Set, L, H> {
        self.leaf.push_rule(Rule::Integer);
        self.transition()
    }
}

impl<S, P, H> NumberRules<S, P, Unset, H> {
    /// Requires the number to be greater than or equal to `value`.
    pub fn min(mut self, value: f64) -> NumberRules<S, P, Set, H> {
        self.leaf.push_rule(Rule::Min(Bound::Number(value)));
        self.transition()
    }
}

impl<S, P, L> NumberRules<S, P, L, Unset> {
    /// Requires the number to be less than or equal to `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// // Bounds may be recorded in either order, before or after precision
    /// let schema = Schema::number().max(10.0).float().min(0.5).build();
    ///
    /// assert!(validate(&json!(2.5), &schema).is_valid());
    /// assert!(!validate(&json!(10.5), &schema).is_valid());
    /// ```
    pub fn max(mut self, value: f64) -> NumberRules<S, P, L, Set> {
        self.leaf.push_rule(Rule::Max(Bound::Number(value)));
        self.transition()
    }
}

impl<S, P, L, H> NumberRules<S, P, L, H> {
    fn transition<S2, P2, L2, H2>(self) -> NumberRules<S2, P2, L2, H2> {
        NumberRules {
            leaf: self.leaf,
            _state: PhantomData,
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

impl<S, P, L, H> From<NumberRules<S, P, L, H>> for SchemaNode {
    fn from(builder: NumberRules<S, P, L, H>) -> Self {
        builder.build()
    }
}
