//! Schema construction surface.
//!
//! This module provides the fluent builder API. Each builder call records one
//! rule in the field's ordered sequence and returns a narrowed builder type
//! exposing only the calls that are valid next, so contradictory chains (a
//! second `positive`, a `min` with no preceding numeric or date rule) do not
//! compile. Nothing is evaluated at build time; the finished [`SchemaNode`]
//! is handed to [`validate`](crate::validate) together with a runtime value.
//!
//! # Example
//!
//! ```rust
//! use verdict::{validate, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::string().min_length(1).max_length(100).build();
//!
//! let report = validate(&json!("hello"), &schema);
//! assert!(report.is_valid());
//! ```

mod array;
mod boolean;
mod date;
mod node;
mod number;
mod object;
mod string;
mod value;

pub use array::ArrayRules;
pub use boolean::BooleanRules;
pub use date::{DateRules, TimeRules};
pub use node::{ArrayNode, LeafNode, ObjectNode, Presence, SchemaBuildError, SchemaNode};
pub use number::NumberRules;
pub use object::ObjectRules;
pub use string::StringRules;
pub use value::{SealedRules, ValueRules};

use serde_json::Value;

use crate::rule::{DateFormat, TimeFormat};

/// Marker: this builder slot has been recorded.
#[derive(Debug, Clone, Copy)]
pub struct Set;

/// Marker: this builder slot is still open.
#[derive(Debug, Clone, Copy)]
pub struct Unset;

/// Entry point for declaring schemas.
///
/// `Schema` provides one factory method per leaf or composite kind. Each
/// returns the first builder continuation for that kind; chain further calls
/// to add constraints, then finish with `build()` (or pass the builder
/// directly wherever `Into<SchemaNode>` is accepted).
///
/// # Example
///
/// ```rust
/// use verdict::{validate, Schema};
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("name", Schema::string().min_word(2))
///     .field("age", Schema::number().integer().min(0.0))
///     .build();
///
/// let report = validate(&json!({"name": "Ada Lovelace", "age": 36}), &schema);
/// assert!(report.is_valid());
/// ```
pub struct Schema;

impl Schema {
    /// Declares a string field.
    ///
    /// The returned builder exposes the string-flavored constraints
    /// (`min_length`, `max_length`, `min_word`, `email`, `uuid`, `time`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().min_word(2).build();
    ///
    /// assert!(validate(&json!("primary secondary"), &schema).is_valid());
    /// assert!(!validate(&json!("primary"), &schema).is_valid());
    /// ```
    pub fn string() -> StringRules {
        StringRules::new()
    }

    /// Declares a numeric field.
    ///
    /// The returned builder tracks which of sign, precision and bounds have
    /// been recorded, so `positive` cannot be registered twice and `min`
    /// always has a numeric rule before it.
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
    /// assert!(!validate(&json!(12), &schema).is_valid());
    /// ```
    pub fn number() -> NumberRules {
        NumberRules::new()
    }

    /// Declares a boolean field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::boolean().build();
    ///
    /// assert!(validate(&json!(false), &schema).is_valid());
    /// assert!(!validate(&json!("false"), &schema).is_valid());
    /// ```
    pub fn boolean() -> BooleanRules {
        BooleanRules::new()
    }

    /// Declares a date field in the given format.
    ///
    /// A later `min`/`max` on the chain compares dates, not numbers, and
    /// parses the runtime value with this format.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, DateFormat, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::date(DateFormat::DdMmYyyy).build();
    ///
    /// assert!(validate(&json!("30/12/2000"), &schema).is_valid());
    /// assert!(!validate(&json!("2000-12-30"), &schema).is_valid());
    /// ```
    pub fn date(format: DateFormat) -> DateRules {
        DateRules::new(format)
    }

    /// Declares a time field in the given format.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema, TimeFormat};
    /// use serde_json::json;
    ///
    /// let schema = Schema::time(TimeFormat::HhMm).build();
    ///
    /// assert!(validate(&json!("13:45"), &schema).is_valid());
    /// assert!(!validate(&json!("24:00"), &schema).is_valid());
    /// ```
    pub fn time(format: TimeFormat) -> TimeRules {
        TimeRules::new(format)
    }

    /// Declares a field that must equal the comparison value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::equal("draft").build();
    ///
    /// assert!(validate(&json!("draft"), &schema).is_valid());
    /// assert!(!validate(&json!("published"), &schema).is_valid());
    /// ```
    pub fn equal(value: impl Into<Value>) -> ValueRules {
        ValueRules::start().equal(value)
    }

    /// Declares a field that must not equal the comparison value.
    pub fn not_equal(value: impl Into<Value>) -> ValueRules {
        ValueRules::start().not_equal(value)
    }

    /// Declares a field that must equal one of the comparison items.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::one_of(vec![json!("asc"), json!("desc")]).build();
    ///
    /// assert!(validate(&json!("desc"), &schema).is_valid());
    /// assert!(!validate(&json!("random"), &schema).is_valid());
    /// ```
    pub fn one_of(items: Vec<Value>) -> ValueRules {
        ValueRules::start().one_of(items)
    }

    /// Declares a field that must equal none of the comparison items.
    pub fn not_one_of(items: Vec<Value>) -> ValueRules {
        ValueRules::start().not_one_of(items)
    }

    /// Declares an object with named child fields.
    ///
    /// Children are validated in declaration order; a missing property is
    /// treated as undefined for the child's presence rules.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::object()
    ///     .field("email", Schema::string().email())
    ///     .build();
    ///
    /// let report = validate(&json!({"email": "bad@mail"}), &schema);
    /// assert_eq!(report.failed().len(), 1);
    /// assert_eq!(report.failed()[0].name, "email");
    /// ```
    pub fn object() -> ObjectRules {
        ObjectRules::new()
    }

    /// Declares an array whose every element matches the item schema.
    ///
    /// Each element's records are tagged with the element's zero-based
    /// index.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{validate, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::array(Schema::number().integer()).build();
    ///
    /// let report = validate(&json!([1, 1.5]), &schema);
    /// assert_eq!(report.failed().len(), 1);
    /// assert_eq!(report.failed()[0].index, Some(1));
    /// ```
    pub fn array(item: impl Into<SchemaNode>) -> ArrayRules {
        ArrayRules::new(item.into())
    }
}
