//! # Verdict
//!
//! A schema validation library that runs EVERY declared check and reports
//! passed tests next to failed ones, instead of short-circuiting on the
//! first broken rule.
//!
//! ## Overview
//!
//! Schemas are assembled with a fluent builder starting from [`Schema`] and
//! frozen into an immutable [`SchemaNode`] tree. [`validate`] walks the tree
//! against a `serde_json::Value` and produces a [`Report`] holding one record
//! per executed check, so callers see the complete picture of a value: which
//! constraints held, which were violated, and where inside arrays the
//! violations sit.
//!
//! ## Core Types
//!
//! - [`Schema`]: Entry point for building schemas
//! - [`SchemaNode`]: A built, immutable schema tree
//! - [`Report`]: All passed and failed test records of one validation run
//! - [`SchemaRegistry`]: Thread-safe storage for named schemas
//!
//! ## Example
//!
//! ```rust
//! use verdict::{validate, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::object()
//!     .field("email", Schema::string().email())
//!     .field("age", Schema::number().integer().min(18.0))
//!     .build();
//!
//! let report = validate(&json!({"email": "dev@mail.com", "age": 30}), &schema);
//! assert!(report.is_valid());
//!
//! // Failures carry the rule, the rendered message and the received value
//! let report = validate(&json!({"email": "dev@mail.com", "age": 15}), &schema);
//! assert!(!report.is_valid());
//! assert_eq!(
//!     report.failed()[0].message,
//!     "age must be greater than or equal to 18!"
//! );
//! ```

pub mod engine;
mod format;
mod messages;
pub mod registry;
pub mod report;
pub mod rule;
pub mod schema;

pub use engine::validate;
pub use registry::{RegistryError, SchemaRegistry};
pub use report::{Failed, FailureKind, Passed, Report};
pub use rule::{Bound, DateFormat, Rule, TimeFormat, UuidVersion};
pub use schema::{
    ArrayNode, ArrayRules, BooleanRules, DateRules, LeafNode, NumberRules, ObjectNode,
    ObjectRules, Presence, Schema, SchemaBuildError, SchemaNode, SealedRules, StringRules,
    TimeRules, ValueRules,
};
