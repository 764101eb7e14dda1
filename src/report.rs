//! Test records and the validation report.
//!
//! Every rule evaluated during one validation run produces exactly one
//! [`Passed`] or one [`Failed`] record. The [`Report`] collects both in
//! traversal order; a value is valid iff no failed record was produced
//! anywhere in the traversal.

use std::fmt::{self, Display};

use serde::Serialize;
use serde_json::Value;

/// A diagnostic for one rule the value satisfied.
///
/// `expect` is a short description of the satisfied constraint, `received`
/// the value that was checked. `index` is set when the record was produced
/// inside an array element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Passed {
    /// Rule method name, e.g. `minWord`.
    pub method: &'static str,
    /// Display name of the field (alias when set).
    pub name: String,
    /// Description of the satisfied constraint.
    pub expect: String,
    /// The value that was checked.
    pub received: Value,
    /// Zero-based position of the enclosing array element, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// A diagnostic for one rule the value violated.
///
/// Carries everything a caller needs to render the failure: the structured
/// `expect` description and the fully rendered, templated `message`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failed {
    /// Rule method name, e.g. `min`.
    pub method: &'static str,
    /// Failure class; serialized as `type`.
    #[serde(rename = "type")]
    pub kind: FailureKind,
    /// Display name of the field (alias when set).
    pub name: String,
    /// Description of the constraint that was not satisfied.
    pub expect: String,
    /// The value that was checked, sanitized for absent values.
    pub received: Value,
    /// Rendered, single-line error message.
    pub message: String,
    /// Zero-based position of the enclosing array element, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// Classifies a failed test record.
///
/// `InvalidParam` marks schema misuse surfaced at validation time (a bound
/// rule with no anchoring date/numeric rule), so callers can tell "the input
/// is wrong" apart from "the schema is malformed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    /// The value does not satisfy the constraint.
    #[serde(rename = "invalid value")]
    InvalidValue,
    /// The value is undefined but the field is required.
    #[serde(rename = "missing value")]
    MissingValue,
    /// The schema itself is malformed for this rule.
    #[serde(rename = "invalid param")]
    InvalidParam,
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            FailureKind::InvalidValue => "invalid value",
            FailureKind::MissingValue => "missing value",
            FailureKind::InvalidParam => "invalid param",
        };
        f.write_str(tag)
    }
}

/// The complete outcome of one validation run.
///
/// Records appear in traversal order: presence first, then each rule in
/// declaration order, recursing into object fields and array elements. A
/// fresh report is produced per run; reports never share state.
///
/// # Example
///
/// ```rust
/// use verdict::{validate, Schema};
/// use serde_json::json;
///
/// let schema = Schema::string().min_word(2).build();
/// let report = validate(&json!("primary"), &schema);
///
/// assert!(!report.is_valid());
/// assert_eq!(report.failed().len(), 1);
/// assert_eq!(report.failed()[0].method, "minWord");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    passed: Vec<Passed>,
    failed: Vec<Failed>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no failed record was produced.
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }

    /// The passed records, in traversal order.
    pub fn passed(&self) -> &[Passed] {
        &self.passed
    }

    /// The failed records, in traversal order.
    pub fn failed(&self) -> &[Failed] {
        &self.failed
    }

    /// Total number of records, passed and failed.
    pub fn total_tests(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    /// Failed records produced for the given rule method.
    pub fn failed_for(&self, method: &str) -> Vec<&Failed> {
        self.failed.iter().filter(|f| f.method == method).collect()
    }

    /// Passed records produced for the given rule method.
    pub fn passed_for(&self, method: &str) -> Vec<&Passed> {
        self.passed.iter().filter(|p| p.method == method).collect()
    }

    pub(crate) fn push_passed(&mut self, record: Passed) {
        self.passed.push(record);
    }

    pub(crate) fn push_failed(&mut self, record: Failed) {
        self.failed.push(record);
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "Validation passed with {} test(s)", self.total_tests());
        }
        writeln!(f, "Validation failed with {} error(s):", self.failed.len())?;
        for (i, failure) in self.failed.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, failure.message)?;
        }
        Ok(())
    }
}

// Reports cross thread boundaries when validation runs on worker pools, so
// they must stay Send + Sync even if field types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Report>();
    assert_sync::<Report>();
    assert_send::<Passed>();
    assert_sync::<Failed>();
};
