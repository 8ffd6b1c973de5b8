//! The assertion record model: one immutable outcome, leaf or composite.

use std::fmt;

use im::Vector;
use serde::Serialize;

use crate::value::Value;

/// Terminal outcome of a single assertion. Every reported record carries one
/// of these; there is no pending or intermediate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
}

impl Status {
    pub fn is_passed(&self) -> bool {
        matches!(self, Status::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Status::Failed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Passed => write!(f, "passed"),
            Status::Failed => write!(f, "failed"),
        }
    }
}

/// One assertion outcome, the unit exchanged between collectors and sinks.
///
/// A record is built once and never mutated afterwards. Leaf assertions have
/// an empty `nested` sequence; a composed assertion carries the outcomes of
/// its sub-assertions in exact reporting order.
///
/// `actual` is `None` when no observed value was supplied. A supplied null is
/// `Some(Value::Nil)`; the two are distinct and stay distinct through
/// serialization (missing key vs. JSON `null`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssertionResult {
    status: Status,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<Value>,
    nested: Vector<AssertionResult>,
}

impl AssertionResult {
    /// Create a leaf record. Subject, observed value, and nested outcomes
    /// start out absent and are attached with the `with_*` finishers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attest::{AssertionResult, Status};
    /// let r = AssertionResult::new(Status::Passed, "is even");
    /// assert!(r.status().is_passed());
    /// assert!(r.is_leaf());
    /// assert!(r.actual().is_none());
    /// ```
    pub fn new(status: Status, description: impl Into<String>) -> Self {
        Self {
            status,
            description: description.into(),
            subject: None,
            actual: None,
            nested: Vector::new(),
        }
    }

    /// Attach the value under test.
    pub fn with_subject(mut self, subject: impl Into<Value>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Attach the observed value. Passing `Value::Nil` records a null
    /// observation, which is not the same as leaving the value unattached.
    pub fn with_actual(mut self, actual: impl Into<Value>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    /// Attach the outcomes of the sub-assertions of a composed scope.
    pub fn with_nested(mut self, nested: Vector<AssertionResult>) -> Self {
        self.nested = nested;
        self
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn subject(&self) -> Option<&Value> {
        self.subject.as_ref()
    }

    pub fn actual(&self) -> Option<&Value> {
        self.actual.as_ref()
    }

    /// True when an observed value was supplied, even a null one.
    pub fn has_actual(&self) -> bool {
        self.actual.is_some()
    }

    pub fn nested(&self) -> &Vector<AssertionResult> {
        &self.nested
    }

    pub fn is_leaf(&self) -> bool {
        self.nested.is_empty()
    }
}
