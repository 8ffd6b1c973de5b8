//! Composed scopes: running a block of sub-assertions and folding their
//! outcomes into one parent record.

use std::cell::RefCell;
use std::rc::Rc;

use crate::collector::ResultCollector;
use crate::result::{AssertionResult, Status};
use crate::sink::{ResultSink, SharedSink};
use crate::value::Value;

/// Open a composed scope.
///
/// Creates a fresh collector for the scope, hands `block` a sink backed by
/// it, runs the block to completion, seals the collector, and returns the
/// facade that finalizes the scope into one parent record.
///
/// Nested assertions inside the block report into the scope's sink; a deeper
/// `compose` call uses that sink as its own outer handler, which is what
/// gives arbitrary nesting depth.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use attest::{compose, AssertionResult, ResultCollector, SharedSink, Status, Value};
///
/// let top = Rc::new(RefCell::new(ResultCollector::new()));
/// compose(
///     SharedSink(top.clone()),
///     "sum is positive",
///     Some(Value::from(-3)),
///     |scope| {
///         scope.report(AssertionResult::new(Status::Passed, "is a number"));
///         scope.report(AssertionResult::new(Status::Failed, "is greater than zero"));
///     },
/// )
/// .results(|r| if r.any_failed() { r.fail() } else { r.pass() });
///
/// let reported = top.borrow().results();
/// assert_eq!(reported.len(), 1);
/// assert!(reported[0].status().is_failed());
/// assert_eq!(reported[0].nested().len(), 2);
/// ```
pub fn compose<F>(
    handler: SharedSink,
    description: impl Into<String>,
    subject: Option<Value>,
    block: F,
) -> ComposedResults
where
    F: FnOnce(SharedSink),
{
    let collector = Rc::new(RefCell::new(ResultCollector::new()));
    let scope_sink: Rc<RefCell<dyn ResultSink>> = collector.clone();
    block(SharedSink(scope_sink));
    collector.borrow_mut().seal();
    ComposedResults {
        handler,
        nested: collector,
        description: description.into(),
        subject,
    }
}

/// The results of the sub-assertions evaluated inside a composed scope,
/// plus the description and subject captured when the scope was opened.
///
/// `pass` and `fail` each build one parent record whose nested sequence is
/// the collector snapshot at the moment of the call, and report it to the
/// outer handler. Nothing stops a caller from finalizing twice; every call
/// is an independent report, so one logical assertion should finalize once.
pub struct ComposedResults {
    handler: SharedSink,
    nested: Rc<RefCell<ResultCollector>>,
    description: String,
    subject: Option<Value>,
}

impl ComposedResults {
    /// A convenient way to chain aggregate checks and the final pass/fail
    /// call after [`compose`]. Runs `block` immediately against this facade
    /// and returns the facade unchanged; calls inside the block are neither
    /// buffered nor reordered.
    pub fn results(self, block: impl FnOnce(&ComposedResults)) -> Self {
        block(&self);
        self
    }

    /// Report that the composed assertion succeeded.
    pub fn pass(&self) {
        self.finalize(Status::Passed, None);
    }

    /// Report that the composed assertion failed.
    pub fn fail(&self) {
        self.finalize(Status::Failed, None);
    }

    /// Report that the composed assertion failed, recording the observed
    /// value that violated it. `Value::Nil` records a null observation; use
    /// [`ComposedResults::fail`] when there is no observed value at all.
    pub fn fail_with(&self, actual: impl Into<Value>) {
        self.finalize(Status::Failed, Some(actual.into()));
    }

    /// True if any sub-assertion evaluated in this scope failed. Read fresh
    /// from the collector on every call, never cached.
    pub fn any_failed(&self) -> bool {
        self.nested.borrow().any_failed()
    }

    /// True if every sub-assertion evaluated in this scope failed.
    /// Vacuously true for an empty scope.
    pub fn all_failed(&self) -> bool {
        self.nested.borrow().all_failed()
    }

    /// True if any sub-assertion evaluated in this scope passed.
    pub fn any_passed(&self) -> bool {
        self.nested.borrow().any_passed()
    }

    /// True if every sub-assertion evaluated in this scope passed.
    /// Vacuously true for an empty scope.
    pub fn all_passed(&self) -> bool {
        self.nested.borrow().all_passed()
    }

    fn finalize(&self, status: Status, actual: Option<Value>) {
        let mut result = AssertionResult::new(status, self.description.clone())
            .with_nested(self.nested.borrow().results());
        if let Some(subject) = &self.subject {
            result = result.with_subject(subject.clone());
        }
        if let Some(actual) = actual {
            result = result.with_actual(actual);
        }
        self.handler.report(result);
    }
}
