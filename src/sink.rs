use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use crate::result::AssertionResult;

// Sink for finished assertion records, to decouple producers from consumers.
// A collector is a sink (nesting); so is a terminal reporter.
pub trait ResultSink {
    fn report(&mut self, result: AssertionResult);
}

// A null sink for testing or composing without a consumer.
pub struct NullSink;
impl ResultSink for NullSink {
    fn report(&mut self, _result: AssertionResult) {}
}

/// Ergonomic, extensible wrapper for shared, mutable result sinks.
///
/// A composed scope hands the same sink to the facade and to every nested
/// assertion evaluated inside its block, so the handle must be cloneable
/// while the underlying sink stays mutable.
#[derive(Clone)]
pub struct SharedSink(pub Rc<RefCell<dyn ResultSink>>);

impl SharedSink {
    /// Create a new SharedSink from any ResultSink.
    pub fn new<T: ResultSink + 'static>(sink: T) -> Self {
        SharedSink(Rc::new(RefCell::new(sink)))
    }

    /// Report a finished record via the sink.
    pub fn report(&self, result: AssertionResult) {
        self.0.borrow_mut().report(result);
    }

    /// Borrow the sink mutably (for advanced use).
    pub fn borrow_mut(&self) -> RefMut<'_, dyn ResultSink> {
        self.0.borrow_mut()
    }
}
