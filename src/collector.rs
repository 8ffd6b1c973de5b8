//! Accumulation of assertion outcomes reported inside one composed scope.

use im::Vector;

use crate::result::{AssertionResult, Status};
use crate::sink::ResultSink;

/// Collects the records reported while one composed scope runs, in report
/// order, and answers aggregate pass/fail queries over them.
///
/// A collector is created fresh for each scope, is never shared between
/// scopes, and is sealed when the scope's block returns. The aggregates look
/// exactly one level deep: a child's own nested outcomes do not participate.
///
/// The universal queries are vacuously true over an empty collector: with no
/// reports, `all_failed` and `all_passed` both hold. An empty composed block
/// is a valid scope and callers branching on these aggregates rely on that
/// convention.
pub struct ResultCollector {
    results: Vector<AssertionResult>,
    sealed: bool,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self {
            results: Vector::new(),
            sealed: false,
        }
    }

    /// Snapshot of the accumulated sequence, in report order. The persistent
    /// vector makes this a cheap structural-sharing clone.
    pub fn results(&self) -> Vector<AssertionResult> {
        self.results.clone()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// True if at least one collected record failed. False over no records.
    pub fn any_failed(&self) -> bool {
        self.results.iter().any(|r| r.status() == Status::Failed)
    }

    /// True if every collected record failed. Vacuously true over no records.
    pub fn all_failed(&self) -> bool {
        self.results.iter().all(|r| r.status() == Status::Failed)
    }

    /// True if at least one collected record passed. False over no records.
    pub fn any_passed(&self) -> bool {
        self.results.iter().any(|r| r.status() == Status::Passed)
    }

    /// True if every collected record passed. Vacuously true over no records.
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.status() == Status::Passed)
    }

    /// Closes the collector once its scope's block has returned. Reports
    /// into a sealed collector fail fast; see [`ResultSink::report`].
    pub(crate) fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }
}

impl Default for ResultCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSink for ResultCollector {
    /// Appends the record to the sequence. No deduplication and no content
    /// validation; a malformed record is the producer's responsibility.
    ///
    /// # Panics
    ///
    /// Panics when called on a sealed collector. A report arriving after the
    /// owning scope closed is a bug in the caller and fails fast.
    fn report(&mut self, result: AssertionResult) {
        if self.sealed {
            panic!(
                "report into a sealed collector: the composed scope that owned it has already closed (record: {:?})",
                result.description()
            );
        }
        self.results.push_back(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_starts_empty_and_unsealed() {
        let collector = ResultCollector::new();
        assert!(collector.is_empty());
        assert!(!collector.is_sealed());
    }

    #[test]
    fn test_report_appends_in_order() {
        let mut collector = ResultCollector::new();
        collector.report(AssertionResult::new(Status::Passed, "first"));
        collector.report(AssertionResult::new(Status::Failed, "second"));
        let results = collector.results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].description(), "first");
        assert_eq!(results[1].description(), "second");
    }

    #[test]
    #[should_panic(expected = "sealed collector")]
    fn test_report_after_seal_panics() {
        let mut collector = ResultCollector::new();
        collector.seal();
        collector.report(AssertionResult::new(Status::Passed, "too late"));
    }
}
