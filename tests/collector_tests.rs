//! Unit tests for the result collector: aggregate queries over reported
//! sequences, ordering guarantees, and the one-level-deep aggregation rule.

use attest::{AssertionResult, ResultCollector, ResultSink, Status};
use im::Vector;

fn passed(description: &str) -> AssertionResult {
    AssertionResult::new(Status::Passed, description)
}

fn failed(description: &str) -> AssertionResult {
    AssertionResult::new(Status::Failed, description)
}

fn collect(records: Vec<AssertionResult>) -> ResultCollector {
    let mut collector = ResultCollector::new();
    for record in records {
        collector.report(record);
    }
    collector
}

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    #[test]
    fn test_empty_collector_aggregates() {
        let collector = ResultCollector::new();
        assert!(!collector.any_failed());
        assert!(collector.all_failed());
        assert!(!collector.any_passed());
        assert!(collector.all_passed());
    }

    #[test]
    fn test_uniform_passed_sequence() {
        let collector = collect(vec![passed("a"), passed("b")]);
        assert!(!collector.any_failed());
        assert!(!collector.all_failed());
        assert!(collector.any_passed());
        assert!(collector.all_passed());
    }

    #[test]
    fn test_uniform_failed_sequence() {
        let collector = collect(vec![failed("a"), failed("b")]);
        assert!(collector.any_failed());
        assert!(collector.all_failed());
        assert!(!collector.any_passed());
        assert!(!collector.all_passed());
    }

    #[test]
    fn test_mixed_sequence() {
        let collector = collect(vec![passed("a"), failed("b")]);
        assert!(collector.any_failed());
        assert!(!collector.all_failed());
        assert!(collector.any_passed());
        assert!(!collector.all_passed());
    }

    #[test]
    fn test_aggregates_match_status_counts() {
        let sequences: Vec<Vec<AssertionResult>> = vec![
            vec![],
            vec![passed("a")],
            vec![failed("a")],
            vec![passed("a"), failed("b")],
            vec![failed("a"), failed("b"), passed("c")],
        ];
        for records in sequences {
            let total = records.len();
            let failed_count = records.iter().filter(|r| r.status().is_failed()).count();
            let collector = collect(records);
            assert_eq!(collector.any_failed(), failed_count > 0);
            assert_eq!(collector.all_failed(), failed_count == total);
            assert_eq!(collector.any_passed(), total > failed_count);
            assert_eq!(collector.all_passed(), failed_count == 0);
        }
    }

    #[test]
    fn test_reads_are_idempotent_between_reports() {
        let mut collector = ResultCollector::new();
        collector.report(failed("a"));
        assert_eq!(collector.any_failed(), collector.any_failed());
        assert_eq!(collector.all_failed(), collector.all_failed());
        collector.report(passed("b"));
        assert_eq!(collector.all_passed(), collector.all_passed());
    }

    #[test]
    fn test_aggregates_ignore_grandchildren() {
        // a passed child with a failed grandchild still counts as passed
        let child = passed("outer check").with_nested(Vector::unit(failed("inner check")));
        let collector = collect(vec![child]);
        assert!(collector.all_passed());
        assert!(!collector.any_failed());
    }
}

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn test_results_preserve_report_order() {
        let collector = collect(vec![passed("a"), failed("b"), passed("c")]);
        let descriptions: Vec<String> = collector
            .results()
            .iter()
            .map(|r| r.description().to_string())
            .collect();
        assert_eq!(descriptions, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_reports_are_kept() {
        let collector = collect(vec![passed("same"), passed("same")]);
        assert_eq!(collector.len(), 2);
        let results = collector.results();
        assert_eq!(results[0], results[1]);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_reports() {
        let mut collector = ResultCollector::new();
        collector.report(passed("a"));
        let snapshot = collector.results();
        collector.report(failed("b"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn test_malformed_records_are_accepted_as_is() {
        // an empty description is the producer's problem, not the collector's
        let collector = collect(vec![failed("")]);
        assert_eq!(collector.len(), 1);
        assert_eq!(collector.results()[0].description(), "");
    }
}
