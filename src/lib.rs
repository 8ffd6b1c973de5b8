//! Attest: the result-composition core of an assertion-reporting library.
//!
//! A single logical assertion can be expressed as a composed group of
//! sub-assertions. Each sub-assertion reports an [`AssertionResult`] into the
//! scope's [`ResultCollector`]; when the scope closes, the [`ComposedResults`]
//! facade folds the collected sequence into one parent record and hands it to
//! the outer [`ResultSink`]. Since a collector is itself a sink, scopes nest
//! to arbitrary depth.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use attest::{compose, AssertionResult, ResultCollector, SharedSink, Status, Value};
//!
//! let top = Rc::new(RefCell::new(ResultCollector::new()));
//!
//! compose(
//!     SharedSink(top.clone()),
//!     "both halves agree",
//!     Some(Value::from(42)),
//!     |scope| {
//!         scope.report(AssertionResult::new(Status::Passed, "left half matches"));
//!         scope.report(AssertionResult::new(Status::Passed, "right half matches"));
//!     },
//! )
//! .results(|r| if r.all_passed() { r.pass() } else { r.fail() });
//!
//! assert!(top.borrow().all_passed());
//! ```

pub use crate::collector::ResultCollector;
pub use crate::compose::{compose, ComposedResults};
pub use crate::errors::ReportError;
pub use crate::result::{AssertionResult, Status};
pub use crate::sink::{NullSink, ResultSink, SharedSink};
pub use crate::value::Value;

pub mod collector;
pub mod compose;
pub mod errors;
pub mod report;
pub mod result;
pub mod sink;
pub mod value;
