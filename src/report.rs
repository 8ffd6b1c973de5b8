//! Handles user-facing output for finished result trees.
//!
//! This module is responsible for pretty-printing record trees with status
//! coloring, exporting them as JSON, and the terminal sinks built on top of
//! both. The composition core itself never prints; everything lands here.

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::errors::ReportError;
use crate::result::{AssertionResult, Status};
use crate::sink::ResultSink;

// ============================================================================
// RENDERING: colored tree output for terminals and buffers
// ============================================================================

/// Writes a record tree to the given stream, one line per record, nested
/// outcomes indented under their parent.
pub fn render_result<W: WriteColor>(out: &mut W, result: &AssertionResult) -> Result<(), ReportError> {
    render_at_depth(out, result, 0)
}

fn render_at_depth<W: WriteColor>(
    out: &mut W,
    result: &AssertionResult,
    depth: usize,
) -> Result<(), ReportError> {
    let indent = "  ".repeat(depth);
    let (tag, color) = match result.status() {
        Status::Passed => ("PASS", Color::Green),
        Status::Failed => ("FAIL", Color::Red),
    };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}{}", indent, tag)?;
    out.reset()?;
    write!(out, ": {}", result.description())?;
    if let Some(subject) = result.subject() {
        write!(out, " [subject: {}]", subject)?;
    }
    writeln!(out)?;
    if let Some(actual) = result.actual() {
        writeln!(out, "{}  actual: {}", indent, actual)?;
    }
    for child in result.nested() {
        render_at_depth(out, child, depth + 1)?;
    }
    Ok(())
}

/// Renders a record tree without color, into a String. Used by buffers,
/// panic messages, and tests.
pub fn render_to_string(result: &AssertionResult) -> String {
    let mut out = NoColor::new(Vec::new());
    let _ = render_result(&mut out, result);
    String::from_utf8_lossy(&out.into_inner()).into_owned()
}

// ============================================================================
// JSON EXPORT
// ============================================================================

/// Serializes a record tree as pretty-printed JSON. An absent subject or
/// actual is omitted entirely; a null one serializes as JSON `null`.
pub fn to_json(result: &AssertionResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

// ============================================================================
// TERMINAL SINKS
// ============================================================================

/// Writes each finished record tree to stdout as it arrives, colored when
/// stdout is a terminal.
pub struct ConsoleSink {
    stream: StandardStream,
}

impl ConsoleSink {
    pub fn new() -> Self {
        let choice = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stream: StandardStream::stdout(choice),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSink for ConsoleSink {
    fn report(&mut self, result: AssertionResult) {
        let _ = render_result(&mut self.stream, &result);
    }
}

/// Terminal sink for use inside Rust test functions: a failed top-level
/// record panics with the rendered tree, failing the surrounding test, while
/// passed records are accepted silently.
pub struct FailFastSink;

impl ResultSink for FailFastSink {
    fn report(&mut self, result: AssertionResult) {
        if result.status().is_failed() {
            panic!("composed assertion failed:\n{}", render_to_string(&result));
        }
    }
}
