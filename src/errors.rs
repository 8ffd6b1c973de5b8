//! Error types for rendering and exporting result trees.
//!
//! Assertion failure itself never travels this channel: a `Failed` status is
//! the violation signal, and failed records flow through sinks as ordinary
//! data. These errors cover only the reporting surface, where streams and
//! serializers can genuinely fail.

use thiserror::Error;

/// Errors surfaced while rendering or exporting finished result trees.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}
