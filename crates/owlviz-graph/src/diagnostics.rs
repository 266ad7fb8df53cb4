//! Structured record of constructs the conversion could not represent.
//!
//! Diagnostics are informational only. The engine never fails on an
//! unrepresentable construct; it records what was skipped and moves on, so
//! callers can tell a fully modeled graph from a degraded one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A recognized construct whose specific shape is not modeled
    /// (anonymous filler, qualified cardinality, general class inclusion...).
    UnsupportedShape,
    /// A construct outside the modeled set entirely.
    UnknownConstruct,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Name of the construct that was skipped, e.g. `"union_of"`.
    pub construct: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn unsupported_shape(construct: &str, detail: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::UnsupportedShape,
            construct: construct.to_string(),
            detail: detail.into(),
        }
    }

    pub fn unknown_construct(construct: &str, detail: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::UnknownConstruct,
            construct: construct.to_string(),
            detail: detail.into(),
        }
    }
}
