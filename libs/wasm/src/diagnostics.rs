//! WASM-compatible diagnostic types.
//!
//! Wraps parse issues and pipeline errors in plain values JavaScript can
//! read, so the host can show why a raster looks the way it does.

use std::fmt;

use ascii_grid::GridIssue;
use globe_mesh::MeshError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Diagnostic severity for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Rendering was refused.
    Error,
    /// The raster was rendered but departs from the format.
    Warning,
    /// Informational; nothing went wrong.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const list = handle.diagnostics();
/// // for (let i = 0; i < list.len(); i++) {
/// //   const diag = list.get(i);
/// //   console.warn(diag.line, diag.message());
/// // }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    line: Option<usize>,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the severity of the diagnostic.
    #[wasm_bindgen(getter)]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Returns the 1-based source line, if the issue points at one.
    #[wasm_bindgen(getter)]
    pub fn line(&self) -> Option<u32> {
        self.line.and_then(|line| u32::try_from(line).ok())
    }
}

impl Diagnostic {
    /// Creates a diagnostic.
    pub fn new(severity: Severity, message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            severity,
            message: message.into(),
            line,
        }
    }

    /// The message, borrowed.
    pub fn message_str(&self) -> &str {
        &self.message
    }

    /// The source line as a native index.
    pub fn source_line(&self) -> Option<usize> {
        self.line
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

impl From<&GridIssue> for Diagnostic {
    fn from(issue: &GridIssue) -> Self {
        let severity = match issue {
            GridIssue::NoValidCells => Severity::Info,
            _ => Severity::Warning,
        };
        Self::new(severity, issue.to_string(), issue.line())
    }
}

impl From<MeshError> for Diagnostic {
    fn from(err: MeshError) -> Self {
        Self::new(Severity::Error, err.to_string(), None)
    }
}

/// A collection of diagnostics.
#[wasm_bindgen]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiagnosticList {
    diagnostics: Vec<Diagnostic>,
}

#[wasm_bindgen]
impl DiagnosticList {
    /// Returns the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if there are no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns a diagnostic by index.
    pub fn get(&self, index: usize) -> Option<Diagnostic> {
        self.diagnostics.get(index).cloned()
    }
}

impl DiagnosticList {
    /// Creates a list from diagnostics in report order.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Converts parse issues, keeping their order.
    pub fn from_issues(issues: &[GridIssue]) -> Self {
        Self::new(issues.iter().map(Diagnostic::from).collect())
    }

    /// The diagnostics as a slice.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
