//! Diagnostic reporting channel for validator findings.
//!
//! The analysis layer itself never reports: unresolvable input degrades to
//! a "not relevant" answer. These types are the channel the downstream
//! shape validator emits through, in a form a host plugin can map onto its
//! own diagnostic API.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use text_size::TextRange;

use crate::source::{FileId, FileSet};
use crate::text::LineIndex;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Lowercase label, as rendered in plugin output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Hint => "hint",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finding with its source location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// The file containing this diagnostic.
    pub file: FileId,
    /// Source range the finding covers (byte offsets).
    pub range: TextRange,
    /// Severity level.
    pub severity: Severity,
    /// Code such as `UDP_101`.
    pub code: Option<SmolStr>,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(file: FileId, range: TextRange, message: impl Into<Arc<str>>) -> Self {
        Self {
            file,
            range,
            severity: Severity::Error,
            code: None,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(file: FileId, range: TextRange, message: impl Into<Arc<str>>) -> Self {
        Self {
            file,
            range,
            severity: Severity::Warning,
            code: None,
            message: message.into(),
        }
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<SmolStr>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Render as `path:line:col: severity [code]: message`.
    ///
    /// Falls back to the bare file handle when the registry has no path for
    /// the file, and omits line/col when it has no contents.
    pub fn render(&self, files: &FileSet) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        match (files.path(self.file), files.contents(self.file)) {
            (Some(path), Some(text)) => {
                let pos = LineIndex::new(&text).line_col(self.range.start());
                let _ = write!(out, "{}:{}", path.display(), pos);
            }
            (Some(path), None) => {
                let _ = write!(out, "{}", path.display());
            }
            _ => {
                let _ = write!(out, "{}", self.file);
            }
        }
        let _ = write!(out, ": {}", self.severity);
        if let Some(code) = &self.code {
            let _ = write!(out, " [{code}]");
        }
        let _ = write!(out, ": {}", self.message);
        out
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Codes for udp service-shape findings.
pub mod codes {
    /// Service declares neither an `onDatagram` nor an `onBytes` function.
    pub const MISSING_ENTRY_FUNCTION: &str = "UDP_101";
    /// Service declares a function the module does not recognize.
    pub const UNRECOGNIZED_FUNCTION: &str = "UDP_102";
    /// A recognized function declares a parameter of an unexpected type.
    pub const INVALID_PARAMETER: &str = "UDP_103";
    /// A recognized function declares an unexpected return type.
    pub const INVALID_RETURN_TYPE: &str = "UDP_104";
    /// A function that must be `remote` is declared without the qualifier.
    pub const MISSING_REMOTE_QUALIFIER: &str = "UDP_105";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics across one analysis run.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    by_file: FxHashMap<FileId, Vec<usize>>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        let idx = self.diagnostics.len();
        self.by_file.entry(diagnostic.file).or_default().push(idx);
        self.diagnostics.push(diagnostic);
    }

    /// Get all diagnostics, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get diagnostics for a specific file.
    pub fn diagnostics_for_file(&self, file: FileId) -> Vec<&Diagnostic> {
        self.by_file
            .get(&file)
            .map(|indices| indices.iter().map(|&idx| &self.diagnostics[idx]).collect())
            .unwrap_or_default()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Get the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        self.by_file.clear();
        std::mem::take(&mut self.diagnostics)
    }
}
