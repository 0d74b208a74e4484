//! Error types and diagnostics
//!
//! This module provides error handling and diagnostic reporting
//! for the binding generator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for duk-weld operations
pub type WeldResult<T> = Result<T, WeldError>;

/// Why a single directive line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    /// Parameter type outside the supported set
    #[error("unknown parameter type `{ty}` for parameter `{param}`")]
    UnknownParameterType { ty: String, param: String },

    /// Return type outside the supported set
    #[error("unknown return type `{0}`")]
    UnknownReturnType(String),

    /// Function directive with the right marker but the wrong shape
    #[error("malformed declaration: {0}")]
    MalformedDeclaration(String),

    /// Namespace directive without a usable identifier
    #[error("malformed namespace directive: {0}")]
    MalformedNamespace(String),
}

impl DirectiveError {
    /// Short stable code used in diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            DirectiveError::UnknownParameterType { .. } => "W001",
            DirectiveError::UnknownReturnType(_) => "W002",
            DirectiveError::MalformedDeclaration(_) => "W003",
            DirectiveError::MalformedNamespace(_) => "W004",
        }
    }
}

/// Where a directive was found
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// File path or other origin label
    pub origin: String,
    /// Line number (1-indexed)
    pub line: usize,
}

impl SourceLocation {
    pub fn new(origin: impl Into<String>, line: usize) -> Self {
        Self {
            origin: origin.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.origin, self.line)
    }
}

/// Main error type for duk-weld
#[derive(Debug, Error)]
pub enum WeldError {
    /// A directive could not be processed
    #[error("{location}: {source}")]
    Directive {
        location: SourceLocation,
        #[source]
        source: DirectiveError,
    },

    /// IO error on a specific file
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input source not found
    #[error("Source file not found: {0}")]
    SourceNotFound(PathBuf),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarMissing(String),

    /// The run already stopped on an earlier error
    #[error("generation was aborted by an earlier error")]
    Aborted,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WeldError {
    /// Attach a location to a directive error
    pub fn directive(location: SourceLocation, source: DirectiveError) -> Self {
        WeldError::Directive { location, source }
    }

    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WeldError::Io {
            path: path.into(),
            source,
        }
    }
}

const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Directive dropped from the output
    Error,
    /// Output produced, but likely not what was intended
    Warning,
}

impl DiagnosticSeverity {
    /// Get display string
    pub fn display(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        }
    }

    /// Get ANSI color code
    pub fn color(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "\x1b[31m",   // Red
            DiagnosticSeverity::Warning => "\x1b[33m", // Yellow
        }
    }
}

/// A diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Message
    pub message: String,
    /// Source location
    pub location: Option<SourceLocation>,
    /// Diagnostic code (for categorization)
    pub code: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: DiagnosticSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            location: None,
            code: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Warning, message)
    }

    /// Build an error diagnostic from a rejected directive
    pub fn from_directive(location: SourceLocation, err: &DirectiveError) -> Self {
        Self::error(err.to_string())
            .at(location)
            .with_code(err.code())
    }

    /// Set the location
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        self.compose(false)
    }

    /// Format with ANSI colors
    pub fn format_colored(&self) -> String {
        self.compose(true)
    }

    /// `location: severity[code]: message`, optionally painted
    fn compose(&self, colored: bool) -> String {
        let paint = |style: &str, text: &str| {
            if colored {
                format!("{}{}{}", style, text, RESET)
            } else {
                text.to_string()
            }
        };

        let location = self
            .location
            .as_ref()
            .map(|loc| format!("{}: ", paint(DIM, &loc.to_string())))
            .unwrap_or_default();
        let code = self
            .code
            .as_ref()
            .map(|code| paint(DIM, &format!("[{}]", code)))
            .unwrap_or_default();

        format!(
            "{}{}{}: {}",
            location,
            paint(self.severity.color(), self.severity.display()),
            code,
            self.message
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Collector for diagnostics during a generation run
#[derive(Debug, Default, Clone)]
pub struct DiagnosticsCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take ownership of the collected diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.count(DiagnosticSeverity::Error)
    }

    /// Get warning count
    pub fn warning_count(&self) -> usize {
        self.count(DiagnosticSeverity::Warning)
    }

    fn count(&self, severity: DiagnosticSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Print all diagnostics to stderr
    pub fn print(&self) {
        for diagnostic in &self.diagnostics {
            eprintln!("{}", diagnostic.format_colored());
        }
    }

    /// Print summary
    pub fn print_summary(&self) {
        let errors = self.error_count();
        let warnings = self.warning_count();

        if errors > 0 || warnings > 0 {
            eprintln!("\n{} error(s), {} warning(s)", errors, warnings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_error_display() {
        let err = WeldError::directive(
            SourceLocation::new("defs.hpp", 12),
            DirectiveError::UnknownParameterType {
                ty: "double".to_string(),
                param: "x".to_string(),
            },
        );
        let text = err.to_string();
        assert!(text.starts_with("defs.hpp:12: "));
        assert!(text.contains("`double`"));
        assert!(matches!(
            err,
            WeldError::Directive {
                source: DirectiveError::UnknownParameterType { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_diagnostic_format() {
        let diag = Diagnostic::from_directive(
            SourceLocation::new("defs.hpp", 3),
            &DirectiveError::UnknownReturnType("float".to_string()),
        );

        assert_eq!(diag.severity, DiagnosticSeverity::Error);
        assert_eq!(
            diag.format(),
            "defs.hpp:3: error[W002]: unknown return type `float`"
        );
    }

    #[test]
    fn test_colored_format_matches_plain_text() {
        let diag = Diagnostic::warning("duplicate declaration of `f`")
            .at(SourceLocation::new("a.hpp", 2))
            .with_code("W010");

        let colored = diag.format_colored();
        assert!(colored.starts_with("\x1b[2ma.hpp:2\x1b[0m: \x1b[33mwarning\x1b[0m"));
        assert_eq!(
            colored.replace(DIM, "").replace(RESET, "").replace("\x1b[33m", ""),
            diag.format()
        );

        assert_eq!(Diagnostic::error("boom").format(), "error: boom");
    }

    #[test]
    fn test_diagnostics_collector() {
        let mut collector = DiagnosticsCollector::new();
        collector.add(Diagnostic::error("error 1"));
        collector.add(Diagnostic::warning("warning 1"));
        collector.add(Diagnostic::warning("warning 2"));

        assert!(collector.has_errors());
        assert_eq!(collector.error_count(), 1);
        assert_eq!(collector.warning_count(), 2);
        assert_eq!(collector.diagnostics().len(), 3);
    }
}
