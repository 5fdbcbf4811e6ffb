//! Structured diagnostics produced while building playlists.

use std::fmt;

/// Severity of a [`Diagnostic`].
///
/// A closed set so consumers can match exhaustively. The pipeline itself only
/// routes severities to the collector; it never branches on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One diagnostic record: severity, detection line, human-readable message.
///
/// Line numbers are 1-based; 0 means the diagnostic is not tied to a
/// specific line. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    line: usize,
    message: String,
}

impl Diagnostic {
    /// Pure value construction; stores the three fields and nothing else.
    pub fn new<S: Into<String>>(severity: Severity, line: usize, message: S) -> Self {
        Self {
            severity,
            line,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}: {}", self.severity, self.message)
        } else {
            write!(f, "{} (line {}): {}", self.severity, self.line, self.message)
        }
    }
}

/// Accumulates diagnostics discovered anywhere in the pipeline.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of `Error`-severity entries.
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_holds_its_fields() {
        let diag = Diagnostic::new(Severity::Error, 7, "variant unreachable");

        assert_eq!(diag.severity(), Severity::Error);
        assert_eq!(diag.line(), 7);
        assert_eq!(diag.message(), "variant unreachable");
    }

    #[test]
    fn display_omits_line_zero() {
        let with_line = Diagnostic::new(Severity::Warning, 3, "odd tag");
        let without_line = Diagnostic::new(Severity::Error, 0, "not a playlist");

        assert_eq!(with_line.to_string(), "warning (line 3): odd tag");
        assert_eq!(without_line.to_string(), "error: not a playlist");
    }

    #[test]
    fn collector_counts_errors_only() {
        let mut diags = Diagnostics::new();
        diags.record(Diagnostic::new(Severity::Info, 0, "variant added"));
        diags.record(Diagnostic::new(Severity::Error, 4, "fetch failed"));
        diags.record(Diagnostic::new(Severity::Error, 9, "empty content"));

        assert_eq!(diags.len(), 3);
        assert_eq!(diags.error_count(), 2);
        assert!(!diags.is_empty());
    }
}
