//! Structured parser diagnostics.

use super::ParseError;

/// An observable event from inside the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A syntax error was recorded.
    Error(ParseError),
    /// Recovery discarded `skipped` tokens and resumed at token index `resumed_at`.
    Recovered { skipped: usize, resumed_at: usize },
    /// A statement was parsed; `kind` is `ruleset`, `media` or `page`.
    Statement { kind: &'static str, depth: usize },
}

/// Receiver for parser diagnostics.
///
/// Any `FnMut(&Diagnostic)` closure is a sink.
pub trait DiagnosticSink {
    /// Handle one diagnostic.
    fn diagnostic(&mut self, diagnostic: &Diagnostic);
}

impl<F: FnMut(&Diagnostic)> DiagnosticSink for F {
    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// A sink that keeps every diagnostic.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    /// Diagnostics in the order they were emitted.
    pub entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recovery steps recorded.
    pub fn recoveries(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| matches!(d, Diagnostic::Recovered { .. }))
            .count()
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        self.entries.push(diagnostic.clone());
    }
}
