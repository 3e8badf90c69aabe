use crate::domain::{Diagnostic, Severity};
use crate::ports::DiagnosticSink;

/// Writes `severity: message` lines to stderr.
pub struct StderrDiagnostics {
    color: bool,
}

impl StderrDiagnostics {
    pub fn new(color: bool) -> Self { Self { color } }

    pub fn format(&self, diagnostic: &Diagnostic) -> String {
        let line = diagnostic.format_line();
        if self.color {
            diagnostic.severity.tone().paint(&line)
        } else {
            line
        }
    }
}

impl DiagnosticSink for StderrDiagnostics {
    fn emit(&mut self, diagnostic: Diagnostic) {
        eprintln!("{}", self.format(&diagnostic));
    }
}

/// Keeps diagnostics in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    pub diagnostics: Vec<Diagnostic>,
}

impl RecordingDiagnostics {
    pub fn lines(&self) -> Vec<String> {
        self.diagnostics.iter().map(Diagnostic::format_line).collect()
    }

    pub fn infos(&self) -> Vec<String> { self.messages(Severity::Info) }
    pub fn warnings(&self) -> Vec<String> { self.messages(Severity::Warning) }
    pub fn errors(&self) -> Vec<String> { self.messages(Severity::Error) }

    fn messages(&self, severity: Severity) -> Vec<String> {
        self.diagnostics.iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message.clone())
            .collect()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
