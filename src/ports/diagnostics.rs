use crate::domain::Diagnostic;

pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}
