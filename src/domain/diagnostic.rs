use super::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Severity::Info => Tone::Green,
            Severity::Warning => Tone::Yellow,
            Severity::Error => Tone::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn info(msg: impl Into<String>) -> Self { Self { severity: Severity::Info, message: msg.into() } }
    pub fn warning(msg: impl Into<String>) -> Self { Self { severity: Severity::Warning, message: msg.into() } }
    pub fn error(msg: impl Into<String>) -> Self { Self { severity: Severity::Error, message: msg.into() } }

    pub fn format_line(&self) -> String {
        format!("{}: {}", self.severity.tag(), self.message)
    }
}
