use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Input,
    NotFound,
    Decode,
    InvalidPattern,
    Io,
}

impl ErrorClass {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorClass::Input => 2,
            ErrorClass::InvalidPattern => 2,
            ErrorClass::NotFound => 3,
            ErrorClass::Decode => 4,
            ErrorClass::Io => 5,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ErrorClass::Input => "INPUT",
            ErrorClass::NotFound => "NOT_FOUND",
            ErrorClass::Decode => "DECODE",
            ErrorClass::InvalidPattern => "PATTERN",
            ErrorClass::Io => "IO",
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("error[{}]: {message}", class.tag())]
pub struct ProfError {
    pub class: ErrorClass,
    pub message: String,
}

impl ProfError {
    pub fn new(class: ErrorClass, message: impl Into<String>) -> Self {
        Self { class, message: message.into() }
    }

    pub fn input(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Input, msg) }
    pub fn not_found(msg: impl Into<String>) -> Self { Self::new(ErrorClass::NotFound, msg) }
    pub fn decode(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Decode, msg) }
    pub fn invalid_pattern(msg: impl Into<String>) -> Self { Self::new(ErrorClass::InvalidPattern, msg) }
    pub fn io(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Io, msg) }

    pub fn is_decode(&self) -> bool {
        self.class == ErrorClass::Decode
    }
}
