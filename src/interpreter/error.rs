use std::fmt::{self, Display};

/// A runtime error. Unlike lexical/syntax errors, a runtime error
/// immediately aborts interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub message: String,
}

impl RuntimeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn undefined_variable(name: &str) -> Self {
        Self::new(format!("Undefined variable '{name}'"))
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RuntimeError {}
