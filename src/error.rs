//! Error types for polyrun
//!
//! Centralized error handling using thiserror. All definition and execution
//! failures are expected conditions surfaced as values, never panics.

use std::fmt;

/// All error types that can occur in the polyrun engine
#[derive(Debug, PartialEq, Eq)]
pub enum PolyrunError {
    /// Program name already registered
    DuplicateProgram(String),

    /// Interpreter with the same (base, target) signature already registered
    DuplicateInterpreter { base: String, target: String },

    /// Translator with the same (base, source, destination) signature already registered
    DuplicateTranslator {
        base: String,
        source: String,
        destination: String,
    },

    /// execute() referenced a program name that was never defined
    UnknownProgram(String),
}

// Implemented by hand instead of via thiserror's derive: the derive treats a
// field named `source` as the error source, which does not compile for a
// `String` field.
impl fmt::Display for PolyrunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyrunError::DuplicateProgram(name) => {
                write!(f, "program '{name}' already exists")
            }
            PolyrunError::DuplicateInterpreter { base, target } => {
                write!(f, "interpreter for '{target}' written in '{base}' already exists")
            }
            PolyrunError::DuplicateTranslator {
                base,
                source,
                destination,
            } => {
                write!(
                    f,
                    "translator from '{source}' to '{destination}' written in '{base}' already exists"
                )
            }
            PolyrunError::UnknownProgram(name) => {
                write!(f, "program '{name}' does not exist")
            }
        }
    }
}

impl std::error::Error for PolyrunError {}

/// Result type alias for polyrun operations
pub type Result<T> = std::result::Result<T, PolyrunError>;
