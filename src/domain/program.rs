//! Program record
//!
//! A program is a named artifact written in a single base language. It is
//! immutable after definition; whether it can run is derived entirely from
//! the reachability of its base language.

/// A user-defined program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Unique name the program was defined under
    pub name: String,

    /// Language the program is written in
    pub base_language: String,
}

impl Program {
    /// Create a new program record
    pub fn new(name: &str, base_language: &str) -> Self {
        Self {
            name: name.to_string(),
            base_language: base_language.to_string(),
        }
    }
}
