//! Tool definitions
//!
//! A tool is either an interpreter or a translator. Both are programs in
//! their own right: a tool only takes effect once its base language (the
//! language the tool itself is written in) is known to reach local.

/// A tool that extends which languages can be executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tool {
    /// Runs programs of `target` by being a `base` program itself.
    /// Once active it contributes the edge target -> base.
    Interpreter { base: String, target: String },

    /// Converts `source` programs into `destination` programs; written in
    /// `base`. Once active it contributes the edge source -> destination.
    Translator {
        base: String,
        source: String,
        destination: String,
    },
}

impl Tool {
    /// The language this tool is written in. A tool stays pending until
    /// this language reaches local.
    pub fn base_language(&self) -> &str {
        match self {
            Tool::Interpreter { base, .. } => base,
            Tool::Translator { base, .. } => base,
        }
    }

    /// The graph edge this tool contributes once active, as
    /// (from, to) language names.
    pub fn edge(&self) -> (&str, &str) {
        match self {
            Tool::Interpreter { base, target } => (target.as_str(), base.as_str()),
            Tool::Translator {
                source,
                destination,
                ..
            } => (source.as_str(), destination.as_str()),
        }
    }

    /// Languages referenced by this tool, for registration
    pub fn languages(&self) -> Vec<&str> {
        match self {
            Tool::Interpreter { base, target } => vec![base, target],
            Tool::Translator {
                base,
                source,
                destination,
            } => vec![base, source, destination],
        }
    }
}
