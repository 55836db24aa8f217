//! Catalog of defined programs and tools
//!
//! Pure bookkeeping: programs by name, tools indexed by the language they
//! are written in. Responsible for duplicate detection; duplicates are
//! matched by full signature, not identity.

use std::collections::HashMap;

use crate::domain::{Program, Tool};
use crate::error::{PolyrunError, Result};

/// Everything the user has defined so far
#[derive(Debug, Default)]
pub struct Catalog {
    programs: HashMap<String, Program>,
    interpreters: HashMap<String, Vec<Tool>>,
    translators: HashMap<String, Vec<Tool>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a program, rejecting reused names
    pub fn add_program(&mut self, name: &str, base_language: &str) -> Result<()> {
        if self.programs.contains_key(name) {
            return Err(PolyrunError::DuplicateProgram(name.to_string()));
        }
        self.programs
            .insert(name.to_string(), Program::new(name, base_language));
        Ok(())
    }

    /// Look up a program by name
    pub fn program(&self, name: &str) -> Option<&Program> {
        self.programs.get(name)
    }

    /// Register an interpreter, rejecting an existing (base, target) pair
    pub fn add_interpreter(&mut self, base: &str, target: &str) -> Result<Tool> {
        let existing = self.interpreters.entry(base.to_string()).or_default();
        if existing
            .iter()
            .any(|tool| matches!(tool, Tool::Interpreter { target: t, .. } if t == target))
        {
            return Err(PolyrunError::DuplicateInterpreter {
                base: base.to_string(),
                target: target.to_string(),
            });
        }

        let tool = Tool::Interpreter {
            base: base.to_string(),
            target: target.to_string(),
        };
        existing.push(tool.clone());
        Ok(tool)
    }

    /// Register a translator, rejecting an existing (base, source,
    /// destination) triple
    pub fn add_translator(&mut self, base: &str, source: &str, destination: &str) -> Result<Tool> {
        let existing = self.translators.entry(base.to_string()).or_default();
        if existing.iter().any(|tool| {
            matches!(
                tool,
                Tool::Translator { source: s, destination: d, .. } if s == source && d == destination
            )
        }) {
            return Err(PolyrunError::DuplicateTranslator {
                base: base.to_string(),
                source: source.to_string(),
                destination: destination.to_string(),
            });
        }

        let tool = Tool::Translator {
            base: base.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
        };
        existing.push(tool.clone());
        Ok(tool)
    }

    /// All defined programs
    pub fn programs(&self) -> impl Iterator<Item = &Program> {
        self.programs.values()
    }

    /// All defined interpreters
    pub fn interpreters(&self) -> impl Iterator<Item = &Tool> {
        self.interpreters.values().flatten()
    }

    /// All defined translators
    pub fn translators(&self) -> impl Iterator<Item = &Tool> {
        self.translators.values().flatten()
    }
}
