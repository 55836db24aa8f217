//! Language registry
//!
//! Interns language names to dense ids and tracks the cached "reaches
//! local" flag per language. The local language is pre-seeded and always
//! reachable; every other language starts unreachable and flips to
//! reachable at most once.

use std::collections::HashMap;

/// Dense index assigned to each registered language
pub type LanguageId = usize;

/// Registry of all languages seen so far
#[derive(Debug)]
pub struct LanguageRegistry {
    ids: HashMap<String, LanguageId>,
    names: Vec<String>,
    reaches_local: Vec<bool>,
    local: LanguageId,
}

impl LanguageRegistry {
    /// Create a registry pre-seeded with the local language, which is the
    /// only language that starts with reaches-local = true.
    pub fn new(local_name: &str) -> Self {
        let mut registry = Self {
            ids: HashMap::new(),
            names: Vec::new(),
            reaches_local: Vec::new(),
            local: 0,
        };
        registry.local = registry.ensure(local_name);
        registry.reaches_local[registry.local] = true;
        registry
    }

    /// Return the id for `name`, registering it with reaches-local = false
    /// if it was not seen before.
    pub fn ensure(&mut self, name: &str) -> LanguageId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        self.reaches_local.push(false);
        id
    }

    /// Look up a language id without registering
    pub fn id(&self, name: &str) -> Option<LanguageId> {
        self.ids.get(name).copied()
    }

    /// Name of a registered language
    pub fn name(&self, id: LanguageId) -> &str {
        &self.names[id]
    }

    /// Id of the local language
    pub fn local(&self) -> LanguageId {
        self.local
    }

    /// Cached reaches-local flag by name; false for unknown languages
    pub fn reaches_local(&self, name: &str) -> bool {
        self.id(name).is_some_and(|id| self.reaches_local[id])
    }

    /// Cached reaches-local flag by id
    pub fn reaches_local_id(&self, id: LanguageId) -> bool {
        self.reaches_local[id]
    }

    /// One-way transition: mark a language as reaching local. Never undone.
    pub fn mark_reaches_local(&mut self, id: LanguageId) {
        self.reaches_local[id] = true;
    }

    /// Ids of all languages whose flag is still false
    pub fn unresolved(&self) -> Vec<LanguageId> {
        (0..self.names.len())
            .filter(|&id| !self.reaches_local[id])
            .collect()
    }

    /// Number of registered languages
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if only pre-seeded state exists (never: local is always there)
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over (name, reaches_local) pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.names
            .iter()
            .zip(self.reaches_local.iter())
            .map(|(name, &flag)| (name.as_str(), flag))
    }
}
