//! Execution engine
//!
//! Composes the language registry, reachability graph, catalog and pending
//! queue into the four definition/execution operations. One engine instance
//! owns all state for the process lifetime; callers issue operations
//! sequentially.

use log::{debug, info};

use crate::catalog::Catalog;
use crate::domain::{Program, Tool};
use crate::error::{PolyrunError, Result};
use crate::graph::ReachabilityGraph;
use crate::pending::PendingQueue;
use crate::registry::LanguageRegistry;

/// Name of the natively executable language
pub const LOCAL_LANGUAGE: &str = "LOCAL";

/// The in-memory executability model
#[derive(Debug)]
pub struct Engine {
    registry: LanguageRegistry,
    graph: ReachabilityGraph,
    catalog: Catalog,
    pending: PendingQueue,
    local_name: String,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine whose local language is [`LOCAL_LANGUAGE`]
    pub fn new() -> Self {
        Self::with_local(LOCAL_LANGUAGE)
    }

    /// Create an engine with a custom local language name
    pub fn with_local(local: &str) -> Self {
        let registry = LanguageRegistry::new(local);
        let mut graph = ReachabilityGraph::new();
        graph.ensure_node(registry.local());
        Self {
            registry,
            graph,
            catalog: Catalog::new(),
            pending: PendingQueue::new(),
            local_name: local.to_string(),
        }
    }

    /// Name of this engine's local language
    pub fn local_language(&self) -> &str {
        &self.local_name
    }

    /// Define a program written in `base`. The base language is registered
    /// even when the program name turns out to be a duplicate.
    pub fn define_program(&mut self, name: &str, base: &str) -> Result<()> {
        self.ensure_language(base);
        self.catalog.add_program(name, base)?;
        info!("created program {name} written in {base}");
        Ok(())
    }

    /// Define an interpreter for `target` written in `base`. Triggers
    /// fixpoint application immediately.
    pub fn define_interpreter(&mut self, base: &str, target: &str) -> Result<()> {
        self.ensure_language(base);
        self.ensure_language(target);

        let tool = self.catalog.add_interpreter(base, target)?;
        info!("created interpreter for {target} written in {base}");
        self.enqueue(tool);
        Ok(())
    }

    /// Define a translator from `source` to `destination` written in
    /// `base`. The destination is registered as its own node with its own
    /// reaches-local flag. Triggers fixpoint application immediately.
    pub fn define_translator(&mut self, base: &str, source: &str, destination: &str) -> Result<()> {
        self.ensure_language(base);
        self.ensure_language(source);
        self.ensure_language(destination);

        let tool = self.catalog.add_translator(base, source, destination)?;
        info!("created translator from {source} to {destination} written in {base}");
        self.enqueue(tool);
        Ok(())
    }

    /// Whether `program` can currently run. Reads the cached reaches-local
    /// flag of the program's base language; no traversal happens here.
    pub fn execute(&self, program: &str) -> Result<bool> {
        let Some(record) = self.catalog.program(program) else {
            return Err(PolyrunError::UnknownProgram(program.to_string()));
        };
        let runnable = self.registry.reaches_local(&record.base_language);
        debug!(
            "execute {program}: base language {} reaches local = {runnable}",
            record.base_language
        );
        Ok(runnable)
    }

    /// All defined programs
    pub fn programs(&self) -> impl Iterator<Item = &Program> {
        self.catalog.programs()
    }

    /// All defined interpreters
    pub fn interpreters(&self) -> impl Iterator<Item = &Tool> {
        self.catalog.interpreters()
    }

    /// All defined translators
    pub fn translators(&self) -> impl Iterator<Item = &Tool> {
        self.catalog.translators()
    }

    /// (name, reaches_local) for every registered language
    pub fn languages(&self) -> impl Iterator<Item = (&str, bool)> {
        self.registry.iter()
    }

    /// Number of tools still waiting for their base language
    pub fn pending_tools(&self) -> usize {
        self.pending.len()
    }

    fn ensure_language(&mut self, name: &str) {
        let id = self.registry.ensure(name);
        self.graph.ensure_node(id);
    }

    fn enqueue(&mut self, tool: Tool) {
        self.pending.push(tool);
        self.pending
            .apply_pending(&mut self.registry, &mut self.graph);
    }

    #[cfg(test)]
    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
