//! Pending tool queue and fixpoint application
//!
//! A defined tool contributes nothing until its base language reaches
//! local. Tools wait here; after every graph change the queue is re-swept
//! until a full pass activates nothing more, which is the least fixpoint
//! of the "tool active => edge present => flags updated" rules.

use log::{debug, info};

use crate::domain::Tool;
use crate::graph::ReachabilityGraph;
use crate::registry::LanguageRegistry;

/// Tools defined but not yet contributing to the graph
#[derive(Debug, Default)]
pub struct PendingQueue {
    tools: Vec<Tool>,
}

impl PendingQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a freshly defined tool
    pub fn push(&mut self, tool: Tool) {
        self.tools.push(tool);
    }

    /// Number of tools still waiting for their base language
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True if no tools are waiting
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Apply every tool whose base language reaches local, then recompute
    /// the cached flags of all still-unresolved languages, repeating until
    /// a full pass changes nothing.
    ///
    /// Converges because the queue only shrinks and flags only flip
    /// false -> true. Tools whose base language never reaches local stay
    /// queued indefinitely; that is an unusable tool chain, not an error.
    pub fn apply_pending(&mut self, registry: &mut LanguageRegistry, graph: &mut ReachabilityGraph) {
        let mut changed = true;
        while changed {
            changed = false;
            let mut i = 0;
            while i < self.tools.len() {
                if !registry.reaches_local(self.tools[i].base_language()) {
                    i += 1;
                    continue;
                }

                let tool = self.tools.remove(i);
                let (from, to) = tool.edge();
                let from_id = registry.ensure(from);
                let to_id = registry.ensure(to);
                graph.add_edge(from_id, to_id);
                match &tool {
                    Tool::Interpreter { base, target } => {
                        info!("activated interpreter for {target} written in {base}");
                    }
                    Tool::Translator {
                        base,
                        source,
                        destination,
                    } => {
                        info!("activated translator from {source} to {destination} written in {base}");
                    }
                }

                refresh_routes(registry, graph);
                changed = true;
            }
        }
        debug!("fixpoint reached, {} tool(s) still pending", self.tools.len());
    }
}

/// Recompute the cached reaches-local flag for every language not yet
/// flagged. Flags are monotonic, so already-true entries are skipped.
fn refresh_routes(registry: &mut LanguageRegistry, graph: &ReachabilityGraph) {
    let local = registry.local();
    for id in registry.unresolved() {
        if graph.reaches(id, local) {
            debug!("language {} now reaches local", registry.name(id));
            registry.mark_reaches_local(id);
        }
    }
}
