//! Directed reachability graph over language ids
//!
//! An edge A -> B means "A is executable if B is": a reachability query
//! starting at A must also explore B. The graph may contain cycles; the
//! traversal keeps a visited set so it always terminates.

use std::collections::VecDeque;

use crate::registry::LanguageId;

/// Adjacency-list graph keyed by `LanguageId`
#[derive(Debug, Default)]
pub struct ReachabilityGraph {
    adj: Vec<Vec<LanguageId>>,
}

impl ReachabilityGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow the node table so `id` is a valid node
    pub fn ensure_node(&mut self, id: LanguageId) {
        if id >= self.adj.len() {
            self.adj.resize_with(id + 1, Vec::new);
        }
    }

    /// Add the directed edge from -> to. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, from: LanguageId, to: LanguageId) {
        self.ensure_node(from.max(to));
        if !self.adj[from].contains(&to) {
            self.adj[from].push(to);
        }
    }

    /// Total number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// BFS from `start`, returning true iff `goal` is reachable. `start`
    /// reaches itself trivially.
    pub fn reaches(&self, start: LanguageId, goal: LanguageId) -> bool {
        if start == goal {
            return true;
        }
        if start >= self.adj.len() {
            return false;
        }

        let mut visited = vec![false; self.adj.len()];
        let mut frontier = VecDeque::new();
        visited[start] = true;
        frontier.push_back(start);

        while let Some(current) = frontier.pop_front() {
            for &next in &self.adj[current] {
                if next == goal {
                    return true;
                }
                if !visited[next] {
                    visited[next] = true;
                    frontier.push_back(next);
                }
            }
        }

        false
    }
}
