//! Named undirected graph
use crate::error::GraphError;
use crate::parser::GraphDef;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// An undirected graph whose vertices carry stable string names.
///
/// Adjacency is held by a [`petgraph`] graph; a side map resolves names to node indices. Edges are
/// symmetric by construction. Self-loops are rejected, duplicate parallel edges are kept as given.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: UnGraph<String, ()>,
    names: HashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a parsed description. Every identifier chain contributes the edges of
    /// its path; a chain of one declares an isolated node.
    pub fn from_def(def: &GraphDef) -> Result<Self, GraphError> {
        let mut graph = Self::new();

        for path in def.paths() {
            if let [name] = path.nodes.as_slice() {
                graph.add_node(name);
                continue;
            }
            for pair in path.nodes.windows(2) {
                graph.add_edge(&pair[0], &pair[1])?;
            }
        }

        Ok(graph)
    }

    /// Declare a node. Declaring the same name twice returns the existing index.
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.names.get(name) {
            return index;
        }

        let index = self.inner.add_node(name.to_string());
        self.names.insert(name.to_string(), index);
        index
    }

    /// Add the undirected edge `{a, b}`, declaring endpoints as needed.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop(a.to_string()));
        }

        let a = self.add_node(a);
        let b = self.add_node(b);
        self.inner.add_edge(a, b, ());

        Ok(())
    }

    pub fn node_index(&self, name: &str) -> Result<NodeIndex, GraphError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    pub fn name(&self, index: NodeIndex) -> &str {
        &self.inner[index]
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn inner(&self) -> &UnGraph<String, ()> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chumsky::Parser;

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = Graph::new();

        let a = graph.add_node("a");
        let b = graph.add_node("b");

        assert_ne!(a, b);
        assert_eq!(graph.add_node("a"), a);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn add_edge_declares_endpoints() {
        let mut graph = Graph::new();

        graph.add_edge("a", "b").unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.name(graph.node_index("a").unwrap()), "a");
    }

    #[test]
    fn self_loop_is_rejected() {
        let mut graph = Graph::new();

        let err = graph.add_edge("a", "a").unwrap_err();

        assert!(matches!(err, GraphError::SelfLoop(name) if name == "a"));
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn unknown_node_is_an_error() {
        let graph = Graph::new();

        let err = graph.node_index("zz").unwrap_err();

        assert!(matches!(err, GraphError::UnknownNode(name) if name == "zz"));
    }

    #[test]
    fn from_def_builds_paths_and_isolated_nodes() {
        let def = crate::parser::parser()
            .parse("a -- b -- c\nd")
            .expect("cannot parse");
        let graph = Graph::from_def(&def).unwrap();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.node_index("d").is_ok());
    }

    #[test]
    fn from_def_rejects_self_loop() {
        let def = crate::parser::parser().parse("a -- a").expect("cannot parse");

        assert!(Graph::from_def(&def).is_err());
    }
}
