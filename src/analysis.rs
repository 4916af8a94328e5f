//! Separation analysis of a named graph
//!
//! Runs the biconnectivity traversal over a [`Graph`](crate::graph::Graph) and hydrates the
//! index-level results back into node names. Each call owns a fresh traversal state, so analysing
//! the same graph repeatedly yields identical results.
use crate::algorithm::Biconnected;
use crate::error::GraphError;
use crate::graph::Graph;
use derive_more::Display;
use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;

/// An undirected edge between two named nodes, printed `u-v`.
#[derive(Debug, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "{}-{}", _0, _1)]
pub struct Edge(pub String, pub String);

/// The outcome of one analysis run.
///
/// `articulations` lists cut vertices in node order. `components` lists biconnected components in
/// emission order; component numbering is the position in this vector. `bridges` are normalized so
/// the endpoint with the smaller node index comes first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub articulations: Vec<String>,
    pub bridges: Vec<Edge>,
    pub components: Vec<Vec<Edge>>,
}

/// Analyse the whole graph, visiting vertices in declaration order.
pub fn analyze(graph: &Graph) -> Analysis {
    let mut traversal = Biconnected::new(graph.inner());
    traversal.traverse(graph.inner());
    hydrate(graph, traversal)
}

/// Analyse the whole graph, rooting the first DFS tree at `start`.
pub fn analyze_from(graph: &Graph, start: &str) -> Result<Analysis, GraphError> {
    let start = graph.node_index(start)?;
    let mut traversal = Biconnected::new(graph.inner());
    traversal.traverse_from(graph.inner(), start);
    Ok(hydrate(graph, traversal))
}

fn hydrate(graph: &Graph, traversal: Biconnected<NodeIndex, FixedBitSet>) -> Analysis {
    let edge = |(a, b): (NodeIndex, NodeIndex)| Edge(graph.name(a).into(), graph.name(b).into());

    Analysis {
        articulations: traversal
            .articulations
            .iter()
            .map(|&n| graph.name(n).to_string())
            .collect(),
        bridges: traversal.bridges.into_iter().map(edge).collect(),
        components: traversal
            .components
            .into_iter()
            .map(|component| component.into_iter().map(edge).collect())
            .collect(),
    }
}
