use petgraph::visit::{
    GraphRef, IntoNeighbors, IntoNodeIdentifiers, NodeIndexable, VisitMap, Visitable,
};

// structure to enumerate articulations, bridges and biconnected components of
// an undirected graph
//
// - DFS tree: starting from a vertex v ∈ V, DFS is performed so that each vertex is visited at most
//   once. The tree consisting of the edges used is called a DFS tree. This tree is a rooted tree
//   with root `v`.
// - Back edges: An edge `(u, v)` such that `v` is an already discovered vertex with a smaller
//   discovery time than `u` and is not the DFS-tree parent of `u`.
// - Biconnected components: tree and back edges are pushed onto an explicit stack in traversal
//   order. Whenever an articulation condition fires for the tree edge just returned from, the run
//   of edges on top of the stack is popped off as one component; whatever remains after a DFS tree
//   is exhausted forms the last component of that connected component.
//
// The partition of edges into components is order dependent at articulation points where more than
// one back edge could close the stack. That is a property of the stack-based variant, not a bug.
//
// Self-loops never satisfy the back-edge condition and are ignored. A duplicate parallel edge may
// be pushed twice when its second occurrence qualifies as a back edge.
//
// The walk is recursive, so the call depth is bounded by the depth of the DFS tree (the node count
// for a path graph). Intended for graphs of modest size.
#[derive(Debug)]
pub struct Biconnected<N, VM> {
    used: VM,
    // Order in which the vertices were visited in the DFS, starting at 1
    ord: Vec<usize>,
    // Minimum ord of vertices reachable from vertex v through tree edges of the DFS tree and at
    // most one back edge
    low: Vec<usize>,
    // Index of the DFS-tree parent; usize::MAX for the root of each DFS tree
    parent: Vec<usize>,
    is_articulation: Vec<bool>,
    edge_stack: Vec<(N, N)>,
    clock: usize,
    // Articulation points in node-identifier order
    pub articulations: Vec<N>,
    pub bridges: Vec<(N, N)>,
    // Edge sets in emission order; within a component, edges appear in pop order
    pub components: Vec<Vec<(N, N)>>,
}

impl<N, VM> Biconnected<N, VM>
where
    N: Copy + PartialEq,
    VM: VisitMap<N>,
{
    pub fn new<G>(graph: G) -> Self
    where
        G: GraphRef + NodeIndexable + Visitable<NodeId = N, Map = VM>,
    {
        let capacity = graph.node_bound();

        Self {
            used: graph.visit_map(),
            ord: vec![usize::MAX; capacity],
            low: vec![usize::MAX; capacity],
            parent: vec![usize::MAX; capacity],
            is_articulation: vec![false; capacity],
            edge_stack: vec![],
            clock: 0,
            articulations: vec![],
            bridges: vec![],
            components: vec![],
        }
    }

    /// Walk every connected component, restarting from each vertex that has not been discovered
    /// yet. All state is reset first, so repeated calls on the same graph yield the same result.
    pub fn traverse<G>(&mut self, graph: G)
    where
        G: GraphRef
            + IntoNeighbors<NodeId = N>
            + IntoNodeIdentifiers<NodeId = N>
            + NodeIndexable
            + Visitable<NodeId = N, Map = VM>,
    {
        self.reset(graph);
        for node_id in graph.node_identifiers() {
            self.visit_tree(graph, node_id);
        }
        self.collect_articulations(graph);
    }

    /// Like [`traverse`](Self::traverse), but the first DFS tree is rooted at `start`. The rest of
    /// the graph is still covered afterwards, so the accumulated results are independent of the
    /// choice of the start vertex up to component ordering.
    pub fn traverse_from<G>(&mut self, graph: G, start: N)
    where
        G: GraphRef
            + IntoNeighbors<NodeId = N>
            + IntoNodeIdentifiers<NodeId = N>
            + NodeIndexable
            + Visitable<NodeId = N, Map = VM>,
    {
        self.reset(graph);
        self.visit_tree(graph, start);
        for node_id in graph.node_identifiers() {
            self.visit_tree(graph, node_id);
        }
        self.collect_articulations(graph);
    }

    fn reset<G>(&mut self, graph: G)
    where
        G: GraphRef + NodeIndexable + Visitable<NodeId = N, Map = VM>,
    {
        let capacity = graph.node_bound();

        graph.reset_map(&mut self.used);
        self.ord.clear();
        self.ord.resize(capacity, usize::MAX);
        self.low.clear();
        self.low.resize(capacity, usize::MAX);
        self.parent.clear();
        self.parent.resize(capacity, usize::MAX);
        self.is_articulation.clear();
        self.is_articulation.resize(capacity, false);
        self.edge_stack.clear();
        self.clock = 0;
        self.articulations.clear();
        self.bridges.clear();
        self.components.clear();
    }

    fn visit_tree<G>(&mut self, graph: G, node: N)
    where
        G: IntoNeighbors<NodeId = N> + NodeIndexable,
    {
        if self.used.is_visited(&node) {
            return;
        }

        self.dfs(graph, node, None);

        // The edges left on the stack form the last component of this connected component and are
        // drained in full, the stop rule does not apply here.
        if !self.edge_stack.is_empty() {
            let component = self.edge_stack.drain(..).rev().collect();
            self.components.push(component);
        }
    }

    fn dfs<G>(&mut self, graph: G, node: N, parent: Option<N>)
    where
        G: IntoNeighbors<NodeId = N> + NodeIndexable,
    {
        let idx = graph.to_index(node);
        let mut children = 0;

        self.used.visit(node);
        self.clock += 1;
        self.ord[idx] = self.clock;
        self.low[idx] = self.clock;

        for to_node in graph.neighbors(node) {
            let to_idx = graph.to_index(to_node);

            if !self.used.is_visited(&to_node) {
                children += 1;
                self.parent[to_idx] = idx;
                self.edge_stack.push((node, to_node));
                self.dfs(graph, to_node, Some(node));
                self.low[idx] = self.low[idx].min(self.low[to_idx]);

                // A root with a second DFS child separates the child subtrees. The condition holds
                // again for every further child, and each firing emits its own component.
                if parent.is_none() && children > 1 {
                    self.is_articulation[idx] = true;
                    self.emit_component(graph);
                }

                // A non-root vertex whose child subtree cannot reach above it
                if parent.is_some() && self.low[to_idx] >= self.ord[idx] {
                    self.is_articulation[idx] = true;
                    self.emit_component(graph);
                }

                if self.ord[idx] < self.low[to_idx] {
                    // bridge
                    if idx < to_idx {
                        self.bridges.push((node, to_node));
                    } else {
                        self.bridges.push((to_node, node));
                    }
                }
            } else if parent.filter(|p| *p == to_node).is_none() && self.ord[to_idx] < self.ord[idx]
            {
                // genuine back edge, not a re-visit of the parent or a forward sighting
                self.low[idx] = self.low[idx].min(self.ord[to_idx]);
                self.edge_stack.push((node, to_node));
            }
        }
    }

    fn emit_component<G>(&mut self, graph: G)
    where
        G: NodeIndexable<NodeId = N>,
    {
        let component = self.pop_component(graph);
        if !component.is_empty() {
            self.components.push(component);
        }
    }

    // Pop the run of edges that belongs to the component closed by the articulation point flagged
    // just before the call. Stops after the first popped edge whose DFS-tree parent endpoint
    // carries the articulation flag, which bounds the run to the edges pushed since the previous
    // emission.
    fn pop_component<G>(&mut self, graph: G) -> Vec<(N, N)>
    where
        G: NodeIndexable<NodeId = N>,
    {
        let mut component = vec![];

        while let Some((a, b)) = self.edge_stack.pop() {
            let a_idx = graph.to_index(a);
            let b_idx = graph.to_index(b);
            component.push((a, b));

            if (self.parent[b_idx] == a_idx && self.is_articulation[a_idx])
                || (self.parent[a_idx] == b_idx && self.is_articulation[b_idx])
            {
                break;
            }
        }

        component
    }

    fn collect_articulations<G>(&mut self, graph: G)
    where
        G: IntoNodeIdentifiers<NodeId = N> + NodeIndexable,
    {
        self.articulations = graph
            .node_identifiers()
            .filter(|node| self.is_articulation[graph.to_index(*node)])
            .collect();
    }
}
