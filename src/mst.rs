use std::{cmp::Reverse, collections::BinaryHeap, fmt::Display, hash::Hash};

use fxhash::FxHashSet;
use num_traits::Zero;

use crate::{error::MstError, graph::Graph};

/// Candidate edge `source -- node` on the heap. Ordered by weight, then node, then source,
/// with the seed (`source == None`) in front of any real edge of equal weight.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry<N, W> {
    weight: W,
    node: N,
    source: Option<N>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MstEdge<N, W> {
    pub from: N,
    pub to: N,
    pub weight: W,
}

impl<N, W> MstEdge<N, W> {
    pub fn new(from: N, to: N, weight: W) -> Self {
        MstEdge { from, to, weight }
    }
}

impl<N: Display, W: Display> Display for MstEdge<N, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} with weight {}", self.from, self.to, self.weight)
    }
}

/// Edges accepted by Prim's algorithm, in acceptance order.
///
/// If the input graph was not connected the tree only spans the component of `start`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree<N, W> {
    start: N,
    edges: Vec<MstEdge<N, W>>,
    node_count: usize,
}

impl<N, W> SpanningTree<N, W> {
    #[cfg(test)]
    pub(crate) fn from_parts(start: N, edges: Vec<MstEdge<N, W>>, node_count: usize) -> Self {
        SpanningTree {
            start,
            edges,
            node_count,
        }
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn edges(&self) -> &[MstEdge<N, W>] {
        &self.edges
    }

    /// Number of nodes of the graph the tree was built from.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn reached(&self) -> usize {
        self.edges.len() + 1
    }

    pub fn is_spanning(&self) -> bool {
        self.reached() == self.node_count
    }

    /// The start node followed by the node each edge added to the tree.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        std::iter::once(&self.start).chain(self.edges.iter().map(|e| &e.to))
    }

    pub fn total_weight(&self) -> W
    where
        W: Zero + Clone,
    {
        self.edges
            .iter()
            .fold(W::zero(), |acc, e| acc + e.weight.clone())
    }

    pub fn ensure_spanning(self) -> Result<Self, MstError> {
        if self.is_spanning() {
            Ok(self)
        } else {
            Err(MstError::Disconnected {
                reached: self.reached(),
                total: self.node_count,
            })
        }
    }
}

/// Builds a minimum spanning tree rooted at the smallest node of `graph`.
pub fn build_mst<N, W>(graph: &Graph<N, W>) -> Result<SpanningTree<N, W>, MstError>
where
    N: Clone + Ord + Hash + Display,
    W: Clone + Ord + Zero,
{
    let start = graph.min_node().ok_or(MstError::EmptyGraph)?.clone();
    build_mst_from(graph, start)
}

/// Prim's algorithm with lazy deletion.
///
/// Entries whose node got visited after they were pushed stay on the heap and are
/// dropped when popped, so the heap never needs a decrease-key operation.
///
/// # Time complexity
///
/// - *O*(*E* log *E*)
pub fn build_mst_from<N, W>(graph: &Graph<N, W>, start: N) -> Result<SpanningTree<N, W>, MstError>
where
    N: Clone + Ord + Hash + Display,
    W: Clone + Ord + Zero,
{
    if graph.is_empty() {
        return Err(MstError::EmptyGraph);
    }
    if !graph.contains_node(&start) {
        return Err(MstError::UnknownStart(start.to_string()));
    }

    let mut visited = FxHashSet::default();
    let mut edges = Vec::with_capacity(graph.node_count() - 1);
    let mut frontier = BinaryHeap::new();
    let mut stale = 0;

    frontier.push(Reverse(FrontierEntry {
        weight: W::zero(),
        node: start.clone(),
        source: None,
    }));

    while let Some(Reverse(FrontierEntry {
        weight,
        node,
        source,
    })) = frontier.pop()
    {
        if visited.contains(&node) {
            stale += 1;
            continue;
        }
        visited.insert(node.clone());

        for (edge_weight, neighbor) in graph.neighbors(&node) {
            if !visited.contains(neighbor) {
                frontier.push(Reverse(FrontierEntry {
                    weight: edge_weight.clone(),
                    node: neighbor.clone(),
                    source: Some(node.clone()),
                }));
            }
        }

        if let Some(from) = source {
            log::trace!("accepted {} - {}", from, node);
            edges.push(MstEdge::new(from, node, weight));
        }
    }

    log::debug!(
        "spanning tree from {}: {} edges, {} stale frontier entries discarded",
        start,
        edges.len(),
        stale
    );

    let tree = SpanningTree {
        start,
        edges,
        node_count: graph.node_count(),
    };
    if !tree.is_spanning() {
        log::warn!(
            "graph is not connected: tree from {} reaches {} of {} nodes",
            tree.start,
            tree.reached(),
            tree.node_count
        );
    }
    Ok(tree)
}
