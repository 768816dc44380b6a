use std::{fmt::Display, hash::Hash};

use anyhow::bail;
use fxhash::FxHashMap;
use itertools::Itertools;
use num_traits::Zero;
use pathfinding::undirected::kruskal::kruskal;
use petgraph::unionfind::UnionFind;

use crate::{graph::Graph, mst::SpanningTree};

/// Adds the tree edges one by one to a union-find; a cycle shows up as an edge
/// whose endpoints are already in the same set.
pub fn is_acyclic<N, W>(tree: &SpanningTree<N, W>) -> bool
where
    N: Hash + Eq,
{
    let mut index = FxHashMap::default();
    for edge in tree.edges() {
        for node in [&edge.from, &edge.to] {
            let next = index.len();
            index.entry(node).or_insert(next);
        }
    }

    let mut sets = UnionFind::<usize>::new(index.len());
    tree.edges()
        .iter()
        .all(|edge| sets.union(index[&edge.from], index[&edge.to]))
}

/// Weight of a minimum spanning forest computed independently with Kruskal's algorithm.
pub fn kruskal_weight<N, W>(graph: &Graph<N, W>) -> W
where
    N: Clone + Ord + Hash,
    W: Clone + Ord + Zero,
{
    let edges = graph
        .arcs()
        .filter(|(u, v, _)| u < v)
        .map(|(u, v, w)| (u.clone(), v.clone(), w.clone()))
        .collect_vec();
    kruskal(&edges).fold(W::zero(), |acc, (_, _, w)| acc + w)
}

pub fn check<N, W>(graph: &Graph<N, W>, tree: &SpanningTree<N, W>) -> anyhow::Result<()>
where
    N: Clone + Ord + Hash + Display,
    W: Clone + Ord + Zero + Display,
{
    if !is_acyclic(tree) {
        bail!("tree from {} contains a cycle", tree.start());
    }
    if let Some(node) = tree.nodes().find(|node| !graph.contains_node(node)) {
        bail!("tree touches {} which is not in the graph", node);
    }
    if tree.nodes().unique().count() != tree.reached() {
        bail!("tree from {} visits a node twice", tree.start());
    }
    // Kruskal covers every component, so the weights only compare on connected input
    if tree.is_spanning() {
        let expected = kruskal_weight(graph);
        let actual = tree.total_weight();
        if actual != expected {
            bail!(
                "tree weight {} differs from Kruskal weight {}",
                actual,
                expected
            );
        }
    }
    log::debug!(
        "verified tree from {}: {} edges, weight {}",
        tree.start(),
        tree.edges().len(),
        tree.total_weight()
    );
    Ok(())
}
