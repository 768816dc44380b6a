use std::{fmt::Display, hash::Hash};

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::error::{MalformedKind, MstError};

/// Undirected weighted graph stored as adjacency lists of `(weight, neighbor)` pairs.
///
/// An undirected edge is expected in the lists of both endpoints. `add_edge`
/// takes care of that; `from_adjacency` trusts its input.
#[derive(Clone, Debug)]
pub struct Graph<N, W> {
    adjacency: FxHashMap<N, Vec<(W, N)>>,
}

impl<N, W> Default for Graph<N, W> {
    fn default() -> Self {
        Graph {
            adjacency: FxHashMap::default(),
        }
    }
}

impl<N, W> Graph<N, W>
where
    N: Clone + Eq + Hash,
    W: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the adjacency mapping as is. Neighbors without a list of their own
    /// become nodes with no incident edges.
    pub fn from_adjacency<I, A>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, A)>,
        A: IntoIterator<Item = (W, N)>,
    {
        let mut graph = Self::new();
        for (node, list) in adjacency {
            let list = list.into_iter().collect_vec();
            for (_, neighbor) in &list {
                graph.add_node(neighbor.clone());
            }
            graph.adjacency.entry(node).or_default().extend(list);
        }
        graph
    }

    #[cfg(test)]
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = Self::new();
        for (u, v, w) in edges {
            graph.add_edge(u, v, w);
        }
        graph
    }

    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Adds the edge to both adjacency lists.
    pub fn add_edge(&mut self, u: N, v: N, weight: W) {
        if u == v {
            self.adjacency.entry(u).or_default().push((weight, v));
            return;
        }
        self.adjacency
            .entry(u.clone())
            .or_default()
            .push((weight.clone(), v.clone()));
        self.adjacency.entry(v).or_default().push((weight, u));
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    #[cfg(test)]
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    pub fn neighbors(&self, node: &N) -> &[(W, N)] {
        self.adjacency
            .get(node)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// Every adjacency entry as `(node, neighbor, weight)`. Undirected edges show up twice.
    pub fn arcs(&self) -> impl Iterator<Item = (&N, &N, &W)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(u, list)| list.iter().map(move |(w, v)| (u, v, w)))
    }
}

impl<N, W> Graph<N, W>
where
    N: Clone + Ord + Hash,
    W: Clone,
{
    pub fn min_node(&self) -> Option<&N> {
        self.adjacency.keys().min()
    }
}

impl<N, W> Graph<N, W>
where
    N: Clone + Ord + Hash + Display,
    W: Clone + Eq,
{
    /// Checks for self-loops, repeated neighbors and edges listed by only one endpoint.
    /// Nodes are inspected in ascending order so the reported edge is stable.
    pub fn validate(&self) -> Result<(), MstError> {
        for u in self.adjacency.keys().sorted() {
            let list = self.neighbors(u);
            for (i, (w, v)) in list.iter().enumerate() {
                let malformed = |kind| MstError::Malformed {
                    kind,
                    from: u.to_string(),
                    to: v.to_string(),
                };
                if u == v {
                    return Err(malformed(MalformedKind::SelfLoop));
                }
                if list[..i].iter().any(|(_, x)| x == v) {
                    return Err(malformed(MalformedKind::DuplicateEdge));
                }
                if !self
                    .neighbors(v)
                    .iter()
                    .any(|(back_w, back)| back == u && back_w == w)
                {
                    return Err(malformed(MalformedKind::Asymmetric));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_graph {
    use super::*;

    #[test]
    fn add_edge_symmetrizes() {
        let mut g = Graph::new();
        g.add_edge('a', 'b', 3);
        assert_eq!(g.neighbors(&'a'), &[(3, 'b')]);
        assert_eq!(g.neighbors(&'b'), &[(3, 'a')]);
        assert_eq!(g.node_count(), 2);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn adjacency_keeps_order() {
        let g = Graph::from_adjacency(vec![("A", vec![(2, "B"), (1, "C")])]);
        assert_eq!(g.neighbors(&"A"), &[(2, "B"), (1, "C")]);
        assert_eq!(g.node_count(), 3);
        assert!(g.contains_node(&"C"));
        assert!(g.neighbors(&"C").is_empty());
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let g: Graph<u32, u32> = Graph::from_edges(vec![(0, 1, 1)]);
        assert!(g.neighbors(&7).is_empty());
        assert_eq!(g.arcs().count(), 2);
    }

    #[test]
    fn min_node_of_empty_graph() {
        let g: Graph<u32, u32> = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.min_node(), None);
    }

    #[test]
    fn self_loop_is_malformed() {
        let g = Graph::from_edges(vec![(1, 2, 5), (2, 2, 1)]);
        assert_eq!(
            g.validate(),
            Err(MstError::Malformed {
                kind: MalformedKind::SelfLoop,
                from: "2".into(),
                to: "2".into()
            })
        );
    }

    #[test]
    fn duplicate_edge_is_malformed() {
        let g = Graph::from_edges(vec![(1, 2, 5), (1, 2, 7)]);
        assert!(matches!(
            g.validate(),
            Err(MstError::Malformed {
                kind: MalformedKind::DuplicateEdge,
                ..
            })
        ));
    }

    #[test]
    fn one_sided_edge_is_malformed() {
        let g = Graph::from_adjacency(vec![(1, vec![(4, 2)]), (2, vec![])]);
        assert!(matches!(
            g.validate(),
            Err(MstError::Malformed {
                kind: MalformedKind::Asymmetric,
                ..
            })
        ));
    }

    #[test]
    fn mismatched_weights_are_malformed() {
        let g = Graph::from_adjacency(vec![(1, vec![(4, 2)]), (2, vec![(5, 1)])]);
        assert!(matches!(
            g.validate(),
            Err(MstError::Malformed {
                kind: MalformedKind::Asymmetric,
                ..
            })
        ));
    }
}
