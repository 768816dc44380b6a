use crate::graph::Graph;

pub type SampleGraph = Graph<&'static str, i64>;

///  A --1-- B --3-- C
pub fn sparse() -> SampleGraph {
    Graph::from_adjacency(vec![
        ("A", vec![(1, "B")]),
        ("B", vec![(1, "A"), (3, "C")]),
        ("C", vec![(3, "B")]),
    ])
}

/// Complete graph on four nodes.
pub fn dense() -> SampleGraph {
    Graph::from_adjacency(vec![
        ("A", vec![(2, "B"), (4, "C"), (1, "D")]),
        ("B", vec![(2, "A"), (3, "C"), (5, "D")]),
        ("C", vec![(4, "A"), (3, "B"), (1, "D")]),
        ("D", vec![(1, "A"), (5, "B"), (1, "C")]),
    ])
}

/// Triangle A-B-C with a pendant D hanging off C.
pub fn varied_weights() -> SampleGraph {
    Graph::from_adjacency(vec![
        ("A", vec![(10, "B"), (20, "C")]),
        ("B", vec![(10, "A"), (15, "C")]),
        ("C", vec![(20, "A"), (15, "B"), (5, "D")]),
        ("D", vec![(5, "C")]),
    ])
}

pub fn all() -> Vec<(&'static str, SampleGraph)> {
    vec![
        ("Sparse", sparse()),
        ("Dense", dense()),
        ("Varied Weights", varied_weights()),
    ]
}

#[cfg(test)]
mod test_samples {
    use super::*;

    #[test]
    fn samples_are_well_formed() {
        for (label, graph) in all() {
            assert!(graph.validate().is_ok(), "{} graph is malformed", label);
        }
    }

    #[test]
    fn sample_sizes() {
        let sizes: Vec<_> = all().iter().map(|(_, g)| g.node_count()).collect();
        assert_eq!(sizes, vec![3, 4, 4]);
    }
}
