use std::{fmt::Display, hash::Hash, io::Write};

use fxhash::FxHashMap;
use petgraph::graph::UnGraph;
use petgraph_graphml::GraphMl;

use crate::mst::SpanningTree;

pub fn to_petgraph<N, W>(tree: &SpanningTree<N, W>) -> UnGraph<N, W>
where
    N: Clone + Hash + Eq,
    W: Clone,
{
    let mut graph = UnGraph::new_undirected();
    let mut index = FxHashMap::default();
    for node in tree.nodes() {
        index.insert(node, graph.add_node(node.clone()));
    }
    for edge in tree.edges() {
        graph.add_edge(index[&edge.from], index[&edge.to], edge.weight.clone());
    }
    graph
}

/// Node labels and edge weights are written with their `Display` form.
pub fn write_graphml<N, W, O>(tree: &SpanningTree<N, W>, writer: O) -> anyhow::Result<()>
where
    N: Clone + Hash + Eq + Display,
    W: Clone + Display,
    O: Write,
{
    let graph = to_petgraph(tree);
    GraphMl::new(&graph)
        .pretty_print(true)
        .export_node_weights_display()
        .export_edge_weights_display()
        .to_writer(writer)?;
    Ok(())
}

#[cfg(test)]
mod test_export {
    use petgraph::visit::EdgeRef;

    use super::*;
    use crate::{mst::build_mst, samples};

    #[test]
    fn petgraph_tree_matches() {
        let tree = build_mst(&samples::dense()).unwrap();
        let graph = to_petgraph(&tree);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        let weight: i64 = graph.edge_references().map(|e| *e.weight()).sum();
        assert_eq!(weight, 4);
        assert!(!petgraph::algo::is_cyclic_undirected(&graph));
    }

    #[test]
    fn graphml_lists_tree() {
        let tree = build_mst(&samples::varied_weights()).unwrap();
        let mut out = Vec::new();
        write_graphml(&tree, &mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();
        assert!(xml.contains("edgedefault=\"undirected\""));
        assert_eq!(xml.matches("<node ").count(), 4);
        assert_eq!(xml.matches("<edge ").count(), 3);
        for label in ["A", "B", "C", "D"] {
            assert!(xml.contains(&format!(">{}</data>", label)));
        }
        for weight in ["10", "15", "5"] {
            assert!(xml.contains(&format!(">{}</data>", weight)));
        }
    }
}
