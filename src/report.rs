use std::{fmt::Display, io::Write};

use num_traits::Zero;

use crate::mst::SpanningTree;

pub fn print_mst_results<O, N, W>(
    writer: &mut O,
    label: &str,
    tree: &SpanningTree<N, W>,
) -> anyhow::Result<()>
where
    O: Write,
    N: Display,
    W: Display + Zero + Clone,
{
    writeln!(writer)?;
    writeln!(writer, "Results for {} graph using Prim's algorithm:", label)?;
    writeln!(writer, "MST includes the following edges:")?;
    for edge in tree.edges() {
        writeln!(writer, "{}", edge)?;
    }
    writeln!(writer, "Total Weight of the MST: {}", tree.total_weight())?;
    Ok(())
}

#[cfg(test)]
mod test_report {
    use super::*;
    use crate::{mst::build_mst, samples};

    #[test]
    fn varied_weights_report() {
        let tree = build_mst(&samples::varied_weights()).unwrap();
        let mut out = Vec::new();
        print_mst_results(&mut out, "Varied Weights", &tree).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nResults for Varied Weights graph using Prim's algorithm:\n\
             MST includes the following edges:\n\
             A - B with weight 10\n\
             B - C with weight 15\n\
             C - D with weight 5\n\
             Total Weight of the MST: 30\n"
        );
    }

    #[test]
    fn single_node_report_has_no_edges() {
        let mut graph = crate::graph::Graph::<&str, i64>::new();
        graph.add_node("A");
        let tree = build_mst(&graph).unwrap();
        let mut out = Vec::new();
        print_mst_results(&mut out, "Lonely", &tree).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("MST includes the following edges:\nTotal Weight of the MST: 0\n"));
    }
}
