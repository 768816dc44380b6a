use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{bail, Context};
use itertools::Itertools;
use num_rational::BigRational;

use crate::graph::Graph;

/// Arbitrary precision, so sums of weights with large denominators cannot overflow.
pub type Weight = BigRational;
pub type EdgeListGraph = Graph<String, Weight>;

const MAX_DECIMAL_SCALE: usize = 1000;

/// Accepts `3`, `3/2` and decimal literals like `2.5` or `1e-30`, all read exactly.
pub fn parse_weight(token: &str) -> anyhow::Result<Weight> {
    if let Ok(weight) = token.parse::<Weight>() {
        return Ok(weight);
    }
    parse_decimal(token).with_context(|| format!("invalid weight '{}'", token))
}

/// Rewrites `[-]int.frac[e exp]` as `digits/10^k` and parses that as a fraction.
fn parse_decimal(token: &str) -> anyhow::Result<Weight> {
    let (sign, unsigned) = match token.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", token.strip_prefix('+').unwrap_or(token)),
    };
    let (mantissa, exponent) = match unsigned.find(|c| c == 'e' || c == 'E') {
        Some(i) => (&unsigned[..i], unsigned[i + 1..].parse::<i64>()?),
        None => (unsigned, 0),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int.is_empty() && frac.is_empty()
        || !int.chars().chain(frac.chars()).all(|c| c.is_ascii_digit())
    {
        bail!("not a decimal number");
    }

    let scale = match (frac.len() as i64).checked_sub(exponent) {
        Some(scale) if scale.unsigned_abs() as usize <= MAX_DECIMAL_SCALE => scale,
        _ => bail!("exponent out of range"),
    };
    let zeros = "0".repeat(scale.unsigned_abs() as usize);
    let fraction = if scale >= 0 {
        format!("{}{}{}/1{}", sign, int, frac, zeros)
    } else {
        format!("{}{}{}{}/1", sign, int, frac, zeros)
    };
    Ok(fraction.parse::<Weight>()?)
}

/// Reads one edge `u v weight` per line. A line holding a single name declares an
/// isolated node. Everything after `#` is ignored.
pub fn read_edge_list<R: BufRead>(reader: R) -> anyhow::Result<EdgeListGraph> {
    let mut graph = Graph::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.split('#').next().unwrap_or("");
        let tokens = content.split_whitespace().collect_vec();
        match tokens.as_slice() {
            [] => {}
            [node] => graph.add_node(node.to_string()),
            [u, v, w] => {
                let weight = parse_weight(w).with_context(|| format!("line {}", i + 1))?;
                graph.add_edge(u.to_string(), v.to_string(), weight);
            }
            _ => bail!(
                "line {}: expected 'node node weight', found '{}'",
                i + 1,
                content.trim()
            ),
        }
    }
    Ok(graph)
}

pub fn load_edge_list(path: &Path) -> anyhow::Result<EdgeListGraph> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    read_edge_list(BufReader::new(file)).with_context(|| format!("cannot read {}", path.display()))
}
