//! Random edge lists in the plain text graph format.
//!
//! ```text
//! <nodes> <edges>
//! <source> <target> [<weight>]
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::{IoContext, SetupError, SetupResult};
use crate::{Edge, Node, Weight};

/// Closed range of sample edge weights.
pub const WEIGHT_RANGE: (Weight, Weight) = (0.1, 10.0);

/// Size and kind of a graph to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphSpec {
    pub nodes: u32,
    pub edges: u32,
    pub weighted: bool,
}

impl GraphSpec {
    pub fn new(nodes: u32, edges: u32, weighted: bool) -> GraphSpec {
        GraphSpec { nodes, edges, weighted }
    }

    pub fn header(&self) -> String {
        format!("{} {}", self.nodes, self.edges)
    }
}

/// Rounds to two decimal places, the precision weights are written with.
pub fn round_weight(weight: Weight) -> Weight {
    (weight * 100.0).round() / 100.0
}

/// Draws `spec.edges` edges with endpoints in `[1, nodes]`, redrawing self loops.
/// Parallel edges and both directions of a pair are kept as drawn.
///
/// Fewer than two nodes admit no edge at all, so any non-zero edge request fails instead
/// of redrawing forever.
pub fn generate_edges<R: Rng>(rng: &mut R, spec: GraphSpec) -> SetupResult<Vec<Edge>> {
    if spec.edges == 0 {
        return Ok(Vec::new());
    }
    if spec.nodes < 2 {
        return Err(SetupError::TooFewNodes { nodes: spec.nodes, edges: spec.edges });
    }

    let dist = Uniform::new_inclusive(1 as Node, spec.nodes as Node);
    let dist_w = Uniform::new_inclusive(WEIGHT_RANGE.0, WEIGHT_RANGE.1);
    let mut edges = Vec::with_capacity(spec.edges as usize);
    while edges.len() < spec.edges as usize {
        let source = dist.sample(rng);
        let target = dist.sample(rng);
        if source == target {
            continue;
        }
        let edge = if spec.weighted {
            Edge::weighted(source, target, round_weight(dist_w.sample(rng)))
        } else {
            Edge::unweighted(source, target)
        };
        edges.push(edge);
    }
    Ok(edges)
}

/// Writes the header line followed by one line per edge.
pub fn write_graph<W: Write>(writer: &mut W, spec: GraphSpec, edges: &[Edge]) -> std::io::Result<()> {
    writeln!(writer, "{}", spec.header())?;
    for edge in edges {
        match edge.weight {
            Some(weight) => writeln!(writer, "{} {} {:.2}", edge.source, edge.target, weight)?,
            None => writeln!(writer, "{} {}", edge.source, edge.target)?,
        }
    }
    writer.flush()
}

/// Generates a graph and writes it to `path`, creating the parent directory first.
/// An interrupted write leaves a truncated file behind.
pub fn generate_sample_graph<R: Rng>(rng: &mut R, path: &Path, spec: GraphSpec) -> SetupResult<()> {
    let edges = generate_edges(rng, spec)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_path(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path).with_path(path)?);
    write_graph(&mut writer, spec, &edges).with_path(path)?;

    info!("generated {} ({} nodes, {} edges, weighted: {})", path.display(), spec.nodes, spec.edges, spec.weighted);
    println!("✓ Generated sample graph: {} ({} nodes, {} edges)", path.display(), spec.nodes, spec.edges);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_rounded_to_cents() {
        assert_eq!(round_weight(3.14159), 3.14);
        assert_eq!(round_weight(9.999), 10.0);
        assert_eq!(round_weight(0.1), 0.1);
    }

    #[test]
    fn single_node_request_fails_fast() {
        let mut rng = crate::default_rng(1);
        match generate_edges(&mut rng, GraphSpec::new(1, 3, false)) {
            Err(SetupError::TooFewNodes { nodes: 1, edges: 3 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn zero_edges_need_no_nodes() {
        let mut rng = crate::default_rng(1);
        assert!(generate_edges(&mut rng, GraphSpec::new(1, 0, true)).unwrap().is_empty());
    }

    #[test]
    fn two_nodes_only_produce_the_two_directions() {
        let mut rng = crate::default_rng(3);
        let edges = generate_edges(&mut rng, GraphSpec::new(2, 50, false)).unwrap();
        assert_eq!(edges.len(), 50);
        assert!(edges.iter().all(|e| (e.source, e.target) == (1, 2) || (e.source, e.target) == (2, 1)));
    }

    #[test]
    fn weighted_lines_carry_two_decimals() {
        let mut out = Vec::new();
        let edges = vec![Edge::weighted(1, 2, 3.5), Edge::unweighted(2, 3)];
        write_graph(&mut out, GraphSpec::new(3, 2, true), &edges).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3 2\n1 2 3.50\n2 3\n");
    }
}
