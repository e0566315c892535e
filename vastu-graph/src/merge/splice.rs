//! Edge splicing: second phase of a point merge.
//!
//! Each edge with recorded cuts is removed and replaced by a chain of
//! sub-edges through its intersection nodes, in ascending distance order:
//!
//! ```text
//! before:  u ───────────────────────── v
//!               ▲ n1 (d=3)    ▲ n2 (d=7)
//!
//! after:   u ──── n1 ──────── n2 ───── v
//! ```

use log::{debug, warn};

use super::placement::SplitTable;
use crate::error::Result;
use crate::graph::{Edge, NodeId, SpatialGraph};
use crate::split::split_at_distances;

/// Summary of a splicing pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpliceStats {
    /// Edges replaced.
    pub split_edges: usize,
    /// Sub-edges created.
    pub sub_edges: usize,
    /// Zero-length sub-edges from colliding projection distances.
    pub zero_length_edges: usize,
}

/// Apply every split request in `table` to `graph`.
pub fn splice_edges(
    graph: &mut SpatialGraph,
    table: &SplitTable,
    tolerance: f64,
) -> Result<SpliceStats> {
    let mut stats = SpliceStats::default();

    for (key, request) in table.iter() {
        if request.cuts.is_empty() {
            continue;
        }

        let mut cuts: Vec<&(NodeId, f64)> = request.cuts.iter().collect();
        cuts.sort_by(|a, b| a.1.total_cmp(&b.1));
        let distances: Vec<f64> = cuts.iter().map(|(_, d)| *d).collect();

        // Duplicate requests may already have removed it
        graph.remove_edge(key);

        let pieces = split_at_distances(&request.line, &distances, tolerance)?;

        // Undirected edges may store their geometry against the key order;
        // the chain has to start at the node the geometry starts on.
        let (mut first, mut last) = (key.source.clone(), key.target.clone());
        if !graph.is_directed() {
            let start = request.line.start();
            let from_source = start.distance_squared(graph.position(first.as_str())?);
            let from_target = start.distance_squared(graph.position(last.as_str())?);
            if from_target < from_source {
                std::mem::swap(&mut first, &mut last);
            }
        }

        let chain: Vec<&NodeId> = std::iter::once(&first)
            .chain(cuts.iter().map(|(n, _)| n))
            .chain(std::iter::once(&last))
            .collect();

        for (pair, piece) in chain.windows(2).zip(pieces) {
            if piece.length() == 0.0 {
                warn!(
                    "Zero-length sub-edge {} -> {} while splitting {}",
                    pair[0], pair[1], key
                );
                stats.zero_length_edges += 1;
            }
            graph.add_edge(pair[0].clone(), pair[1].clone(), Edge::new(piece))?;
            stats.sub_edges += 1;
        }

        debug!(
            "Split edge {} at {} point(s) into {} sub-edges",
            key,
            cuts.len(),
            cuts.len() + 1
        );
        stats.split_edges += 1;
    }

    Ok(stats)
}
