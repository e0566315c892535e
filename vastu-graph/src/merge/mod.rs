//! Spatial merging of points and graphs into a spatial graph.
//!
//! # Merge Pipeline
//!
//! 1. **Place** ([`place_points`]): add each point as a node, find its
//!    nearest edge, anchor it on an endpoint or a new intersection node, and
//!    record where edges must be cut.
//! 2. **Splice** ([`splice_edges`]): replace every edge with recorded cuts by
//!    its chain of sub-edges.
//!
//! Cuts are only applied after all points are placed, so the edge set is
//! never restructured while it is being searched.
//!
//! # Example
//!
//! ```rust
//! use vastu_graph::core::Point2D;
//! use vastu_graph::graph::{Edge, Node, SpatialGraph};
//! use vastu_graph::merge::{BatchPoint, PointBatch, spatial_points_merge};
//! use vastu_graph::MergeConfig;
//!
//! let mut graph = SpatialGraph::undirected();
//! graph.add_node("A", Node::new(Point2D::new(0.0, 0.0)));
//! graph.add_node("B", Node::new(Point2D::new(10.0, 0.0)));
//! graph
//!     .add_edge("A", "B", Edge::straight(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)))
//!     .unwrap();
//!
//! let batch: PointBatch = vec![BatchPoint::new("p", Point2D::new(5.0, 1.0))]
//!     .into_iter()
//!     .collect();
//! let report = spatial_points_merge(&mut graph, &batch, &MergeConfig::default()).unwrap();
//!
//! assert_eq!(report.intersection_nodes, 1);
//! assert_eq!(graph.edge_count(), 3);
//! ```

mod batch;
mod direction;
mod graph_merge;
mod placement;
mod splice;

pub use batch::{BatchPoint, PointBatch};
pub use direction::{MergeDirection, ParseDirectionError, connection_pairs};
pub use graph_merge::{GraphMergeOptions, spatial_graph_merge, spatial_graph_merged};
pub use placement::{AnchorKind, Placement, SplitRequest, SplitTable, place_points};
pub use splice::{SpliceStats, splice_edges};

use log::debug;

use crate::config::MergeConfig;
use crate::error::Result;
use crate::graph::SpatialGraph;

/// Result of a merge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MergeReport {
    /// One entry per merged point, in batch order.
    pub placements: Vec<Placement>,
    /// Intersection nodes created.
    pub intersection_nodes: usize,
    /// Points anchored on an existing endpoint.
    pub endpoint_snaps: usize,
    /// Splicing summary.
    pub splice: SpliceStats,
}

impl MergeReport {
    fn new(placements: Vec<Placement>, splice: SpliceStats) -> Self {
        let intersection_nodes = placements.iter().filter(|p| p.is_interior()).count();
        Self {
            endpoint_snaps: placements.len() - intersection_nodes,
            intersection_nodes,
            placements,
            splice,
        }
    }

    /// Number of point nodes added.
    pub fn point_nodes(&self) -> usize {
        self.placements.len()
    }
}

/// Merge `batch` into `graph` in place.
///
/// Each point is projected on its nearest edge; interior projections split
/// that edge through a new intersection node, other projections reuse the
/// closer endpoint. See the [module docs](self) for the two phases.
///
/// An out-of-range `config` fails with [`MergeError::InvalidConfig`]
/// before the graph is touched. Later errors from the placement phase leave
/// already-placed points in the graph; no edge has been split at that point.
///
/// [`MergeError::InvalidConfig`]: crate::error::MergeError::InvalidConfig
pub fn spatial_points_merge(
    graph: &mut SpatialGraph,
    batch: &PointBatch,
    config: &MergeConfig,
) -> Result<MergeReport> {
    config.validate()?;
    let (placements, table) = place_points(graph, batch, config)?;
    let splice = splice_edges(graph, &table, config.length_tolerance)?;
    let report = MergeReport::new(placements, splice);

    debug!(
        "Merged {} points: {} intersections, {} endpoint snaps, {} edges split into {}",
        report.point_nodes(),
        report.intersection_nodes,
        report.endpoint_snaps,
        report.splice.split_edges,
        report.splice.sub_edges
    );

    Ok(report)
}

/// Merge `batch` into a copy of `graph`, leaving `graph` untouched.
pub fn spatial_points_merged(
    graph: &SpatialGraph,
    batch: &PointBatch,
    config: &MergeConfig,
) -> Result<SpatialGraph> {
    let mut merged = graph.clone();
    spatial_points_merge(&mut merged, batch, config)?;
    Ok(merged)
}
