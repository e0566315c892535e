//! Merging one spatial graph into another.
//!
//! The secondary graph's nodes (all, a selected subset, or all but an
//! excluded subset) are merged into the primary as points; afterwards the
//! secondary graph is unioned in, so its edges attach to the merged point
//! nodes that kept their identifiers.

use log::debug;

use super::batch::PointBatch;
use super::{MergeReport, spatial_points_merge};
use crate::config::MergeConfig;
use crate::error::{MergeError, Result};
use crate::graph::{NodeId, SpatialGraph};

/// Options for [`spatial_graph_merge`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphMergeOptions {
    /// Merge parameters.
    pub config: MergeConfig,
    /// Only these secondary nodes are merged (induced subgraph).
    pub merging_nodes: Vec<NodeId>,
    /// Every secondary node except these is merged.
    pub unmerged_nodes: Vec<NodeId>,
}

impl GraphMergeOptions {
    /// Options with the given merge parameters and no node selection.
    pub fn new(config: MergeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Builder-style setter for the merging-node list.
    pub fn with_merging_nodes<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeId>,
    {
        self.merging_nodes = nodes.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style setter for the unmerged-node list.
    pub fn with_unmerged_nodes<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeId>,
    {
        self.unmerged_nodes = nodes.into_iter().map(Into::into).collect();
        self
    }
}

/// Check compatibility and stage the secondary graph's point batch.
fn prepare(base: &SpatialGraph, other: &SpatialGraph, options: &GraphMergeOptions) -> Result<PointBatch> {
    options.config.validate()?;
    if base.is_directed() != other.is_directed() {
        return Err(MergeError::DirectednessMismatch);
    }
    if base.is_multigraph() != other.is_multigraph() {
        return Err(MergeError::MultigraphMismatch);
    }
    if !options.merging_nodes.is_empty() && !options.unmerged_nodes.is_empty() {
        return Err(MergeError::ConflictingNodeSelection);
    }

    if options.merging_nodes.is_empty() {
        PointBatch::from_graph_excluding(other, &options.unmerged_nodes)
    } else {
        let view = other.induced_subgraph(&options.merging_nodes)?;
        Ok(PointBatch::from_graph(&view))
    }
}

/// Merge `other` into `base` in place.
///
/// All validation (merge parameters, graph kinds, node selection) happens
/// before `base` is modified. `other` is never modified.
pub fn spatial_graph_merge(
    base: &mut SpatialGraph,
    other: &SpatialGraph,
    options: &GraphMergeOptions,
) -> Result<MergeReport> {
    let batch = prepare(base, other, options)?;
    debug!(
        "Graph merge: {} of {} secondary nodes staged",
        batch.len(),
        other.node_count()
    );

    let report = spatial_points_merge(base, &batch, &options.config)?;
    base.compose(other)?;
    Ok(report)
}

/// Merge `other` into a copy of `base`, leaving both inputs untouched.
pub fn spatial_graph_merged(
    base: &SpatialGraph,
    other: &SpatialGraph,
    options: &GraphMergeOptions,
) -> Result<SpatialGraph> {
    let mut merged = base.clone();
    spatial_graph_merge(&mut merged, other, options)?;
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point2D;
    use crate::graph::{Edge, GraphKind, Node};

    fn segment_graph(kind: GraphKind, a: (&str, f64, f64), b: (&str, f64, f64)) -> SpatialGraph {
        let mut g = SpatialGraph::new(kind);
        let pa = Point2D::new(a.1, a.2);
        let pb = Point2D::new(b.1, b.2);
        g.add_node(a.0, Node::new(pa));
        g.add_node(b.0, Node::new(pb));
        g.add_edge(a.0, b.0, Edge::straight(pa, pb)).unwrap();
        g
    }

    #[test]
    fn test_kind_mismatch_is_rejected_untouched() {
        let mut base = segment_graph(GraphKind::UNDIRECTED, ("A", 0.0, 0.0), ("B", 10.0, 0.0));
        let other = segment_graph(GraphKind::DIRECTED, ("C", 5.0, 1.0), ("D", 5.0, 3.0));
        let before = base.clone();

        let err = spatial_graph_merge(&mut base, &other, &GraphMergeOptions::default()).unwrap_err();
        assert_eq!(err, MergeError::DirectednessMismatch);
        assert_eq!(base, before);

        let other = segment_graph(GraphKind::MULTI_UNDIRECTED, ("C", 5.0, 1.0), ("D", 5.0, 3.0));
        let err = spatial_graph_merge(&mut base, &other, &GraphMergeOptions::default()).unwrap_err();
        assert_eq!(err, MergeError::MultigraphMismatch);
    }

    #[test]
    fn test_conflicting_selection() {
        let mut base = segment_graph(GraphKind::UNDIRECTED, ("A", 0.0, 0.0), ("B", 10.0, 0.0));
        let other = segment_graph(GraphKind::UNDIRECTED, ("C", 5.0, 1.0), ("D", 5.0, 3.0));
        let options = GraphMergeOptions::default()
            .with_merging_nodes(["C"])
            .with_unmerged_nodes(["D"]);

        let err = spatial_graph_merge(&mut base, &other, &options).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(base.node_count(), 2);
    }

    #[test]
    fn test_invalid_config_is_rejected_untouched() {
        let mut base = segment_graph(GraphKind::UNDIRECTED, ("A", 0.0, 0.0), ("B", 10.0, 0.0));
        let other = segment_graph(GraphKind::UNDIRECTED, ("C", 5.0, 1.0), ("D", 5.0, 3.0));
        let before = base.clone();
        let options = GraphMergeOptions::new(MergeConfig::default().with_intersection_prefix(""));

        let err = spatial_graph_merge(&mut base, &other, &options).unwrap_err();
        assert!(matches!(err, MergeError::InvalidConfig(_)));
        assert_eq!(base, before);
    }

    #[test]
    fn test_merging_nodes_subset() {
        let mut base = segment_graph(GraphKind::UNDIRECTED, ("A", 0.0, 0.0), ("B", 10.0, 0.0));
        let other = segment_graph(GraphKind::UNDIRECTED, ("C", 5.0, 1.0), ("D", 5.0, 3.0));
        let options = GraphMergeOptions::default().with_merging_nodes(["C"]);

        let report = spatial_graph_merge(&mut base, &other, &options).unwrap();
        assert_eq!(report.point_nodes(), 1);

        // C is anchored; D only arrives through the union, hanging off C
        assert!(base.has_edge(&"C".into(), &"intersection_C".into()));
        assert!(base.has_edge(&"C".into(), &"D".into()));
        assert!(!base.contains_node("intersection_D"));
    }
}
