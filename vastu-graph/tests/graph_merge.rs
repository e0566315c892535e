//! Merging a secondary spatial graph into a street grid.

mod common;

use common::{EPS, grid, single_edge};
use vastu_graph::core::Point2D;
use vastu_graph::graph::{AttrValue, Edge, GraphKind, Node, NodeId, SpatialGraph};
use vastu_graph::{
    GraphMergeOptions, MergeConfig, MergeError, spatial_graph_merge, spatial_graph_merged,
};

/// Two buildings joined by a footpath, both off the grid streets.
fn footpath(kind: GraphKind) -> SpatialGraph {
    let mut g = SpatialGraph::new(kind);
    let (a, b) = (Point2D::new(4.0, 2.0), Point2D::new(4.0, 8.0));
    g.add_node(
        "school",
        Node::with_attributes(a, [("amenity".to_string(), AttrValue::from("school"))].into()),
    );
    g.add_node("park", Node::new(b));
    g.add_edge("school", "park", Edge::straight(a, b)).unwrap();
    g
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_incompatible_graphs_are_rejected() {
    let base = grid(3, 10.0, GraphKind::UNDIRECTED);
    let cases = [
        (GraphKind::DIRECTED, MergeError::DirectednessMismatch),
        (GraphKind::MULTI_UNDIRECTED, MergeError::MultigraphMismatch),
    ];

    for (kind, expected) in cases {
        let mut g = base.clone();
        let err = spatial_graph_merge(&mut g, &footpath(kind), &GraphMergeOptions::default())
            .unwrap_err();
        assert_eq!(err, expected);
        assert!(err.is_configuration());
        assert_eq!(g, base);
    }
}

#[test]
fn test_unknown_selection_is_rejected_untouched() {
    let base = grid(3, 10.0, GraphKind::UNDIRECTED);
    let other = footpath(GraphKind::UNDIRECTED);

    for options in [
        GraphMergeOptions::default().with_merging_nodes(["library"]),
        GraphMergeOptions::default().with_unmerged_nodes(["library"]),
    ] {
        let mut g = base.clone();
        let err = spatial_graph_merge(&mut g, &other, &options).unwrap_err();
        assert_eq!(err, MergeError::UnknownNode(NodeId::from("library")));
        assert_eq!(g, base);
    }
}

// ============================================================================
// Node selection
// ============================================================================

#[test]
fn test_merge_all_nodes_then_union() {
    let mut g = grid(3, 10.0, GraphKind::UNDIRECTED);
    let report =
        spatial_graph_merge(&mut g, &footpath(GraphKind::UNDIRECTED), &GraphMergeOptions::default())
            .unwrap();

    assert_eq!(report.point_nodes(), 2);
    assert!(g.has_edge(&"school".into(), &"intersection_school".into()));
    assert!(g.has_edge(&"park".into(), &"intersection_park".into()));
    // Footpath arrives with the union
    assert!(g.has_edge(&"school".into(), &"park".into()));
    assert_eq!(
        g.node("school").unwrap().attributes["amenity"],
        AttrValue::from("school")
    );
    g.verify_geometry(EPS).unwrap();
}

#[test]
fn test_unmerged_nodes_only_arrive_through_union() {
    let mut g = grid(3, 10.0, GraphKind::UNDIRECTED);
    let options = GraphMergeOptions::default().with_unmerged_nodes(["park"]);
    let report = spatial_graph_merge(&mut g, &footpath(GraphKind::UNDIRECTED), &options).unwrap();

    assert_eq!(report.point_nodes(), 1);
    assert!(g.contains_node("park"));
    assert!(!g.contains_node("intersection_park"));
    assert!(g.has_edge(&"school".into(), &"park".into()));
}

#[test]
fn test_config_is_forwarded() {
    let mut g = grid(3, 10.0, GraphKind::UNDIRECTED);
    let options = GraphMergeOptions::new(MergeConfig::default().with_intersection_prefix("link_"));
    spatial_graph_merge(&mut g, &footpath(GraphKind::UNDIRECTED), &options).unwrap();

    assert!(g.contains_node("link_school"));
    assert!(g.contains_node("link_park"));
}

// ============================================================================
// Union semantics
// ============================================================================

#[test]
fn test_shared_names_keep_primary_data() {
    let mut base = single_edge(GraphKind::UNDIRECTED);
    base.add_node(
        "A",
        Node::with_attributes(
            Point2D::new(0.0, 0.0),
            [("source".to_string(), AttrValue::from("primary"))].into(),
        ),
    );

    let mut other = SpatialGraph::undirected();
    other.add_node(
        "A",
        Node::with_attributes(
            Point2D::new(3.0, 2.0),
            [("source".to_string(), AttrValue::from("secondary"))].into(),
        ),
    );

    let report = spatial_graph_merge(&mut base, &other, &GraphMergeOptions::default()).unwrap();

    // The secondary "A" is merged under a fresh name
    assert_eq!(report.placements[0].point.as_str(), "A_1");
    assert_eq!(
        base.node("A").unwrap().attributes["source"],
        AttrValue::from("primary")
    );
    assert_eq!(base.position("A").unwrap(), Point2D::new(0.0, 0.0));
}

#[test]
fn test_multigraph_union_appends_parallel_edges() {
    let mut base = single_edge(GraphKind::MULTI_UNDIRECTED);
    let mut other = SpatialGraph::new(GraphKind::MULTI_UNDIRECTED);
    let (a, b) = (Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
    other.add_node("A", Node::new(a));
    other.add_node("B", Node::new(b));
    other.add_edge("A", "B", Edge::straight(a, b)).unwrap();

    let options = GraphMergeOptions::default().with_unmerged_nodes(["A", "B"]);
    spatial_graph_merge(&mut base, &other, &options).unwrap();

    assert_eq!(base.node_count(), 2);
    assert_eq!(base.edges_between(&"A".into(), &"B".into()).count(), 2);
}

#[test]
fn test_merged_copy_leaves_inputs() {
    let base = grid(3, 10.0, GraphKind::DIRECTED);
    let other = footpath(GraphKind::DIRECTED);

    let merged = spatial_graph_merged(&base, &other, &GraphMergeOptions::default()).unwrap();

    assert_eq!(base, grid(3, 10.0, GraphKind::DIRECTED));
    assert_eq!(other, footpath(GraphKind::DIRECTED));
    assert_eq!(merged.node_count(), base.node_count() + 4);
}
