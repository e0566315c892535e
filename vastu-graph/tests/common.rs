//! Test utilities for vastu-graph.
//!
//! Graph and point-batch builders shared by the integration tests.

#![allow(dead_code)]

use vastu_graph::core::Point2D;
use vastu_graph::graph::{Edge, GraphKind, Node, SpatialGraph};
use vastu_graph::{BatchPoint, PointBatch};

/// Length tolerance used across the integration tests.
pub const EPS: f64 = 1e-9;

/// Single straight edge `A -> B` from (0,0) to (10,0).
pub fn single_edge(kind: GraphKind) -> SpatialGraph {
    let mut g = SpatialGraph::new(kind);
    let (a, b) = (Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
    g.add_node("A", Node::new(a));
    g.add_node("B", Node::new(b));
    g.add_edge("A", "B", Edge::straight(a, b)).unwrap();
    g
}

/// Square street grid with `n x n` intersections and bidirectional streets
/// when directed.
pub fn grid(n: usize, spacing: f64, kind: GraphKind) -> SpatialGraph {
    let mut g = SpatialGraph::new(kind);
    let name = |i: usize, j: usize| format!("n{}_{}", i, j);
    let pos = |i: usize, j: usize| Point2D::new(i as f64 * spacing, j as f64 * spacing);

    for i in 0..n {
        for j in 0..n {
            g.add_node(name(i, j), Node::new(pos(i, j)));
        }
    }

    let mut link = |a: (usize, usize), b: (usize, usize)| {
        g.add_edge(name(a.0, a.1), name(b.0, b.1), Edge::straight(pos(a.0, a.1), pos(b.0, b.1)))
            .unwrap();
        if kind.directed {
            g.add_edge(name(b.0, b.1), name(a.0, a.1), Edge::straight(pos(b.0, b.1), pos(a.0, a.1)))
                .unwrap();
        }
    };
    for i in 0..n {
        for j in 0..n {
            if i + 1 < n {
                link((i, j), (i + 1, j));
            }
            if j + 1 < n {
                link((i, j), (i, j + 1));
            }
        }
    }
    g
}

/// Batch from `(id, x, y)` tuples.
pub fn batch(points: &[(&str, f64, f64)]) -> PointBatch {
    points
        .iter()
        .map(|(id, x, y)| BatchPoint::new(*id, Point2D::new(*x, *y)))
        .collect()
}

/// Deterministic scatter of `n` points over `[0, extent)^2`.
pub fn scatter(n: usize, extent: f64) -> PointBatch {
    (0..n)
        .map(|i| {
            // Low-discrepancy sequence, no RNG needed
            let x = (i as f64 * 0.618_033_988_75).fract() * extent;
            let y = (i as f64 * 0.414_213_562_37 + 0.1).fract() * extent;
            BatchPoint::new(format!("p{}", i), Point2D::new(x, y))
        })
        .collect()
}

/// Total geometry length of all edges.
pub fn total_length(g: &SpatialGraph) -> f64 {
    g.edges().map(|(_, e)| e.geometry.length()).sum()
}
