//! # Vastu-Graph: Spatial Graph Merging
//!
//! Merges free-standing points, or the nodes of another spatial graph, into a
//! spatial graph whose edges carry polyline geometry. Each point is attached
//! to the nearest edge; when its projection falls strictly inside that edge,
//! the edge is split through a new intersection node.
//!
//! ## Quick Start
//!
//! ```rust
//! use vastu_graph::core::Point2D;
//! use vastu_graph::graph::{Edge, Node, SpatialGraph};
//! use vastu_graph::{BatchPoint, MergeConfig, PointBatch, spatial_points_merged};
//!
//! let mut street = SpatialGraph::undirected();
//! street.add_node("A", Node::new(Point2D::new(0.0, 0.0)));
//! street.add_node("B", Node::new(Point2D::new(10.0, 0.0)));
//! street
//!     .add_edge("A", "B", Edge::straight(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)))
//!     .unwrap();
//!
//! let stops: PointBatch = vec![BatchPoint::new("stop", Point2D::new(5.0, 1.0))]
//!     .into_iter()
//!     .collect();
//! let merged = spatial_points_merged(&street, &stops, &MergeConfig::default()).unwrap();
//!
//! assert!(merged.contains_node("intersection_stop"));
//! assert_eq!(merged.edge_count(), 3);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Geometry primitives (Point2D, Polyline)
//! - [`graph`]: Spatial graph storage, naming and union
//! - [`split`]: Splitting polylines at curvilinear distances
//! - [`index`]: Nearest-edge lookup (linear scan, R-tree)
//! - [`merge`]: Point and graph merging
//! - [`config`]: Merge configuration
//! - [`error`]: Error types
//!
//! ## Data Flow
//!
//! ```text
//!        ┌──────────────┐        ┌──────────────┐
//!        │ SpatialGraph │        │  PointBatch  │
//!        │  (primary)   │        │ (or graph 2) │
//!        └──────┬───────┘        └──────┬───────┘
//!               │ edge snapshot         │
//!               ▼                       │
//!        ┌──────────────┐               │
//!        │ NearestEdge  │◄──────────────┘
//!        │   (index)    │  per point
//!        └──────┬───────┘
//!               │ project
//!               ▼
//!        ┌──────────────┐   interior   ┌──────────────┐
//!        │  Placement   │─────────────►│  SplitTable  │
//!        │ (nodes, con- │              │ (cuts/edge)  │
//!        │  nectors)    │              └──────┬───────┘
//!        └──────────────┘                     │
//!                                             ▼
//!                                      ┌──────────────┐
//!                                      │   Splicing   │──► sub-edge chains
//!                                      └──────────────┘
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod index;
pub mod merge;
pub mod split;

// Re-export main types at crate root
pub use config::{ConfigLoadError, MergeConfig};
pub use error::{MergeError, Result};
pub use graph::{NodeId, SpatialGraph};
pub use index::EdgeIndexKind;
pub use merge::{
    BatchPoint, GraphMergeOptions, MergeDirection, MergeReport, PointBatch, spatial_graph_merge,
    spatial_graph_merged, spatial_points_merge, spatial_points_merged,
};
