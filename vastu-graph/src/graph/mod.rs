//! Spatial graph container.
//!
//! This module provides the graph the merge algorithms operate on:
//! - [`SpatialGraph`]: nodes with coordinates, edges with line geometries
//! - [`GraphKind`]: directed / multigraph flags
//! - [`NodeId`], [`EdgeKey`]: identifiers
//! - [`Node`], [`Edge`], [`AttrValue`]: payloads
//!
//! Graph-level helpers (unique naming, induced subgraphs, union) live in
//! their own files as inherent `impl SpatialGraph` blocks.

mod compose;
mod naming;
mod storage;
mod types;

pub use storage::SpatialGraph;
pub use types::{AttrValue, Attributes, Edge, EdgeKey, GraphKind, Node, NodeId};
