//! Node, edge and attribute types.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Point2D, Polyline};

/// Unique node identifier within a graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

/// Attribute value attached to nodes and edges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Free text.
    Text(String),
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Attribute bag. Ordered so that cloned graphs compare and print stably.
pub type Attributes = BTreeMap<String, AttrValue>;

/// A graph node: coordinate plus free-form attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node coordinate.
    pub position: Point2D,
    /// Other attributes.
    #[serde(default)]
    pub attributes: Attributes,
}

impl Node {
    /// Node with a coordinate and no attributes.
    #[inline]
    pub fn new(position: Point2D) -> Self {
        Self {
            position,
            attributes: Attributes::new(),
        }
    }

    /// Node with a coordinate and attributes.
    #[inline]
    pub fn with_attributes(position: Point2D, attributes: Attributes) -> Self {
        Self {
            position,
            attributes,
        }
    }
}

/// A graph edge: line geometry plus free-form attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Line geometry; its endpoints coincide with the incident nodes.
    pub geometry: Polyline,
    /// Other attributes.
    #[serde(default)]
    pub attributes: Attributes,
}

impl Edge {
    /// Edge with a geometry and no attributes.
    #[inline]
    pub fn new(geometry: Polyline) -> Self {
        Self {
            geometry,
            attributes: Attributes::new(),
        }
    }

    /// Straight edge between two coordinates.
    #[inline]
    pub fn straight(from: Point2D, to: Point2D) -> Self {
        Self::new(Polyline::segment(from, to))
    }
}

/// Edge identifier: endpoints in stored order plus a parallel-edge key.
///
/// Simple graphs always use key 0. In undirected graphs the pair is
/// unordered for lookups, but the stored order is the one the geometry
/// was inserted with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    /// First endpoint.
    pub source: NodeId,
    /// Second endpoint.
    pub target: NodeId,
    /// Parallel-edge discriminator (0 in simple graphs).
    pub key: usize,
}

impl EdgeKey {
    /// Create an edge key.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, key: usize) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            key,
        }
    }

    /// Same key with the endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            key: self.key,
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.target, self.key)
    }
}

/// Graph-level structural flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GraphKind {
    /// Edges are ordered pairs.
    pub directed: bool,
    /// Parallel edges between the same pair are allowed.
    pub multigraph: bool,
}

impl GraphKind {
    /// Undirected simple graph.
    pub const UNDIRECTED: GraphKind = GraphKind {
        directed: false,
        multigraph: false,
    };

    /// Directed simple graph.
    pub const DIRECTED: GraphKind = GraphKind {
        directed: true,
        multigraph: false,
    };

    /// Undirected multigraph.
    pub const MULTI_UNDIRECTED: GraphKind = GraphKind {
        directed: false,
        multigraph: true,
    };

    /// Directed multigraph.
    pub const MULTI_DIRECTED: GraphKind = GraphKind {
        directed: true,
        multigraph: true,
    };
}
