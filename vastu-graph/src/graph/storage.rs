//! Spatial graph container.
//!
//! Nodes and edges live in insertion-ordered maps, so iteration order is
//! deterministic and matches the order things were added. Nearest-edge
//! tie-breaking relies on that order.

use indexmap::IndexMap;

use super::types::{Edge, EdgeKey, GraphKind, Node, NodeId};
use crate::core::Point2D;
use crate::error::{MergeError, Result};

/// A graph whose nodes carry coordinates and whose edges carry line
/// geometries.
///
/// # Example
///
/// ```rust
/// use vastu_graph::core::Point2D;
/// use vastu_graph::graph::{Edge, Node, SpatialGraph};
///
/// let mut graph = SpatialGraph::undirected();
/// graph.add_node("a", Node::new(Point2D::new(0.0, 0.0)));
/// graph.add_node("b", Node::new(Point2D::new(10.0, 0.0)));
/// graph
///     .add_edge("a", "b", Edge::straight(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)))
///     .unwrap();
///
/// assert_eq!(graph.edge_count(), 1);
/// assert!(graph.has_edge(&"b".into(), &"a".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SpatialGraph {
    kind: GraphKind,
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeKey, Edge>,
}

impl SpatialGraph {
    /// Create an empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// Empty undirected simple graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::UNDIRECTED)
    }

    /// Empty directed simple graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::DIRECTED)
    }

    /// Structural flags.
    #[inline]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Whether edges are ordered pairs.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.kind.directed
    }

    /// Whether parallel edges are allowed.
    #[inline]
    pub fn is_multigraph(&self) -> bool {
        self.kind.multigraph
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if a node exists.
    #[inline]
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Look up a node.
    #[inline]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Coordinate of a node.
    pub fn position(&self, id: &str) -> Result<Point2D> {
        self.nodes
            .get(id)
            .map(|n| n.position)
            .ok_or_else(|| MergeError::UnknownNode(NodeId::from(id)))
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &Node)> {
        self.nodes.iter()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&EdgeKey, &Edge)> {
        self.edges.iter()
    }

    /// Insert or replace a node. Returns the previous node, if any.
    pub fn add_node(&mut self, id: impl Into<NodeId>, node: Node) -> Option<Node> {
        self.nodes.insert(id.into(), node)
    }

    /// Stored form of `key`, accounting for undirected symmetry.
    pub fn resolve_edge(&self, key: &EdgeKey) -> Option<EdgeKey> {
        if self.edges.contains_key(key) {
            return Some(key.clone());
        }
        if !self.kind.directed {
            let rev = key.reversed();
            if self.edges.contains_key(&rev) {
                return Some(rev);
            }
        }
        None
    }

    /// Look up an edge by key.
    pub fn edge(&self, key: &EdgeKey) -> Option<&Edge> {
        self.resolve_edge(key).and_then(|k| self.edges.get(&k))
    }

    /// Check if at least one edge joins `u` to `v`.
    pub fn has_edge(&self, u: &NodeId, v: &NodeId) -> bool {
        self.edges_between(u, v).next().is_some()
    }

    /// All edges joining `u` to `v` (either orientation when undirected).
    pub fn edges_between<'a>(
        &'a self,
        u: &'a NodeId,
        v: &'a NodeId,
    ) -> impl Iterator<Item = (&'a EdgeKey, &'a Edge)> + 'a {
        let directed = self.kind.directed;
        self.edges.iter().filter(move |(k, _)| {
            (k.source == *u && k.target == *v)
                || (!directed && k.source == *v && k.target == *u)
        })
    }

    /// Edges leaving `id` (every incident edge when undirected).
    pub fn out_edges<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a EdgeKey> + 'a {
        let directed = self.kind.directed;
        self.edges
            .keys()
            .filter(move |k| k.source == *id || (!directed && k.target == *id))
    }

    /// Edges entering `id` (every incident edge when undirected).
    pub fn in_edges<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a EdgeKey> + 'a {
        let directed = self.kind.directed;
        self.edges
            .keys()
            .filter(move |k| k.target == *id || (!directed && k.source == *id))
    }

    /// Add an edge between two existing nodes.
    ///
    /// In a simple graph an existing edge between the same pair has its data
    /// replaced and keeps its key. In a multigraph a fresh key is allocated.
    pub fn add_edge(
        &mut self,
        u: impl Into<NodeId>,
        v: impl Into<NodeId>,
        edge: Edge,
    ) -> Result<EdgeKey> {
        let (u, v) = (u.into(), v.into());
        for id in [&u, &v] {
            if !self.nodes.contains_key(id) {
                return Err(MergeError::UnknownNode(id.clone()));
            }
        }

        let mut key = EdgeKey::new(u, v, 0);
        if self.kind.multigraph {
            while self.resolve_edge(&key).is_some() {
                key.key += 1;
            }
        } else if let Some(existing) = self.resolve_edge(&key) {
            key = existing;
        }

        self.edges.insert(key.clone(), edge);
        Ok(key)
    }

    /// Remove an edge, preserving the order of the remaining ones.
    pub fn remove_edge(&mut self, key: &EdgeKey) -> Option<Edge> {
        let stored = self.resolve_edge(key)?;
        self.edges.shift_remove(&stored)
    }

    /// Check that every edge geometry starts and ends on its incident nodes.
    ///
    /// Undirected edges may have their geometry stored in either direction.
    pub fn verify_geometry(&self, epsilon: f64) -> Result<()> {
        for (key, edge) in &self.edges {
            let from = self.position(key.source.as_str())?;
            let to = self.position(key.target.as_str())?;
            let line = &edge.geometry;

            let aligned = line.connects(from, to, epsilon)
                || (!self.kind.directed && line.connects(to, from, epsilon));
            if !aligned {
                return Err(MergeError::GeometryInconsistency(format!(
                    "edge {} geometry does not end on its nodes",
                    key
                )));
            }
        }
        Ok(())
    }
}
