//! Subgraph extraction and graph union.

use std::collections::HashSet;

use super::storage::SpatialGraph;
use super::types::NodeId;
use crate::error::{MergeError, Result};

impl SpatialGraph {
    /// Subgraph induced by `nodes`: those nodes plus every edge with both
    /// endpoints among them. Node and edge order follow this graph.
    ///
    /// Fails with [`MergeError::UnknownNode`] if a listed node is missing.
    pub fn induced_subgraph(&self, nodes: &[NodeId]) -> Result<SpatialGraph> {
        if let Some(missing) = nodes.iter().find(|id| !self.contains_node(id.as_str())) {
            return Err(MergeError::UnknownNode(missing.clone()));
        }
        let keep: HashSet<&NodeId> = nodes.iter().collect();

        let mut sub = SpatialGraph::new(self.kind());
        for (id, node) in self.nodes().filter(|(id, _)| keep.contains(id)) {
            sub.add_node(id.clone(), node.clone());
        }
        for (key, edge) in self
            .edges()
            .filter(|(k, _)| keep.contains(&k.source) && keep.contains(&k.target))
        {
            sub.add_edge(key.source.clone(), key.target.clone(), edge.clone())?;
        }

        Ok(sub)
    }

    /// Union `other` into this graph.
    ///
    /// Nodes already present keep this graph's data. In a simple graph an
    /// edge already present between the same pair keeps this graph's data;
    /// in a multigraph `other`'s edges are appended under fresh keys.
    pub fn compose(&mut self, other: &SpatialGraph) -> Result<()> {
        if self.is_directed() != other.is_directed() {
            return Err(MergeError::DirectednessMismatch);
        }
        if self.is_multigraph() != other.is_multigraph() {
            return Err(MergeError::MultigraphMismatch);
        }

        for (id, node) in other.nodes() {
            if !self.contains_node(id.as_str()) {
                self.add_node(id.clone(), node.clone());
            }
        }

        for (key, edge) in other.edges() {
            if !self.is_multigraph() && self.resolve_edge(key).is_some() {
                continue;
            }
            self.add_edge(key.source.clone(), key.target.clone(), edge.clone())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Point2D;
    use crate::graph::{AttrValue, Edge, GraphKind, Node, NodeId, SpatialGraph};

    fn path(kind: GraphKind, names: &[&str], y: f64) -> SpatialGraph {
        let mut g = SpatialGraph::new(kind);
        for (i, name) in names.iter().enumerate() {
            g.add_node(*name, Node::new(Point2D::new(i as f64, y)));
        }
        for w in names.windows(2) {
            let from = g.position(w[0]).unwrap();
            let to = g.position(w[1]).unwrap();
            g.add_edge(w[0], w[1], Edge::straight(from, to)).unwrap();
        }
        g
    }

    #[test]
    fn test_induced_subgraph() {
        let g = path(GraphKind::UNDIRECTED, &["a", "b", "c", "d"], 0.0);
        let sub = g
            .induced_subgraph(&[NodeId::from("c"), NodeId::from("b"), NodeId::from("d")])
            .unwrap();

        let order: Vec<_> = sub.nodes().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "d"]);
        assert_eq!(sub.edge_count(), 2);
    }

    #[test]
    fn test_induced_subgraph_unknown_node() {
        let g = path(GraphKind::UNDIRECTED, &["a", "b"], 0.0);
        assert!(g.induced_subgraph(&[NodeId::from("x")]).is_err());
    }

    #[test]
    fn test_compose_keeps_primary_attributes() {
        let mut base = path(GraphKind::UNDIRECTED, &["a", "b"], 0.0);
        let mut other = path(GraphKind::UNDIRECTED, &["b", "c"], 5.0);
        other
            .add_node(
                "b",
                Node::with_attributes(
                    Point2D::new(0.0, 5.0),
                    [("tag".to_string(), AttrValue::from("other"))].into(),
                ),
            );

        base.compose(&other).unwrap();

        assert_eq!(base.node_count(), 3);
        assert_eq!(base.edge_count(), 2);
        let b = base.node("b").unwrap();
        assert_eq!(b.position, Point2D::new(1.0, 0.0));
        assert!(b.attributes.is_empty());
    }

    #[test]
    fn test_compose_multigraph_appends_parallel_edges() {
        let mut base = path(GraphKind::MULTI_DIRECTED, &["a", "b"], 0.0);
        let other = path(GraphKind::MULTI_DIRECTED, &["a", "b"], 0.0);

        base.compose(&other).unwrap();
        assert_eq!(base.edge_count(), 2);
    }

    #[test]
    fn test_compose_kind_mismatch() {
        let mut base = path(GraphKind::UNDIRECTED, &["a", "b"], 0.0);
        let other = path(GraphKind::DIRECTED, &["c", "d"], 0.0);
        assert!(base.compose(&other).is_err());
        assert_eq!(base.node_count(), 2);
    }
}
