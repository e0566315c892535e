//! Unique node naming.

use super::storage::SpatialGraph;
use super::types::NodeId;

impl SpatialGraph {
    /// Identifier derived from `base` that is not yet used in this graph.
    ///
    /// Returns `base` itself when free, otherwise the first free
    /// `base_1`, `base_2`, ...
    pub fn unique_node_name(&self, base: &str) -> NodeId {
        if !self.contains_node(base) {
            return NodeId::from(base);
        }

        let mut suffix = 1usize;
        loop {
            let candidate = format!("{}_{}", base, suffix);
            if !self.contains_node(&candidate) {
                return NodeId::from(candidate);
            }
            suffix += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Point2D;
    use crate::graph::{Node, SpatialGraph};

    #[test]
    fn test_free_name_is_kept() {
        let g = SpatialGraph::undirected();
        assert_eq!(g.unique_node_name("depot").as_str(), "depot");
    }

    #[test]
    fn test_taken_name_gets_suffix() {
        let mut g = SpatialGraph::undirected();
        g.add_node("depot", Node::new(Point2D::ZERO));
        g.add_node("depot_1", Node::new(Point2D::ZERO));
        assert_eq!(g.unique_node_name("depot").as_str(), "depot_2");
    }
}
