//! Point batches to merge into a graph.

use crate::core::Point2D;
use crate::error::{MergeError, Result};
use crate::graph::{Attributes, NodeId, SpatialGraph};

/// One point to merge: identifier, coordinate and attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchPoint {
    /// Requested node identifier (renamed on collision).
    pub id: NodeId,
    /// Coordinate.
    pub position: Point2D,
    /// Attributes copied onto the merged node.
    pub attributes: Attributes,
}

impl BatchPoint {
    /// Point without attributes.
    pub fn new(id: impl Into<NodeId>, position: Point2D) -> Self {
        Self {
            id: id.into(),
            position,
            attributes: Attributes::new(),
        }
    }

    /// Builder-style setter for attributes.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Ordered sequence of points; merged in this order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointBatch {
    points: Vec<BatchPoint>,
}

impl PointBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point.
    pub fn push(&mut self, point: BatchPoint) {
        self.points.push(point);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in batch order.
    pub fn iter(&self) -> std::slice::Iter<'_, BatchPoint> {
        self.points.iter()
    }

    /// Stage every node of `graph`, in graph order.
    pub fn from_graph(graph: &SpatialGraph) -> Self {
        graph
            .nodes()
            .map(|(id, node)| BatchPoint {
                id: id.clone(),
                position: node.position,
                attributes: node.attributes.clone(),
            })
            .collect()
    }

    /// Stage every node of `graph` except `excluded`, in graph order.
    ///
    /// Fails with [`MergeError::UnknownNode`] if an excluded node is not in
    /// the graph.
    pub fn from_graph_excluding(graph: &SpatialGraph, excluded: &[NodeId]) -> Result<Self> {
        if let Some(missing) = excluded.iter().find(|id| !graph.contains_node(id.as_str())) {
            return Err(MergeError::UnknownNode(missing.clone()));
        }

        let mut batch = Self::from_graph(graph);
        batch.points.retain(|p| !excluded.contains(&p.id));
        Ok(batch)
    }
}

impl FromIterator<BatchPoint> for PointBatch {
    fn from_iter<I: IntoIterator<Item = BatchPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointBatch {
    type Item = &'a BatchPoint;
    type IntoIter = std::slice::Iter<'a, BatchPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AttrValue, Node};

    fn graph() -> SpatialGraph {
        let mut g = SpatialGraph::undirected();
        g.add_node("a", Node::new(Point2D::new(0.0, 0.0)));
        g.add_node(
            "b",
            Node::with_attributes(
                Point2D::new(1.0, 0.0),
                [("kind".to_string(), AttrValue::from("stop"))].into(),
            ),
        );
        g.add_node("c", Node::new(Point2D::new(2.0, 0.0)));
        g
    }

    #[test]
    fn test_from_graph_keeps_order_and_attributes() {
        let batch = PointBatch::from_graph(&graph());
        let ids: Vec<_> = batch.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(batch.iter().nth(1).unwrap().attributes["kind"], AttrValue::from("stop"));
    }

    #[test]
    fn test_from_graph_excluding() {
        let batch = PointBatch::from_graph_excluding(&graph(), &[NodeId::from("b")]).unwrap();
        let ids: Vec<_> = batch.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        assert!(PointBatch::from_graph_excluding(&graph(), &[NodeId::from("z")]).is_err());
    }
}
