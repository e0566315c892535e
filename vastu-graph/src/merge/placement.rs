//! Point placement: first phase of a point merge.
//!
//! Every point becomes a node and is connected to an anchor on its nearest
//! edge. Interior projections create an intersection node and record a
//! split request; the edge itself is left untouched until splicing, so the
//! nearest-edge snapshot stays valid for the whole batch.

use indexmap::IndexMap;
use log::trace;

use super::batch::PointBatch;
use super::direction::connection_pairs;
use crate::config::MergeConfig;
use crate::core::Polyline;
use crate::error::{MergeError, Result};
use crate::graph::{Edge, EdgeKey, Node, NodeId, SpatialGraph};
use crate::index::build_index;

/// How a point was attached to the graph.
#[derive(Clone, Debug, PartialEq)]
pub enum AnchorKind {
    /// Projected strictly inside `edge`, at `distance` along its geometry.
    Interior {
        /// Edge to be split.
        edge: EdgeKey,
        /// Distance along the edge geometry.
        distance: f64,
    },
    /// Projected at or beyond an end of `edge`; an endpoint was reused.
    Endpoint {
        /// Nearest edge.
        edge: EdgeKey,
    },
}

/// Outcome of placing one point.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Node created for the point.
    pub point: NodeId,
    /// Intersection node or reused endpoint the point connects to.
    pub anchor: NodeId,
    /// Projection case.
    pub kind: AnchorKind,
}

impl Placement {
    /// Whether an intersection node was created.
    pub fn is_interior(&self) -> bool {
        matches!(self.kind, AnchorKind::Interior { .. })
    }
}

/// Pending cuts on one edge.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitRequest {
    /// Edge geometry at the time the cuts were recorded.
    pub line: Polyline,
    /// Intersection nodes with their distance along `line`, in record order.
    pub cuts: Vec<(NodeId, f64)>,
}

/// Split requests keyed by edge, in first-request order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitTable {
    requests: IndexMap<EdgeKey, SplitRequest>,
}

impl SplitTable {
    /// Record a cut of `edge` at `distance` for `node`.
    pub fn record(&mut self, edge: &EdgeKey, line: &Polyline, node: NodeId, distance: f64) {
        self.requests
            .entry(edge.clone())
            .or_insert_with(|| SplitRequest {
                line: line.clone(),
                cuts: Vec::new(),
            })
            .cuts
            .push((node, distance));
    }

    /// Pending request for an edge.
    pub fn get(&self, edge: &EdgeKey) -> Option<&SplitRequest> {
        self.requests.get(edge)
    }

    /// Number of edges with pending cuts.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Check if there is nothing to split.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Requests in first-request order.
    pub fn iter(&self) -> impl Iterator<Item = (&EdgeKey, &SplitRequest)> {
        self.requests.iter()
    }
}

/// Place every point of `batch` on `graph`.
///
/// Adds the point nodes, intersection nodes and point-to-anchor edges, and
/// returns the split requests for [`splice_edges`](super::splice_edges).
/// Fails before any mutation with [`MergeError::EmptyGraph`] if the batch is
/// non-empty and the graph has no edges, or with
/// [`MergeError::GeometryInconsistency`] if a point has a non-finite
/// coordinate.
pub fn place_points(
    graph: &mut SpatialGraph,
    batch: &PointBatch,
    config: &MergeConfig,
) -> Result<(Vec<Placement>, SplitTable)> {
    let mut placements = Vec::with_capacity(batch.len());
    let mut table = SplitTable::default();

    if batch.is_empty() {
        return Ok((placements, table));
    }

    // Snapshot: edges added while placing are never candidates
    let (keys, lines): (Vec<EdgeKey>, Vec<Polyline>) = graph
        .edges()
        .map(|(k, e)| (k.clone(), e.geometry.clone()))
        .unzip();
    if keys.is_empty() {
        return Err(MergeError::EmptyGraph);
    }
    if let Some(point) = batch.iter().find(|p| !p.position.is_finite()) {
        return Err(MergeError::GeometryInconsistency(format!(
            "point {} has non-finite coordinates ({}, {})",
            point.id, point.position.x, point.position.y
        )));
    }
    let index = build_index(config.edge_index, &lines);

    for point in batch {
        let node_id = graph.unique_node_name(point.id.as_str());
        graph.add_node(
            node_id.clone(),
            Node::with_attributes(point.position, point.attributes.clone()),
        );

        let nearest = index.nearest(point.position).ok_or(MergeError::EmptyGraph)?;
        let (edge, line) = (&keys[nearest], &lines[nearest]);
        let length = line.length();
        let distance = line.project(point.position);

        let slack = config.length_tolerance * length.max(1.0);
        if !distance.is_finite() || distance < -slack || distance > length + slack {
            return Err(MergeError::GeometryInconsistency(format!(
                "projection of {} onto edge {} at {} is outside [0, {}]",
                point.id, edge, distance, length
            )));
        }

        let (anchor, kind) = if distance > 0.0 && distance < length {
            let base = format!("{}{}", config.intersection_prefix, point.id);
            let anchor = graph.unique_node_name(&base);
            graph.add_node(anchor.clone(), Node::new(line.interpolate(distance)));
            table.record(edge, line, anchor.clone(), distance);
            (
                anchor,
                AnchorKind::Interior {
                    edge: edge.clone(),
                    distance,
                },
            )
        } else {
            let to_source = point.position.distance(graph.position(edge.source.as_str())?);
            let to_target = point.position.distance(graph.position(edge.target.as_str())?);
            let anchor = if to_source < to_target {
                edge.source.clone()
            } else {
                edge.target.clone()
            };
            (anchor, AnchorKind::Endpoint { edge: edge.clone() })
        };

        trace!(
            "Placed {} at ({:.3}, {:.3}) -> {} via edge {} (d={:.3}/{:.3})",
            node_id, point.position.x, point.position.y, anchor, edge, distance, length
        );

        for (from, to) in connection_pairs(
            graph.is_directed(),
            config.merge_direction,
            &node_id,
            &anchor,
        ) {
            let geometry = Edge::straight(
                graph.position(from.as_str())?,
                graph.position(to.as_str())?,
            );
            graph.add_edge(from.clone(), to.clone(), geometry)?;
        }

        placements.push(Placement {
            point: node_id,
            anchor,
            kind,
        });
    }

    Ok((placements, table))
}
