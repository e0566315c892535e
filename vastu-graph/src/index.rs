//! Nearest-edge lookup.
//!
//! Both oracles answer "which line is closest to this point" over a fixed
//! snapshot of edge geometries and return the line's position in that
//! snapshot. Equal distances resolve to the lowest position, so the two
//! implementations always agree.
//!
//! - [`LinearScan`]: brute force, O(n) per query, no build cost
//! - [`RTreeIndex`]: R-tree, O(log n) per query, O(n log n) build

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use serde::{Deserialize, Serialize};

use crate::core::{Point2D, Polyline};

/// Nearest-edge oracle over a snapshot of line geometries.
pub trait NearestEdge {
    /// Position of the line closest to `point`, or `None` if there are no
    /// lines.
    fn nearest(&self, point: Point2D) -> Option<usize>;

    /// Number of indexed lines.
    fn len(&self) -> usize;

    /// Check if nothing is indexed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which oracle to build for a merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeIndexKind {
    /// Brute-force scan.
    Linear,
    /// R-tree.
    #[default]
    RTree,
}

/// Build the configured oracle over `lines`.
pub fn build_index<'a>(kind: EdgeIndexKind, lines: &'a [Polyline]) -> Box<dyn NearestEdge + 'a> {
    match kind {
        EdgeIndexKind::Linear => Box::new(LinearScan::new(lines)),
        EdgeIndexKind::RTree => Box::new(RTreeIndex::new(lines)),
    }
}

/// Brute-force nearest-edge search.
#[derive(Clone, Copy, Debug)]
pub struct LinearScan<'a> {
    lines: &'a [Polyline],
}

impl<'a> LinearScan<'a> {
    /// Wrap a line snapshot.
    pub fn new(lines: &'a [Polyline]) -> Self {
        Self { lines }
    }
}

impl NearestEdge for LinearScan<'_> {
    fn nearest(&self, point: Point2D) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for (i, line) in self.lines.iter().enumerate() {
            let dist_sq = line.distance_squared_to_point(point);
            // Strict comparison keeps the first line on ties
            if best.is_none_or(|(_, d)| dist_sq < d) {
                best = Some((i, dist_sq));
            }
        }

        best.map(|(i, _)| i)
    }

    fn len(&self) -> usize {
        self.lines.len()
    }
}

/// A line stored in the R-tree with its snapshot position.
#[derive(Clone, Debug)]
struct IndexedPolyline {
    line: Polyline,
    index: usize,
}

impl RTreeObject for IndexedPolyline {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let points: Vec<[f64; 2]> = self.line.points().iter().map(|p| p.to_array()).collect();
        AABB::from_points(points.iter())
    }
}

impl PointDistance for IndexedPolyline {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.line
            .distance_squared_to_point(Point2D::new(point[0], point[1]))
    }
}

/// R-tree nearest-edge search.
///
/// # Example
/// ```rust
/// use vastu_graph::core::{Point2D, Polyline};
/// use vastu_graph::index::{NearestEdge, RTreeIndex};
///
/// let lines = vec![
///     Polyline::segment(Point2D::new(0.0, 0.0), Point2D::new(5.0, 0.0)),
///     Polyline::segment(Point2D::new(5.0, 0.0), Point2D::new(5.0, 5.0)),
/// ];
/// let index = RTreeIndex::new(&lines);
/// assert_eq!(index.nearest(Point2D::new(4.5, 2.5)), Some(1));
/// ```
#[derive(Clone)]
pub struct RTreeIndex {
    tree: RTree<IndexedPolyline>,
}

impl RTreeIndex {
    /// Bulk-load an index over `lines`.
    pub fn new(lines: &[Polyline]) -> Self {
        let indexed: Vec<IndexedPolyline> = lines
            .iter()
            .enumerate()
            .map(|(index, line)| IndexedPolyline {
                line: line.clone(),
                index,
            })
            .collect();

        Self {
            tree: RTree::bulk_load(indexed),
        }
    }
}

impl NearestEdge for RTreeIndex {
    fn nearest(&self, point: Point2D) -> Option<usize> {
        let mut candidates = self
            .tree
            .nearest_neighbor_iter_with_distance_2(&point.to_array());
        let (first, best) = candidates.next()?;

        // The tree yields equidistant lines in arbitrary order
        let index = candidates
            .take_while(|(_, d)| *d <= best)
            .map(|(l, _)| l.index)
            .fold(first.index, usize::min);

        Some(index)
    }

    fn len(&self) -> usize {
        self.tree.size()
    }
}

impl std::fmt::Debug for RTreeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RTreeIndex")
            .field("size", &self.tree.size())
            .finish()
    }
}
