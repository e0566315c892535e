//! Line splitting at distances along a line.
//!
//! [`split_line`] cuts once; [`split_at_distances`] cuts repeatedly at
//! sorted distances, each time cutting the remainder relative to the
//! previous cut:
//!
//! ```text
//! line:       A ──────────────────────── B      (length 10)
//! distances:        3           7
//!
//! cut 1:      A ─── x ────────────────── B      split(line, 3)
//! cut 2:            x ───────── y ────── B      split(rest, 7 - 3)
//! pieces:     [A─x] [x─y] [y─B]                 lengths 3, 4, 3
//! ```

use crate::core::{Point2D, Polyline};
use crate::error::{MergeError, Result};

/// Cut `line` at `distance` from its start.
///
/// Returns `(before, after)` whose concatenation reconstructs `line`.
/// The distance is clamped to `[0, length]`; cutting at an end yields a
/// zero-length piece on that side.
pub fn split_line(line: &Polyline, distance: f64) -> (Polyline, Polyline) {
    let points = line.points();
    let distance = distance.max(0.0);

    let mut before: Vec<Point2D> = vec![points[0]];
    let mut walked = 0.0;

    for (i, w) in points.windows(2).enumerate() {
        let seg_len = w[0].distance(w[1]);

        if walked + seg_len >= distance {
            let cut = if seg_len > 0.0 {
                w[0].lerp(w[1], (distance - walked) / seg_len)
            } else {
                w[0]
            };

            if before.last() != Some(&cut) {
                before.push(cut);
            }

            let mut after = vec![cut];
            after.extend(points[i + 1..].iter().skip_while(|p| **p == cut));

            return (Polyline::from_vertices(before), Polyline::from_vertices(after));
        }

        walked += seg_len;
        before.push(w[1]);
    }

    // Distance beyond the end
    (line.clone(), Polyline::from_vertices(vec![line.end()]))
}

/// [`split_line`] plus the length postcondition:
/// `length(before) ≈ distance` and `length(after) ≈ length - distance`.
pub fn split_line_checked(
    line: &Polyline,
    distance: f64,
    tolerance: f64,
) -> Result<(Polyline, Polyline)> {
    let total = line.length();
    let clamped = distance.clamp(0.0, total);
    let (before, after) = split_line(line, clamped);

    // Scale the tolerance with the line so long lines don't fail on rounding.
    let slack = tolerance * total.max(1.0);
    let before_err = (before.length() - clamped).abs();
    let after_err = (after.length() - (total - clamped)).abs();

    if before_err > slack || after_err > slack {
        return Err(MergeError::GeometryInconsistency(format!(
            "split at {:.6} of a {:.6} line gave pieces of {:.6} and {:.6}",
            clamped,
            total,
            before.length(),
            after.length()
        )));
    }

    Ok((before, after))
}

/// Cut `line` at every distance in `distances` (ascending, measured on the
/// original line), returning `distances.len() + 1` contiguous pieces.
///
/// Equal consecutive distances produce a zero-length piece between them.
pub fn split_at_distances(
    line: &Polyline,
    distances: &[f64],
    tolerance: f64,
) -> Result<Vec<Polyline>> {
    let mut pieces = Vec::with_capacity(distances.len() + 1);
    let mut rest = line.clone();
    let mut previous = 0.0;

    for &distance in distances {
        let (before, after) = split_line_checked(&rest, distance - previous, tolerance)?;
        pieces.push(before);
        rest = after;
        previous = distance.max(previous);
    }
    pieces.push(rest);

    Ok(pieces)
}
