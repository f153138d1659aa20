//! Closest-point queries against the visible runs, used for hit-testing.

use crate::math::{LineSegment, Point};

use alloc::vec::Vec;

/// The result of a proximity query.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ClosestPoint {
    /// The closest point on the geometry.
    pub position: Point,
    /// The euclidean distance from the query point to `position`.
    pub distance: f32,
}

/// Finds the closest point to `query` on any run.
///
/// Candidates are clamped to their segment, and compared on squared
/// distances; the square root is taken once for the returned distance. Ties
/// are broken in favor of the first candidate in run and point order.
/// Returns `None` when there is no geometry to query against.
pub fn closest_point_on_runs(query: Point, runs: &[Vec<Point>]) -> Option<ClosestPoint> {
    let mut best: Option<(LineSegment, Point, f32)> = None;

    for run in runs {
        for pair in run.windows(2) {
            let segment = LineSegment {
                from: pair[0],
                to: pair[1],
            };
            let candidate = segment.closest_point(query);
            let sq_distance = (candidate - query).square_length();

            // Strict comparison keeps the first-encountered candidate on ties.
            if best.map_or(true, |(_, _, d)| sq_distance < d) {
                best = Some((segment, candidate, sq_distance));
            }
        }
    }

    // The square root is only taken once, on the winning candidate.
    best.map(|(segment, position, _)| ClosestPoint {
        position,
        distance: segment.distance_to_point(query),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;
    use alloc::vec;

    #[test]
    fn projects_onto_segment_interior() {
        let runs = vec![vec![point(0.0, 0.0), point(10.0, 0.0)]];

        let closest = closest_point_on_runs(point(5.0, 1.0), &runs).unwrap();
        assert_eq!(closest.position, point(5.0, 0.0));
        assert_eq!(closest.distance, 1.0);
    }

    #[test]
    fn clamps_to_segment_endpoints() {
        let runs = vec![vec![point(0.0, 0.0), point(10.0, 0.0)]];

        let closest = closest_point_on_runs(point(14.0, 3.0), &runs).unwrap();
        assert_eq!(closest.position, point(10.0, 0.0));
        assert_eq!(closest.distance, 5.0);
    }

    #[test]
    fn searches_across_runs() {
        let runs = vec![
            vec![point(0.0, 0.0), point(10.0, 0.0)],
            vec![point(0.0, 20.0), point(10.0, 20.0)],
        ];

        let closest = closest_point_on_runs(point(5.0, 19.0), &runs).unwrap();
        assert_eq!(closest.position, point(5.0, 20.0));
        assert_eq!(closest.distance, 1.0);
    }

    #[test]
    fn ties_prefer_the_first_candidate() {
        let runs = vec![
            vec![point(0.0, 0.0), point(10.0, 0.0)],
            vec![point(0.0, 2.0), point(10.0, 2.0)],
        ];

        // Equidistant from both runs.
        let closest = closest_point_on_runs(point(5.0, 1.0), &runs).unwrap();
        assert_eq!(closest.position, point(5.0, 0.0));
    }

    #[test]
    fn empty_geometry_yields_none() {
        assert_eq!(closest_point_on_runs(point(1.0, 2.0), &[]), None);
        assert_eq!(
            closest_point_on_runs(point(1.0, 2.0), &[Vec::new()]),
            None
        );
    }
}
