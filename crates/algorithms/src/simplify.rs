//! Douglas-Peucker point reduction over visible runs.

use crate::math::{LineSegment, Point};

use alloc::vec;
use alloc::vec::Vec;

/// Simplifies each run independently, in place.
///
/// Run boundaries are preserved: runs are never merged or reordered. A
/// tolerance of zero or less disables simplification.
pub fn simplify_runs(runs: &mut [Vec<Point>], tolerance: f32) {
    if tolerance <= 0.0 {
        return;
    }

    for run in runs.iter_mut() {
        *run = simplify_run(run, tolerance);
    }
}

/// Reduces the point count of a single run while keeping every remaining
/// point within `tolerance` of the original polyline.
///
/// The first and last points are always preserved exactly; they anchor
/// downstream clipping and closing. A tolerance of zero or less returns the
/// input unchanged.
pub fn simplify_run(points: &[Point], tolerance: f32) -> Vec<Point> {
    if tolerance <= 0.0 || points.len() <= 2 {
        return points.to_vec();
    }

    let sq_tolerance = tolerance * tolerance;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    douglas_peucker(points, 0, points.len() - 1, sq_tolerance, &mut keep);

    points
        .iter()
        .zip(&keep)
        .filter_map(|(point, keep)| if *keep { Some(*point) } else { None })
        .collect()
}

fn douglas_peucker(points: &[Point], first: usize, last: usize, sq_tolerance: f32, keep: &mut [bool]) {
    if last <= first + 1 {
        return;
    }

    let segment = LineSegment {
        from: points[first],
        to: points[last],
    };

    let mut max_sq_distance = 0.0;
    let mut index = first;
    for (i, point) in points.iter().enumerate().take(last).skip(first + 1) {
        let sq_distance = segment.square_distance_to_point(*point);
        if sq_distance > max_sq_distance {
            max_sq_distance = sq_distance;
            index = i;
        }
    }

    if max_sq_distance > sq_tolerance {
        keep[index] = true;
        douglas_peucker(points, first, index, sq_tolerance, keep);
        douglas_peucker(points, index, last, sq_tolerance, keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn zero_tolerance_is_identity() {
        let points = [point(0.0, 0.0), point(1.0, 0.1), point(2.0, 0.0)];

        assert_eq!(simplify_run(&points, 0.0), points.to_vec());
        assert_eq!(simplify_run(&points, -1.0), points.to_vec());
    }

    #[test]
    fn collapses_nearly_collinear_points() {
        let points = [
            point(0.0, 0.0),
            point(25.0, 0.2),
            point(50.0, -0.3),
            point(75.0, 0.1),
            point(100.0, 0.0),
        ];

        let simplified = simplify_run(&points, 1.0);
        assert_eq!(simplified, [point(0.0, 0.0), point(100.0, 0.0)]);
    }

    #[test]
    fn keeps_significant_detours() {
        let points = [
            point(0.0, 0.0),
            point(50.0, 40.0),
            point(100.0, 0.0),
        ];

        let simplified = simplify_run(&points, 1.0);
        assert_eq!(simplified, points.to_vec());
    }

    #[test]
    fn preserves_anchors_for_any_tolerance() {
        let points = [
            point(0.0, 0.0),
            point(10.0, 35.0),
            point(20.0, -12.0),
            point(30.0, 7.0),
            point(40.0, 3.0),
        ];

        for &tolerance in &[0.01, 1.0, 100.0, 1e6] {
            let simplified = simplify_run(&points, tolerance);
            assert_eq!(simplified.first(), points.first());
            assert_eq!(simplified.last(), points.last());
        }
    }

    #[test]
    fn run_boundaries_survive() {
        let mut runs = vec![
            vec![point(0.0, 0.0), point(5.0, 0.0), point(10.0, 0.0)],
            vec![point(20.0, 0.0), point(30.0, 0.0)],
        ];

        simplify_runs(&mut runs, 1.0);
        assert_eq!(
            runs,
            [
                vec![point(0.0, 0.0), point(10.0, 0.0)],
                vec![point(20.0, 0.0), point(30.0, 0.0)],
            ]
        );
    }
}
