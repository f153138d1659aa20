//! Splits a projected point list into the runs visible inside a viewport.

use crate::math::{Box2D, LineSegment, Point};

use alloc::vec;
use alloc::vec::Vec;

/// Clips `points` against `viewport`, returning the visible runs.
///
/// Each run is a contiguous subsequence of the input polyline, clipped to
/// the viewport; a path that leaves and re-enters the viewport yields one
/// run per visible stretch, in path order. Runs always have at least two
/// points; degenerate ones are dropped.
///
/// With `no_clip` set the whole input is returned as a single run, e.g. for
/// off-screen measurement.
pub fn clip_runs(points: &[Point], viewport: &Box2D, no_clip: bool) -> Vec<Vec<Point>> {
    if points.is_empty() {
        return Vec::new();
    }

    if no_clip {
        return vec![points.to_vec()];
    }

    let mut runs = Vec::new();
    let mut run: Vec<Point> = Vec::new();

    for (i, pair) in points.windows(2).enumerate() {
        let segment = LineSegment {
            from: pair[0],
            to: pair[1],
        };
        let clipped = match segment.clipped(viewport) {
            Some(clipped) => clipped,
            None => continue,
        };

        run.push(clipped.from);

        // The run ends when the segment exits the viewport before reaching
        // the next raw point, or at the end of the input.
        let last_pair = i == points.len() - 2;
        if clipped.to != pair[1] || last_pair {
            run.push(clipped.to);
            runs.push(core::mem::take(&mut run));
        }
    }

    // A run can be left open when the trailing segments are all outside of
    // the viewport.
    if run.len() >= 2 {
        runs.push(run);
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    fn viewport() -> Box2D {
        Box2D {
            min: point(0.0, 0.0),
            max: point(100.0, 100.0),
        }
    }

    #[test]
    fn no_clip_returns_single_run() {
        let points = [point(-50.0, -50.0), point(500.0, 500.0)];

        let runs = clip_runs(&points, &viewport(), true);
        assert_eq!(runs, [points.to_vec()]);
    }

    #[test]
    fn fully_inside_is_one_run() {
        let points = [point(10.0, 10.0), point(50.0, 50.0), point(90.0, 10.0)];

        let runs = clip_runs(&points, &viewport(), false);
        assert_eq!(runs, [points.to_vec()]);
    }

    #[test]
    fn fully_outside_yields_no_runs() {
        let points = [point(-10.0, -20.0), point(-30.0, -40.0)];

        assert!(clip_runs(&points, &viewport(), false).is_empty());
    }

    #[test]
    fn exit_and_reentry_splits_runs() {
        // In at the left, out at the top, back in at the right.
        let points = [
            point(50.0, 50.0),
            point(50.0, 150.0),
            point(90.0, 150.0),
            point(90.0, 50.0),
        ];

        let runs = clip_runs(&points, &viewport(), false);
        assert_eq!(
            runs,
            [
                vec![point(50.0, 50.0), point(50.0, 100.0)],
                vec![point(90.0, 100.0), point(90.0, 50.0)],
            ]
        );
    }

    #[test]
    fn crossing_segment_is_clipped_on_both_ends() {
        let points = [point(-50.0, 50.0), point(150.0, 50.0)];

        let runs = clip_runs(&points, &viewport(), false);
        assert_eq!(runs, [vec![point(0.0, 50.0), point(100.0, 50.0)]]);
    }

    #[test]
    fn empty_input_yields_no_runs() {
        assert!(clip_runs(&[], &viewport(), false).is_empty());
        assert!(clip_runs(&[], &viewport(), true).is_empty());
    }
}
