use crate::algorithms::clip::clip_runs;
use crate::algorithms::closest_point::{closest_point_on_runs, ClosestPoint};
use crate::algorithms::project::project_instructions;
use crate::algorithms::simplify::simplify_runs;
use crate::geom::Project;
use crate::math::{Box2D, Point};
use crate::path::{normalize, svg_path_string, GeoInstruction, GeometryError, ProjectedInstruction};

use alloc::string::String;
use alloc::vec::Vec;

/// Rendering options consumed by the geometry passes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolycurveOptions {
    /// Douglas-Peucker tolerance applied to each visible run, in plane
    /// units. Zero or less disables simplification.
    pub smooth_factor: f32,
    /// Skip viewport clipping and treat the whole projected polyline as a
    /// single visible run, e.g. for off-screen measurement.
    pub no_clip: bool,
}

impl Default for PolycurveOptions {
    fn default() -> Self {
        PolycurveOptions {
            smooth_factor: 1.0,
            no_clip: false,
        }
    }
}

/// A curved polyline over geographic coordinates.
///
/// Owns the normalized instruction list and the state derived from the last
/// projection pass. The host view drives the lifecycle: it calls
/// [`update_projection`](Polycurve::update_projection) whenever its
/// world-to-plane mapping changes (pan, zoom, resize), then reads
/// [`path_string`](Polycurve::path_string) for drawing and
/// [`closest_point`](Polycurve::closest_point) for hit-testing.
///
/// Before the first projection pass the derived state is empty and the
/// read accessors degrade gracefully: an empty path string, no visible
/// parts, `None` for queries. Not being attached to a view yet is a valid
/// state, not an error.
///
/// The first instruction is expected to be `MoveTo`; this precondition is
/// the caller's responsibility and is not validated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polycurve {
    instructions: Vec<GeoInstruction>,
    options: PolycurveOptions,

    // Derived state, replaced wholesale by each projection pass.
    projected: Vec<ProjectedInstruction>,
    points: Vec<Point>,
    parts: Vec<Vec<Point>>,
}

impl Polycurve {
    /// Builds a polycurve from raw instructions, normalizing them (implied
    /// control points are filled in, see `polycurve_path::normalize`).
    pub fn new(instructions: &[GeoInstruction], options: PolycurveOptions) -> Self {
        Polycurve {
            instructions: normalize(instructions),
            options,
            projected: Vec::new(),
            points: Vec::new(),
            parts: Vec::new(),
        }
    }

    /// Replaces the instruction list wholesale.
    ///
    /// The new list is normalized and the derived state is cleared until the
    /// next projection pass.
    pub fn set_instructions(&mut self, instructions: &[GeoInstruction]) {
        self.instructions = normalize(instructions);
        self.projected.clear();
        self.points.clear();
        self.parts.clear();
    }

    /// The normalized instruction list.
    pub fn instructions(&self) -> &[GeoInstruction] {
        &self.instructions
    }

    pub fn options(&self) -> &PolycurveOptions {
        &self.options
    }

    /// Recomputes the derived geometry for the current view.
    ///
    /// Runs the full pipeline: projection of every coordinate, viewport
    /// clipping into visible runs, and per-run simplification when
    /// `smooth_factor` is positive. Each invocation is independent and
    /// replaces the previous derived state.
    pub fn update_projection(
        &mut self,
        projection: &impl Project,
        viewport: &Box2D,
    ) -> Result<(), GeometryError> {
        let geometry = project_instructions(&self.instructions, projection)?;
        self.points = geometry.points;
        self.projected = geometry.instructions;

        self.parts = clip_runs(&self.points, viewport, self.options.no_clip);
        simplify_runs(&mut self.parts, self.options.smooth_factor);

        Ok(())
    }

    /// The SVG path command string of the projected instructions, for the
    /// host's drawing surface.
    ///
    /// Empty before the first projection pass.
    pub fn path_string(&self) -> String {
        svg_path_string(&self.projected)
    }

    /// The projected instructions of the last projection pass.
    pub fn projected_instructions(&self) -> &[ProjectedInstruction] {
        &self.projected
    }

    /// The visible runs produced by the last projection pass.
    pub fn parts(&self) -> &[Vec<Point>] {
        &self.parts
    }

    /// The closest point on any visible run, for hit-testing.
    ///
    /// `None` when nothing is visible (or nothing was projected yet).
    pub fn closest_point(&self, p: Point) -> Option<ClosestPoint> {
        closest_point_on_runs(p, &self.parts)
    }

    /// The bounding box of the projected envelope points.
    pub fn bounding_box(&self) -> Option<Box2D> {
        if self.points.is_empty() {
            return None;
        }

        Some(Box2D::from_points(self.points.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;
    use crate::path::{latlng, Instruction, LatLng};
    use alloc::vec;

    fn scale(ll: LatLng) -> Point {
        point(ll.lng as f32 * 10.0, ll.lat as f32 * 10.0)
    }

    fn viewport() -> Box2D {
        Box2D {
            min: point(0.0, 0.0),
            max: point(100.0, 100.0),
        }
    }

    #[test]
    fn empty_before_projection() {
        let curve = Polycurve::new(
            &[
                GeoInstruction::MoveTo { to: latlng(0.0, 0.0) },
                GeoInstruction::LineTo { to: latlng(1.0, 1.0) },
            ],
            PolycurveOptions::default(),
        );

        assert_eq!(curve.path_string(), "");
        assert!(curve.parts().is_empty());
        assert_eq!(curve.closest_point(point(0.0, 0.0)), None);
        assert_eq!(curve.bounding_box(), None);
    }

    #[test]
    fn construction_normalizes() {
        let curve = Polycurve::new(
            &[
                GeoInstruction::MoveTo { to: latlng(0.0, 0.0) },
                GeoInstruction::QuadraticTo {
                    ctrl: None,
                    to: latlng(1.0, 2.0),
                },
            ],
            PolycurveOptions::default(),
        );

        assert_eq!(
            curve.instructions()[1],
            Instruction::QuadraticTo {
                ctrl: Some(latlng(1.0, 2.0)),
                to: latlng(1.0, 2.0),
            }
        );
    }

    #[test]
    fn end_to_end_pipeline() {
        let mut curve = Polycurve::new(
            &[
                GeoInstruction::MoveTo { to: latlng(1.0, 1.0) },
                GeoInstruction::LineTo { to: latlng(1.0, 9.0) },
                GeoInstruction::LineTo { to: latlng(1.0, 20.0) },
            ],
            PolycurveOptions::default(),
        );

        curve.update_projection(&scale, &viewport()).unwrap();

        assert_eq!(curve.path_string(), "M10 10 L90 10 L200 10");

        // The third point is off-viewport, so the visible part stops at the
        // right edge.
        assert_eq!(
            curve.parts(),
            [vec![point(10.0, 10.0), point(100.0, 10.0)]]
        );

        let closest = curve.closest_point(point(50.0, 14.0)).unwrap();
        assert_eq!(closest.position, point(50.0, 10.0));
        assert_eq!(closest.distance, 4.0);

        assert_eq!(
            curve.bounding_box(),
            Some(Box2D {
                min: point(10.0, 10.0),
                max: point(200.0, 10.0),
            })
        );
    }

    #[test]
    fn smooth_factor_reduces_parts() {
        let mut curve = Polycurve::new(
            &[
                GeoInstruction::MoveTo { to: latlng(1.0, 1.0) },
                GeoInstruction::LineTo { to: latlng(1.01, 5.0) },
                GeoInstruction::LineTo { to: latlng(1.0, 9.0) },
            ],
            PolycurveOptions {
                smooth_factor: 1.0,
                no_clip: false,
            },
        );

        curve.update_projection(&scale, &viewport()).unwrap();

        // The middle point deviates by 0.1 plane units, below the tolerance.
        assert_eq!(curve.parts(), [vec![point(10.0, 10.0), point(90.0, 10.0)]]);
    }

    #[test]
    fn no_clip_keeps_everything() {
        let mut curve = Polycurve::new(
            &[
                GeoInstruction::MoveTo { to: latlng(-5.0, -5.0) },
                GeoInstruction::LineTo { to: latlng(50.0, 50.0) },
            ],
            PolycurveOptions {
                smooth_factor: 0.0,
                no_clip: true,
            },
        );

        curve.update_projection(&scale, &viewport()).unwrap();

        assert_eq!(
            curve.parts(),
            [vec![point(-50.0, -50.0), point(500.0, 500.0)]]
        );
    }

    #[test]
    fn set_instructions_clears_derived_state() {
        let mut curve = Polycurve::new(
            &[
                GeoInstruction::MoveTo { to: latlng(1.0, 1.0) },
                GeoInstruction::LineTo { to: latlng(2.0, 2.0) },
            ],
            PolycurveOptions::default(),
        );
        curve.update_projection(&scale, &viewport()).unwrap();
        assert!(!curve.path_string().is_empty());

        curve.set_instructions(&[GeoInstruction::MoveTo { to: latlng(3.0, 3.0) }]);

        assert_eq!(curve.path_string(), "");
        assert!(curve.parts().is_empty());
        assert_eq!(curve.closest_point(point(0.0, 0.0)), None);
    }

    #[test]
    fn axis_only_error_propagates() {
        let mut curve = Polycurve::new(
            &[GeoInstruction::HorizontalLineTo { x: 5.0 }],
            PolycurveOptions::default(),
        );

        assert_eq!(
            curve.update_projection(&scale, &viewport()),
            Err(GeometryError::InvalidInstructionSequence {
                command: 'H',
                index: 0,
            })
        );
    }
}
