//! Projection of geographic instructions into the rendering plane.

use crate::math::Point;
use crate::path::geom::{LatLng, Project};
use crate::path::{flatten, GeoInstruction, GeometryError, Instruction, ProjectedInstruction};

use alloc::vec::Vec;

/// The output of a projection pass.
///
/// Derived data: recomputed from scratch on every pass (viewport pans,
/// zooms) and never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ProjectedGeometry {
    /// The flattened envelope points, projected, in instruction order.
    pub points: Vec<Point>,
    /// The instructions with every coordinate replaced by its plane
    /// counterpart.
    pub instructions: Vec<ProjectedInstruction>,
}

/// Projects every coordinate of `instructions` into the rendering plane.
///
/// Axis-only commands (`H`/`V`) are resolved to a full geographic coordinate
/// before projection, borrowing the missing axis from the previous
/// instruction's *original* geographic target rather than from the
/// previously projected point, so a nonlinear projection is applied exactly
/// once per coordinate. The projected instruction keeps the axis-only tag
/// and carries only the projected x (resp. y).
///
/// Arc radii, rotation and flags are passed through untouched.
pub fn project_instructions(
    instructions: &[GeoInstruction],
    projection: &impl Project,
) -> Result<ProjectedGeometry, GeometryError> {
    let points = flatten(instructions)?
        .into_iter()
        .map(|ll| projection.project(ll))
        .collect();

    let mut projected = Vec::with_capacity(instructions.len());
    let mut prev: Option<LatLng> = None;

    for (index, instruction) in instructions.iter().enumerate() {
        let out = match *instruction {
            Instruction::MoveTo { to } => Instruction::MoveTo {
                to: projection.project(to),
            },
            Instruction::LineTo { to } => Instruction::LineTo {
                to: projection.project(to),
            },
            Instruction::HorizontalLineTo { x } => {
                let p = previous_target(prev, 'H', index)?;
                let resolved = LatLng { lat: p.lat, lng: x };
                prev = Some(resolved);
                Instruction::HorizontalLineTo {
                    x: projection.project(resolved).x,
                }
            }
            Instruction::VerticalLineTo { y } => {
                let p = previous_target(prev, 'V', index)?;
                let resolved = LatLng { lat: y, lng: p.lng };
                prev = Some(resolved);
                Instruction::VerticalLineTo {
                    y: projection.project(resolved).y,
                }
            }
            Instruction::CubicTo { ctrl1, ctrl2, to } => Instruction::CubicTo {
                ctrl1: ctrl1.map(|c| projection.project(c)),
                ctrl2: ctrl2.map(|c| projection.project(c)),
                to: projection.project(to),
            },
            Instruction::SmoothCubicTo { ctrl2, to } => Instruction::SmoothCubicTo {
                ctrl2: ctrl2.map(|c| projection.project(c)),
                to: projection.project(to),
            },
            Instruction::QuadraticTo { ctrl, to } => Instruction::QuadraticTo {
                ctrl: ctrl.map(|c| projection.project(c)),
                to: projection.project(to),
            },
            Instruction::SmoothQuadraticTo { ctrl, to } => Instruction::SmoothQuadraticTo {
                ctrl: ctrl.map(|c| projection.project(c)),
                to: projection.project(to),
            },
            Instruction::ArcTo {
                radii,
                x_rotation,
                flags,
                to,
            } => Instruction::ArcTo {
                radii,
                x_rotation,
                flags,
                to: projection.project(to),
            },
            Instruction::Close => Instruction::Close,
        };

        if let Some(to) = instruction.target() {
            prev = Some(to);
        }
        projected.push(out);
    }

    Ok(ProjectedGeometry {
        points,
        instructions: projected,
    })
}

fn previous_target(
    prev: Option<LatLng>,
    command: char,
    index: usize,
) -> Result<LatLng, GeometryError> {
    prev.ok_or(GeometryError::InvalidInstructionSequence { command, index })
}
