//! The instruction model: a closed enum over the SVG path command set.
//!
//! Instructions are generic over the coordinate type so the same enum serves
//! both the raw geographic form ([`GeoInstruction`]) and the projected plane
//! form ([`ProjectedInstruction`]), the same way a path event can carry
//! either endpoints or ids.

use crate::geom::LatLng;
use crate::math::{Angle, Point, Vector};
use crate::ArcFlags;

use alloc::vec::Vec;
use arrayvec::ArrayVec;
use thiserror::Error;

/// A single drawing instruction.
///
/// `P` is the coordinate type of targets and control points, `S` the scalar
/// type of the axis-only commands (`H`/`V`).
///
/// The control points of the bezier commands are optional: raw input may
/// leave them out and have [`normalize`] fill in the implied values. The arc
/// payload (radii, rotation, flags) is opaque to this crate; it is neither
/// projected nor validated.
///
/// The first instruction of a path is expected to be `MoveTo`. This is a
/// precondition on the caller and is not validated here.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Instruction<P, S> {
    /// `M`
    MoveTo { to: P },
    /// `L`
    LineTo { to: P },
    /// `H` - the missing axis is borrowed from the previous instruction's
    /// target.
    HorizontalLineTo { x: S },
    /// `V` - the missing axis is borrowed from the previous instruction's
    /// target.
    VerticalLineTo { y: S },
    /// `C`
    CubicTo {
        ctrl1: Option<P>,
        ctrl2: Option<P>,
        to: P,
    },
    /// `S`
    SmoothCubicTo { ctrl2: Option<P>, to: P },
    /// `Q`
    QuadraticTo { ctrl: Option<P>, to: P },
    /// `T` - the control point is always implied; raw input carries `None`.
    SmoothQuadraticTo { ctrl: Option<P>, to: P },
    /// `A`
    ArcTo {
        radii: Vector,
        x_rotation: Angle,
        flags: ArcFlags,
        to: P,
    },
    /// `Z`
    Close,
}

/// An instruction over raw geographic coordinates.
pub type GeoInstruction = Instruction<LatLng, f64>;

/// An instruction over projected plane points.
pub type ProjectedInstruction = Instruction<Point, f32>;

impl<P: Copy, S: Copy> Instruction<P, S> {
    /// The single-letter SVG command code of this instruction.
    pub fn command(&self) -> char {
        match self {
            Instruction::MoveTo { .. } => 'M',
            Instruction::LineTo { .. } => 'L',
            Instruction::HorizontalLineTo { .. } => 'H',
            Instruction::VerticalLineTo { .. } => 'V',
            Instruction::CubicTo { .. } => 'C',
            Instruction::SmoothCubicTo { .. } => 'S',
            Instruction::QuadraticTo { .. } => 'Q',
            Instruction::SmoothQuadraticTo { .. } => 'T',
            Instruction::ArcTo { .. } => 'A',
            Instruction::Close => 'Z',
        }
    }

    /// The target coordinate, if this instruction carries a full one.
    ///
    /// `H`, `V` and `Z` return `None`.
    pub fn target(&self) -> Option<P> {
        match *self {
            Instruction::MoveTo { to }
            | Instruction::LineTo { to }
            | Instruction::CubicTo { to, .. }
            | Instruction::SmoothCubicTo { to, .. }
            | Instruction::QuadraticTo { to, .. }
            | Instruction::SmoothQuadraticTo { to, .. }
            | Instruction::ArcTo { to, .. } => Some(to),
            Instruction::HorizontalLineTo { .. }
            | Instruction::VerticalLineTo { .. }
            | Instruction::Close => None,
        }
    }

    /// The supplied control points, in command payload order.
    pub fn controls(&self) -> ArrayVec<P, 2> {
        let mut controls = ArrayVec::new();
        match *self {
            Instruction::CubicTo { ctrl1, ctrl2, .. } => {
                controls.extend(ctrl1);
                controls.extend(ctrl2);
            }
            Instruction::SmoothCubicTo { ctrl2, .. } => controls.extend(ctrl2),
            Instruction::QuadraticTo { ctrl, .. } => controls.extend(ctrl),
            Instruction::SmoothQuadraticTo { ctrl, .. } => controls.extend(ctrl),
            _ => {}
        }

        controls
    }

    /// Returns this instruction with its implied control points filled in.
    ///
    /// A bezier command lacking control points gets them filled with its own
    /// target, and a `C` command with a single control gets it duplicated
    /// into both slots. Only the full `C` command duplicates; `S` keeps its
    /// single control. This is a deliberate simplification of SVG's
    /// shorthand-reflection rule: callers needing true reflection semantics
    /// must supply explicit controls.
    pub fn normalized(&self) -> Self {
        match *self {
            Instruction::CubicTo { ctrl1, ctrl2, to } => {
                let (ctrl1, ctrl2) = match (ctrl1, ctrl2) {
                    (None, None) => (to, to),
                    (Some(c), None) | (None, Some(c)) => (c, c),
                    (Some(c1), Some(c2)) => (c1, c2),
                };
                Instruction::CubicTo {
                    ctrl1: Some(ctrl1),
                    ctrl2: Some(ctrl2),
                    to,
                }
            }
            Instruction::SmoothCubicTo { ctrl2, to } => Instruction::SmoothCubicTo {
                ctrl2: Some(ctrl2.unwrap_or(to)),
                to,
            },
            Instruction::QuadraticTo { ctrl, to } => Instruction::QuadraticTo {
                ctrl: Some(ctrl.unwrap_or(to)),
                to,
            },
            Instruction::SmoothQuadraticTo { ctrl, to } => Instruction::SmoothQuadraticTo {
                ctrl: Some(ctrl.unwrap_or(to)),
                to,
            },
            other => other,
        }
    }
}

/// Fills in the implied control points of every instruction.
///
/// Returns a new list rather than mutating the input, so a raw instruction
/// list can be shared between several paths. Idempotent: normalizing an
/// already-normalized list is a no-op.
pub fn normalize<P: Copy, S: Copy>(instructions: &[Instruction<P, S>]) -> Vec<Instruction<P, S>> {
    instructions
        .iter()
        .map(|instruction| instruction.normalized())
        .collect()
}

/// The error type of the polycurve crates.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum GeometryError {
    #[error("Instruction {index} ({command:?}): axis-only command has no previous target to borrow the missing axis from.")]
    InvalidInstructionSequence { command: char, index: usize },
}

/// Extracts every coordinate payload in instruction order.
///
/// For bezier instructions the supplied control points come first (in
/// command payload order), then the target. `Z` contributes nothing. `H` and
/// `V` synthesize a full coordinate by borrowing the missing axis from the
/// previous instruction's target; the synthesized coordinate then acts as
/// the previous target for the instructions that follow.
///
/// This is a flattening of the envelope points, not a curve tessellation:
/// the output is only meant for clipping, simplification and proximity
/// queries.
pub fn flatten(instructions: &[GeoInstruction]) -> Result<Vec<LatLng>, GeometryError> {
    let mut points = Vec::new();
    let mut prev: Option<LatLng> = None;

    for (index, instruction) in instructions.iter().enumerate() {
        match *instruction {
            Instruction::HorizontalLineTo { x } => {
                let p = previous_target(prev, 'H', index)?;
                let resolved = LatLng { lat: p.lat, lng: x };
                points.push(resolved);
                prev = Some(resolved);
            }
            Instruction::VerticalLineTo { y } => {
                let p = previous_target(prev, 'V', index)?;
                let resolved = LatLng { lat: y, lng: p.lng };
                points.push(resolved);
                prev = Some(resolved);
            }
            Instruction::Close => {}
            _ => {
                points.extend(instruction.controls());
                if let Some(to) = instruction.target() {
                    points.push(to);
                    prev = Some(to);
                }
            }
        }
    }

    Ok(points)
}

pub(crate) fn previous_target(
    prev: Option<LatLng>,
    command: char,
    index: usize,
) -> Result<LatLng, GeometryError> {
    prev.ok_or(GeometryError::InvalidInstructionSequence { command, index })
}
