//! Serialization of projected instructions into an SVG path command string.
//!
//! The output follows the `d` attribute grammar: one token per instruction,
//! tokens space-joined, each token being the command letter immediately
//! followed by its space-separated numeric payload, e.g. `"M0 0 L1 1 Z"`.

use crate::instruction::{Instruction, ProjectedInstruction};

use alloc::string::{String, ToString};
use core::fmt::{self, Write};

/// Displays a slice of projected instructions as an SVG path command string.
pub struct SvgPath<'l>(pub &'l [ProjectedInstruction]);

impl<'l> fmt::Display for SvgPath<'l> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            f.write_char(instruction.command())?;

            match *instruction {
                Instruction::MoveTo { to } | Instruction::LineTo { to } => {
                    write!(f, "{} {}", to.x, to.y)?;
                }
                Instruction::HorizontalLineTo { x } => write!(f, "{}", x)?,
                Instruction::VerticalLineTo { y } => write!(f, "{}", y)?,
                Instruction::CubicTo { .. }
                | Instruction::SmoothCubicTo { .. }
                | Instruction::QuadraticTo { .. }
                | Instruction::SmoothQuadraticTo { .. } => {
                    for ctrl in instruction.controls() {
                        write!(f, "{} {} ", ctrl.x, ctrl.y)?;
                    }
                    if let Some(to) = instruction.target() {
                        write!(f, "{} {}", to.x, to.y)?;
                    }
                }
                Instruction::ArcTo {
                    radii,
                    x_rotation,
                    flags,
                    to,
                } => {
                    write!(
                        f,
                        "{} {} {} {} {} {} {}",
                        radii.x,
                        radii.y,
                        x_rotation.to_degrees(),
                        flags.large_arc as u8,
                        flags.sweep as u8,
                        to.x,
                        to.y,
                    )?;
                }
                Instruction::Close => {}
            }
        }

        Ok(())
    }
}

/// Writes the SVG path command string for `instructions` into `out`.
pub fn write_svg_path<W: Write>(out: &mut W, instructions: &[ProjectedInstruction]) -> fmt::Result {
    write!(out, "{}", SvgPath(instructions))
}

/// Returns the SVG path command string for `instructions`.
///
/// Deterministic and total: unnormalized bezier instructions simply omit the
/// payload of their missing control points, and an empty list yields an
/// empty string.
pub fn svg_path_string(instructions: &[ProjectedInstruction]) -> String {
    SvgPath(instructions).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{point, vector, Angle};
    use crate::ArcFlags;

    #[test]
    fn move_line_close() {
        let instructions = [
            Instruction::MoveTo { to: point(0.0, 0.0) },
            Instruction::LineTo { to: point(1.0, 1.0) },
            Instruction::Close,
        ];

        assert_eq!(svg_path_string(&instructions), "M0 0 L1 1 Z");
    }

    #[test]
    fn axis_only_commands() {
        let instructions = [
            Instruction::MoveTo { to: point(1.0, 2.0) },
            Instruction::HorizontalLineTo { x: 5.5 },
            Instruction::VerticalLineTo { y: -3.0 },
        ];

        assert_eq!(svg_path_string(&instructions), "M1 2 H5.5 V-3");
    }

    #[test]
    fn bezier_payloads() {
        let instructions = [
            Instruction::CubicTo {
                ctrl1: Some(point(1.0, 2.0)),
                ctrl2: Some(point(3.0, 4.0)),
                to: point(5.0, 6.0),
            },
            Instruction::SmoothCubicTo {
                ctrl2: Some(point(7.0, 8.0)),
                to: point(9.0, 10.0),
            },
            Instruction::QuadraticTo {
                ctrl: Some(point(1.0, 1.0)),
                to: point(2.0, 2.0),
            },
        ];

        assert_eq!(
            svg_path_string(&instructions),
            "C1 2 3 4 5 6 S7 8 9 10 Q1 1 2 2"
        );
    }

    #[test]
    fn arc_flags_map_to_zero_or_one() {
        let instructions = [Instruction::ArcTo {
            radii: vector(10.0, 20.0),
            x_rotation: Angle::degrees(0.0),
            flags: ArcFlags {
                large_arc: true,
                sweep: false,
            },
            to: point(4.0, 5.0),
        }];

        assert_eq!(svg_path_string(&instructions), "A10 20 0 1 0 4 5");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(svg_path_string(&[]), "");
    }
}
