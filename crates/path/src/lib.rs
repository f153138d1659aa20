#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![no_std]

//! SVG-style drawing instructions over geographic coordinates.
//!
//! This crate is reexported in [polycurve](https://docs.rs/polycurve/).
//!
//! The [`Instruction`] enum models the SVG path command set (`M L H V C S Q
//! T A Z`), carrying either geographic coordinates ([`GeoInstruction`], the
//! raw input form) or plane points ([`ProjectedInstruction`], produced by the
//! projection pass in `polycurve_algorithms`).
//!
//! # Examples
//!
//! ```
//! use polycurve_path::{latlng, normalize, GeoInstruction};
//!
//! let raw = [
//!     GeoInstruction::MoveTo { to: latlng(0.0, 0.0) },
//!     GeoInstruction::QuadraticTo { ctrl: None, to: latlng(1.0, 2.0) },
//! ];
//!
//! // Fills in the implied control points.
//! let instructions = normalize(&raw);
//! assert_eq!(
//!     instructions[1],
//!     GeoInstruction::QuadraticTo { ctrl: Some(latlng(1.0, 2.0)), to: latlng(1.0, 2.0) },
//! );
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use polycurve_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod instruction;
pub mod svg;

#[doc(inline)]
pub use crate::instruction::{
    flatten, normalize, GeoInstruction, GeometryError, Instruction, ProjectedInstruction,
};
#[doc(inline)]
pub use crate::svg::{svg_path_string, write_svg_path};

pub use crate::geom::{latlng, LatLng, Project};

/// Flag parameters for arcs as described by the SVG specification.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    pub large_arc: bool,
    pub sweep: bool,
}

pub mod math {
    //! f32 versions of the polycurve_geom types used everywhere on the
    //! rendering-plane side.

    /// Alias for `polycurve_geom::Point<f32>`.
    pub type Point = crate::geom::Point<f32>;

    /// Alias for `polycurve_geom::Vector<f32>`.
    pub type Vector = crate::geom::Vector<f32>;

    /// Alias for `polycurve_geom::Box2D<f32>`.
    pub type Box2D = crate::geom::Box2D<f32>;

    /// Alias for `polycurve_geom::LineSegment<f32>`.
    pub type LineSegment = crate::geom::LineSegment<f32>;

    /// An angle in radians (f32).
    pub type Angle = crate::geom::Angle<f32>;

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f32, y: f32) -> Vector {
        Vector::new(x, y)
    }
}
