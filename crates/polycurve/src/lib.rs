#![deny(bare_trait_objects)]
#![no_std]

//! SVG-style curved polylines over geographic coordinates.
//!
//! A [`Polycurve`] interprets a sequence of drawing instructions (`M L H V C
//! S Q T A Z`) whose coordinates are geographic, projects them into the
//! rendering plane of a host map view, clips the projected polyline against
//! the view's viewport, optionally simplifies the visible runs, and answers
//! closest-point queries for hit-testing.
//!
//! # Crates
//!
//! This meta-crate reexports the following sub-crates for convenience:
//!
//! * **polycurve_path** - The instruction model, normalization and the SVG
//!   path command serializer.
//! * **polycurve_algorithms** - Projection, viewport clipping,
//!   simplification and proximity queries.
//! * **polycurve_geom** - Geographic coordinates and 2D primitives on top of
//!   euclid.
//!
//! Each `polycurve_<name>` crate is reexported as a `<name>` module.
//!
//! # Examples
//!
//! ```
//! use polycurve::geom::Box2D;
//! use polycurve::math::point;
//! use polycurve::path::{latlng, GeoInstruction, LatLng};
//! use polycurve::{Polycurve, PolycurveOptions};
//!
//! let mut curve = Polycurve::new(
//!     &[
//!         GeoInstruction::MoveTo { to: latlng(0.0, 0.0) },
//!         GeoInstruction::LineTo { to: latlng(10.0, 10.0) },
//!         GeoInstruction::Close,
//!     ],
//!     PolycurveOptions::default(),
//! );
//!
//! // The host map's world-to-plane projection; here a simple scale.
//! let projection = |ll: LatLng| point(ll.lng as f32, ll.lat as f32);
//! let viewport = Box2D {
//!     min: point(0.0, 0.0),
//!     max: point(100.0, 100.0),
//! };
//!
//! curve.update_projection(&projection, &viewport).unwrap();
//!
//! assert_eq!(curve.path_string(), "M0 0 L10 10 Z");
//! assert_eq!(curve.closest_point(point(5.0, 5.0)).unwrap().distance, 0.0);
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub extern crate polycurve_algorithms as algorithms;

pub use crate::algorithms::path;
pub use crate::path::geom;

mod curve;

pub use crate::algorithms::closest_point::ClosestPoint;
pub use crate::curve::{Polycurve, PolycurveOptions};
pub use crate::path::math;
