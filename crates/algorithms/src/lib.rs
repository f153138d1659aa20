#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]
#![no_std]

//! The geometry passes run on every projection change: world-to-plane
//! projection, viewport clipping into visible runs, per-run simplification
//! and closest-point queries.
//!
//! This crate is reexported in [polycurve](https://docs.rs/polycurve/).

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub extern crate polycurve_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod clip;
pub mod closest_point;
pub mod project;
pub mod simplify;

pub use crate::path::geom;
pub use crate::path::math;
