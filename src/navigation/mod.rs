//! Navigation geometry
//!
//! Positions on the device are displacements in metres east and north of a
//! fixed reference point. This module derives their polar form (distance and
//! bearing from the reference) and compares two positions through that polar
//! form.

mod displacement;

pub use displacement::{polar_distance, Displacement};
