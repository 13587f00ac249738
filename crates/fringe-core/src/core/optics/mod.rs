//! Closed-form Fraunhofer optics for single and double slits.
//!
//! - [`terms`] - per-sample phase, sinc² envelope and cos² interference factors
//! - [`angle`] - screen position to `sin θ` conventions
//! - [`model`] - the [`IntensityModel`](model::IntensityModel) evaluating whole curves
//! - [`characteristics`] - analytic pattern landmarks (minima, fringe spacing)

pub mod angle;
pub mod characteristics;
pub mod model;
pub mod terms;
