//! # Core Models Module
//!
//! Immutable value types flowing through the optics model. None of them carries identity
//! or lifecycle beyond a single evaluation: a model call takes [`params::OpticsParameters`]
//! and a [`domain::ScreenDomain`] and returns a fresh [`curve::IntensityCurve`].
//!
//! ```
//! use wavefringe::core::models::{domain::ScreenDomain, params::OpticsParameters};
//! use wavefringe::core::optics::model::compute_single_slit_intensity;
//!
//! let params = OpticsParameters::from_lab_units(550.0, 5.0, None, 100.0);
//! let domain = ScreenDomain::symmetric(0.05, 501).unwrap();
//! let curve = compute_single_slit_intensity(&params, &domain).unwrap();
//! assert_eq!(curve[250], 1.0);
//! ```

pub mod curve;
pub mod domain;
pub mod map;
pub mod params;
pub mod units;
