//! # Core Module
//!
//! Stateless building blocks of the optics model.
//!
//! - **Values** ([`models`]) - parameters, screen domains, curves and screen images
//! - **Physics** ([`optics`]) - closed-form diffraction and interference formulas
//! - **Export** ([`io`]) - CSV writers for external plotting

pub mod io;
pub mod models;
pub mod optics;
