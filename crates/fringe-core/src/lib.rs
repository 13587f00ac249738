//! # Wavefringe Core Library
//!
//! Closed-form intensity patterns for the two classic wave-optics experiments: single-slit
//! diffraction and double-slit interference.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Value types (`OpticsParameters`, `ScreenDomain`,
//!   `IntensityCurve`), the per-sample formulas, the `IntensityModel` itself and CSV export.
//!
//! - **[`engine`]: Run Plumbing.** Configuration builders, the error taxonomy and progress
//!   reporting shared by the workflows.
//!
//! - **[`workflows`]: The Public API.** `pattern::run` for a sampled curve with its analytic
//!   landmarks, `screen::run` for a radial screen image.
//!
//! Every computation is a pure function of its inputs. Nothing is cached between calls and
//! all public types are `Send + Sync`.

pub mod core;
pub mod engine;
pub mod workflows;
