//! Configuration layering for the CLI.
//!
//! Values are resolved per field with the precedence: command-line flag, then `-S key=value`
//! overrides, then the TOML file, then [`defaults::DefaultsConfig`].

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_curve_job, build_optics_setup, build_screen_job};
pub use models::{CurveJob, OpticsSetup, ScreenJob};
