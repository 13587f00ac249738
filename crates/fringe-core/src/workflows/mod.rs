//! # Workflows Module
//!
//! High-level entry points that turn a configuration into finished output.
//!
//! - **Pattern Workflow** ([`pattern`]) - a sampled 1-D intensity curve plus its analytic
//!   landmarks (first minimum, fringe spacing, fringe count)
//! - **Screen Workflow** ([`screen`]) - a square screen image built from the radial
//!   distance to the pattern center, rendered in parallel with progress reporting

pub mod pattern;
pub mod screen;
