//! # Engine Module
//!
//! Run-level plumbing around the optics model: how a computation is configured, how it
//! fails, and how it reports progress.
//!
//! - **Configuration** ([`config`]) - `PatternConfig` / `ScreenConfig` and their builders
//! - **Error Handling** ([`error`]) - the `OpticsError` taxonomy shared by every entry point
//! - **Progress Monitoring** ([`progress`]) - callback-based event reporting

pub mod config;
pub mod error;
pub mod progress;
