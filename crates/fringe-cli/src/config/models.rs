use std::path::PathBuf;
use wavefringe::core::models::params::{OpticsParameters, SlitMode};
use wavefringe::core::optics::angle::AngleConvention;
use wavefringe::engine::config as core_config;

/// Fully merged physical set-up, lengths already converted to meters.
#[derive(Debug, Clone, PartialEq)]
pub struct OpticsSetup {
    pub mode: SlitMode,
    pub convention: AngleConvention,
    pub params: OpticsParameters,
}

pub struct CurveJob {
    pub output: Option<PathBuf>,
    pub core_config: core_config::PatternConfig,
}

pub struct ScreenJob {
    pub output: Option<PathBuf>,
    pub core_config: core_config::ScreenConfig,
}
