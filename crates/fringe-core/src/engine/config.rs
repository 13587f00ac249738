use crate::core::models::params::{OpticsParameters, SlitMode};
use crate::core::optics::angle::AngleConvention;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternConfig {
    pub mode: SlitMode,
    pub params: OpticsParameters,
    pub convention: AngleConvention,
    pub half_width: f64,
    pub samples: usize,
    pub normalize: bool,
}

#[derive(Default)]
pub struct PatternConfigBuilder {
    mode: Option<SlitMode>,
    params: Option<OpticsParameters>,
    convention: Option<AngleConvention>,
    half_width: Option<f64>,
    samples: Option<usize>,
    normalize: Option<bool>,
}

impl PatternConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: SlitMode) -> Self {
        self.mode = Some(mode);
        self
    }
    pub fn params(mut self, params: OpticsParameters) -> Self {
        self.params = Some(params);
        self
    }
    pub fn convention(mut self, convention: AngleConvention) -> Self {
        self.convention = Some(convention);
        self
    }
    pub fn half_width(mut self, half_width: f64) -> Self {
        self.half_width = Some(half_width);
        self
    }
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = Some(samples);
        self
    }
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = Some(normalize);
        self
    }

    pub fn build(self) -> Result<PatternConfig, ConfigError> {
        Ok(PatternConfig {
            mode: self.mode.ok_or(ConfigError::MissingParameter("mode"))?,
            params: self.params.ok_or(ConfigError::MissingParameter("params"))?,
            convention: self.convention.unwrap_or_default(),
            half_width: self
                .half_width
                .ok_or(ConfigError::MissingParameter("half_width"))?,
            samples: self
                .samples
                .ok_or(ConfigError::MissingParameter("samples"))?,
            normalize: self.normalize.unwrap_or(false),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    pub mode: SlitMode,
    pub params: OpticsParameters,
    pub convention: AngleConvention,
    pub half_width: f64,
    pub grid_size: usize,
}

#[derive(Default)]
pub struct ScreenConfigBuilder {
    mode: Option<SlitMode>,
    params: Option<OpticsParameters>,
    convention: Option<AngleConvention>,
    half_width: Option<f64>,
    grid_size: Option<usize>,
}

impl ScreenConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: SlitMode) -> Self {
        self.mode = Some(mode);
        self
    }
    pub fn params(mut self, params: OpticsParameters) -> Self {
        self.params = Some(params);
        self
    }
    pub fn convention(mut self, convention: AngleConvention) -> Self {
        self.convention = Some(convention);
        self
    }
    pub fn half_width(mut self, half_width: f64) -> Self {
        self.half_width = Some(half_width);
        self
    }
    pub fn grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = Some(grid_size);
        self
    }

    pub fn build(self) -> Result<ScreenConfig, ConfigError> {
        Ok(ScreenConfig {
            mode: self.mode.ok_or(ConfigError::MissingParameter("mode"))?,
            params: self.params.ok_or(ConfigError::MissingParameter("params"))?,
            convention: self.convention.unwrap_or_default(),
            half_width: self
                .half_width
                .ok_or(ConfigError::MissingParameter("half_width"))?,
            grid_size: self
                .grid_size
                .ok_or(ConfigError::MissingParameter("grid_size"))?,
        })
    }
}
