use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use wavefringe::core::models::params::SlitMode;
use wavefringe::core::optics::angle::AngleConvention;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileOpticsConfig {
    pub wavelength_nm: Option<f64>,
    pub slit_width_um: Option<f64>,
    pub slit_separation_um: Option<f64>,
    pub screen_distance_mm: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileCurveConfig {
    pub samples: Option<usize>,
    pub half_width_mm: Option<f64>,
    pub normalize: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileScreenConfig {
    pub grid_size: Option<usize>,
    pub half_width_mm: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub mode: Option<SlitMode>,
    pub angle: Option<AngleConvention>,
    pub optics: Option<FileOpticsConfig>,
    pub curve: Option<FileCurveConfig>,
    pub screen: Option<FileScreenConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
