use super::units;
use crate::engine::error::OpticsError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Physical set-up of a slit experiment, all lengths in meters.
///
/// The struct is a plain value: construction never fails, and validation happens when a
/// model evaluates it (see [`OpticsParameters::validate`]). `slit_separation` only matters
/// for double-slit patterns and may be left out otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpticsParameters {
    pub wavelength: f64,
    pub slit_width: f64,
    pub slit_separation: Option<f64>,
    pub screen_distance: f64,
}

impl OpticsParameters {
    pub fn new(wavelength: f64, slit_width: f64, screen_distance: f64) -> Self {
        Self {
            wavelength,
            slit_width,
            slit_separation: None,
            screen_distance,
        }
    }

    pub fn with_slit_separation(mut self, slit_separation: f64) -> Self {
        self.slit_separation = Some(slit_separation);
        self
    }

    /// Builds parameters from bench units: wavelength in nm, slit width and separation in
    /// µm, screen distance in mm.
    pub fn from_lab_units(
        wavelength_nm: f64,
        slit_width_um: f64,
        slit_separation_um: Option<f64>,
        screen_distance_mm: f64,
    ) -> Self {
        Self {
            wavelength: units::nm_to_m(wavelength_nm),
            slit_width: units::um_to_m(slit_width_um),
            slit_separation: slit_separation_um.map(units::um_to_m),
            screen_distance: units::mm_to_m(screen_distance_mm),
        }
    }

    /// Checks the parameters needed by `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`OpticsError::InvalidParameter`] if any required length is zero, negative,
    /// NaN or infinite, if double-slit mode lacks a separation, or if an aperture is so
    /// large relative to the wavelength that the phase overflows.
    pub fn validate(&self, mode: SlitMode) -> Result<(), OpticsError> {
        check_length("wavelength", self.wavelength)?;
        check_length("slit_width", self.slit_width)?;
        check_length("screen_distance", self.screen_distance)?;
        check_ratio("slit_width", self.slit_width, self.wavelength)?;

        if mode == SlitMode::Double {
            let separation = self
                .slit_separation
                .ok_or_else(|| OpticsError::missing("slit_separation", mode.as_str()))?;
            check_length("slit_separation", separation)?;
            check_ratio("slit_separation", separation, self.wavelength)?;
        }
        Ok(())
    }

    /// Separation for double-slit evaluation, validated.
    pub(crate) fn required_separation(&self) -> Result<f64, OpticsError> {
        let separation = self
            .slit_separation
            .ok_or_else(|| OpticsError::missing("slit_separation", SlitMode::Double.as_str()))?;
        check_length("slit_separation", separation)?;
        Ok(separation)
    }
}

fn check_length(name: &'static str, value: f64) -> Result<(), OpticsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OpticsError::non_positive(name, value))
    }
}

fn check_ratio(name: &'static str, aperture: f64, wavelength: f64) -> Result<(), OpticsError> {
    let ratio = PI * aperture / wavelength;
    if ratio.is_finite() {
        Ok(())
    } else {
        Err(OpticsError::overflowing_ratio(name, ratio))
    }
}

/// Which pattern to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlitMode {
    /// Single-slit diffraction envelope.
    #[default]
    Single,
    /// Two-slit interference fringes under the single-slit envelope.
    Double,
}

impl SlitMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SlitMode::Single => "single-slit",
            SlitMode::Double => "double-slit",
        }
    }
}

impl fmt::Display for SlitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SlitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single-slit" => Ok(SlitMode::Single),
            "double" | "double-slit" => Ok(SlitMode::Double),
            other => Err(format!(
                "unknown slit mode '{}', expected 'single' or 'double'",
                other
            )),
        }
    }
}
