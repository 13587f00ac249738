use wavefringe::core::models::params::SlitMode;
use wavefringe::core::optics::angle::AngleConvention;

/// Visible band in nanometers; wavelengths outside it are accepted but flagged.
pub const VISIBLE_RANGE_NM: (f64, f64) = (380.0, 750.0);

pub struct DefaultsConfig {
    pub mode: SlitMode,
    pub angle: AngleConvention,
    pub wavelength_nm: f64,
    pub slit_width_um: f64,
    pub slit_separation_um: f64,
    pub screen_distance_mm: f64,
    pub samples: usize,
    pub grid_size: usize,
    pub normalize: bool,
    /// Sampled half width as a fraction of the screen distance.
    pub half_width_fraction: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            mode: SlitMode::Single,
            angle: AngleConvention::Exact,
            wavelength_nm: 550.0,
            slit_width_um: 5.0,
            slit_separation_um: 10.0,
            screen_distance_mm: 100.0,
            samples: 500,
            grid_size: 500,
            normalize: false,
            half_width_fraction: 0.5,
        }
    }
}
