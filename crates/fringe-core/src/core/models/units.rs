//! Length units used by the laboratory-facing parameter ranges.
//!
//! The model works in meters throughout; these factors convert the customary optics-bench
//! units (wavelength in nanometers, slit geometry in micrometers, screen distance in
//! millimeters) into meters and back.

pub const NANOMETER: f64 = 1e-9;
pub const MICROMETER: f64 = 1e-6;
pub const MILLIMETER: f64 = 1e-3;

#[inline]
pub fn nm_to_m(value: f64) -> f64 {
    value * NANOMETER
}

#[inline]
pub fn um_to_m(value: f64) -> f64 {
    value * MICROMETER
}

#[inline]
pub fn mm_to_m(value: f64) -> f64 {
    value * MILLIMETER
}

#[inline]
pub fn m_to_nm(value: f64) -> f64 {
    value / NANOMETER
}

#[inline]
pub fn m_to_um(value: f64) -> f64 {
    value / MICROMETER
}

#[inline]
pub fn m_to_mm(value: f64) -> f64 {
    value / MILLIMETER
}
