use std::f64::consts::PI;

// Below this magnitude sin(x)/x is 1 to within f64 precision.
const SINC_LIMIT_THRESHOLD: f64 = 1e-12;

#[inline]
pub fn phase(aperture: f64, sin_theta: f64, wavelength: f64) -> f64 {
    PI * aperture * sin_theta / wavelength
}

#[inline]
pub fn sinc_squared(beta: f64) -> f64 {
    if beta.abs() < SINC_LIMIT_THRESHOLD {
        return 1.0;
    }
    let sinc = beta.sin() / beta;
    // Rounding in sin() must never lift the envelope above its unit peak.
    (sinc * sinc).min(1.0)
}

#[inline]
pub fn cos_squared(delta: f64) -> f64 {
    let c = delta.cos();
    c * c
}

#[inline]
pub fn diffraction_envelope(slit_width: f64, sin_theta: f64, wavelength: f64) -> f64 {
    sinc_squared(phase(slit_width, sin_theta, wavelength))
}

#[inline]
pub fn interference_term(slit_separation: f64, sin_theta: f64, wavelength: f64) -> f64 {
    cos_squared(phase(slit_separation, sin_theta, wavelength))
}
