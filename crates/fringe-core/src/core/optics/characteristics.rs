//! Analytic landmarks of slit patterns.
//!
//! These are the positions a student reads off the plot: where the central diffraction
//! maximum first goes dark, how far apart the interference fringes sit, and how many
//! bright fringes fit inside the central envelope. They are computed in closed form under
//! the same [`AngleConvention`] that produced the curve, so they line up with its samples.

use super::angle::AngleConvention;
use crate::core::models::params::{OpticsParameters, SlitMode};
use crate::engine::error::OpticsError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatternCharacteristics {
    pub mode: SlitMode,
    /// Screen position of the first diffraction zero, `sin θ = λ / a`.
    pub first_minimum: Option<f64>,
    /// Full width of the central diffraction maximum (twice `first_minimum`).
    pub central_maximum_width: Option<f64>,
    /// Screen position of the first-order bright fringe, `sin θ = λ / d`.
    pub fringe_spacing: Option<f64>,
    /// Bright interference fringes inside the central diffraction maximum.
    pub fringes_in_central_envelope: Option<usize>,
}

impl PatternCharacteristics {
    pub fn compute(
        mode: SlitMode,
        params: &OpticsParameters,
        convention: AngleConvention,
    ) -> Result<Self, OpticsError> {
        params.validate(mode)?;

        let first_minimum =
            convention.position_for(params.wavelength / params.slit_width, params.screen_distance);

        let (fringe_spacing, fringes_in_central_envelope) = match mode {
            SlitMode::Single => (None, None),
            SlitMode::Double => {
                let separation = params.required_separation()?;
                let spacing = convention
                    .position_for(params.wavelength / separation, params.screen_distance);
                let count = bright_fringes_within_envelope(separation / params.slit_width);
                (spacing, Some(count))
            }
        };

        Ok(Self {
            mode,
            first_minimum,
            central_maximum_width: first_minimum.map(|x| 2.0 * x),
            fringe_spacing,
            fringes_in_central_envelope,
        })
    }
}

/// Orders `m` with `|m| < d / a`; an order landing exactly on the envelope zero is missing.
fn bright_fringes_within_envelope(ratio: f64) -> usize {
    if !(ratio.is_finite() && ratio > 0.0) {
        return 1;
    }
    let floor = ratio.floor();
    let highest_order = if floor == ratio { floor - 1.0 } else { floor };
    2 * highest_order.max(0.0) as usize + 1
}
