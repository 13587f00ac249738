use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest |sin θ| the small-angle convention will report.
///
/// `x / D` grows without bound, so positions far off axis are clipped just below the
/// physical limit of one.
pub const SMALL_ANGLE_SIN_LIMIT: f64 = 0.99;

/// Mapping from a screen position to the sine of the diffraction angle.
///
/// A model holds exactly one convention and applies it to every mode, so curves produced
/// by different modes of the same model are always comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AngleConvention {
    /// `θ = atan(x / D)`, `sin θ` evaluated exactly.
    #[default]
    Exact,
    /// Paraxial approximation `sin θ ≈ x / D`, clipped to [`SMALL_ANGLE_SIN_LIMIT`].
    SmallAngle,
}

impl AngleConvention {
    #[inline]
    pub fn sin_theta(self, position: f64, screen_distance: f64) -> f64 {
        let ratio = position / screen_distance;
        match self {
            AngleConvention::Exact => ratio.atan().sin(),
            AngleConvention::SmallAngle => {
                ratio.clamp(-SMALL_ANGLE_SIN_LIMIT, SMALL_ANGLE_SIN_LIMIT)
            }
        }
    }

    /// Inverse of [`sin_theta`](Self::sin_theta): the non-negative screen position at which
    /// `sin θ` reaches `sin_theta`. Returns `None` when the value cannot be reached on the
    /// screen under this convention.
    pub fn position_for(self, sin_theta: f64, screen_distance: f64) -> Option<f64> {
        if !(0.0..1.0).contains(&sin_theta) {
            return None;
        }
        match self {
            AngleConvention::Exact => Some(screen_distance * sin_theta.asin().tan()),
            AngleConvention::SmallAngle => {
                (sin_theta <= SMALL_ANGLE_SIN_LIMIT).then_some(screen_distance * sin_theta)
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AngleConvention::Exact => "exact",
            AngleConvention::SmallAngle => "small-angle",
        }
    }
}

impl fmt::Display for AngleConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngleConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" | "atan" => Ok(AngleConvention::Exact),
            "small-angle" | "small" | "paraxial" => Ok(AngleConvention::SmallAngle),
            other => Err(format!(
                "unknown angle convention '{}', expected 'exact' or 'small-angle'",
                other
            )),
        }
    }
}
