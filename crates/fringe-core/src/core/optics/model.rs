use super::angle::AngleConvention;
use super::terms;
use crate::core::models::curve::IntensityCurve;
use crate::core::models::domain::ScreenDomain;
use crate::core::models::params::{OpticsParameters, SlitMode};
use crate::engine::error::OpticsError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The optics intensity model.
///
/// Stateless apart from its [`AngleConvention`], which is shared by both modes. Every call
/// validates its parameters and returns a freshly allocated curve, so a model can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntensityModel {
    convention: AngleConvention,
}

impl IntensityModel {
    pub fn new(convention: AngleConvention) -> Self {
        Self { convention }
    }

    pub fn convention(&self) -> AngleConvention {
        self.convention
    }

    /// Single-slit Fraunhofer pattern `(sin β / β)²`.
    pub fn single_slit(
        &self,
        params: &OpticsParameters,
        domain: &ScreenDomain,
    ) -> Result<IntensityCurve, OpticsError> {
        self.compute(SlitMode::Single, params, domain)
    }

    /// Double-slit pattern: the single-slit envelope times `cos² δ`.
    pub fn double_slit(
        &self,
        params: &OpticsParameters,
        domain: &ScreenDomain,
    ) -> Result<IntensityCurve, OpticsError> {
        self.compute(SlitMode::Double, params, domain)
    }

    pub fn compute(
        &self,
        mode: SlitMode,
        params: &OpticsParameters,
        domain: &ScreenDomain,
    ) -> Result<IntensityCurve, OpticsError> {
        let evaluator = self.evaluator(mode, params)?;
        debug!(
            mode = mode.as_str(),
            convention = self.convention.as_str(),
            samples = domain.len(),
            "Evaluating intensity curve."
        );
        let values = domain.iter().map(|&x| evaluator.at(x)).collect();
        Ok(IntensityCurve::from_values(values))
    }

    /// Validates `params` for `mode` and returns a per-position evaluator.
    pub fn evaluator(
        &self,
        mode: SlitMode,
        params: &OpticsParameters,
    ) -> Result<PatternEvaluator, OpticsError> {
        params.validate(mode)?;
        let slit_separation = match mode {
            SlitMode::Single => None,
            SlitMode::Double => Some(params.required_separation()?),
        };
        Ok(PatternEvaluator {
            convention: self.convention,
            wavelength: params.wavelength,
            slit_width: params.slit_width,
            slit_separation,
            screen_distance: params.screen_distance,
        })
    }
}

/// Validated parameters bound to an angle convention, ready for point evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternEvaluator {
    convention: AngleConvention,
    wavelength: f64,
    slit_width: f64,
    slit_separation: Option<f64>,
    screen_distance: f64,
}

impl PatternEvaluator {
    pub fn mode(&self) -> SlitMode {
        if self.slit_separation.is_some() {
            SlitMode::Double
        } else {
            SlitMode::Single
        }
    }

    #[inline]
    pub fn at(&self, position: f64) -> f64 {
        let sin_theta = self.convention.sin_theta(position, self.screen_distance);
        let envelope = self.envelope(sin_theta);
        match self.slit_separation {
            None => envelope,
            Some(separation) => {
                envelope * terms::interference_term(separation, sin_theta, self.wavelength)
            }
        }
    }

    #[inline]
    fn envelope(&self, sin_theta: f64) -> f64 {
        terms::diffraction_envelope(self.slit_width, sin_theta, self.wavelength)
    }
}

/// Single-slit intensity with the default angle convention.
pub fn compute_single_slit_intensity(
    params: &OpticsParameters,
    domain: &ScreenDomain,
) -> Result<IntensityCurve, OpticsError> {
    IntensityModel::default().single_slit(params, domain)
}

/// Double-slit intensity with the default angle convention.
pub fn compute_double_slit_intensity(
    params: &OpticsParameters,
    domain: &ScreenDomain,
) -> Result<IntensityCurve, OpticsError> {
    IntensityModel::default().double_slit(params, domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONVENTIONS: [AngleConvention; 2] = [AngleConvention::Exact, AngleConvention::SmallAngle];

    fn params() -> OpticsParameters {
        OpticsParameters::new(550e-9, 5e-6, 0.1).with_slit_separation(1e-5)
    }

    fn domain() -> ScreenDomain {
        ScreenDomain::symmetric(0.05, 1001).unwrap()
    }

    #[test]
    fn single_slit_on_axis_is_exactly_one() {
        for convention in CONVENTIONS {
            let model = IntensityModel::new(convention);
            let curve = model.single_slit(&params(), &domain()).unwrap();
            assert_eq!(curve[500], 1.0);
        }
    }

    #[test]
    fn double_slit_on_axis_matches_single_slit() {
        for separation in [1e-6, 5e-6, 1e-5, 3.3e-4] {
            let params = params().with_slit_separation(separation);
            let model = IntensityModel::default();
            let single = model.single_slit(&params, &domain()).unwrap();
            let double = model.double_slit(&params, &domain()).unwrap();
            assert_eq!(double[500], single[500]);
            assert_eq!(double[500], 1.0);
        }
    }

    #[test]
    fn every_sample_lies_in_unit_interval() {
        for convention in CONVENTIONS {
            let model = IntensityModel::new(convention);
            for mode in [SlitMode::Single, SlitMode::Double] {
                let curve = model.compute(mode, &params(), &domain()).unwrap();
                assert!(curve.iter().all(|v| (0.0..=1.0).contains(v)));
            }
        }
    }

    #[test]
    fn curves_are_symmetric_about_the_axis() {
        for convention in CONVENTIONS {
            let model = IntensityModel::new(convention);
            for mode in [SlitMode::Single, SlitMode::Double] {
                let curve = model.compute(mode, &params(), &domain()).unwrap();
                let n = curve.len();
                for i in 0..n {
                    assert_eq!(curve[i], curve[n - 1 - i], "{mode} asymmetric at {i}");
                }
            }
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let model = IntensityModel::default();
        for mode in [SlitMode::Single, SlitMode::Double] {
            let first = model.compute(mode, &params(), &domain()).unwrap();
            let second = model.compute(mode, &params(), &domain()).unwrap();
            let first_bits: Vec<u64> = first.iter().map(|v| v.to_bits()).collect();
            let second_bits: Vec<u64> = second.iter().map(|v| v.to_bits()).collect();
            assert_eq!(first_bits, second_bits);
        }
    }

    #[test]
    fn double_slit_never_exceeds_its_envelope() {
        let model = IntensityModel::default();
        let single = model.single_slit(&params(), &domain()).unwrap();
        let double = model.double_slit(&params(), &domain()).unwrap();
        for (s, d) in single.iter().zip(double.iter()) {
            assert!(d <= s);
        }
    }

    #[test]
    fn output_length_matches_domain_and_empty_domain_is_not_an_error() {
        let model = IntensityModel::default();
        let curve = model.single_slit(&params(), &domain()).unwrap();
        assert_eq!(curve.len(), domain().len());

        let empty = ScreenDomain::empty();
        assert!(model.single_slit(&params(), &empty).unwrap().is_empty());
        assert!(model.double_slit(&params(), &empty).unwrap().is_empty());
    }

    #[test]
    fn non_positive_wavelength_fails_in_both_modes() {
        for wavelength in [0.0, -550e-9] {
            let mut params = params();
            params.wavelength = wavelength;
            for mode in [SlitMode::Single, SlitMode::Double] {
                let err = IntensityModel::default()
                    .compute(mode, &params, &domain())
                    .unwrap_err();
                assert!(matches!(
                    err,
                    OpticsError::InvalidParameter {
                        name: "wavelength",
                        ..
                    }
                ));
            }
        }
    }

    #[test]
    fn invalid_parameters_fail_even_for_empty_domain() {
        let mut params = params();
        params.screen_distance = 0.0;
        let result = compute_single_slit_intensity(&params, &ScreenDomain::empty());
        assert!(result.is_err());
    }

    #[test]
    fn double_slit_without_separation_is_rejected() {
        let params = OpticsParameters::new(550e-9, 5e-6, 0.1);
        let err = compute_double_slit_intensity(&params, &domain()).unwrap_err();
        assert_eq!(err.parameter_name(), "slit_separation");
        assert!(compute_single_slit_intensity(&params, &domain()).is_ok());
    }

    #[test]
    fn output_is_finite_for_extreme_positions() {
        let domain = ScreenDomain::from_positions(vec![-1e300, -1.0, 0.0, 1.0, 1e300]).unwrap();
        for convention in CONVENTIONS {
            let model = IntensityModel::new(convention);
            for mode in [SlitMode::Single, SlitMode::Double] {
                let curve = model.compute(mode, &params(), &domain).unwrap();
                assert!(curve.iter().all(|v| v.is_finite()));
            }
        }
    }

    #[test]
    fn interference_fringes_are_dark_at_half_orders() {
        let model = IntensityModel::new(AngleConvention::SmallAngle);
        let params = params();
        let separation = params.slit_separation.unwrap();
        let dark = params.wavelength * params.screen_distance / (2.0 * separation);
        let domain = ScreenDomain::from_positions(vec![dark]).unwrap();
        let curve = model.double_slit(&params, &domain).unwrap();
        assert!(curve[0] < 1e-20);
    }

    #[test]
    fn evaluator_reports_its_mode() {
        let model = IntensityModel::default();
        assert_eq!(
            model.evaluator(SlitMode::Single, &params()).unwrap().mode(),
            SlitMode::Single
        );
        assert_eq!(
            model.evaluator(SlitMode::Double, &params()).unwrap().mode(),
            SlitMode::Double
        );
    }
}
