use crate::core::models::curve::IntensityCurve;
use crate::core::models::domain::ScreenDomain;
use crate::core::models::params::SlitMode;
use crate::core::optics::angle::AngleConvention;
use crate::core::optics::characteristics::PatternCharacteristics;
use crate::core::optics::model::IntensityModel;
use crate::engine::config::PatternConfig;
use crate::engine::error::EngineError;
use serde::Serialize;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Serialize)]
pub struct PatternResult {
    pub mode: SlitMode,
    pub convention: AngleConvention,
    pub domain: ScreenDomain,
    pub curve: IntensityCurve,
    pub characteristics: PatternCharacteristics,
}

/// Samples a symmetric screen, evaluates the configured pattern on it and attaches its
/// analytic landmarks.
#[instrument(skip_all, name = "pattern_workflow")]
pub fn run(config: &PatternConfig) -> Result<PatternResult, EngineError> {
    let model = IntensityModel::new(config.convention);

    let characteristics =
        PatternCharacteristics::compute(config.mode, &config.params, config.convention)?;
    let domain = ScreenDomain::symmetric(config.half_width, config.samples)?;
    debug!(
        "Sampling {} positions over +/-{} m.",
        domain.len(),
        config.half_width
    );

    let mut curve = model.compute(config.mode, &config.params, &domain)?;
    if config.normalize {
        curve = curve.peak_normalized();
    }

    info!(
        "Computed {} pattern with {} samples (peak {:.4}).",
        config.mode,
        curve.len(),
        curve.peak().unwrap_or(0.0)
    );

    Ok(PatternResult {
        mode: config.mode,
        convention: config.convention,
        domain,
        curve,
        characteristics,
    })
}
