use crate::core::models::domain::ScreenDomain;
use crate::core::models::map::IntensityMap;
use crate::core::optics::model::IntensityModel;
use crate::engine::config::ScreenConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use tracing::{info, instrument};

/// Renders the pattern as a square screen image.
///
/// Each pixel takes the intensity of the 1-D pattern at its radial distance from the
/// screen center, giving the concentric-ring picture seen on a real screen. Rows are
/// evaluated in parallel.
#[instrument(skip_all, name = "screen_workflow")]
pub fn run(config: &ScreenConfig, reporter: &ProgressReporter) -> Result<IntensityMap, EngineError> {
    let evaluator = IntensityModel::new(config.convention).evaluator(config.mode, &config.params)?;
    let axis = ScreenDomain::symmetric(config.half_width, config.grid_size)?.into_positions();

    reporter.report(Progress::PhaseStart {
        name: "Rendering screen",
    });
    reporter.report(Progress::TaskStart {
        total_steps: axis.len() as u64,
    });

    let rows: Vec<Vec<f64>> = axis
        .par_iter()
        .map(|&y| {
            let row = axis.iter().map(|&x| evaluator.at(x.hypot(y))).collect();
            reporter.report(Progress::TaskIncrement);
            row
        })
        .collect();

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    info!(
        "Rendered {0}x{0} {1} screen image.",
        axis.len(),
        config.mode
    );
    Ok(IntensityMap::new(config.half_width, axis, rows.concat()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::params::{OpticsParameters, SlitMode};
    use crate::engine::config::ScreenConfigBuilder;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn config(mode: SlitMode, grid_size: usize) -> ScreenConfig {
        ScreenConfigBuilder::new()
            .mode(mode)
            .params(OpticsParameters::from_lab_units(550.0, 5.0, Some(10.0), 100.0))
            .half_width(0.05)
            .grid_size(grid_size)
            .build()
            .unwrap()
    }

    #[test]
    fn center_pixel_is_fully_bright() {
        let map = run(&config(SlitMode::Double, 41), &ProgressReporter::new()).unwrap();
        assert_eq!(map.size(), 41);
        assert_eq!(map.get(20, 20), Some(1.0));
    }

    #[test]
    fn image_is_symmetric_under_reflections_and_transpose() {
        let map = run(&config(SlitMode::Single, 32), &ProgressReporter::new()).unwrap();
        let n = map.size();
        for r in 0..n {
            for c in 0..n {
                let v = map.get(r, c).unwrap();
                assert_eq!(v, map.get(c, r).unwrap());
                assert_eq!(v, map.get(n - 1 - r, c).unwrap());
                assert_eq!(v, map.get(r, n - 1 - c).unwrap());
            }
        }
    }

    #[test]
    fn pixels_match_radial_curve_values() {
        let config = config(SlitMode::Single, 21);
        let map = run(&config, &ProgressReporter::new()).unwrap();
        let model = IntensityModel::default();
        let axis = ScreenDomain::symmetric(config.half_width, 21).unwrap();
        let curve = model.single_slit(&config.params, &axis).unwrap();
        // Middle row lies on the x axis, so it reproduces the 1-D curve.
        assert_eq!(map.row(10).unwrap(), curve.values());
    }

    #[test]
    fn progress_is_reported_once_per_row() {
        let increments = AtomicUsize::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if matches!(event, Progress::TaskIncrement) {
                increments.fetch_add(1, Ordering::SeqCst);
            }
        }));
        run(&config(SlitMode::Single, 16), &reporter).unwrap();
        drop(reporter);
        assert_eq!(increments.load(Ordering::SeqCst), 16);
    }

    #[test]
    fn invalid_parameters_are_rejected_before_rendering() {
        let mut config = config(SlitMode::Double, 8);
        config.params.slit_separation = None;
        assert!(matches!(
            run(&config, &ProgressReporter::new()),
            Err(EngineError::Optics(_))
        ));
    }

    #[test]
    fn empty_grid_yields_empty_image() {
        let map = run(&config(SlitMode::Single, 0), &ProgressReporter::new()).unwrap();
        assert_eq!(map.size(), 0);
        assert!(map.values().is_empty());
    }
}
