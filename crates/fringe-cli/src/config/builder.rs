use super::defaults::{DefaultsConfig, VISIBLE_RANGE_NM};
use super::file::FileConfig;
use super::models::{CurveJob, OpticsSetup, ScreenJob};
use crate::cli::{CurveArgs, ScreenArgs, SetupArgs};
use crate::error::{CliError, Result};
use std::str::FromStr;
use tracing::{debug, warn};
use wavefringe::core::models::params::OpticsParameters;
use wavefringe::core::models::units;
use wavefringe::engine::config as core_config;

pub fn build_curve_job(args: &CurveArgs) -> Result<CurveJob> {
    let defaults = DefaultsConfig::default();
    let (setup, mut file_config) = build_setup(&args.setup, &defaults)?;

    let curve_file = file_config.curve.take().unwrap_or_default();
    let samples = args
        .samples
        .or(curve_file.samples)
        .unwrap_or(defaults.samples);
    let half_width = resolve_half_width(
        args.half_width_mm.or(curve_file.half_width_mm),
        &setup,
        &defaults,
    );
    let normalize = args.normalize || curve_file.normalize.unwrap_or(defaults.normalize);

    let core_config = core_config::PatternConfigBuilder::new()
        .mode(setup.mode)
        .params(setup.params)
        .convention(setup.convention)
        .half_width(half_width)
        .samples(samples)
        .normalize(normalize)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(CurveJob {
        output: args.output.clone(),
        core_config,
    })
}

pub fn build_screen_job(args: &ScreenArgs) -> Result<ScreenJob> {
    let defaults = DefaultsConfig::default();
    let (setup, mut file_config) = build_setup(&args.setup, &defaults)?;

    let screen_file = file_config.screen.take().unwrap_or_default();
    let grid_size = args
        .grid_size
        .or(screen_file.grid_size)
        .unwrap_or(defaults.grid_size);
    let half_width = resolve_half_width(
        args.half_width_mm.or(screen_file.half_width_mm),
        &setup,
        &defaults,
    );

    let core_config = core_config::ScreenConfigBuilder::new()
        .mode(setup.mode)
        .params(setup.params)
        .convention(setup.convention)
        .half_width(half_width)
        .grid_size(grid_size)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(ScreenJob {
        output: args.output.clone(),
        core_config,
    })
}

pub fn build_optics_setup(args: &SetupArgs) -> Result<OpticsSetup> {
    let defaults = DefaultsConfig::default();
    build_setup(args, &defaults).map(|(setup, _)| setup)
}

fn build_setup(args: &SetupArgs, defaults: &DefaultsConfig) -> Result<(OpticsSetup, FileConfig)> {
    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let optics_file = file_config.optics.take().unwrap_or_default();
    let mode = args.mode.or(file_config.mode).unwrap_or(defaults.mode);
    let convention = args.angle.or(file_config.angle).unwrap_or(defaults.angle);

    let wavelength_nm = args
        .wavelength_nm
        .or(optics_file.wavelength_nm)
        .unwrap_or(defaults.wavelength_nm);
    let slit_width_um = args
        .slit_width_um
        .or(optics_file.slit_width_um)
        .unwrap_or(defaults.slit_width_um);
    let slit_separation_um = args
        .slit_separation_um
        .or(optics_file.slit_separation_um)
        .unwrap_or(defaults.slit_separation_um);
    let screen_distance_mm = args
        .screen_distance_mm
        .or(optics_file.screen_distance_mm)
        .unwrap_or(defaults.screen_distance_mm);

    let (visible_min, visible_max) = VISIBLE_RANGE_NM;
    if !(visible_min..=visible_max).contains(&wavelength_nm) {
        warn!(
            "Wavelength {} nm lies outside the visible band ({}-{} nm).",
            wavelength_nm, visible_min, visible_max
        );
    }

    let params = OpticsParameters::from_lab_units(
        wavelength_nm,
        slit_width_um,
        Some(slit_separation_um),
        screen_distance_mm,
    );
    debug!(
        "Resolved {} set-up ({} angles): {:?}",
        mode, convention, params
    );

    Ok((
        OpticsSetup {
            mode,
            convention,
            params,
        },
        file_config,
    ))
}

fn resolve_half_width(
    half_width_mm: Option<f64>,
    setup: &OpticsSetup,
    defaults: &DefaultsConfig,
) -> f64 {
    match half_width_mm {
        Some(mm) => units::mm_to_m(mm),
        None => defaults.half_width_fraction * setup.params.screen_distance,
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "mode" => config.mode = Some(parse_value(key, value_str, "mode")?),
            "angle" => config.angle = Some(parse_value(key, value_str, "angle convention")?),
            "optics.wavelength-nm" => {
                config
                    .optics
                    .get_or_insert_with(Default::default)
                    .wavelength_nm = Some(parse_value(key, value_str, "float")?);
            }
            "optics.slit-width-um" => {
                config
                    .optics
                    .get_or_insert_with(Default::default)
                    .slit_width_um = Some(parse_value(key, value_str, "float")?);
            }
            "optics.slit-separation-um" => {
                config
                    .optics
                    .get_or_insert_with(Default::default)
                    .slit_separation_um = Some(parse_value(key, value_str, "float")?);
            }
            "optics.screen-distance-mm" => {
                config
                    .optics
                    .get_or_insert_with(Default::default)
                    .screen_distance_mm = Some(parse_value(key, value_str, "float")?);
            }
            "curve.samples" => {
                config.curve.get_or_insert_with(Default::default).samples =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "curve.half-width-mm" => {
                config.curve.get_or_insert_with(Default::default).half_width_mm =
                    Some(parse_value(key, value_str, "float")?);
            }
            "curve.normalize" => {
                config.curve.get_or_insert_with(Default::default).normalize =
                    Some(parse_value(key, value_str, "boolean")?);
            }
            "screen.grid-size" => {
                config.screen.get_or_insert_with(Default::default).grid_size =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "screen.half-width-mm" => {
                config.screen.get_or_insert_with(Default::default).half_width_mm =
                    Some(parse_value(key, value_str, "float")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
